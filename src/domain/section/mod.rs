pub mod entity;
pub mod repository;

pub use entity::{NewSectionConfig, SectionConfig, SectionConfigId, SectionTitle};
pub use repository::SectionConfigRepository;
