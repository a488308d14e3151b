pub mod entity;
pub mod repository;

pub use entity::{AuthorProfile, AuthorProfileId};
pub use repository::AuthorProfileRepository;
