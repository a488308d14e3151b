pub mod articles;
pub mod sections;

pub use articles::{ArticleDto, ArticleRevisionDto, ArticleTranslationDto};
pub use sections::SectionConfigDto;
