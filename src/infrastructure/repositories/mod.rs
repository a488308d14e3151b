mod error;
mod postgres_article;
mod postgres_author;
mod postgres_revision;
mod postgres_section;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_author::PostgresAuthorProfileRepository;
pub use postgres_revision::PostgresArticleRevisionRepository;
pub use postgres_section::PostgresSectionConfigRepository;
