pub mod article_store;
pub mod author_repo;
pub mod directory;
pub mod section_repo;
pub mod time;

pub use article_store::{ConflictInjectingWriter, InMemoryArticleStore};
pub use author_repo::InMemoryAuthorProfiles;
pub use directory::StaticUserDirectory;
pub use section_repo::InMemorySectionConfigs;
pub use time::FixedClock;
