pub mod articles;
pub mod sections;

pub use articles::{
    ArticleCommandService, CreateArticleCommand, CreateArticleCommandBuilder, UpdateArticleCommand,
};
pub use sections::{CreateSectionCommand, SectionCommandService};
