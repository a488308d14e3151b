use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::revision::ArticleRevision;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::language::LanguageCode;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Write side of the article store. Implementations enforce the
/// `(language, slug)` uniqueness constraint and surface violations of it as
/// `DomainError::Conflict`; every other storage failure keeps its own shape.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn find_by_slug(
        &self,
        language: &LanguageCode,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>>;

    /// All slugs in `language` that start with `prefix`, excluding the
    /// translations of `exclude` when given. Feeds the suffix search of the
    /// slug allocator.
    async fn slugs_starting_with(
        &self,
        language: &LanguageCode,
        prefix: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<Vec<String>>;

    /// Most recently published articles that have at least one active
    /// translation, newest publishing date first.
    async fn list_latest(&self, limit: u32) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait ArticleRevisionRepository: Send + Sync {
    async fn append(&self, article: &Article, edited_by: Option<UserId>) -> DomainResult<()>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleRevision>>;
}
