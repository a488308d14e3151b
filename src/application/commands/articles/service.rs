// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{directory::UserDirectory, time::Clock},
    },
    domain::{
        article::{
            Article, ArticleUpdate, NewArticle,
            repository::{
                ArticleReadRepository, ArticleRevisionRepository, ArticleWriteRepository,
            },
            services::SlugAllocator,
        },
        author::{AuthorProfileId, repository::AuthorProfileRepository},
        errors::DomainError,
        language::LanguageCode,
        user::UserId,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) revision_repo: Arc<dyn ArticleRevisionRepository>,
    pub(super) author_repo: Arc<dyn AuthorProfileRepository>,
    pub(super) directory: Arc<dyn UserDirectory>,
    pub(super) slug_allocator: Arc<SlugAllocator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        revision_repo: Arc<dyn ArticleRevisionRepository>,
        author_repo: Arc<dyn AuthorProfileRepository>,
        directory: Arc<dyn UserDirectory>,
        slug_allocator: Arc<SlugAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            revision_repo,
            author_repo,
            directory,
            slug_allocator,
            clock,
        }
    }

    /// Ensure the article has an author: reuse the owner's profile when one
    /// exists, otherwise create it under the owner's directory display name.
    pub(super) async fn resolve_author(&self, owner: UserId) -> ApplicationResult<AuthorProfileId> {
        let name = self.directory.display_name(owner).await?;
        let profile = self.author_repo.get_or_create(owner, &name).await?;
        tracing::debug!(user = i64::from(owner), author = i64::from(profile.id), "author resolved for owner");
        Ok(profile.id)
    }

    /// Insert with the unsuffixed base slug first; a uniqueness conflict on
    /// that one attempt falls through to the suffix search, after which the
    /// second insert's outcome stands, conflict or not. Failures other than
    /// the slug conflict propagate from the first attempt untouched.
    pub(super) async fn insert_with_allocated_slug(
        &self,
        language: &LanguageCode,
        mut article: NewArticle,
    ) -> ApplicationResult<Article> {
        let translation = article
            .translations
            .get(language)
            .ok_or_else(|| DomainError::NotFound(format!("no translation for language {language}")))?;
        let base = self.slug_allocator.base_slug(&translation.title);

        if let Some(translation) = article.translations.get_mut(language) {
            translation.slug = Some(base.clone());
        }

        match self.write_repo.insert(article.clone()).await {
            Ok(created) => Ok(created),
            Err(DomainError::Conflict(_)) => {
                tracing::info!(slug = %base, language = %language, "slug taken, retrying with suffix");
                let slug = self.slug_allocator.next_free(language, &base, None).await?;
                if let Some(translation) = article.translations.get_mut(language) {
                    translation.slug = Some(slug);
                }
                Ok(self.write_repo.insert(article).await?)
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Update-side counterpart of [`Self::insert_with_allocated_slug`]. The
    /// article's own slugs are excluded from the suffix search so a re-save
    /// cannot collide with itself.
    pub(super) async fn update_with_allocated_slug(
        &self,
        language: &LanguageCode,
        mut update: ArticleUpdate,
    ) -> ApplicationResult<Article> {
        let translations = update
            .translations
            .as_mut()
            .ok_or_else(|| DomainError::Validation("update carries no translations".into()))?;
        let translation = translations
            .get(language)
            .ok_or_else(|| DomainError::NotFound(format!("no translation for language {language}")))?;
        let base = self.slug_allocator.base_slug(&translation.title);

        if let Some(translation) = translations.get_mut(language) {
            translation.slug = Some(base.clone());
        }

        match self.write_repo.update(update.clone()).await {
            Ok(updated) => Ok(updated),
            Err(DomainError::Conflict(_)) => {
                tracing::info!(slug = %base, language = %language, "slug taken, retrying with suffix");
                let slug = self
                    .slug_allocator
                    .next_free(language, &base, Some(update.id))
                    .await?;
                if let Some(translations) = update.translations.as_mut()
                    && let Some(translation) = translations.get_mut(language)
                {
                    translation.slug = Some(slug);
                }
                Ok(self.write_repo.update(update).await?)
            }
            Err(other) => Err(other.into()),
        }
    }
}
