// src/application/queries/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, ArticleRevisionDto},
        error::{ApplicationError, ApplicationResult},
        ports::urls::UrlReverser,
    },
    domain::{
        article::{
            ArticleId, ArticleSlug,
            repository::{ArticleReadRepository, ArticleRevisionRepository},
        },
        language::LanguageCode,
        widget::LatestEntriesWidget,
    },
};

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
    revision_repo: Arc<dyn ArticleRevisionRepository>,
    url_reverser: Arc<dyn UrlReverser>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        revision_repo: Arc<dyn ArticleRevisionRepository>,
        url_reverser: Arc<dyn UrlReverser>,
    ) -> Self {
        Self {
            read_repo,
            revision_repo,
            url_reverser,
        }
    }

    /// Backing query for the latest-entries widget: newest publishing date
    /// first, only articles with at least one active translation, at most
    /// the widget's configured count.
    pub async fn latest_entries(
        &self,
        widget: &LatestEntriesWidget,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_latest(widget.latest_entries()).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_slug(
        &self,
        language: impl Into<String>,
        slug: impl Into<String>,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let language = LanguageCode::new(language)?;
        let slug = ArticleSlug::new(slug);
        let article = self.read_repo.find_by_slug(&language, &slug).await?;
        Ok(article.map(Into::into))
    }

    pub async fn revisions(&self, article_id: i64) -> ApplicationResult<Vec<ArticleRevisionDto>> {
        let id = ArticleId::new(article_id)?;
        let revisions = self.revision_repo.list_by_article(id).await?;
        Ok(revisions.into_iter().map(Into::into).collect())
    }

    /// Canonical link for an article in the given language, delegated to the
    /// URL-reversal collaborator. Falls back to any language's slug when the
    /// requested one is missing, mirroring display behavior.
    pub async fn absolute_url(
        &self,
        article_id: i64,
        namespace: &str,
        language: impl Into<String>,
    ) -> ApplicationResult<String> {
        let id = ArticleId::new(article_id)?;
        let language = LanguageCode::new(language)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let slug = article
            .translation(&language)
            .and_then(|t| t.slug.clone())
            .or_else(|| {
                article
                    .translations
                    .iter()
                    .find_map(|(_, t)| t.slug.clone())
            })
            .ok_or_else(|| ApplicationError::not_found("article has no slug"))?;

        Ok(self.url_reverser.article_url(namespace, &slug))
    }
}
