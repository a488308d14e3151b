// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            ArticleId, ArticleSlug, ArticleTitle, ArticleTranslation, ArticleUpdate,
            value_objects::{CategoryId, ImageRef, Tag},
        },
        language::LanguageCode,
        user::UserId,
    },
};
use chrono::{DateTime, Utc};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub editor: Option<i64>,
    pub language: String,
    pub title: Option<String>,
    /// Explicit slug; setting this bypasses allocation entirely.
    pub slug: Option<String>,
    /// Clear the slug so it is re-created from the title on this save.
    pub reset_slug: bool,
    pub lead_in: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub active: Option<bool>,
    pub publishing_date: Option<DateTime<Utc>>,
    pub categories: Option<Vec<i64>>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<Option<String>>,
}

impl UpdateArticleCommand {
    pub fn new(id: i64, language: impl Into<String>) -> Self {
        Self {
            id,
            editor: None,
            language: language.into(),
            title: None,
            slug: None,
            reset_slug: false,
            lead_in: None,
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            active: None,
            publishing_date: None,
            categories: None,
            tags: None,
            featured_image: None,
        }
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let language = LanguageCode::new(command.language)?;
        let editor = command.editor.map(UserId::new).transpose()?;

        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut translation = match article.translation(&language) {
            Some(existing) => existing.clone(),
            None => {
                let title = command
                    .title
                    .clone()
                    .ok_or_else(|| ApplicationError::validation("a new translation requires a title"))?;
                ArticleTranslation::new(ArticleTitle::new(title)?)
            }
        };

        if let Some(title) = command.title {
            translation.title = ArticleTitle::new(title)?;
        }
        if let Some(lead_in) = command.lead_in {
            translation.lead_in = lead_in;
        }
        if let Some(meta_title) = command.meta_title {
            translation.meta.meta_title = meta_title;
        }
        if let Some(meta_description) = command.meta_description {
            translation.meta.meta_description = meta_description;
        }
        if let Some(meta_keywords) = command.meta_keywords {
            translation.meta.meta_keywords = meta_keywords;
        }
        if let Some(active) = command.active {
            translation.active = active;
        }

        let allocate = match command.slug {
            Some(slug) => {
                translation.slug = Some(ArticleSlug::new(slug));
                false
            }
            None if command.reset_slug => {
                translation.slug = None;
                true
            }
            None => translation.slug.is_none(),
        };

        let mut translations = article.translations.clone();
        translations.insert(language.clone(), translation);

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now).with_translations(translations);

        if let Some(publishing_date) = command.publishing_date {
            update = update.with_publishing_date(publishing_date);
        }
        if let Some(categories) = command.categories {
            update = update.with_categories(categories.into_iter().map(CategoryId).collect());
        }
        if let Some(tags) = command.tags {
            let tags = tags.into_iter().map(Tag::new).collect::<Result<_, _>>()?;
            update = update.with_tags(tags);
        }
        if let Some(featured_image) = command.featured_image {
            update = update.with_featured_image(featured_image.map(ImageRef::new));
        }

        let updated = if allocate {
            self.update_with_allocated_slug(&language, update).await?
        } else {
            self.write_repo.update(update).await?
        };

        self.revision_repo.append(&updated, editor).await?;
        Ok(updated.into())
    }
}
