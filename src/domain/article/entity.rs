// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleId, ArticleSlug, ArticleTitle, CategoryId, ImageRef, SeoMetadata, Tag,
};
use crate::domain::author::AuthorProfileId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::LanguageCode;
use crate::domain::section::SectionConfigId;
use crate::domain::translation::TranslationSet;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// The language-scoped part of an article: everything a reader sees in one
/// language, including the slug that addresses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTranslation {
    pub title: ArticleTitle,
    pub slug: Option<ArticleSlug>,
    pub lead_in: String,
    pub meta: SeoMetadata,
    pub active: bool,
}

impl ArticleTranslation {
    pub fn new(title: ArticleTitle) -> Self {
        Self {
            title,
            slug: None,
            lead_in: String::new(),
            meta: SeoMetadata::default(),
            active: true,
        }
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_lead_in(mut self, lead_in: impl Into<String>) -> Self {
        self.lead_in = lead_in.into();
        self
    }

    pub fn with_meta(mut self, meta: SeoMetadata) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author: AuthorProfileId,
    pub owner: UserId,
    pub section: SectionConfigId,
    pub categories: Vec<CategoryId>,
    pub tags: Vec<Tag>,
    pub publishing_date: DateTime<Utc>,
    pub featured_image: Option<ImageRef>,
    pub translations: TranslationSet<ArticleTranslation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn translation(&self, language: &LanguageCode) -> Option<&ArticleTranslation> {
        self.translations.get(language)
    }

    /// Display title in any available language.
    pub fn title_any(&self) -> Option<&ArticleTitle> {
        self.translations.any().map(|(_, t)| &t.title)
    }

    pub fn has_active_translation(&self) -> bool {
        self.translations.iter().any(|(_, t)| t.active)
    }

    pub fn set_translation(
        &mut self,
        language: LanguageCode,
        translation: ArticleTranslation,
        now: DateTime<Utc>,
    ) {
        self.translations.insert(language, translation);
        self.updated_at = now;
    }

    pub fn set_slug(
        &mut self,
        language: &LanguageCode,
        slug: ArticleSlug,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let translation = self.translations.get_mut(language).ok_or_else(|| {
            DomainError::NotFound(format!("no translation for language {language}"))
        })?;
        translation.slug = Some(slug);
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author: AuthorProfileId,
    pub owner: UserId,
    pub section: SectionConfigId,
    pub categories: Vec<CategoryId>,
    pub tags: Vec<Tag>,
    pub publishing_date: DateTime<Utc>,
    pub featured_image: Option<ImageRef>,
    pub translations: TranslationSet<ArticleTranslation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub publishing_date: Option<DateTime<Utc>>,
    pub categories: Option<Vec<CategoryId>>,
    pub tags: Option<Vec<Tag>>,
    pub featured_image: Option<Option<ImageRef>>,
    pub translations: Option<TranslationSet<ArticleTranslation>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            publishing_date: None,
            categories: None,
            tags: None,
            featured_image: None,
            translations: None,
            updated_at,
        }
    }

    pub fn with_publishing_date(mut self, publishing_date: DateTime<Utc>) -> Self {
        self.publishing_date = Some(publishing_date);
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategoryId>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_featured_image(mut self, featured_image: Option<ImageRef>) -> Self {
        self.featured_image = Some(featured_image);
        self
    }

    pub fn with_translations(mut self, translations: TranslationSet<ArticleTranslation>) -> Self {
        self.translations = Some(translations);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
