use crate::domain::article::{Article, ArticleRevision, ArticleTranslation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleTranslationDto {
    pub title: String,
    pub slug: Option<String>,
    pub lead_in: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: String,
    pub active: bool,
}

impl From<ArticleTranslation> for ArticleTranslationDto {
    fn from(translation: ArticleTranslation) -> Self {
        Self {
            title: translation.title.into_inner(),
            slug: translation.slug.map(Into::into),
            lead_in: translation.lead_in,
            meta_title: translation.meta.meta_title,
            meta_description: translation.meta.meta_description,
            meta_keywords: translation.meta.meta_keywords,
            active: translation.active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub author_id: i64,
    pub owner_id: i64,
    pub section_id: i64,
    pub categories: Vec<i64>,
    pub tags: Vec<String>,
    pub publishing_date: DateTime<Utc>,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub translations: BTreeMap<String, ArticleTranslationDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            author_id: article.author.into(),
            owner_id: article.owner.into(),
            section_id: article.section.into(),
            categories: article.categories.into_iter().map(Into::into).collect(),
            tags: article
                .tags
                .into_iter()
                .map(|tag| tag.as_str().to_string())
                .collect(),
            publishing_date: article.publishing_date,
            featured_image: article
                .featured_image
                .map(|image| image.as_str().to_string()),
            translations: article
                .translations
                .iter()
                .map(|(language, translation)| {
                    (language.as_str().to_string(), translation.clone().into())
                })
                .collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRevisionDto {
    pub version: i32,
    pub publishing_date: DateTime<Utc>,
    pub translations: BTreeMap<String, ArticleTranslationDto>,
    #[serde(default)]
    pub edited_by: Option<i64>,
    pub recorded_at: DateTime<Utc>,
}

impl From<ArticleRevision> for ArticleRevisionDto {
    fn from(revision: ArticleRevision) -> Self {
        Self {
            version: revision.version,
            publishing_date: revision.publishing_date,
            translations: revision
                .translations
                .iter()
                .map(|(language, translation)| {
                    (language.as_str().to_string(), translation.clone().into())
                })
                .collect(),
            edited_by: revision.edited_by.map(Into::into),
            recorded_at: revision.recorded_at,
        }
    }
}
