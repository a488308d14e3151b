// src/infrastructure/repositories/postgres_revision.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleRevision, ArticleRevisionRepository, ArticleSlug, ArticleTitle,
    ArticleTranslation,
    value_objects::SeoMetadata,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::LanguageCode;
use crate::domain::translation::TranslationSet;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleRevisionRepository {
    pool: PgPool,
}

impl PostgresArticleRevisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wire shape of one translation inside the stored snapshot text.
#[derive(Debug, Serialize, Deserialize)]
struct TranslationSnapshot {
    language: String,
    title: String,
    slug: Option<String>,
    lead_in: String,
    meta_title: String,
    meta_description: String,
    meta_keywords: String,
    active: bool,
}

fn snapshot_of(article: &Article) -> DomainResult<String> {
    let entries: Vec<TranslationSnapshot> = article
        .translations
        .iter()
        .map(|(language, translation)| TranslationSnapshot {
            language: language.as_str().to_string(),
            title: translation.title.as_str().to_string(),
            slug: translation.slug.as_ref().map(|s| s.as_str().to_string()),
            lead_in: translation.lead_in.clone(),
            meta_title: translation.meta.meta_title.clone(),
            meta_description: translation.meta.meta_description.clone(),
            meta_keywords: translation.meta.meta_keywords.clone(),
            active: translation.active,
        })
        .collect();

    serde_json::to_string(&entries)
        .map_err(|err| DomainError::Persistence(format!("snapshot serialization failed: {err}")))
}

fn translations_of(snapshot: &str) -> DomainResult<TranslationSet<ArticleTranslation>> {
    let entries: Vec<TranslationSnapshot> = serde_json::from_str(snapshot)
        .map_err(|err| DomainError::Persistence(format!("snapshot deserialization failed: {err}")))?;

    entries
        .into_iter()
        .map(|entry| {
            Ok((
                LanguageCode::new(entry.language)?,
                ArticleTranslation {
                    title: ArticleTitle::new(entry.title)?,
                    slug: entry.slug.map(ArticleSlug::new),
                    lead_in: entry.lead_in,
                    meta: SeoMetadata {
                        meta_title: entry.meta_title,
                        meta_description: entry.meta_description,
                        meta_keywords: entry.meta_keywords,
                    },
                    active: entry.active,
                },
            ))
        })
        .collect()
}

#[derive(Debug, FromRow)]
struct RevisionRow {
    article_id: i64,
    version: i32,
    publishing_date: DateTime<Utc>,
    snapshot: String,
    edited_by: Option<i64>,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<RevisionRow> for ArticleRevision {
    type Error = DomainError;

    fn try_from(row: RevisionRow) -> Result<Self, Self::Error> {
        Ok(ArticleRevision {
            article_id: ArticleId::new(row.article_id)?,
            version: row.version,
            publishing_date: row.publishing_date,
            translations: translations_of(&row.snapshot)?,
            edited_by: row.edited_by.map(UserId::new).transpose()?,
            recorded_at: row.recorded_at,
        })
    }
}

#[async_trait]
impl ArticleRevisionRepository for PostgresArticleRevisionRepository {
    async fn append(&self, article: &Article, edited_by: Option<UserId>) -> DomainResult<()> {
        let snapshot = snapshot_of(article)?;

        sqlx::query(
            "INSERT INTO article_revisions (article_id, version, publishing_date, snapshot, edited_by, recorded_at)
             SELECT $1, COALESCE(MAX(version), 0) + 1, $2, $3, $4, $5
             FROM article_revisions WHERE article_id = $1",
        )
        .bind(i64::from(article.id))
        .bind(article.publishing_date)
        .bind(snapshot)
        .bind(edited_by.map(i64::from))
        .bind(article.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        tracing::debug!(article = i64::from(article.id), "revision appended");
        Ok(())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleRevision>> {
        let rows = sqlx::query_as::<_, RevisionRow>(
            "SELECT article_id, version, publishing_date, snapshot, edited_by, recorded_at
             FROM article_revisions WHERE article_id = $1 ORDER BY version",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleRevision::try_from).collect()
    }
}
