use crate::domain::article::entity::ArticleTranslation;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::translation::TranslationSet;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Immutable snapshot of an article's content at one point in its history.
/// Appended after every successful create or update; never rewritten.
#[derive(Debug, Clone)]
pub struct ArticleRevision {
    pub article_id: ArticleId,
    pub version: i32,
    pub publishing_date: DateTime<Utc>,
    pub translations: TranslationSet<ArticleTranslation>,
    pub edited_by: Option<UserId>,
    pub recorded_at: DateTime<Utc>,
}

impl ArticleRevision {
    pub fn new(
        article_id: ArticleId,
        version: i32,
        publishing_date: DateTime<Utc>,
        translations: TranslationSet<ArticleTranslation>,
        edited_by: Option<UserId>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            article_id,
            version,
            publishing_date,
            translations,
            edited_by,
            recorded_at,
        }
    }
}
