// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleTranslation,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
    value_objects::{CategoryId, ImageRef, SeoMetadata, Tag},
};
use crate::domain::author::AuthorProfileId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::LanguageCode;
use crate::domain::section::SectionConfigId;
use crate::domain::translation::TranslationSet;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    owner_id: i64,
    section_id: i64,
    publishing_date: DateTime<Utc>,
    featured_image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct TranslationRow {
    language: String,
    title: String,
    slug: Option<String>,
    lead_in: String,
    meta_title: String,
    meta_description: String,
    meta_keywords: String,
    active: bool,
}

impl TryFrom<TranslationRow> for (LanguageCode, ArticleTranslation) {
    type Error = DomainError;

    fn try_from(row: TranslationRow) -> Result<Self, Self::Error> {
        let language = LanguageCode::new(row.language)?;
        let translation = ArticleTranslation {
            title: ArticleTitle::new(row.title)?,
            slug: row.slug.map(ArticleSlug::new),
            lead_in: row.lead_in,
            meta: SeoMetadata {
                meta_title: row.meta_title,
                meta_description: row.meta_description,
                meta_keywords: row.meta_keywords,
            },
            active: row.active,
        };
        Ok((language, translation))
    }
}

/// Assemble the full aggregate: article row plus translations, category and
/// tag links.
async fn load_article(pool: &PgPool, id: i64) -> DomainResult<Option<Article>> {
    let Some(row) = sqlx::query_as::<_, ArticleRow>(
        "SELECT id, author_id, owner_id, section_id, publishing_date, featured_image, created_at, updated_at
         FROM articles WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?
    else {
        return Ok(None);
    };

    let translation_rows = sqlx::query_as::<_, TranslationRow>(
        "SELECT language, title, slug, lead_in, meta_title, meta_description, meta_keywords, active
         FROM article_translations WHERE article_id = $1",
    )
    .bind(id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let translations = translation_rows
        .into_iter()
        .map(TryInto::try_into)
        .collect::<DomainResult<TranslationSet<ArticleTranslation>>>()?;

    let categories: Vec<i64> = sqlx::query_scalar(
        "SELECT category_id FROM article_categories WHERE article_id = $1 ORDER BY category_id",
    )
    .bind(id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let tags: Vec<String> =
        sqlx::query_scalar("SELECT tag FROM article_tags WHERE article_id = $1 ORDER BY tag")
            .bind(id)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx)?;

    Ok(Some(Article {
        id: ArticleId::new(row.id)?,
        author: AuthorProfileId::new(row.author_id)?,
        owner: UserId::new(row.owner_id)?,
        section: SectionConfigId::new(row.section_id)?,
        categories: categories.into_iter().map(CategoryId).collect(),
        tags: tags
            .into_iter()
            .map(Tag::new)
            .collect::<DomainResult<Vec<_>>>()?,
        publishing_date: row.publishing_date,
        featured_image: row.featured_image.map(ImageRef::new),
        translations,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

async fn insert_translations(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
    translations: &TranslationSet<ArticleTranslation>,
) -> DomainResult<()> {
    for (language, translation) in translations.iter() {
        sqlx::query(
            "INSERT INTO article_translations
                 (article_id, language, title, slug, lead_in, meta_title, meta_description, meta_keywords, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(article_id)
        .bind(language.as_str())
        .bind(translation.title.as_str())
        .bind(translation.slug.as_ref().map(ArticleSlug::as_str))
        .bind(&translation.lead_in)
        .bind(&translation.meta.meta_title)
        .bind(&translation.meta.meta_description)
        .bind(&translation.meta.meta_keywords)
        .bind(translation.active)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    }
    Ok(())
}

async fn replace_categories(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
    categories: &[CategoryId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_categories WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    for category in categories {
        sqlx::query("INSERT INTO article_categories (article_id, category_id) VALUES ($1, $2)")
            .bind(article_id)
            .bind(i64::from(*category))
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

async fn replace_tags(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
    tags: &[Tag],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    for tag in tags {
        sqlx::query("INSERT INTO article_tags (article_id, tag) VALUES ($1, $2)")
            .bind(article_id)
            .bind(tag.as_str())
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (author_id, owner_id, section_id, publishing_date, featured_image, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(i64::from(article.author))
        .bind(i64::from(article.owner))
        .bind(i64::from(article.section))
        .bind(article.publishing_date)
        .bind(article.featured_image.as_ref().map(ImageRef::as_str))
        .bind(article.created_at)
        .bind(article.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        insert_translations(&mut tx, id, &article.translations).await?;
        replace_categories(&mut tx, id, &article.categories).await?;
        replace_tags(&mut tx, id, &article.tags).await?;

        tx.commit().await.map_err(map_sqlx)?;

        load_article(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article not found".into()))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let id = i64::from(update.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query(
            "UPDATE articles
             SET publishing_date = COALESCE($2, publishing_date), updated_at = $3
             WHERE id = $1",
        )
        .bind(id)
        .bind(update.publishing_date)
        .bind(update.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        if let Some(featured_image) = &update.featured_image {
            sqlx::query("UPDATE articles SET featured_image = $2 WHERE id = $1")
                .bind(id)
                .bind(featured_image.as_ref().map(ImageRef::as_str))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        if let Some(categories) = &update.categories {
            replace_categories(&mut tx, id, categories).await?;
        }

        if let Some(tags) = &update.tags {
            replace_tags(&mut tx, id, tags).await?;
        }

        if let Some(translations) = &update.translations {
            sqlx::query("DELETE FROM article_translations WHERE article_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            insert_translations(&mut tx, id, translations).await?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        load_article(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        load_article(&self.pool, i64::from(id)).await
    }

    async fn find_by_slug(
        &self,
        language: &LanguageCode,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<Article>> {
        let id: Option<i64> = sqlx::query_scalar(
            "SELECT article_id FROM article_translations WHERE language = $1 AND slug = $2",
        )
        .bind(language.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match id {
            Some(id) => load_article(&self.pool, id).await,
            None => Ok(None),
        }
    }

    async fn slugs_starting_with(
        &self,
        language: &LanguageCode,
        prefix: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<Vec<String>> {
        // Prefix filtering happens here rather than via LIKE so wildcard
        // characters inside a slug cannot widen the match.
        let slugs: Vec<String> = sqlx::query_scalar(
            "SELECT slug FROM article_translations
             WHERE language = $1 AND slug IS NOT NULL AND ($2::BIGINT IS NULL OR article_id <> $2)",
        )
        .bind(language.as_str())
        .bind(exclude.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(slugs
            .into_iter()
            .filter(|slug| slug.starts_with(prefix))
            .collect())
    }

    async fn list_latest(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT a.id FROM articles a
             WHERE EXISTS (
                 SELECT 1 FROM article_translations t
                 WHERE t.article_id = a.id AND t.active
             )
             ORDER BY a.publishing_date DESC
             LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut articles = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(article) = load_article(&self.pool, id).await? {
                articles.push(article);
            }
        }
        Ok(articles)
    }
}
