// src/infrastructure/repositories/postgres_section.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::LanguageCode;
use crate::domain::section::{
    NewSectionConfig, SectionConfig, SectionConfigId, SectionConfigRepository, SectionTitle,
};
use crate::domain::translation::TranslationSet;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSectionConfigRepository {
    pool: PgPool,
}

impl PostgresSectionConfigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SectionTitleRow {
    language: String,
    title: String,
}

async fn load_section(pool: &PgPool, id: i64) -> DomainResult<Option<SectionConfig>> {
    let Some(namespace) = sqlx::query_scalar::<_, String>(
        "SELECT namespace FROM section_configs WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?
    else {
        return Ok(None);
    };

    let rows = sqlx::query_as::<_, SectionTitleRow>(
        "SELECT language, title FROM section_config_translations WHERE section_id = $1",
    )
    .bind(id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let titles = rows
        .into_iter()
        .map(|row| Ok((LanguageCode::new(row.language)?, SectionTitle::new(row.title)?)))
        .collect::<DomainResult<TranslationSet<SectionTitle>>>()?;

    Ok(Some(SectionConfig {
        id: SectionConfigId::new(id)?,
        namespace,
        titles,
    }))
}

#[async_trait]
impl SectionConfigRepository for PostgresSectionConfigRepository {
    async fn insert(&self, section: NewSectionConfig) -> DomainResult<SectionConfig> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 =
            sqlx::query_scalar("INSERT INTO section_configs (namespace) VALUES ($1) RETURNING id")
                .bind(&section.namespace)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx)?;

        for (language, title) in section.titles.iter() {
            sqlx::query(
                "INSERT INTO section_config_translations (section_id, language, title) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(language.as_str())
            .bind(title.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        load_section(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted section not found".into()))
    }

    async fn set_title(
        &self,
        id: SectionConfigId,
        language: &LanguageCode,
        title: SectionTitle,
    ) -> DomainResult<SectionConfig> {
        sqlx::query(
            "INSERT INTO section_config_translations (section_id, language, title) VALUES ($1, $2, $3)
             ON CONFLICT (section_id, language) DO UPDATE SET title = EXCLUDED.title",
        )
        .bind(i64::from(id))
        .bind(language.as_str())
        .bind(title.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        load_section(&self.pool, i64::from(id))
            .await?
            .ok_or_else(|| DomainError::NotFound("section not found".into()))
    }

    async fn find_by_id(&self, id: SectionConfigId) -> DomainResult<Option<SectionConfig>> {
        load_section(&self.pool, i64::from(id)).await
    }

    async fn find_by_namespace(&self, namespace: &str) -> DomainResult<Option<SectionConfig>> {
        let id: Option<i64> =
            sqlx::query_scalar("SELECT id FROM section_configs WHERE namespace = $1")
                .bind(namespace)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        match id {
            Some(id) => load_section(&self.pool, id).await,
            None => Ok(None),
        }
    }
}
