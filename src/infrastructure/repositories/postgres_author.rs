// src/infrastructure/repositories/postgres_author.rs
use super::map_sqlx;
use crate::domain::author::{AuthorProfile, AuthorProfileId, AuthorProfileRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAuthorProfileRepository {
    pool: PgPool,
}

impl PostgresAuthorProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorProfileRow {
    id: i64,
    user_id: i64,
    name: String,
}

impl TryFrom<AuthorProfileRow> for AuthorProfile {
    type Error = DomainError;

    fn try_from(row: AuthorProfileRow) -> Result<Self, Self::Error> {
        Ok(AuthorProfile {
            id: AuthorProfileId::new(row.id)?,
            user: UserId::new(row.user_id)?,
            name: row.name,
        })
    }
}

#[async_trait]
impl AuthorProfileRepository for PostgresAuthorProfileRepository {
    async fn get_or_create(
        &self,
        user: UserId,
        default_name: &str,
    ) -> DomainResult<AuthorProfile> {
        // The no-op DO UPDATE makes the statement return the existing row on
        // conflict instead of nothing; the stored name is never overwritten.
        let row = sqlx::query_as::<_, AuthorProfileRow>(
            "INSERT INTO author_profiles (user_id, name) VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING id, user_id, name",
        )
        .bind(i64::from(user))
        .bind(default_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        AuthorProfile::try_from(row)
    }

    async fn find_by_user(&self, user: UserId) -> DomainResult<Option<AuthorProfile>> {
        let row = sqlx::query_as::<_, AuthorProfileRow>(
            "SELECT id, user_id, name FROM author_profiles WHERE user_id = $1",
        )
        .bind(i64::from(user))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(AuthorProfile::try_from).transpose()
    }
}
