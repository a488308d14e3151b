// src/application/ports/directory.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Contract against the surrounding framework's identity provider. Only the
/// display name is needed here, to seed an auto-created author profile.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn display_name(&self, user: UserId) -> DomainResult<String>;
}
