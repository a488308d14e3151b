use crate::domain::author::entity::AuthorProfile;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorProfileRepository: Send + Sync {
    /// Fetch the profile for `user`, creating it with `default_name` when
    /// none exists yet. Idempotent: repeated calls for the same user return
    /// the same profile and never create a second one.
    async fn get_or_create(&self, user: UserId, default_name: &str)
    -> DomainResult<AuthorProfile>;

    async fn find_by_user(&self, user: UserId) -> DomainResult<Option<AuthorProfile>>;
}
