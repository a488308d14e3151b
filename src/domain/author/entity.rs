use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorProfileId(pub i64);

impl AuthorProfileId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "author profile id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorProfileId> for i64 {
    fn from(value: AuthorProfileId) -> Self {
        value.0
    }
}

/// Byline record for an article, keyed one-to-one by the owning user.
/// Articles saved without an explicit author get one resolved (or created)
/// from their owner through the repository.
#[derive(Debug, Clone)]
pub struct AuthorProfile {
    pub id: AuthorProfileId,
    pub user: UserId,
    pub name: String,
}
