// tests/support/mocks/directory.rs
use async_trait::async_trait;
use gazette_core::application::ports::directory::UserDirectory;
use gazette_core::domain::errors::{DomainError, DomainResult};
use gazette_core::domain::user::UserId;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Canned identity provider: user id to display name.
pub struct StaticUserDirectory {
    names: BTreeMap<i64, String>,
}

impl StaticUserDirectory {
    pub fn new(names: &[(i64, &str)]) -> Arc<Self> {
        Arc::new(Self {
            names: names
                .iter()
                .map(|(id, name)| (*id, name.to_string()))
                .collect(),
        })
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn display_name(&self, user: UserId) -> DomainResult<String> {
        self.names
            .get(&i64::from(user))
            .cloned()
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}
