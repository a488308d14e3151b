// tests/support/mocks/author_repo.rs
use async_trait::async_trait;
use gazette_core::domain::author::{AuthorProfile, AuthorProfileId, AuthorProfileRepository};
use gazette_core::domain::errors::DomainResult;
use gazette_core::domain::user::UserId;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    next_id: i64,
    profiles: Vec<AuthorProfile>,
    created: usize,
}

#[derive(Default)]
pub struct InMemoryAuthorProfiles {
    state: Mutex<State>,
}

impl InMemoryAuthorProfiles {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn profile_count(&self) -> usize {
        self.state.lock().unwrap().profiles.len()
    }

    /// How many profiles were actually created (as opposed to fetched).
    pub fn created_count(&self) -> usize {
        self.state.lock().unwrap().created
    }
}

#[async_trait]
impl AuthorProfileRepository for InMemoryAuthorProfiles {
    async fn get_or_create(
        &self,
        user: UserId,
        default_name: &str,
    ) -> DomainResult<AuthorProfile> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.profiles.iter().find(|profile| profile.user == user) {
            return Ok(existing.clone());
        }
        state.next_id += 1;
        state.created += 1;
        let profile = AuthorProfile {
            id: AuthorProfileId::new(state.next_id)?,
            user,
            name: default_name.to_string(),
        };
        state.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn find_by_user(&self, user: UserId) -> DomainResult<Option<AuthorProfile>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .profiles
            .iter()
            .find(|profile| profile.user == user)
            .cloned())
    }
}
