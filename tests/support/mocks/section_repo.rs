// tests/support/mocks/section_repo.rs
use async_trait::async_trait;
use gazette_core::domain::errors::{DomainError, DomainResult};
use gazette_core::domain::language::LanguageCode;
use gazette_core::domain::section::{
    NewSectionConfig, SectionConfig, SectionConfigId, SectionConfigRepository, SectionTitle,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    next_id: i64,
    sections: Vec<SectionConfig>,
}

#[derive(Default)]
pub struct InMemorySectionConfigs {
    state: Mutex<State>,
}

impl InMemorySectionConfigs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl SectionConfigRepository for InMemorySectionConfigs {
    async fn insert(&self, section: NewSectionConfig) -> DomainResult<SectionConfig> {
        let mut state = self.state.lock().unwrap();
        if state
            .sections
            .iter()
            .any(|existing| existing.namespace == section.namespace)
        {
            return Err(DomainError::Conflict("namespace already exists".into()));
        }
        state.next_id += 1;
        let stored = SectionConfig {
            id: SectionConfigId::new(state.next_id)?,
            namespace: section.namespace,
            titles: section.titles,
        };
        state.sections.push(stored.clone());
        Ok(stored)
    }

    async fn set_title(
        &self,
        id: SectionConfigId,
        language: &LanguageCode,
        title: SectionTitle,
    ) -> DomainResult<SectionConfig> {
        let mut state = self.state.lock().unwrap();
        let section = state
            .sections
            .iter_mut()
            .find(|section| section.id == id)
            .ok_or_else(|| DomainError::NotFound("section not found".into()))?;
        section.titles.insert(language.clone(), title);
        Ok(section.clone())
    }

    async fn find_by_id(&self, id: SectionConfigId) -> DomainResult<Option<SectionConfig>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .sections
            .iter()
            .find(|section| section.id == id)
            .cloned())
    }

    async fn find_by_namespace(&self, namespace: &str) -> DomainResult<Option<SectionConfig>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .sections
            .iter()
            .find(|section| section.namespace == namespace)
            .cloned())
    }
}
