use crate::domain::errors::DomainResult;
use crate::domain::language::LanguageCode;
use crate::domain::section::entity::{NewSectionConfig, SectionConfig, SectionConfigId, SectionTitle};
use async_trait::async_trait;

#[async_trait]
pub trait SectionConfigRepository: Send + Sync {
    async fn insert(&self, section: NewSectionConfig) -> DomainResult<SectionConfig>;

    /// Set or replace the display title for one language.
    async fn set_title(
        &self,
        id: SectionConfigId,
        language: &LanguageCode,
        title: SectionTitle,
    ) -> DomainResult<SectionConfig>;

    async fn find_by_id(&self, id: SectionConfigId) -> DomainResult<Option<SectionConfig>>;
    async fn find_by_namespace(&self, namespace: &str) -> DomainResult<Option<SectionConfig>>;
}
