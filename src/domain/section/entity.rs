use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::translation::TranslationSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionConfigId(pub i64);

impl SectionConfigId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "section config id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SectionConfigId> for i64 {
    fn from(value: SectionConfigId) -> Self {
        value.0
    }
}

/// Translatable display title of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTitle(String);

impl SectionTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "section title cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// One deployed instance of the article-listing feature. The namespace keys
/// URL reversal and scopes the articles that hang off this section.
#[derive(Debug, Clone)]
pub struct SectionConfig {
    pub id: SectionConfigId,
    pub namespace: String,
    pub titles: TranslationSet<SectionTitle>,
}

#[derive(Debug, Clone)]
pub struct NewSectionConfig {
    pub namespace: String,
    pub titles: TranslationSet<SectionTitle>,
}
