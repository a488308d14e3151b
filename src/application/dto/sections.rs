use crate::domain::section::SectionConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfigDto {
    pub id: i64,
    pub namespace: String,
    pub titles: BTreeMap<String, String>,
}

impl From<SectionConfig> for SectionConfigDto {
    fn from(section: SectionConfig) -> Self {
        Self {
            id: section.id.into(),
            namespace: section.namespace,
            titles: section
                .titles
                .iter()
                .map(|(language, title)| {
                    (language.as_str().to_string(), title.as_str().to_string())
                })
                .collect(),
        }
    }
}
