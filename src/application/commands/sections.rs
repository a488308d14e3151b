// src/application/commands/sections.rs
use std::sync::Arc;

use crate::{
    application::{dto::SectionConfigDto, error::ApplicationResult},
    domain::{
        language::LanguageCode,
        section::{
            NewSectionConfig, SectionConfigId, SectionTitle, repository::SectionConfigRepository,
        },
        translation::TranslationSet,
    },
};

pub struct CreateSectionCommand {
    pub namespace: String,
    /// (language, title) pairs; at least the display titles the deployment
    /// starts with.
    pub titles: Vec<(String, String)>,
}

pub struct SectionCommandService {
    repo: Arc<dyn SectionConfigRepository>,
}

impl SectionCommandService {
    pub fn new(repo: Arc<dyn SectionConfigRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_section(
        &self,
        command: CreateSectionCommand,
    ) -> ApplicationResult<SectionConfigDto> {
        let mut titles = TranslationSet::new();
        for (language, title) in command.titles {
            titles.insert(LanguageCode::new(language)?, SectionTitle::new(title)?);
        }

        let created = self
            .repo
            .insert(NewSectionConfig {
                namespace: command.namespace,
                titles,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn set_title(
        &self,
        id: i64,
        language: impl Into<String>,
        title: impl Into<String>,
    ) -> ApplicationResult<SectionConfigDto> {
        let id = SectionConfigId::new(id)?;
        let language = LanguageCode::new(language)?;
        let title = SectionTitle::new(title)?;
        let updated = self.repo.set_title(id, &language, title).await?;
        Ok(updated.into())
    }
}
