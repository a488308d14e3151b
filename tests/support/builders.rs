// tests/support/builders.rs
use crate::support::mocks::{
    ConflictInjectingWriter, FixedClock, InMemoryArticleStore, InMemoryAuthorProfiles,
    InMemorySectionConfigs, StaticUserDirectory,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use gazette_core::application::commands::articles::CreateArticleCommandBuilder;
use gazette_core::application::commands::CreateArticleCommand;
use gazette_core::application::services::ApplicationServices;
use gazette_core::domain::article::repository::ArticleWriteRepository;
use gazette_core::domain::language::LanguageSet;
use gazette_core::infrastructure::util::{DefaultSlugGenerator, PathUrlReverser};
use std::sync::Arc;

pub struct Harness {
    pub store: Arc<InMemoryArticleStore>,
    pub authors: Arc<InMemoryAuthorProfiles>,
    pub sections: Arc<InMemorySectionConfigs>,
    pub services: ApplicationServices,
}

pub fn harness() -> Harness {
    harness_with_injected_conflicts(0)
}

/// Harness whose write repository fails the first `conflicts` writes with a
/// uniqueness conflict, simulating concurrent writers.
pub fn harness_with_injected_conflicts(conflicts: usize) -> Harness {
    crate::support::init_tracing();
    let store = InMemoryArticleStore::new();
    let authors = InMemoryAuthorProfiles::new();
    let sections = InMemorySectionConfigs::new();

    let write_repo: Arc<dyn ArticleWriteRepository> = if conflicts > 0 {
        ConflictInjectingWriter::new(store.clone(), conflicts)
    } else {
        store.clone()
    };

    let services = ApplicationServices::new(
        LanguageSet::from_codes(["en", "de"]).unwrap(),
        write_repo,
        store.clone(),
        store.clone(),
        authors.clone(),
        sections.clone(),
        StaticUserDirectory::new(&[(1, "Alice Writer"), (2, "Bob Editor")]),
        Arc::new(PathUrlReverser),
        FixedClock::new(day(0)),
        Arc::new(DefaultSlugGenerator),
    );

    Harness {
        store,
        authors,
        sections,
        services,
    }
}

/// Stable timeline for publishing dates: day 0 plus `offset` days.
pub fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + Duration::days(offset)
}

pub fn article(title: &str, language: &str) -> CreateArticleCommandBuilder {
    CreateArticleCommand::builder()
        .owner(1)
        .section(1)
        .language(language)
        .title(title)
        .publishing_date(day(0))
}
