// src/domain/widget.rs
use crate::domain::errors::{DomainError, DomainResult};

const DEFAULT_LATEST_ENTRIES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub i64);

impl WidgetId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("widget id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<WidgetId> for i64 {
    fn from(value: WidgetId) -> Self {
        value.0
    }
}

/// Settings for one placed "latest entries" widget: nothing but how many
/// recent articles it shows. The widget itself is read-only; rendering pulls
/// articles through the query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestEntriesWidget {
    pub id: Option<WidgetId>,
    pub latest_entries: u32,
}

impl LatestEntriesWidget {
    pub fn new(latest_entries: u32) -> Self {
        Self {
            id: None,
            latest_entries,
        }
    }

    pub fn latest_entries(&self) -> u32 {
        self.latest_entries
    }
}

impl Default for LatestEntriesWidget {
    fn default() -> Self {
        Self::new(DEFAULT_LATEST_ENTRIES)
    }
}
