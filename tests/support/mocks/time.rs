// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use gazette_core::application::ports::time::Clock;
use std::sync::Arc;

/// Clock pinned to one instant.
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self { now })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
