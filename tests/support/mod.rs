#![allow(dead_code)]

pub mod builders;
pub mod mocks;

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Install the test subscriber once per binary; RUST_LOG controls verbosity.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
