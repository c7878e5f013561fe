//! # Event Space Testing
//!
//! Testing utilities for Event Space.
//!
//! This crate provides:
//! - [`InMemoryEventStore`]: a `HashMap`-backed `EventStore` with an outage switch
//! - [`fixtures`]: ready-made drafts and events
//! - [`init_test_tracing`]: test-harness log output
//! - [`capture_logs`]: collect log lines to assert on
//!
//! ## Example
//!
//! ```ignore
//! use event_space_core::EventStore;
//! use event_space_testing::{InMemoryEventStore, fixtures};
//!
//! #[tokio::test]
//! async fn booking_round_trip() {
//!     let store = InMemoryEventStore::new();
//!     let created = store.create(fixtures::launch_party()).await.unwrap();
//!     assert_eq!(store.get(created.id).await.unwrap(), created);
//! }
//! ```

pub mod event_store_mock;
pub mod fixtures;
pub mod logs;

pub use event_store_mock::InMemoryEventStore;
pub use logs::{CapturedLogs, capture_logs};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
/// Honours `RUST_LOG`, defaulting to `debug`.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
