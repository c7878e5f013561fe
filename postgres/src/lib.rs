//! `PostgreSQL` event store implementation for Event Space.
//!
//! This crate provides [`PostgresEventStore`], the production implementation
//! of the `EventStore` trait from `event-space-core`. It uses sqlx with:
//!
//! - Typed, NOT NULL columns so a partial record cannot exist
//! - Single-statement writes (partial updates via `COALESCE`)
//! - Connection pooling with a bounded connect timeout
//! - Idempotent table creation at start-up
//!
//! # Example
//!
//! ```ignore
//! use event_space_postgres::{PostgresConfig, PostgresEventStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PostgresEventStore::connect(&PostgresConfig::new("postgres://localhost/events")).await?;
//!     store.migrate().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod event_store;

pub use config::PostgresConfig;
pub use event_store::PostgresEventStore;
