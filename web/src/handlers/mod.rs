//! HTTP handlers.
//!
//! - `events`: the `/api/events` CRUD endpoints
//! - `health`: liveness and readiness probes

pub mod events;
pub mod health;
