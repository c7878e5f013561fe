//! Axum HTTP API for Event Space.
//!
//! This crate is the imperative shell around `event-space-core`: it parses
//! requests, hands typed inputs to an [`EventStore`](event_space_core::EventStore)
//! and maps the outcome to a status code and JSON body.
//!
//! # Routes
//!
//! ```text
//! POST   /api/events        create      201 Event | 400
//! GET    /api/events        list        200 [Event]
//! GET    /api/events/:id    get         200 Event | 400 | 404
//! PUT    /api/events/:id    update      200 Event | 400 | 404
//! DELETE /api/events/:id    delete      200 {message} | 400 | 404
//! GET    /health            liveness    200
//! GET    /ready             readiness   200 | 503
//! ```
//!
//! Any store failure other than not-found becomes a 500. Every error body
//! has the shape `{"error": "...", "code": "..."}`.
//!
//! # Example
//!
//! ```ignore
//! use event_space_web::{AppState, build_router};
//! use std::sync::Arc;
//!
//! let app = build_router(AppState::new(Arc::new(store)));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{CorrelationId, EventIdParam, JsonBody};
pub use middleware::{CORRELATION_ID_HEADER, CorrelationIdLayer, correlation_id_layer};
pub use router::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
