//! Event Space server: configuration, keep-alive ping and process lifecycle.
//!
//! The `event-space` binary wires these together with the `PostgreSQL` store
//! and the HTTP router from `event-space-web`.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod keep_alive;
pub mod shutdown;

pub use config::{Config, ConfigError, KeepAliveConfig, ServerConfig, env_file};
pub use shutdown::shutdown_signal;
