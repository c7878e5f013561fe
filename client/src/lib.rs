//! Typed HTTP client for the Event Space API.
//!
//! ```no_run
//! use event_space_client::{EventSpaceClient, view};
//!
//! # async fn example() -> Result<(), event_space_client::ClientError> {
//! let client = EventSpaceClient::new("http://localhost:5000");
//! let events = client.list().await?;
//! for event in view::latest(&events, view::PREVIEW_LEN) {
//!     println!("{} in {}", view::title_case(&event.name), event.hall);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod view;

pub use client::EventSpaceClient;
pub use error::ClientError;
