//! The shared library for Tally, a Rust-based dashboard over mock sales data.
//!
//! This library provides the pieces used by both the frontend and the backend
//! of the Tally application: the endpoint type, the API client, the request
//! state machine behind the data-fetch helper, error types and logging.

pub mod api;
pub mod config;
pub mod data;
pub mod endpoint;
pub mod errors;
pub mod fetch;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
