//! Shared error types and utilities for the tally project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

pub use crate::api::ApiError;
pub use crate::endpoint::EndpointError;
pub use crate::fetch::FetchFailure;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}
