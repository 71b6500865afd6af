//! Context providers for shared application services.

pub mod api;

pub use api::ApiProvider;
