//! Custom hooks shared by the views.

pub mod use_api;

pub use use_api::*;
