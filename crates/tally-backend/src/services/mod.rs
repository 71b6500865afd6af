//! Backend services for the mock datasets.
//!
//! This module provides the storage abstraction the API handlers read from,
//! and the file-backed implementation used when serving `public/api`.

pub mod datasets;

pub use datasets::*;
