//! Page components for different routes in the application.

pub mod datasets;
pub mod not_found;

pub use datasets::*;
pub use not_found::*;
