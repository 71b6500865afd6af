//! Reusable UI components for the Tally frontend.
//!
//! Contains the dataset view shared by every page, the table that renders a
//! JSON payload, loading and error states, and the navigation bar.

pub mod data_table;
pub mod dataset_view;
pub mod nav_bar;
pub mod status;

pub use data_table::*;
pub use dataset_view::*;
pub use nav_bar::*;
pub use status::*;
