//! Data structures used between the frontend and backend of the Tally application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mock datasets the dashboard knows about, one per page.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Incomes,
    Orders,
    Sales,
    Stocks,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::Incomes,
        Dataset::Orders,
        Dataset::Sales,
        Dataset::Stocks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Incomes => "incomes",
            Dataset::Orders => "orders",
            Dataset::Sales => "sales",
            Dataset::Stocks => "stocks",
        }
    }

    /// Human readable title for page headings.
    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Incomes => "Incomes",
            Dataset::Orders => "Orders",
            Dataset::Sales => "Sales",
            Dataset::Stocks => "Stocks",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Response body of the backend health check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub datasets: Vec<String>,
}
