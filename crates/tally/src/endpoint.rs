//! Endpoint names for the mock data API.
//!
//! An [`Endpoint`] names one JSON resource served under `/api/{name}.json`.
//! Names are validated once on construction, so a request path built from an
//! endpoint can never escape the `api` directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::Dataset;

/// Directory prefix shared by every mock resource.
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("Endpoint name is empty")]
    Empty,
    #[error("Endpoint name {name:?} contains invalid character {found:?}")]
    InvalidCharacter { name: String, found: char },
}

/// A validated resource identifier, e.g. `sales`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    name: String,
}

// Serialize as just the name
impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.name.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

fn is_valid_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Endpoint {
    /// Creates a new endpoint from a resource name.
    ///
    /// # Example
    /// ```
    /// use tally::endpoint::Endpoint;
    ///
    /// let endpoint = Endpoint::new("sales").unwrap();
    /// assert_eq!(endpoint.as_str(), "sales");
    /// assert!(Endpoint::new("").is_err());
    /// assert!(Endpoint::new("../secrets").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, EndpointError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EndpointError::Empty);
        }
        if let Some(found) = name.chars().find(|c| !is_valid_char(*c)) {
            return Err(EndpointError::InvalidCharacter { name, found });
        }
        Ok(Self { name })
    }

    /// Parses the file name of a mock resource (`sales.json`) back into an endpoint.
    pub fn from_file_name(file_name: &str) -> Result<Self, EndpointError> {
        let name = file_name.strip_suffix(".json").unwrap_or(file_name);
        Self::new(name)
    }

    /// Returns the resource name.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The file name of the resource inside the api directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Builds the request path of the resource.
    ///
    /// # Example
    /// ```
    /// use tally::endpoint::Endpoint;
    ///
    /// let endpoint = Endpoint::new("orders").unwrap();
    /// assert_eq!(endpoint.path(), "/api/orders.json");
    /// ```
    pub fn path(&self) -> String {
        format!("{API_PREFIX}/{}", self.file_name())
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Endpoint({})", self.name)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = EndpointError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Endpoint {
    type Error = EndpointError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Dataset> for Endpoint {
    fn from(dataset: Dataset) -> Self {
        Self {
            name: dataset.as_str().to_string(),
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_shape() {
        let endpoint = Endpoint::new("sales").unwrap();
        assert_eq!(endpoint.path(), "/api/sales.json");
        assert_eq!(endpoint.file_name(), "sales.json");
        assert_eq!(endpoint.to_string(), "sales");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Endpoint::new(""), Err(EndpointError::Empty));
    }

    #[test]
    fn test_rejects_path_characters() {
        for name in ["../etc/passwd", "a/b", "sales.json", "with space", "%2e%2e"] {
            assert!(
                matches!(
                    Endpoint::new(name),
                    Err(EndpointError::InvalidCharacter { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_identifiers() {
        for name in ["sales", "stock-levels", "orders_2024", "A1"] {
            assert!(Endpoint::new(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_from_file_name() {
        let endpoint = Endpoint::from_file_name("incomes.json").unwrap();
        assert_eq!(endpoint.as_str(), "incomes");
        assert!(Endpoint::from_file_name(".json").is_err());
    }

    #[test]
    fn test_from_dataset() {
        let endpoint: Endpoint = Dataset::Stocks.into();
        assert_eq!(endpoint.path(), "/api/stocks.json");
    }

    #[test]
    fn test_serde() {
        let original = Endpoint::new("orders").unwrap();

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "\"orders\"");

        let deserialized: Endpoint = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);

        let invalid: Result<Endpoint, _> = serde_json::from_str("\"../x\"");
        assert!(invalid.is_err());
    }
}
