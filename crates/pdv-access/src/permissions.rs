//! Permission values.
//!
//! A [`Permission`] names one `(resource, action)` pair, the unit that call
//! sites ask the controller about. The textual form is `resource:action`,
//! e.g. `product:update-price`.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single `(resource, action)` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub resource: String,
    pub action: String,
}

impl Permission {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

/// Error returned when a permission string is not `resource:action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePermissionError(pub String);

impl Display for ParsePermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 'resource:action', got '{}'", self.0)
    }
}

impl std::error::Error for ParsePermissionError {}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((resource, action)) if !resource.is_empty() && !action.is_empty() => {
                Ok(Self::new(resource, action))
            }
            _ => Err(ParsePermissionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_display_round_trip() {
        let permission = Permission::new("product", "update-price");
        assert_eq!(permission.to_string(), "product:update-price");
        assert_eq!(
            "product:update-price".parse::<Permission>().unwrap(),
            permission
        );
    }

    #[test]
    fn test_permission_parse_rejects_malformed() {
        assert!("product".parse::<Permission>().is_err());
        assert!(":view".parse::<Permission>().is_err());
        assert!("product:".parse::<Permission>().is_err());
    }
}
