//! # pdv-types: Core types for PDV access control
//!
//! Shared types used across the PDV workspace:
//! - Role universes ([`Scope`])
//! - Identity IDs ([`UserId`], [`OrganizationId`])

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Scope
// ============================================================================

/// The role universe a permission check belongs to.
///
/// Platform roles govern tenant management (organizations, users, global
/// metrics). Organization roles govern one tenant's operational data and are
/// meaningless without an active organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    Platform,
    Organization,
}

impl Scope {
    /// All scopes, platform first.
    pub const ALL: [Scope; 2] = [Scope::Platform, Scope::Organization];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Platform => "platform",
            Scope::Organization => "organization",
        }
    }

    /// Returns whether checks in this scope need an active organization.
    pub fn requires_active_organization(&self) -> bool {
        matches!(self, Scope::Organization)
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown scope name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScopeError(pub String);

impl Display for ParseScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scope '{}' (expected platform or organization)", self.0)
    }
}

impl std::error::Error for ParseScopeError {}

impl FromStr for Scope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "platform" => Ok(Scope::Platform),
            "organization" | "org" => Ok(Scope::Organization),
            other => Err(ParseScopeError(other.to_string())),
        }
    }
}

// ============================================================================
// Identity IDs
// ============================================================================

/// Identifier of an authenticated user, as issued by the session service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a tenant organization.
///
/// Used to scope organization roles and to build organization-prefixed
/// routes such as `/{organization_id}/forbidden`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrganizationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
