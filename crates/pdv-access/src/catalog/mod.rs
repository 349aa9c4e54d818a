//! Standard PDV permission catalog.
//!
//! Static statement and role tables for both role universes, plus typed
//! role identifiers. Role identifiers are their own types so that a role
//! named `cashier` is never confused with the `cashier` resource.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod organization;
pub mod platform;

/// Role a member holds inside one organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrganizationRole {
    Owner,
    Manager,
    Salesperson,
    Operator,
    Cashier,
    Finance,
    Shipping,
    Customer,
}

impl OrganizationRole {
    pub const ALL: [OrganizationRole; 8] = [
        OrganizationRole::Owner,
        OrganizationRole::Manager,
        OrganizationRole::Salesperson,
        OrganizationRole::Operator,
        OrganizationRole::Cashier,
        OrganizationRole::Finance,
        OrganizationRole::Shipping,
        OrganizationRole::Customer,
    ];

    /// Role name as persisted in membership records.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationRole::Owner => "owner",
            OrganizationRole::Manager => "manager",
            OrganizationRole::Salesperson => "salesperson",
            OrganizationRole::Operator => "operator",
            OrganizationRole::Cashier => "cashier",
            OrganizationRole::Finance => "finance",
            OrganizationRole::Shipping => "shipping",
            OrganizationRole::Customer => "customer",
        }
    }
}

/// Role a user holds on the platform itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlatformRole {
    SuperAdmin,
    User,
}

impl PlatformRole {
    pub const ALL: [PlatformRole; 2] = [PlatformRole::SuperAdmin, PlatformRole::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformRole::SuperAdmin => "superAdmin",
            PlatformRole::User => "user",
        }
    }
}

/// Error returned when a persisted role name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for OrganizationRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrganizationRole::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

impl FromStr for PlatformRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superAdmin" | "admin" => Ok(PlatformRole::SuperAdmin),
            "user" => Ok(PlatformRole::User),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl Display for OrganizationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for PlatformRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
