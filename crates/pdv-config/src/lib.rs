//! Configuration management for PDV access control
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (PDV_* prefix, `__` between nesting levels)
//! 2. pdv.local.toml (gitignored, local overrides)
//! 3. pdv.toml (git-tracked, project config)
//! 4. ~/.config/pdv/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! The permission model itself is not configurable here: statements and
//! roles are static and change only with a redeploy. This crate configures
//! the surroundings of a permission check (audit logging, where denied
//! requests are sent, the messages form actions return).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main PDV configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdvConfig {
    pub project: ProjectConfig,
    pub access: AccessConfig,
    pub routes: RoutesConfig,
    pub logging: LoggingConfig,
    pub messages: MessagesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "pdv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Log every guard decision (granted at info, denied at warn).
    pub audit_checks: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self { audit_checks: true }
    }
}

/// Redirect targets for page guards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub sign_in: String,
    /// Prefixed with `/{organization_id}` for organization-scoped denials.
    pub forbidden: String,
    pub select_organization: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            sign_in: "/sign-in".to_string(),
            forbidden: "/forbidden".to_string(),
            select_organization: "/organizations".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// User-facing texts returned by form-action guards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub not_authorized: String,
    pub sign_in_required: String,
    pub no_active_organization: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            not_authorized: "You are not allowed to perform this action.".to_string(),
            sign_in_required: "Sign in to continue.".to_string(),
            no_active_organization: "Select an organization to continue.".to_string(),
        }
    }
}

impl PdvConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Create a development configuration (verbose logging)
    pub fn development() -> Self {
        Self {
            logging: LoggingConfig {
                filter: "debug".to_string(),
            },
            ..Default::default()
        }
    }

    /// Check values that serde alone cannot reject
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, route) in [
            ("routes.sign_in", &self.routes.sign_in),
            ("routes.forbidden", &self.routes.forbidden),
            ("routes.select_organization", &self.routes.select_organization),
        ] {
            if !route.starts_with('/') {
                return Err(ConfigError::RelativeRoute {
                    key,
                    route: route.clone(),
                });
            }
        }

        for (key, message) in [
            ("messages.not_authorized", &self.messages.not_authorized),
            ("messages.sign_in_required", &self.messages.sign_in_required),
            (
                "messages.no_active_organization",
                &self.messages.no_active_organization,
            ),
        ] {
            if message.trim().is_empty() {
                return Err(ConfigError::EmptyValue { key });
            }
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                key: "logging.filter",
            });
        }

        Ok(())
    }
}
