//! Construction errors for registries, roles and controllers.
//!
//! Every variant describes a configuration bug. They surface while the
//! permission model is being built at startup; a permission check itself
//! never produces one.

use pdv_types::Scope;
use thiserror::Error;

/// Error type for building the permission model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// A resource name is not registered in the statement registry.
    #[error("Unknown resource '{resource}' in the {scope} registry")]
    UnknownResource { scope: Scope, resource: String },

    /// A role grants an action outside the resource's vocabulary.
    #[error("Invalid grant: '{action}' is not an action of resource '{resource}'")]
    InvalidGrant { resource: String, action: String },

    /// A resource was defined twice.
    #[error("Resource '{resource}' is already registered")]
    DuplicateResource { resource: String },

    /// A resource was defined without any action.
    #[error("Resource '{resource}' must define at least one action")]
    EmptyVocabulary { resource: String },

    /// An action was listed twice in one resource vocabulary.
    #[error("Action '{action}' is listed twice for resource '{resource}'")]
    DuplicateAction { resource: String, action: String },

    /// An override list names the same resource more than once.
    #[error("Role '{role}' overrides resource '{resource}' more than once")]
    DuplicateOverride { role: String, resource: String },

    /// A role name was registered twice in one controller.
    #[error("Role '{role}' is already registered")]
    DuplicateRole { role: String },

    /// A base role was referenced before it was registered.
    #[error("Unknown role '{role}' in the {scope} controller")]
    UnknownRole { scope: Scope, role: String },

    /// A role from one universe was used where the other was expected.
    #[error("Role '{role}' belongs to the {found} scope, expected {expected}")]
    ScopeMismatch {
        role: String,
        expected: Scope,
        found: Scope,
    },
}

/// Result type for permission model construction.
pub type Result<T> = std::result::Result<T, AccessError>;
