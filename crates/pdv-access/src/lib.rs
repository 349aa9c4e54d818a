//! # pdv-access: Role-Based Access Control for the PDV back office
//!
//! A static, declarative permission model:
//! - **Statement registry** (closed `resource -> actions` vocabulary)
//! - **Role composition** (base role + per-resource overrides)
//! - **Access controller** (pure `has_permission` checks)
//! - **Standard catalog** (platform and organization roles)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  StatementRegistry (per scope)               │
//! │  product: [view, create, update-price, ...]  │
//! └─────────────────┬───────────────────────────┘
//!                   │ validates grants
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  RoleComposer                                │
//! │  base grants + overrides (replace, not merge)│
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  AccessController                            │
//! │  has_permission(role, resource, action)      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Role Universes
//!
//! | Scope        | Roles                                                        |
//! |--------------|--------------------------------------------------------------|
//! | Platform     | superAdmin, user                                             |
//! | Organization | owner, manager, salesperson, operator, cashier, finance, shipping, customer |
//!
//! Platform roles manage tenants; they have no grants on tenant resources
//! such as `product`. Organization roles only make sense with an active
//! organization.
//!
//! ## Examples
//!
//! ### Standard Model
//!
//! ```
//! use pdv_access::{AccessModel, OrganizationRole, PlatformRole};
//! use pdv_types::Scope;
//!
//! let model = AccessModel::standard()?;
//!
//! let operator = model.organization_role(OrganizationRole::Operator).unwrap();
//! assert!(!model.organization().has_permission(operator, "order", "cancel"));
//!
//! let super_admin = model.platform_role(PlatformRole::SuperAdmin).unwrap();
//! assert!(!model.controller(Scope::Platform).has_permission(super_admin, "product", "view"));
//! # Ok::<(), pdv_access::AccessError>(())
//! ```
//!
//! ### Custom Roles
//!
//! ```
//! use pdv_access::{AccessController, AccessError, StatementRegistry};
//! use pdv_types::Scope;
//!
//! let registry = StatementRegistry::from_table(
//!     Scope::Organization,
//!     &[("cart", &["view", "create", "update", "delete", "checkout"])],
//! )?;
//!
//! let ac = AccessController::builder(registry)
//!     .role("customer", None, &[("cart", &["view", "create", "update", "delete", "checkout"])])?
//!     .build();
//!
//! let customer = ac.role("customer").unwrap();
//! assert!(ac.has_permission(customer, "cart", "checkout"));
//! assert!(!ac.has_permission(customer, "cart", "delete-other-users-cart"));
//!
//! // Grants outside the vocabulary fail while composing, not while checking.
//! let err = ac.new_role("broken", None, &[("cart", &["refund"])]).unwrap_err();
//! assert!(matches!(err, AccessError::InvalidGrant { .. }));
//! # Ok::<(), AccessError>(())
//! ```

pub mod catalog;
pub mod controller;
pub mod error;
pub mod model;
pub mod permissions;
pub mod roles;
pub mod statements;

// Re-export commonly used types
pub use catalog::{OrganizationRole, ParseRoleError, PlatformRole};
pub use controller::{AccessController, ControllerBuilder};
pub use error::{AccessError, Result};
pub use model::AccessModel;
pub use permissions::{ParsePermissionError, Permission};
pub use roles::{GrantTable, Overrides, Role, RoleComposer};
pub use statements::{RegistryBuilder, Statement, StatementRegistry, StatementTable};

#[cfg(test)]
mod tests;
