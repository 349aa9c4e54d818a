//! Access controller.
//!
//! Binds one [`StatementRegistry`] to its named roles and answers permission
//! checks. Checks are pure lookups over immutable data: no I/O, no locking,
//! no errors. Anything unknown (resource, action, role from another scope)
//! is simply "not permitted".

use crate::error::{AccessError, Result};
use crate::permissions::Permission;
use crate::roles::{Overrides, Role, RoleComposer};
use crate::statements::StatementRegistry;
use pdv_types::Scope;
use tracing::{debug, trace};

/// Single point of truth for one role universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessController {
    registry: StatementRegistry,
    roles: Vec<Role>,
}

impl AccessController {
    /// Starts a controller over a frozen registry.
    pub fn builder(registry: StatementRegistry) -> ControllerBuilder {
        ControllerBuilder {
            registry,
            roles: Vec::new(),
        }
    }

    pub fn scope(&self) -> Scope {
        self.registry.scope()
    }

    pub fn registry(&self) -> &StatementRegistry {
        &self.registry
    }

    /// Looks up a registered role by name.
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name() == name)
    }

    /// Registered roles in registration order.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    /// Mints a new role against this controller's registry.
    ///
    /// The role is not registered; it is returned to the caller.
    pub fn new_role(
        &self,
        name: impl Into<String>,
        base: Option<&Role>,
        overrides: Overrides<'_>,
    ) -> Result<Role> {
        RoleComposer::new(&self.registry).compose(name, base, overrides)
    }

    /// Returns whether `role` may perform `action` on `resource`.
    ///
    /// True iff the resource has an entry in the role's grant table and the
    /// action is in that entry. Unregistered resources or actions, and roles
    /// from another scope, yield `false`.
    pub fn has_permission(&self, role: &Role, resource: &str, action: &str) -> bool {
        if role.scope() != self.scope() {
            trace!(
                role = %role.name(),
                role_scope = %role.scope(),
                scope = %self.scope(),
                "Role checked against foreign scope"
            );
            return false;
        }

        role.is_granted(resource, action)
    }

    /// Returns whether at least one of `actions` is granted.
    ///
    /// An empty action list is never satisfied.
    pub fn has_any_permission(&self, role: &Role, resource: &str, actions: &[&str]) -> bool {
        actions
            .iter()
            .any(|action| self.has_permission(role, resource, action))
    }

    /// Returns whether every one of `actions` is granted.
    ///
    /// An empty action list is never satisfied.
    pub fn has_all_permissions(&self, role: &Role, resource: &str, actions: &[&str]) -> bool {
        !actions.is_empty()
            && actions
                .iter()
                .all(|action| self.has_permission(role, resource, action))
    }

    /// Checks a [`Permission`] value.
    pub fn check(&self, role: &Role, permission: &Permission) -> bool {
        self.has_permission(role, &permission.resource, &permission.action)
    }
}

/// Registers named roles against a registry before freezing the controller.
#[derive(Debug)]
pub struct ControllerBuilder {
    registry: StatementRegistry,
    roles: Vec<Role>,
}

impl ControllerBuilder {
    /// Composes and registers a role.
    ///
    /// `base`, when given, names a role registered earlier on this builder.
    ///
    /// # Errors
    ///
    /// - [`AccessError::DuplicateRole`] if `name` is already registered
    /// - [`AccessError::UnknownRole`] if `base` is not registered yet
    /// - any composition error from [`RoleComposer::compose`]
    pub fn role(mut self, name: &str, base: Option<&str>, overrides: Overrides<'_>) -> Result<Self> {
        if self.roles.iter().any(|r| r.name() == name) {
            return Err(AccessError::DuplicateRole {
                role: name.to_string(),
            });
        }

        let base = match base {
            Some(base_name) => Some(
                self.roles
                    .iter()
                    .find(|r| r.name() == base_name)
                    .ok_or_else(|| AccessError::UnknownRole {
                        scope: self.registry.scope(),
                        role: base_name.to_string(),
                    })?,
            ),
            None => None,
        };

        let role = RoleComposer::new(&self.registry).compose(name, base, overrides)?;
        self.roles.push(role);
        Ok(self)
    }

    /// Freezes the controller.
    pub fn build(self) -> AccessController {
        debug!(
            scope = %self.registry.scope(),
            roles = self.roles.len(),
            "Access controller built"
        );

        AccessController {
            registry: self.registry,
            roles: self.roles,
        }
    }
}
