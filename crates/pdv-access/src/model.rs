//! The complete permission model: one controller per role universe.
//!
//! Built once during startup, then shared read-only (typically behind an
//! `Arc`) with every request handler.

use crate::catalog::{OrganizationRole, PlatformRole, organization, platform};
use crate::controller::AccessController;
use crate::error::{AccessError, Result};
use crate::roles::Role;
use pdv_types::Scope;
use tracing::debug;

/// Platform and organization access controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessModel {
    platform: AccessController,
    organization: AccessController,
}

impl AccessModel {
    /// Pairs two controllers, checking each sits in its own scope.
    ///
    /// # Errors
    ///
    /// [`AccessError::ScopeMismatch`] if a controller was built over the
    /// wrong registry.
    pub fn new(platform: AccessController, organization: AccessController) -> Result<Self> {
        for (controller, expected) in [
            (&platform, Scope::Platform),
            (&organization, Scope::Organization),
        ] {
            if controller.scope() != expected {
                return Err(AccessError::ScopeMismatch {
                    role: "*".to_string(),
                    expected,
                    found: controller.scope(),
                });
            }
        }

        Ok(Self {
            platform,
            organization,
        })
    }

    /// Builds the standard PDV model from the static catalog.
    ///
    /// # Errors
    ///
    /// Any [`AccessError`] here is a bug in the catalog tables and must
    /// abort startup.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdv_access::{AccessModel, OrganizationRole};
    /// use pdv_types::Scope;
    ///
    /// let model = AccessModel::standard()?;
    /// let ac = model.controller(Scope::Organization);
    /// let owner = model.organization_role(OrganizationRole::Owner).unwrap();
    ///
    /// assert!(ac.has_permission(owner, "finance", "reconcile"));
    /// # Ok::<(), pdv_access::AccessError>(())
    /// ```
    pub fn standard() -> Result<Self> {
        let model = Self::new(platform::controller()?, organization::controller()?)?;

        debug!(
            platform_roles = model.platform.roles().count(),
            organization_roles = model.organization.roles().count(),
            "Access model initialized"
        );

        Ok(model)
    }

    /// Returns the controller for a scope.
    pub fn controller(&self, scope: Scope) -> &AccessController {
        match scope {
            Scope::Platform => &self.platform,
            Scope::Organization => &self.organization,
        }
    }

    pub fn platform(&self) -> &AccessController {
        &self.platform
    }

    pub fn organization(&self) -> &AccessController {
        &self.organization
    }

    pub fn organization_role(&self, role: OrganizationRole) -> Option<&Role> {
        self.organization.role(role.as_str())
    }

    pub fn platform_role(&self, role: PlatformRole) -> Option<&Role> {
        self.platform.role(role.as_str())
    }

    /// Looks up a role by persisted name within a scope.
    pub fn role(&self, scope: Scope, name: &str) -> Option<&Role> {
        self.controller(scope).role(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_model_has_every_typed_role() {
        let model = AccessModel::standard().unwrap();

        for role in OrganizationRole::ALL {
            let found = model.organization_role(role).unwrap();
            assert_eq!(found.scope(), Scope::Organization);
        }
        for role in PlatformRole::ALL {
            let found = model.platform_role(role).unwrap();
            assert_eq!(found.scope(), Scope::Platform);
        }
    }

    #[test]
    fn test_new_rejects_swapped_controllers() {
        let result = AccessModel::new(
            organization::controller().unwrap(),
            platform::controller().unwrap(),
        );

        assert!(matches!(result, Err(AccessError::ScopeMismatch { .. })));
    }

    #[test]
    fn test_controller_by_scope() {
        let model = AccessModel::standard().unwrap();

        assert_eq!(model.controller(Scope::Platform).scope(), Scope::Platform);
        assert_eq!(
            model.controller(Scope::Organization).scope(),
            Scope::Organization
        );
        assert!(model.role(Scope::Platform, "owner").is_none());
        assert!(model.role(Scope::Organization, "owner").is_some());
    }
}
