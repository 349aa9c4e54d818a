//! Roles and role composition.
//!
//! A [`Role`] is a named grant table `resource -> {action}` whose entries
//! are subsets of the registry vocabulary. Every registered resource has an
//! entry; "no access" is an explicit empty set so denials stay auditable.
//!
//! Roles are built by [`RoleComposer::compose`]: seed the table from a base
//! role (or all-empty), then replace the grant set of each overridden
//! resource. The merge happens once; there is no live delegation to the base.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{AccessError, Result};
use crate::statements::StatementRegistry;
use pdv_types::Scope;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-resource overrides used to compose a role.
///
/// Written as static tables:
///
/// ```
/// use pdv_access::Overrides;
///
/// const CUSTOMER: Overrides<'static> = &[
///     ("cart", &["view", "create", "update", "delete", "checkout"]),
///     ("order", &["view"]),
/// ];
/// # assert_eq!(CUSTOMER.len(), 2);
/// ```
pub type Overrides<'a> = &'a [(&'a str, &'a [&'a str])];

/// Grant table of a role.
///
/// Compares by content: two tables are equal when every resource maps to
/// the same action set, regardless of the order grants were declared in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantTable(BTreeMap<String, BTreeSet<String>>);

impl GrantTable {
    /// Table with an empty grant set for every resource in the registry.
    pub fn empty_for(registry: &StatementRegistry) -> Self {
        Self(
            registry
                .resources()
                .map(|r| (r.to_string(), BTreeSet::new()))
                .collect(),
        )
    }

    /// Returns the grant set for a resource, if the resource has an entry.
    pub fn get(&self, resource: &str) -> Option<&BTreeSet<String>> {
        self.0.get(resource)
    }

    /// Returns whether `action` is granted on `resource`.
    pub fn is_granted(&self, resource: &str, action: &str) -> bool {
        self.0
            .get(resource)
            .is_some_and(|actions| actions.contains(action))
    }

    /// Iterates `(resource, actions)` in resource-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0.iter().map(|(r, a)| (r.as_str(), a))
    }

    /// Total number of granted `(resource, action)` pairs.
    pub fn granted_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    fn replace(&mut self, resource: &str, actions: BTreeSet<String>) {
        self.0.insert(resource.to_string(), actions);
    }
}

/// A named identity template within one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    name: String,
    scope: Scope,
    grants: GrantTable,
}

impl Role {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn grant_table(&self) -> &GrantTable {
        &self.grants
    }

    /// Returns the grant set for a resource.
    ///
    /// `None` means the resource is not part of this role's registry; an
    /// empty set means it is registered and explicitly denied.
    pub fn grants(&self, resource: &str) -> Option<&BTreeSet<String>> {
        self.grants.get(resource)
    }

    /// Returns whether the role grants `action` on `resource`.
    pub fn is_granted(&self, resource: &str, action: &str) -> bool {
        self.grants.is_granted(resource, action)
    }
}

/// Composes roles against one statement registry.
#[derive(Debug, Clone, Copy)]
pub struct RoleComposer<'r> {
    registry: &'r StatementRegistry,
}

impl<'r> RoleComposer<'r> {
    pub fn new(registry: &'r StatementRegistry) -> Self {
        Self { registry }
    }

    /// Composes a role from an optional base and per-resource overrides.
    ///
    /// Each override replaces the base's grant set for that resource; it
    /// never unions with it. Resources without an override keep the base's
    /// grants, or stay empty when there is no base.
    ///
    /// # Errors
    ///
    /// - [`AccessError::ScopeMismatch`] if `base` belongs to another scope
    /// - [`AccessError::UnknownResource`] for an override key not in the registry
    /// - [`AccessError::InvalidGrant`] for an action outside the vocabulary
    /// - [`AccessError::DuplicateOverride`] if a resource is overridden twice
    pub fn compose(
        &self,
        name: impl Into<String>,
        base: Option<&Role>,
        overrides: Overrides<'_>,
    ) -> Result<Role> {
        let name = name.into();
        let scope = self.registry.scope();

        let mut grants = match base {
            Some(base) if base.scope != scope => {
                return Err(AccessError::ScopeMismatch {
                    role: base.name.clone(),
                    expected: scope,
                    found: base.scope,
                });
            }
            Some(base) => base.grants.clone(),
            None => GrantTable::empty_for(self.registry),
        };

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for (resource, actions) in overrides {
            if !seen.insert(resource) {
                return Err(AccessError::DuplicateOverride {
                    role: name,
                    resource: (*resource).to_string(),
                });
            }

            let vocabulary = self.registry.vocabulary(resource)?;
            let mut granted = BTreeSet::new();
            for action in *actions {
                if !vocabulary.iter().any(|a| a == action) {
                    return Err(AccessError::InvalidGrant {
                        resource: (*resource).to_string(),
                        action: (*action).to_string(),
                    });
                }
                granted.insert((*action).to_string());
            }

            grants.replace(resource, granted);
        }

        debug!(
            role = %name,
            scope = %scope,
            base = base.map(Role::name),
            overrides = overrides.len(),
            granted = grants.granted_count(),
            "Role composed"
        );

        Ok(Role {
            name,
            scope,
            grants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StatementRegistry {
        StatementRegistry::from_table(
            Scope::Organization,
            &[
                ("product", &["view", "create", "update", "delete"]),
                ("order", &["view", "create", "cancel"]),
                ("finance", &["view", "reconcile"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_compose_without_base_starts_empty() {
        let registry = registry();
        let role = RoleComposer::new(&registry)
            .compose("viewer", None, &[("product", &["view"])])
            .unwrap();

        assert_eq!(role.name(), "viewer");
        assert_eq!(role.scope(), Scope::Organization);
        assert!(role.is_granted("product", "view"));

        // Every registered resource has an entry, empty when not overridden.
        assert!(role.grants("order").unwrap().is_empty());
        assert!(role.grants("finance").unwrap().is_empty());
        assert!(role.grants("cart").is_none());
    }

    #[test]
    fn test_override_replaces_base_grants() {
        let registry = registry();
        let composer = RoleComposer::new(&registry);

        let owner = composer
            .compose(
                "owner",
                None,
                &[
                    ("product", &["view", "create", "update", "delete"]),
                    ("finance", &["view", "reconcile"]),
                ],
            )
            .unwrap();

        let manager = composer
            .compose("manager", Some(&owner), &[("finance", &["view"])])
            .unwrap();

        // Replaced, not merged.
        assert!(manager.is_granted("finance", "view"));
        assert!(!manager.is_granted("finance", "reconcile"));

        // Untouched resources are inherited.
        assert_eq!(manager.grants("product"), owner.grants("product"));
    }

    #[test]
    fn test_override_with_empty_list_denies_resource() {
        let registry = registry();
        let composer = RoleComposer::new(&registry);

        let base = composer
            .compose("base", None, &[("order", &["view", "cancel"])])
            .unwrap();
        let role = composer.compose("locked", Some(&base), &[("order", &[])]).unwrap();

        assert!(role.grants("order").unwrap().is_empty());
    }

    #[test]
    fn test_compose_rejects_action_outside_vocabulary() {
        let registry = registry();
        let result = RoleComposer::new(&registry).compose(
            "broken",
            None,
            &[("order", &["view", "refund"])],
        );

        match result {
            Err(AccessError::InvalidGrant { resource, action }) => {
                assert_eq!(resource, "order");
                assert_eq!(action, "refund");
            }
            other => panic!("Expected InvalidGrant, got {other:?}"),
        }
    }

    #[test]
    fn test_compose_rejects_unknown_resource() {
        let registry = registry();
        let result =
            RoleComposer::new(&registry).compose("broken", None, &[("shipping", &["view"])]);

        assert!(matches!(
            result,
            Err(AccessError::UnknownResource { resource, .. }) if resource == "shipping"
        ));
    }

    #[test]
    fn test_compose_rejects_duplicate_override() {
        let registry = registry();
        let result = RoleComposer::new(&registry).compose(
            "broken",
            None,
            &[("order", &["view"]), ("order", &["cancel"])],
        );

        assert!(matches!(result, Err(AccessError::DuplicateOverride { .. })));
    }

    #[test]
    fn test_compose_rejects_base_from_other_scope() {
        let platform = StatementRegistry::from_table(Scope::Platform, &[("user", &["list"])])
            .unwrap();
        let super_admin = RoleComposer::new(&platform)
            .compose("superAdmin", None, &[("user", &["list"])])
            .unwrap();

        let registry = registry();
        let result = RoleComposer::new(&registry).compose("owner", Some(&super_admin), &[]);

        assert!(matches!(
            result,
            Err(AccessError::ScopeMismatch {
                expected: Scope::Organization,
                found: Scope::Platform,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_actions_in_override_collapse() {
        let registry = registry();
        let role = RoleComposer::new(&registry)
            .compose("r", None, &[("order", &["view", "view", "cancel"])])
            .unwrap();

        assert_eq!(role.grants("order").unwrap().len(), 2);
    }

    #[test]
    fn test_grant_table_ignores_declaration_order() {
        let registry = registry();
        let composer = RoleComposer::new(&registry);

        let a = composer
            .compose(
                "r",
                None,
                &[("product", &["view", "update"]), ("order", &["cancel", "view"])],
            )
            .unwrap();
        let b = composer
            .compose(
                "r",
                None,
                &[("order", &["view", "cancel"]), ("product", &["update", "view"])],
            )
            .unwrap();

        assert_eq!(a, b);
    }
}
