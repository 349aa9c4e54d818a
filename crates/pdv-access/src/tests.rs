//! Catalog scenarios and composition properties.

use std::collections::BTreeSet;

use pdv_types::Scope;
use proptest::prelude::*;
use proptest::sample::subsequence;
use test_case::test_case;

use crate::catalog::{OrganizationRole, PlatformRole, organization, platform};
use crate::{AccessError, AccessModel, Overrides, RoleComposer};

fn model() -> AccessModel {
    AccessModel::standard().expect("standard catalog must build")
}

// ============================================================================
// Catalog Scenarios
// ============================================================================

#[test]
fn customer_cart_checkout_is_granted() {
    let model = model();
    let ac = model.organization();
    let customer = model.organization_role(OrganizationRole::Customer).unwrap();

    assert!(ac.has_permission(customer, "cart", "checkout"));
    // Not in the cart vocabulary at all: a plain "no".
    assert!(!ac.has_permission(customer, "cart", "delete-other-users-cart"));
}

#[test]
fn operator_cannot_cancel_orders() {
    let model = model();
    let operator = model.organization_role(OrganizationRole::Operator).unwrap();

    assert!(model.organization().has_permission(operator, "order", "view"));
    assert!(!model.organization().has_permission(operator, "order", "cancel"));
}

#[test]
fn only_owner_reconciles_between_owner_and_manager() {
    let model = model();
    let ac = model.organization();
    let owner = model.organization_role(OrganizationRole::Owner).unwrap();
    let manager = model.organization_role(OrganizationRole::Manager).unwrap();

    assert!(ac.has_permission(owner, "finance", "reconcile"));
    assert!(!ac.has_permission(manager, "finance", "reconcile"));
    assert!(ac.has_permission(manager, "finance", "export"));
}

#[test]
fn super_admin_cannot_touch_tenant_products() {
    let model = model();
    let super_admin = model.platform_role(PlatformRole::SuperAdmin).unwrap();

    assert!(super_admin.grants("product").is_none());
    for scope in Scope::ALL {
        assert!(!model.controller(scope).has_permission(super_admin, "product", "view"));
    }
    assert!(model.platform().has_permission(super_admin, "organization", "delete"));
}

#[test]
fn platform_user_has_explicitly_empty_grants() {
    let model = model();
    let user = model.platform_role(PlatformRole::User).unwrap();

    for resource in model.platform().registry().resources() {
        let grants = user.grants(resource).expect("every resource has an entry");
        assert!(grants.is_empty(), "{resource} should be empty");
    }
}

#[test]
fn manager_inherits_owner_catalog_grants() {
    let model = model();
    let owner = model.organization_role(OrganizationRole::Owner).unwrap();
    let manager = model.organization_role(OrganizationRole::Manager).unwrap();

    for resource in ["product", "order", "cashier", "shipping", "stock"] {
        assert_eq!(manager.grants(resource), owner.grants(resource), "{resource}");
    }
    assert!(!manager.is_granted("organization", "delete"));
    assert!(!manager.is_granted("member", "delete"));
}

#[test]
fn cashier_role_extends_salesperson_with_register() {
    let model = model();
    let salesperson = model
        .organization_role(OrganizationRole::Salesperson)
        .unwrap();
    let cashier = model.organization_role(OrganizationRole::Cashier).unwrap();

    assert_eq!(cashier.grants("cart"), salesperson.grants("cart"));
    assert!(cashier.is_granted("cashier", "open"));
    assert!(!salesperson.is_granted("cashier", "open"));
    assert!(!cashier.is_granted("cashier", "apply-discount-unlimited"));
}

#[test_case(OrganizationRole::Owner, "product", "update-price", true; "owner updates prices")]
#[test_case(OrganizationRole::Salesperson, "product", "update-price", false; "salesperson cannot")]
#[test_case(OrganizationRole::Manager, "cashier", "apply-discount-unlimited", true; "manager unlimited discount")]
#[test_case(OrganizationRole::Cashier, "cashier", "apply-discount", true; "cashier discount")]
#[test_case(OrganizationRole::Finance, "finance", "reconcile", true; "finance reconciles")]
#[test_case(OrganizationRole::Finance, "product", "view", false; "finance has no catalog")]
#[test_case(OrganizationRole::Shipping, "shipping", "dispatch", true; "shipping dispatches")]
#[test_case(OrganizationRole::Shipping, "order", "cancel", false; "shipping cannot cancel")]
#[test_case(OrganizationRole::Customer, "settings", "view", false; "customer has no settings")]
fn organization_role_matrix(role: OrganizationRole, resource: &str, action: &str, expected: bool) {
    let model = model();
    let role = model.organization_role(role).unwrap();

    assert_eq!(
        model.organization().has_permission(role, resource, action),
        expected
    );
}

#[test]
fn has_any_permission_accepts_equivalent_grants() {
    let model = model();
    let operator = model.organization_role(OrganizationRole::Operator).unwrap();

    assert!(
        model
            .organization()
            .has_any_permission(operator, "product", &["update-price", "update-stock"])
    );
    assert!(
        !model
            .organization()
            .has_any_permission(operator, "product", &["update-price", "delete"])
    );
}

#[test]
fn role_identifiers_are_distinct_from_resources() {
    let model = model();

    let cashier = model.organization_role(OrganizationRole::Cashier).unwrap();
    assert_eq!(cashier.name(), "cashier");
    assert!(model.organization().registry().statement("cashier").is_some());
}

// ============================================================================
// Properties
// ============================================================================

type OwnedOverrides = Vec<(String, Vec<String>)>;

fn with_overrides<T>(owned: &OwnedOverrides, f: impl FnOnce(Overrides<'_>) -> T) -> T {
    let actions: Vec<Vec<&str>> = owned
        .iter()
        .map(|(_, a)| a.iter().map(String::as_str).collect())
        .collect();
    let table: Vec<(&str, &[&str])> = owned
        .iter()
        .zip(&actions)
        .map(|((r, _), a)| (r.as_str(), a.as_slice()))
        .collect();
    f(&table)
}

/// Random subset of organization resources, each with a random subset of
/// its vocabulary.
fn overrides_strategy() -> impl Strategy<Value = OwnedOverrides> {
    let per_resource: Vec<_> = organization::STATEMENTS
        .iter()
        .map(|(resource, actions)| {
            let resource = (*resource).to_string();
            let actions: Vec<String> = actions.iter().map(|a| (*a).to_string()).collect();
            let len = actions.len();
            (any::<bool>(), subsequence(actions, 0..=len))
                .prop_map(move |(include, granted)| include.then(|| (resource.clone(), granted)))
        })
        .collect();

    per_resource.prop_map(|entries| entries.into_iter().flatten().collect())
}

#[test]
fn every_vocabulary_is_non_empty_and_duplicate_free() {
    for registry in [
        organization::registry().unwrap(),
        platform::registry().unwrap(),
    ] {
        for resource in registry.resources() {
            let vocabulary = registry.vocabulary(resource).unwrap();
            let unique: BTreeSet<&String> = vocabulary.iter().collect();
            assert!(!vocabulary.is_empty(), "{resource}");
            assert_eq!(unique.len(), vocabulary.len(), "{resource}");
        }
    }
}

proptest! {
    #[test]
    fn overrides_replace_and_the_rest_is_inherited(
        owned in overrides_strategy(),
        use_base in any::<bool>(),
    ) {
        let model = model();
        let registry = model.organization().registry();
        let owner = model.organization_role(OrganizationRole::Owner).unwrap();
        let base = use_base.then_some(owner);

        let role = with_overrides(&owned, |o| {
            RoleComposer::new(registry).compose("generated", base, o)
        })
        .unwrap();

        for resource in registry.resources() {
            let actual = role.grants(resource).unwrap();
            match owned.iter().find(|(r, _)| r == resource) {
                Some((_, actions)) => {
                    let expected: BTreeSet<String> = actions.iter().cloned().collect();
                    prop_assert_eq!(actual, &expected);
                }
                None => match base {
                    Some(base) => prop_assert_eq!(Some(actual), base.grants(resource)),
                    None => prop_assert!(actual.is_empty()),
                },
            }
        }
    }

    #[test]
    fn granted_actions_check_true_and_empty_resources_check_false(
        owned in overrides_strategy(),
    ) {
        let model = model();
        let ac = model.organization();
        let role = with_overrides(&owned, |o| ac.new_role("generated", None, o)).unwrap();

        for (resource, actions) in &owned {
            for action in actions {
                prop_assert!(ac.has_permission(&role, resource, action));
            }
        }

        for statement in ac.registry().statements() {
            if role.grants(&statement.resource).is_some_and(BTreeSet::is_empty) {
                for action in &statement.actions {
                    prop_assert!(!ac.has_permission(&role, &statement.resource, action));
                }
            }
        }
    }

    #[test]
    fn composition_is_deterministic(owned in overrides_strategy()) {
        let model = model();
        let ac = model.organization();
        let owner = model.organization_role(OrganizationRole::Owner);

        let a = with_overrides(&owned, |o| ac.new_role("r", owner, o)).unwrap();
        let mut reversed = owned.clone();
        reversed.reverse();
        let b = with_overrides(&reversed, |o| ac.new_role("r", owner, o)).unwrap();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn unknown_actions_are_rejected_at_composition(
        resource_index in 0..organization::STATEMENTS.len(),
        action in "[a-z]{1,12}(-[a-z]{1,12})?",
    ) {
        let (resource, vocabulary) = organization::STATEMENTS[resource_index];
        prop_assume!(!vocabulary.contains(&action.as_str()));

        let model = model();
        let result = model
            .organization()
            .new_role("broken", None, &[(resource, &[action.as_str()])]);

        match result {
            Err(AccessError::InvalidGrant { resource: r, action: a }) => {
                prop_assert_eq!(r, resource);
                prop_assert_eq!(a, action);
            }
            other => prop_assert!(false, "expected InvalidGrant, got {:?}", other),
        }
    }

    #[test]
    fn arbitrary_checks_never_exceed_the_registry(
        resource in "\\PC{0,16}",
        action in "\\PC{0,24}",
    ) {
        let model = model();
        for scope in Scope::ALL {
            let ac = model.controller(scope);
            for role in ac.roles() {
                let first = ac.has_permission(role, &resource, &action);
                let second = ac.has_permission(role, &resource, &action);
                prop_assert_eq!(first, second);
                if first {
                    prop_assert!(ac.registry().contains(&resource, &action));
                }
            }
        }
    }
}
