//! Organization statements and roles.
//!
//! Governs one tenant's operational data: catalog, stock, orders, the cash
//! register, finance and shipping. The `organization`, `member` and
//! `invitation` resources come from the identity service's organization
//! plugin and keep its vocabulary.

use crate::controller::AccessController;
use crate::error::Result;
use crate::roles::Overrides;
use crate::statements::{StatementRegistry, StatementTable};
use pdv_types::Scope;

pub const STATEMENTS: StatementTable<'static> = &[
    ("organization", &["update", "delete"]),
    ("member", &["create", "update", "delete"]),
    ("invitation", &["create", "cancel"]),
    (
        "product",
        &[
            "view",
            "create",
            "update",
            "delete",
            "update-price",
            "update-stock",
            "publish",
        ],
    ),
    ("brand", &["view", "create", "update", "delete"]),
    ("carrier", &["view", "create", "update", "delete"]),
    ("taxonomy", &["view", "create", "update", "delete"]),
    ("stock", &["view", "adjust", "transfer"]),
    (
        "order",
        &["view", "create", "update", "cancel", "refund", "export"],
    ),
    ("customer", &["view", "create", "update", "delete"]),
    ("cart", &["view", "create", "update", "delete", "checkout"]),
    (
        "cashier",
        &[
            "open",
            "close",
            "sell",
            "apply-discount",
            "apply-discount-unlimited",
            "withdraw",
        ],
    ),
    (
        "finance",
        &["view", "create", "update", "reconcile", "export"],
    ),
    (
        "shipping",
        &["view", "create", "update", "dispatch", "cancel"],
    ),
    ("report", &["view", "export"]),
    ("settings", &["view", "update"]),
];

/// Owner: the whole organization vocabulary.
pub const OWNER: Overrides<'static> = STATEMENTS;

/// Manager: everything the owner has, minus tenant deletion, member
/// removal, reconciliation and settings changes.
pub const MANAGER: Overrides<'static> = &[
    ("organization", &["update"]),
    ("member", &["create", "update"]),
    ("finance", &["view", "create", "update", "export"]),
    ("settings", &["view"]),
];

pub const SALESPERSON: Overrides<'static> = &[
    ("product", &["view"]),
    ("brand", &["view"]),
    ("carrier", &["view"]),
    ("taxonomy", &["view"]),
    ("stock", &["view"]),
    ("customer", &["view", "create", "update"]),
    ("order", &["view", "create", "update"]),
    ("cart", &["view", "create", "update", "delete", "checkout"]),
    ("cashier", &["sell", "apply-discount"]),
];

/// Operator: catalog and stock upkeep, read-only orders.
pub const OPERATOR: Overrides<'static> = &[
    (
        "product",
        &["view", "create", "update", "update-stock", "publish"],
    ),
    ("brand", &["view", "create", "update"]),
    ("carrier", &["view", "create", "update"]),
    ("taxonomy", &["view", "create", "update"]),
    ("stock", &["view", "adjust", "transfer"]),
    ("order", &["view"]),
];

/// Cashier: a salesperson who also runs the register.
pub const CASHIER: Overrides<'static> = &[
    ("cashier", &["open", "close", "sell", "apply-discount"]),
    ("customer", &["view", "create"]),
    ("order", &["view", "create"]),
];

pub const FINANCE: Overrides<'static> = &[
    (
        "finance",
        &["view", "create", "update", "reconcile", "export"],
    ),
    ("order", &["view", "refund", "export"]),
    ("cashier", &["close", "withdraw"]),
    ("customer", &["view"]),
    ("report", &["view", "export"]),
];

pub const SHIPPING: Overrides<'static> = &[
    (
        "shipping",
        &["view", "create", "update", "dispatch", "cancel"],
    ),
    ("order", &["view", "update"]),
    ("carrier", &["view"]),
    ("customer", &["view"]),
];

/// Customer: storefront shopping only.
pub const CUSTOMER: Overrides<'static> = &[
    ("cart", &["view", "create", "update", "delete", "checkout"]),
    ("order", &["view"]),
    ("product", &["view"]),
];

/// Builds the organization statement registry.
pub fn registry() -> Result<StatementRegistry> {
    StatementRegistry::from_table(Scope::Organization, STATEMENTS)
}

/// Builds the organization access controller with every standard role.
pub fn controller() -> Result<AccessController> {
    Ok(AccessController::builder(registry()?)
        .role("owner", None, OWNER)?
        .role("manager", Some("owner"), MANAGER)?
        .role("salesperson", None, SALESPERSON)?
        .role("operator", None, OPERATOR)?
        .role("cashier", Some("salesperson"), CASHIER)?
        .role("finance", None, FINANCE)?
        .role("shipping", None, SHIPPING)?
        .role("customer", None, CUSTOMER)?
        .build())
}
