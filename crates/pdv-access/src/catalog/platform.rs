//! Platform statements and roles.
//!
//! Governs tenant management only. No platform resource reaches into a
//! tenant's operational data.

use crate::controller::AccessController;
use crate::error::Result;
use crate::roles::Overrides;
use crate::statements::{StatementRegistry, StatementTable};
use pdv_types::Scope;

pub const STATEMENTS: StatementTable<'static> = &[
    ("platform", &["view-dashboard", "view-metrics"]),
    ("organization", &["list", "create", "update", "delete"]),
    (
        "user",
        &[
            "create",
            "list",
            "get",
            "update",
            "set-role",
            "ban",
            "impersonate",
            "delete",
            "set-password",
        ],
    ),
    ("session", &["list", "revoke", "delete"]),
];

pub const SUPER_ADMIN: Overrides<'static> = STATEMENTS;

/// Regular platform user: every platform resource explicitly empty.
pub const USER: Overrides<'static> = &[];

pub fn registry() -> Result<StatementRegistry> {
    StatementRegistry::from_table(Scope::Platform, STATEMENTS)
}

pub fn controller() -> Result<AccessController> {
    Ok(AccessController::builder(registry()?)
        .role("superAdmin", None, SUPER_ADMIN)?
        .role("user", None, USER)?
        .build())
}
