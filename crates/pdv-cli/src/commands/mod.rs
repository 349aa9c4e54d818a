//! CLI command implementations.

use pdv_types::Scope;

pub mod check;
pub mod config;
pub mod matrix;
pub mod roles;
pub mod statements;
pub mod version;

/// Expands an optional `--scope` into the scopes to print.
fn scopes(scope: Option<Scope>) -> Vec<Scope> {
    scope.map_or_else(|| Scope::ALL.to_vec(), |s| vec![s])
}
