//! Scriptable permission check.

use std::process::ExitCode;

use anyhow::{Result, bail};
use pdv_access::AccessModel;
use pdv_types::Scope;

use crate::style::{print_error, print_success};

/// Exit code 0 when permitted, 1 when denied.
///
/// Unknown resources or actions are a plain denial; only an unknown role
/// is an error, since that is a typo on the command line.
pub fn run(
    model: &AccessModel,
    scope: Scope,
    role_name: &str,
    resource: &str,
    actions: &[String],
    any: bool,
) -> Result<ExitCode> {
    let ac = model.controller(scope);
    let Some(role) = ac.role(role_name) else {
        bail!("Unknown {scope} role '{role_name}'");
    };

    let actions: Vec<&str> = actions.iter().map(String::as_str).collect();
    let permitted = if any {
        ac.has_any_permission(role, resource, &actions)
    } else {
        ac.has_all_permissions(role, resource, &actions)
    };

    let joiner = if any { " | " } else { " & " };
    let subject = format!("{role_name} → {resource}:{}", actions.join(joiner));

    if permitted {
        print_success(&format!("{subject} granted"));
        Ok(ExitCode::SUCCESS)
    } else {
        print_error(&format!("{subject} denied"));
        Ok(ExitCode::FAILURE)
    }
}
