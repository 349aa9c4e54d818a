//! Role listing and inspection.

use anyhow::{Result, bail};
use pdv_access::AccessModel;
use pdv_types::Scope;

use crate::style::colors::SemanticStyle;
use crate::style::{print_header, styled_table};

/// Lists roles with a summary of what they can reach.
pub fn list(model: &AccessModel, scope: Option<Scope>) {
    for scope in super::scopes(scope) {
        let ac = model.controller(scope);

        print_header(&format!("{scope} roles"));

        let mut table = styled_table(&["Role", "Resources", "Granted actions"]);
        for role in ac.roles() {
            let reachable = role
                .grant_table()
                .iter()
                .filter(|(_, actions)| !actions.is_empty())
                .count();
            table.add_row(vec![
                role.name().to_string(),
                format!("{reachable}/{}", ac.registry().len()),
                role.grant_table().granted_count().to_string(),
            ]);
        }
        println!("{table}");
        println!();
    }
}

/// Prints one role's grant table.
pub fn show(model: &AccessModel, scope: Scope, name: &str, format: &str) -> Result<()> {
    let ac = model.controller(scope);
    let Some(role) = ac.role(name) else {
        let known: Vec<&str> = ac.roles().map(|r| r.name()).collect();
        bail!(
            "Unknown {scope} role '{name}'. Known roles: {}",
            known.join(", ")
        );
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(role)?);
        }
        "text" => {
            print_header(&format!("{} ({scope})", role.name().info()));

            let mut table = styled_table(&["Resource", "Granted", "Not granted"]);
            for statement in ac.registry().statements() {
                let granted: Vec<&str> = statement
                    .actions
                    .iter()
                    .filter(|a| role.is_granted(&statement.resource, a))
                    .map(String::as_str)
                    .collect();
                let withheld: Vec<&str> = statement
                    .actions
                    .iter()
                    .filter(|a| !role.is_granted(&statement.resource, a))
                    .map(String::as_str)
                    .collect();

                table.add_row(vec![
                    statement.resource.clone(),
                    granted.join(", "),
                    withheld.join(", "),
                ]);
            }
            println!("{table}");
        }
        other => bail!("Unsupported format '{other}' (expected text or json)"),
    }

    Ok(())
}
