//! Role-by-action grid for one resource.

use anyhow::{Context, Result};
use pdv_access::AccessModel;
use pdv_types::Scope;

use crate::style::{grant_cell, print_header, styled_table};

pub fn run(model: &AccessModel, scope: Scope, resource: &str) -> Result<()> {
    let ac = model.controller(scope);
    let vocabulary = ac
        .registry()
        .vocabulary(resource)
        .with_context(|| format!("Cannot build a matrix for '{resource}'"))?;

    print_header(&format!("{scope}/{resource}"));

    let mut headers = vec!["Role"];
    headers.extend(vocabulary.iter().map(String::as_str));
    let mut table = styled_table(&headers);

    for role in ac.roles() {
        let mut row = vec![comfy_table::Cell::new(role.name())];
        row.extend(
            vocabulary
                .iter()
                .map(|action| grant_cell(ac.has_permission(role, resource, action))),
        );
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
