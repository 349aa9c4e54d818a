//! Statement registry listing.

use pdv_access::AccessModel;
use pdv_types::Scope;

use crate::style::{print_header, styled_table};

pub fn run(model: &AccessModel, scope: Option<Scope>) {
    for scope in super::scopes(scope) {
        let registry = model.controller(scope).registry();

        print_header(&format!("{scope} statements"));

        let mut table = styled_table(&["Resource", "Actions"]);
        for statement in registry.statements() {
            table.add_row(vec![statement.resource.clone(), statement.actions.join(", ")]);
        }
        println!("{table}");
        println!();
    }
}
