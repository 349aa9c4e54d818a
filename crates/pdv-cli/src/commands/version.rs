//! Version command implementation.

use pdv_access::AccessModel;
use pdv_types::Scope;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn run(model: &AccessModel) {
    println!("{NAME} {VERSION}");
    println!();
    println!("Permission catalog:");
    for scope in Scope::ALL {
        let ac = model.controller(scope);
        println!(
            "  {:<13} {} resources, {} roles",
            format!("{scope}:"),
            ac.registry().len(),
            ac.roles().count()
        );
    }
    println!();
    println!("Build info:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
}
