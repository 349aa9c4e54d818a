//! Configuration management commands.

use anyhow::{Context, Result};
use pdv_config::{Paths, PdvConfig};
use std::path::Path;

use crate::style::colors::SemanticStyle;
use crate::style::{print_error, print_labeled, print_success};

/// Show current configuration.
pub fn show(project: &str, format: &str) -> Result<()> {
    let project_path = Path::new(project);

    let config =
        PdvConfig::load_from_dir(project_path).context("Failed to load configuration")?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        "toml" => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
        _ => {
            println!("PDV Configuration");
            println!("=================\n");

            if !Paths::is_initialized(project_path) {
                println!(
                    "{}\n",
                    "No pdv.toml in this directory; showing defaults and overrides.".muted()
                );
            }

            println!("Project:");
            print_labeled("Name", &config.project.name);
            println!();

            println!("Access:");
            print_labeled("Audit checks", &config.access.audit_checks.to_string());
            println!();

            println!("Routes:");
            print_labeled("Sign in", &config.routes.sign_in);
            print_labeled("Forbidden", &config.routes.forbidden);
            print_labeled("Select organization", &config.routes.select_organization);
            println!();

            println!("Logging:");
            print_labeled("Filter", &config.logging.filter);
            println!();

            println!("Messages:");
            print_labeled("Not authorized", &config.messages.not_authorized);
            print_labeled("Sign in required", &config.messages.sign_in_required);
            print_labeled(
                "No active organization",
                &config.messages.no_active_organization,
            );
        }
    }

    Ok(())
}

/// Validate configuration files.
pub fn validate(project: &str) -> Result<()> {
    let project_path = Path::new(project);

    println!("Validating configuration in {}...", project_path.display());

    match PdvConfig::load_from_dir(project_path) {
        Ok(_) => {
            print_success("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            print_error("Configuration validation failed:");
            eprintln!("  {e:#}");
            Err(e)
        }
    }
}
