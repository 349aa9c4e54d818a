//! PDV access control CLI.
//!
//! Inspects the static permission model the back office runs with.
//!
//! # Quick Start
//!
//! ```bash
//! # Every resource and its actions
//! pdv statements
//!
//! # What can a manager do?
//! pdv role manager
//!
//! # Scriptable check: exit code 0 when granted, 1 when denied
//! pdv check cashier cashier open
//! ```

mod commands;
mod style;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdv_access::AccessModel;
use pdv_config::{ConfigLoader, PdvConfig};
use pdv_types::Scope;
use tracing_subscriber::EnvFilter;

/// PDV - inspect back-office roles and permissions.
#[derive(Parser)]
#[command(name = "pdv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// List every resource and its action vocabulary.
    Statements {
        /// Restrict to one scope (platform, organization).
        #[arg(short, long)]
        scope: Option<Scope>,
    },

    /// List the named roles.
    Roles {
        /// Restrict to one scope (platform, organization).
        #[arg(short, long)]
        scope: Option<Scope>,
    },

    /// Show the grant table of one role.
    Role {
        /// Role name (owner, manager, superAdmin, ...).
        name: String,

        /// Scope the role belongs to.
        #[arg(short, long, default_value = "organization")]
        scope: Scope,

        /// Output format (text, json).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check whether a role may perform actions on a resource.
    Check {
        /// Role name.
        role: String,

        /// Resource name.
        resource: String,

        /// One or more actions.
        #[arg(required = true)]
        actions: Vec<String>,

        /// Scope the role belongs to.
        #[arg(short, long, default_value = "organization")]
        scope: Scope,

        /// Pass when any action is granted instead of all.
        #[arg(long)]
        any: bool,
    },

    /// Show a role-by-action grid for one resource.
    Matrix {
        /// Resource name.
        resource: String,

        /// Scope the resource belongs to.
        #[arg(short, long, default_value = "organization")]
        scope: Scope,
    },

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Project directory containing pdv.toml.
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate configuration files.
    Validate {
        /// Project directory containing pdv.toml.
        #[arg(short, long, default_value = ".")]
        project: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    let config = match ConfigLoader::new().load() {
        Ok(config) => config,
        // `config show|validate` load and report on their own project dir
        Err(_) if matches!(cli.command, Commands::Config(_)) => PdvConfig::default(),
        Err(e) => {
            style::print_error("Invalid configuration:");
            eprintln!("  {e:#}");
            eprintln!("  Run `pdv config validate` for details.");
            return Ok(ExitCode::FAILURE);
        }
    };

    // Logging goes to stderr so JSON/TOML output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let model = AccessModel::standard().context("Permission catalog is invalid")?;
    tracing::debug!(
        platform_roles = model.platform().roles().count(),
        organization_roles = model.organization().roles().count(),
        "access model ready"
    );

    match cli.command {
        Commands::Version => {
            commands::version::run(&model);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Statements { scope } => {
            commands::statements::run(&model, scope);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Roles { scope } => {
            commands::roles::list(&model, scope);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Role {
            name,
            scope,
            format,
        } => commands::roles::show(&model, scope, &name, &format).map(|()| ExitCode::SUCCESS),
        Commands::Check {
            role,
            resource,
            actions,
            scope,
            any,
        } => commands::check::run(&model, scope, &role, &resource, &actions, any),
        Commands::Matrix { resource, scope } => {
            commands::matrix::run(&model, scope, &resource).map(|()| ExitCode::SUCCESS)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { project, format } => {
                commands::config::show(&project, &format).map(|()| ExitCode::SUCCESS)
            }
            ConfigCommands::Validate { project } => {
                commands::config::validate(&project).map(|()| ExitCode::SUCCESS)
            }
        },
    }
}
