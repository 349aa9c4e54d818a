//! Configuration loader with multi-source merging

use crate::{Paths, PdvConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "PDV".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "PDV")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/pdv/config.toml (keeps tests hermetic)
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<PdvConfig> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&PdvConfig::default())?);

        for file in Paths::new().layered_files(&self.project_dir, self.include_user_config) {
            debug!(path = %file.display(), "Loading config file");
            builder = builder.add_source(toml_file(file));
        }

        // PDV_ACCESS__AUDIT_CHECKS=false -> access.audit_checks
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let pdv_config: PdvConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        pdv_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(pdv_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> PdvConfig {
        self.load().unwrap_or_default()
    }
}

fn toml_file(path: PathBuf) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path)
        .required(false)
        .format(config::FileFormat::Toml)
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn loader(dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(dir)
            .with_env_prefix("PDV_LOADER_TEST")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path()).load().expect("Failed to load config");

        assert_eq!(config, PdvConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[project]
name = "loja-centro"

[access]
audit_checks = false

[routes]
sign_in = "/auth/sign-in"
"#;
        fs::write(project_dir.join("pdv.toml"), config_content).expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.project.name, "loja-centro");
        assert!(!config.access.audit_checks);
        assert_eq!(config.routes.sign_in, "/auth/sign-in");
        // Untouched keys keep their defaults
        assert_eq!(config.routes.forbidden, "/forbidden");
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("pdv.toml"),
            r#"
[logging]
filter = "info"
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("pdv.local.toml"),
            r#"
[logging]
filter = "pdv_guard=trace"
"#,
        )
        .expect("Failed to write local config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.logging.filter, "pdv_guard=trace");
    }

    #[test]
    fn test_invalid_route_fails_load() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("pdv.toml"),
            r#"
[routes]
forbidden = "forbidden"
"#,
        )
        .expect("Failed to write config");

        assert!(loader(project_dir).load().is_err());
        assert_eq!(loader(project_dir).load_or_default(), PdvConfig::default());
    }
}
