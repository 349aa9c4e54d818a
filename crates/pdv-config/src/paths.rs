//! Where PDV looks for configuration files

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const PROJECT_FILE: &str = "pdv.toml";
const LOCAL_FILE: &str = "pdv.local.toml";

/// Config file locations: one per user, two per project
pub struct Paths {
    project_dirs: Option<ProjectDirs>,
}

impl Paths {
    pub fn new() -> Self {
        Self {
            project_dirs: ProjectDirs::from("com", "PDV", "pdv"),
        }
    }

    /// User config directory (~/.config/pdv/ on Linux)
    pub fn user_config_dir(&self) -> Result<PathBuf, ConfigError> {
        self.project_dirs
            .as_ref()
            .map(|p| p.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.user_config_dir()?.join("config.toml"))
    }

    /// Shared store settings, checked into the repository
    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(PROJECT_FILE)
    }

    /// Per-machine overrides, gitignored
    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(LOCAL_FILE)
    }

    pub fn is_initialized(project_dir: impl AsRef<Path>) -> bool {
        Self::project_config_file(project_dir).exists()
    }

    /// Existing config files, lowest precedence first.
    ///
    /// The user file is skipped when `include_user` is false or the
    /// platform has no config directory.
    pub fn layered_files(&self, project_dir: impl AsRef<Path>, include_user: bool) -> Vec<PathBuf> {
        let project_dir = project_dir.as_ref();
        let user = include_user
            .then(|| self.user_config_file().ok())
            .flatten();

        user.into_iter()
            .chain([
                Self::project_config_file(project_dir),
                Self::local_config_file(project_dir),
            ])
            .filter(|file| file.exists())
            .collect()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_user_file_lives_in_user_dir() {
        let paths = Paths::new();

        if let (Ok(dir), Ok(file)) = (paths.user_config_dir(), paths.user_config_file()) {
            assert_eq!(file.parent(), Some(dir.as_path()));
            assert!(dir.to_string_lossy().contains("pdv"));
        }
    }

    #[test]
    fn test_store_without_config_has_no_layers() {
        let temp_dir = tempdir().unwrap();

        assert!(!Paths::is_initialized(temp_dir.path()));
        assert!(Paths::new().layered_files(temp_dir.path(), false).is_empty());
    }

    #[test]
    fn test_local_file_layers_above_project_file() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path();

        // Local file alone still counts as a layer
        fs::write(dir.join(LOCAL_FILE), "").unwrap();
        assert_eq!(
            Paths::new().layered_files(dir, false),
            [dir.join("pdv.local.toml")]
        );
        assert!(!Paths::is_initialized(dir));

        fs::write(dir.join(PROJECT_FILE), "[project]\nname = \"loja\"\n").unwrap();
        assert!(Paths::is_initialized(dir));
        assert_eq!(
            Paths::new().layered_files(dir, false),
            [dir.join("pdv.toml"), dir.join("pdv.local.toml")]
        );
    }
}
