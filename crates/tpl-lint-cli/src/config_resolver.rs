//! Locating and loading the effective configuration for a check run.
//!
//! The `--config` flag wins. Without it, a `tpl-lint.toml` (or the hidden
//! `.tpl-lint.toml` variant) in the linted project is used, then the
//! per-user file `~/.tpl-lint/config.toml`, then built-in defaults.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tpl_lint_core::Config;

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["tpl-lint.toml", ".tpl-lint.toml"];

/// A parsed configuration together with where it came from.
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: Config,
    /// Provenance, for the verbose log.
    pub origin: Origin,
}

/// Provenance of the effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Path given via `--config`. Trusted as-is; a missing file is an error.
    Flag(PathBuf),
    /// Config file found in the linted project directory.
    ProjectFile(PathBuf),
    /// Per-user fallback under `~/.tpl-lint/`.
    UserFile(PathBuf),
    /// No file anywhere; built-in defaults apply.
    BuiltIn,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(p) => write!(f, "--config {}", p.display()),
            Self::ProjectFile(p) => write!(f, "project file {}", p.display()),
            Self::UserFile(p) => write!(f, "user file {}", p.display()),
            Self::BuiltIn => write!(f, "built-in defaults"),
        }
    }
}

/// Loads the configuration that applies when linting `project_dir`.
pub fn load(project_dir: &Path, flag: Option<&Path>) -> Result<LoadedConfig> {
    load_with_user_file(project_dir, flag, user_config_file())
}

/// Testable core: the per-user candidate is a parameter so tests do not
/// depend on the caller's home directory or environment.
fn load_with_user_file(
    project_dir: &Path,
    flag: Option<&Path>,
    user_file: Option<PathBuf>,
) -> Result<LoadedConfig> {
    let origin = locate(project_dir, flag, user_file);
    let config = match &origin {
        Origin::BuiltIn => Config::default(),
        Origin::Flag(p) | Origin::ProjectFile(p) | Origin::UserFile(p) => Config::from_file(p)
            .with_context(|| format!("failed to load config from {}", p.display()))?,
    };
    Ok(LoadedConfig { config, origin })
}

fn locate(project_dir: &Path, flag: Option<&Path>, user_file: Option<PathBuf>) -> Origin {
    if let Some(p) = flag {
        return Origin::Flag(p.to_path_buf());
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.is_file() {
            return Origin::ProjectFile(candidate);
        }
    }

    match user_file {
        Some(f) if f.is_file() => Origin::UserFile(f),
        _ => Origin::BuiltIn,
    }
}

/// Per-user config file candidate.
///
/// `$TPL_LINT_CONFIG_DIR/config.toml` when the variable is set (CI setups
/// without a home directory), otherwise `~/.tpl-lint/config.toml`.
fn user_config_file() -> Option<PathBuf> {
    let dir = match std::env::var_os("TPL_LINT_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => home::home_dir()?.join(".tpl-lint"),
    };
    Some(dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, name: &str, preset: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("preset = \"{preset}\"\n")).unwrap();
        path
    }

    #[test]
    fn flag_wins_over_project_file() {
        let project = TempDir::new().unwrap();
        write_config(project.path(), "tpl-lint.toml", "strict");
        let flagged = write_config(project.path(), "ci.toml", "minimal");

        let loaded = load_with_user_file(project.path(), Some(flagged.as_path()), None).unwrap();
        assert_eq!(loaded.origin, Origin::Flag(flagged));
        assert_eq!(loaded.config.preset.as_deref(), Some("minimal"));
    }

    #[test]
    fn missing_flag_path_is_an_error() {
        let project = TempDir::new().unwrap();
        let result =
            load_with_user_file(project.path(), Some(Path::new("/nonexistent.toml")), None);
        assert!(result.is_err());
    }

    #[test]
    fn project_file_is_found_and_parsed() {
        let project = TempDir::new().unwrap();
        let path = write_config(project.path(), "tpl-lint.toml", "strict");

        let loaded = load_with_user_file(project.path(), None, None).unwrap();
        assert_eq!(loaded.origin, Origin::ProjectFile(path));
        assert_eq!(loaded.config.preset.as_deref(), Some("strict"));
    }

    #[test]
    fn hidden_variant_is_found() {
        let project = TempDir::new().unwrap();
        let path = write_config(project.path(), ".tpl-lint.toml", "minimal");

        let loaded = load_with_user_file(project.path(), None, None).unwrap();
        assert_eq!(loaded.origin, Origin::ProjectFile(path));
    }

    #[test]
    fn plain_name_shadows_hidden_variant() {
        let project = TempDir::new().unwrap();
        write_config(project.path(), ".tpl-lint.toml", "minimal");
        let plain = write_config(project.path(), "tpl-lint.toml", "strict");

        let loaded = load_with_user_file(project.path(), None, None).unwrap();
        assert_eq!(loaded.origin, Origin::ProjectFile(plain));
        assert_eq!(loaded.config.preset.as_deref(), Some("strict"));
    }

    #[test]
    fn user_file_applies_when_project_has_none() {
        let project = TempDir::new().unwrap();
        let user_dir = TempDir::new().unwrap();
        let user_file = write_config(user_dir.path(), "config.toml", "minimal");

        let loaded =
            load_with_user_file(project.path(), None, Some(user_file.clone())).unwrap();
        assert_eq!(loaded.origin, Origin::UserFile(user_file));
        assert_eq!(loaded.config.preset.as_deref(), Some("minimal"));
    }

    #[test]
    fn project_file_shadows_user_file() {
        let project = TempDir::new().unwrap();
        write_config(project.path(), "tpl-lint.toml", "strict");
        let user_dir = TempDir::new().unwrap();
        let user_file = write_config(user_dir.path(), "config.toml", "minimal");

        let loaded = load_with_user_file(project.path(), None, Some(user_file)).unwrap();
        assert!(matches!(loaded.origin, Origin::ProjectFile(_)));
        assert_eq!(loaded.config.preset.as_deref(), Some("strict"));
    }

    #[test]
    fn absent_user_file_yields_builtin_defaults() {
        let project = TempDir::new().unwrap();
        let user_dir = TempDir::new().unwrap();
        let candidate = user_dir.path().join("config.toml");

        let loaded = load_with_user_file(project.path(), None, Some(candidate)).unwrap();
        assert_eq!(loaded.origin, Origin::BuiltIn);
        assert!(loaded.config.preset.is_none());
    }

    #[test]
    fn origin_display_names_the_source() {
        assert_eq!(Origin::BuiltIn.to_string(), "built-in defaults");
        let flag = Origin::Flag(PathBuf::from("/tmp/ci.toml"));
        assert_eq!(flag.to_string(), "--config /tmp/ci.toml");
    }
}
