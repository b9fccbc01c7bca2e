//! Configuration loading from TOML files.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. TOML file specified via the --config CLI flag
//! 2. ./folio.toml in the current directory
//! 3. $XDG_CONFIG_HOME/folio/folio.toml (or ~/.config/folio/folio.toml)
//! 4. Built-in defaults (sample profile, dark mode, color on)
//!
//! The chosen theme mode is an initial value only; the viewer never writes
//! the toggled mode back to disk.

use crate::content::Profile;
use crate::error::ConfigError;
use crate::theme::ThemeMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub display: DisplayConfig,
    pub profile: Profile,
}

/// Display settings under `[display]`.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Initial theme mode at startup.
    pub theme: ThemeMode,
    /// Whether terminal output uses color.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            color: true,
        }
    }
}

/// Raw file shape; every field optional so partial files merge over defaults.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    display: Option<FileDisplayConfig>,
    profile: Option<Profile>,
}

#[derive(Debug, Default, Deserialize)]
struct FileDisplayConfig {
    theme: Option<String>,
    color: Option<bool>,
}

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from the --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let text = match resolve_config_text(path_override, &read_file, &config_root)? {
        Some((text, path)) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            text
        }
        None => {
            tracing::debug!("no config file found; using built-in defaults");
            return Ok(Config::default());
        }
    };

    let file: FileConfig = toml::from_str(&text)?;
    let mut config = Config::default();
    if let Some(display) = file.display {
        if let Some(theme) = display.theme {
            config.display.theme = ThemeMode::from_key(&theme).map_err(ConfigError::Invalid)?;
        }
        if let Some(color) = display.color {
            config.display.color = color;
        }
    }
    if let Some(profile) = file.profile {
        config.profile = profile;
    }
    Ok(config)
}

fn resolve_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<Option<(String, PathBuf)>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; missing-file errors are not swallowed.
    if let Some(path) = path_override {
        let path = PathBuf::from(path);
        let text = read_file(&path)?;
        return Ok(Some((text, path)));
    }

    let local = PathBuf::from("folio.toml");
    match read_file(&local) {
        Ok(text) => return Ok(Some((text, local))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    if let Some(root) = config_root() {
        let global = root.join("folio").join("folio.toml");
        match read_file(&global) {
            Ok(text) => return Ok(Some((text, global))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(None)
}

fn config_root_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn defaults_apply_when_no_file_exists() {
        let config = load_config_from_sources(None, not_found, || None).expect("defaults");
        assert_eq!(config.display.theme, ThemeMode::Dark);
        assert!(config.display.color);
        assert!(!config.profile.hero.name.is_empty());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(Some("/nope/folio.toml"), not_found, || None)
            .expect_err("must fail");
        assert!(err.to_string().starts_with("io:"), "got: {err}");
    }

    #[test]
    fn local_file_wins_over_global() {
        let read = |path: &Path| {
            if path == Path::new("folio.toml") {
                Ok("[display]\ntheme = \"light\"\n".to_string())
            } else {
                Ok("[display]\ntheme = \"dark\"\n".to_string())
            }
        };
        let config =
            load_config_from_sources(None, read, || Some(PathBuf::from("/home/u/.config")))
                .expect("load");
        assert_eq!(config.display.theme, ThemeMode::Light);
    }

    #[test]
    fn global_file_used_when_local_missing() {
        let read = |path: &Path| {
            if path == Path::new("/home/u/.config/folio/folio.toml") {
                Ok("[display]\ncolor = false\n".to_string())
            } else {
                Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
            }
        };
        let config =
            load_config_from_sources(None, read, || Some(PathBuf::from("/home/u/.config")))
                .expect("load");
        assert!(!config.display.color);
        assert_eq!(config.display.theme, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let read = |_: &Path| Ok("[display]\ntheme = \"auto\"\n".to_string());
        let err = load_config_from_sources(None, read, || None).expect_err("must reject");
        assert!(
            err.to_string().contains("unknown theme mode"),
            "got: {err}"
        );
    }

    #[test]
    fn profile_block_replaces_sample_content() {
        let read = |_: &Path| {
            Ok(r#"
                [profile.hero]
                name = "Ada Example"
                role = "Systems Engineer"
            "#
            .to_string())
        };
        let config = load_config_from_sources(None, read, || None).expect("load");
        assert_eq!(config.profile.hero.name, "Ada Example");
        assert_eq!(config.profile.hero.role, "Systems Engineer");
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let read = |_: &Path| Ok("display = [unclosed".to_string());
        let err = load_config_from_sources(None, read, || None).expect_err("must fail");
        assert!(err.to_string().starts_with("toml:"), "got: {err}");
    }
}
