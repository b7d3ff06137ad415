//! Configuration file handling for pixterm.
//!
//! Loads configuration from `<config dir>/pixterm/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ansimage::ScaleMode;

/// Configuration file structure for pixterm.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    #[serde(default)]
    pub scale: ScaleMode,
    /// Parallel row-pair workers (default: available parallelism)
    #[serde(default)]
    pub max_procs: Option<usize>,
    #[serde(default = "default_true")]
    pub clear: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: ScaleMode::default(),
            max_procs: None,
            clear: true,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TerminalConfig {
    #[serde(default)]
    pub rows: Option<u16>,
    #[serde(default)]
    pub cols: Option<u16>,
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file '{}': {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Smallest terminal dimension a grid can be built for.
pub const MIN_CELLS: u16 = 2;

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::read(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path given explicitly by the user.
    /// The file must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::read(path)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let sizes = [("rows", self.terminal.rows), ("cols", self.terminal.cols)];
        for (key, value) in sizes {
            if let Some(cells) = value.filter(|&n| n < MIN_CELLS) {
                return Err(ConfigError::Invalid {
                    path: path.to_path_buf(),
                    message: format!(
                        "terminal.{} must be at least {}, got {}",
                        key, MIN_CELLS, cells
                    ),
                });
            }
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content, path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("pixterm").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/pixterm/config.toml")
        })
}

/// Commented config written by `pixterm config init`.
pub const DEFAULT_CONFIG: &str = r#"# pixterm configuration

[render]
# Scale mode: resize, fill, fit
scale = "resize"
# Parallel row-pair workers (default: number of CPUs)
# max_procs = 4
# Clear the screen before drawing
clear = true

[terminal]
# Override detected terminal size
# rows = 24
# cols = 80
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("", Path::new("test.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.scale, ScaleMode::Resize);
        assert!(config.render.clear);
        assert!(config.render.max_procs.is_none());
        assert!(config.terminal.rows.is_none());
    }

    #[test]
    fn test_default_config_template_parses() {
        let config = Config::parse(DEFAULT_CONFIG, Path::new("default.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
[render]
scale = "fit"
max_procs = 6
clear = false

[terminal]
rows = 30
cols = 100
"#;
        let config = Config::parse(toml, Path::new("x.toml")).unwrap();
        assert_eq!(config.render.scale, ScaleMode::Fit);
        assert_eq!(config.render.max_procs, Some(6));
        assert!(!config.render.clear);
        assert_eq!(config.terminal.rows, Some(30));
        assert_eq!(config.terminal.cols, Some(100));
    }

    #[test]
    fn test_invalid_scale_mode() {
        let toml = "[render]\nscale = \"stretch\"\n";
        let err = Config::parse(toml, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_terminal_size_below_minimum_is_rejected() {
        let toml = "[terminal]\nrows = 1\ncols = 0\n";
        let err = Config::parse(toml, Path::new("tiny.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        let msg = err.to_string();
        assert!(msg.contains("tiny.toml"));
        assert!(msg.contains("terminal.rows"));

        let err = Config::parse("[terminal]\ncols = 0\n", Path::new("c.toml")).unwrap_err();
        assert!(err.to_string().contains("terminal.cols must be at least 2, got 0"));
    }

    #[test]
    fn test_terminal_size_at_minimum_is_accepted() {
        let toml = "[terminal]\nrows = 2\ncols = 2\n";
        let config = Config::parse(toml, Path::new("ok.toml")).unwrap();
        assert_eq!(config.terminal.rows, Some(2));
        assert_eq!(config.terminal.cols, Some(2));
    }

    #[test]
    fn test_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load_from_explicit(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_explicit_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nscale = \"fill\"").unwrap();
        let config = Config::load_from_explicit(file.path()).unwrap();
        assert_eq!(config.render.scale, ScaleMode::Fill);
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("pixterm/config.toml"));
    }
}
