//! Subcommand handlers and the image drawing flow.

use std::path::{Path, PathBuf};

use super::args::{Args, ConfigAction};
use crate::ansimage::{AnsImage, AnsImageError, ScaleMode};
use crate::config::{default_path, Config, DEFAULT_CONFIG};
use crate::terminal::{self, pixel_envelope, TermSize};

/// Effective settings after merging CLI args > config file > built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub scale: ScaleMode,
    pub max_procs: usize,
    pub clear: bool,
    pub rows: Option<u16>,
    pub cols: Option<u16>,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Self {
        Self {
            scale: args.scale.map(ScaleMode::from).unwrap_or(config.render.scale),
            max_procs: args
                .procs
                .or(config.render.max_procs)
                .unwrap_or_else(default_procs)
                .max(1),
            clear: !args.no_clear && config.render.clear,
            rows: args.rows.or(config.terminal.rows),
            cols: args.cols.or(config.terminal.cols),
        }
    }
}

fn default_procs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Decode, scale and draw an image file to the terminal.
pub fn draw_image(path: &Path, settings: &Settings) -> Result<(), AnsImageError> {
    let size = match (settings.rows, settings.cols) {
        (Some(rows), Some(cols)) => TermSize { rows, cols },
        _ => TermSize::detect()?,
    };
    let (height, width) = pixel_envelope(size, settings.rows, settings.cols);
    log::debug!(
        "Drawing {} into {}x{} pixels (scale: {}, workers: {})",
        path.display(),
        width,
        height,
        settings.scale.name(),
        settings.max_procs
    );

    let mut pix = AnsImage::from_file_scaled(height, width, settings.scale, path)?;
    pix.set_max_procs(settings.max_procs);

    let tty = terminal::is_terminal();
    if tty && settings.clear {
        terminal::clear_terminal()?;
    }
    pix.draw()?;
    if tty {
        println!();
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<PathBuf>,
    settings: &Settings,
) {
    let config_path = config_path.unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Scale: {}", settings.scale.name());
            println!("  Workers: {}", settings.max_procs);
            println!("  Clear screen: {}", if settings.clear { "yes" } else { "no" });
            println!("  Rows: {}", describe(settings.rows));
            println!("  Columns: {}", describe(settings.cols));
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'pixterm config show' to view current settings.");
                std::process::exit(1);
            }

            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            log::info!("Wrote default config to {}", config_path.display());
            println!("Created config file: {}", config_path.display());
        }
    }
}

fn describe(cells: Option<u16>) -> String {
    cells
        .map(|n| n.to_string())
        .unwrap_or_else(|| "auto".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn config(toml: &str) -> Config {
        Config::parse(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_settings_from_defaults() {
        let args = Args::parse_from(["pixterm", "a.png"]);
        let settings = Settings::resolve(&args, &Config::default());
        assert_eq!(settings.scale, ScaleMode::Resize);
        assert!(settings.max_procs >= 1);
        assert!(settings.clear);
        assert!(settings.rows.is_none());
        assert!(settings.cols.is_none());
    }

    #[test]
    fn test_settings_config_overrides_defaults() {
        let args = Args::parse_from(["pixterm", "a.png"]);
        let cfg = config(
            "[render]\nscale = \"fit\"\nmax_procs = 3\nclear = false\n[terminal]\nrows = 12\n",
        );
        let settings = Settings::resolve(&args, &cfg);
        assert_eq!(settings.scale, ScaleMode::Fit);
        assert_eq!(settings.max_procs, 3);
        assert!(!settings.clear);
        assert_eq!(settings.rows, Some(12));
        assert!(settings.cols.is_none());
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let args = Args::parse_from([
            "pixterm", "-s", "fill", "-j", "2", "--rows", "5", "--cols", "9", "--no-clear", "a.png",
        ]);
        let cfg = config(
            "[render]\nscale = \"fit\"\nmax_procs = 8\n[terminal]\nrows = 40\ncols = 100\n",
        );
        let settings = Settings::resolve(&args, &cfg);
        assert_eq!(settings.scale, ScaleMode::Fill);
        assert_eq!(settings.max_procs, 2);
        assert!(!settings.clear);
        assert_eq!(settings.rows, Some(5));
        assert_eq!(settings.cols, Some(9));
    }

    #[test]
    fn test_settings_zero_procs_in_config() {
        let args = Args::parse_from(["pixterm", "a.png"]);
        let cfg = config("[render]\nmax_procs = 0\n");
        assert_eq!(Settings::resolve(&args, &cfg).max_procs, 1);
    }

    #[test]
    fn test_draw_image_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            scale: ScaleMode::Fit,
            max_procs: 1,
            clear: false,
            rows: Some(4),
            cols: Some(4),
        };
        let err = draw_image(&dir.path().join("nope.png"), &settings).unwrap_err();
        assert!(matches!(err, AnsImageError::Io(_)));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "auto");
        assert_eq!(describe(Some(24)), "24");
    }
}
