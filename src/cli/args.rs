//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::ScaleMethod;
use crate::config::MIN_CELLS;

/// Draw images in the terminal using ANSI true color
#[derive(Parser, Debug)]
#[command(name = "pixterm")]
#[command(version, about = "Draw images in the terminal using ANSI true color", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Supported image formats: JPEG, PNG, GIF, BMP, TIFF, WebP.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to draw
    #[arg(required = true)]
    pub image: Option<PathBuf>,

    /// Scale method
    #[arg(short, long)]
    pub scale: Option<ScaleMethod>,

    /// Terminal rows (>=2; when piping, default: 24)
    #[arg(long, value_parser = parse_cells)]
    pub rows: Option<u16>,

    /// Terminal columns (>=2; when piping, default: 80)
    #[arg(long, value_parser = parse_cells)]
    pub cols: Option<u16>,

    /// Maximum number of parallel render workers (default: number of CPUs)
    #[arg(short = 'j', long, value_parser = parse_procs)]
    pub procs: Option<usize>,

    /// Do not clear the screen before drawing
    #[arg(long)]
    pub no_clear: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Parse and validate a terminal dimension (>= 2 cells)
fn parse_cells(s: &str) -> Result<u16, String> {
    let cells: u16 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of cells", s))?;
    if cells < MIN_CELLS {
        return Err(format!(
            "Terminal size must be at least {}, got {}",
            MIN_CELLS, cells
        ));
    }
    Ok(cells)
}

/// Parse and validate a worker count (>= 1)
fn parse_procs(s: &str) -> Result<usize, String> {
    let procs: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid worker count", s))?;
    if procs == 0 {
        return Err("Worker count must be at least 1".to_string());
    }
    Ok(procs)
}
