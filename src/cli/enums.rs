//! CLI enum types.

use clap::ValueEnum;

use crate::ansimage::ScaleMode;

/// Image scale method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScaleMethod {
    /// Scale to the full terminal area, ignoring aspect ratio
    #[default]
    Resize,
    /// Scale and center-crop to fill the terminal area
    Fill,
    /// Scale to fit the terminal area, preserving aspect ratio
    Fit,
}

impl From<ScaleMethod> for ScaleMode {
    fn from(s: ScaleMethod) -> Self {
        match s {
            ScaleMethod::Resize => ScaleMode::Resize,
            ScaleMethod::Fill => ScaleMode::Fill,
            ScaleMethod::Fit => ScaleMode::Fit,
        }
    }
}
