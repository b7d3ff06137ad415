//! A single colored half of a terminal character cell.

use std::fmt;

/// Unicode "Lower Half Block", drawn by the lower pixel of each cell.
pub const LOWER_HALF_BLOCK: char = '\u{2584}';

/// One pixel of an [`AnsImage`](super::AnsImage).
///
/// Upper pixels paint the cell background; lower pixels paint the
/// foreground of a lower-half-block glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnsiPixel {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    upper: bool,
}

impl AnsiPixel {
    /// Create a black pixel whose role follows the parity of `row`.
    pub(crate) fn for_row(row: usize) -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            upper: row % 2 == 0,
        }
    }

    pub(crate) fn set(&mut self, row: usize, r: u32, g: u32, b: u32) {
        self.r = r;
        self.g = g;
        self.b = b;
        self.upper = row % 2 == 0;
    }

    /// Whether this pixel occupies the upper half of its terminal cell.
    pub fn is_upper(&self) -> bool {
        self.upper
    }

    /// ANSI true-color fragment for this pixel.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnsiPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upper {
            write!(f, "\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "\x1b[38;2;{};{};{}m{}",
                self.r, self.g, self.b, LOWER_HALF_BLOCK
            )
        }
    }
}
