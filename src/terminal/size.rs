//! Terminal size detection and the pixel envelope derived from it.

use std::io;

use super::output::is_terminal;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub rows: u16,
    pub cols: u16,
}

impl Default for TermSize {
    /// VT100 terminal size, used when output is piped.
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

impl TermSize {
    /// Build a size from a `(cols, rows)` report, treating a zero axis as unknown.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        if rows == 0 || cols == 0 {
            return Self::default();
        }
        Self { rows, cols }
    }

    /// Size of the terminal attached to stdout.
    ///
    /// Falls back to [`TermSize::default`] when stdout is not a terminal.
    pub fn detect() -> io::Result<Self> {
        if !is_terminal() {
            log::debug!("stdout is not a terminal, assuming {:?}", Self::default());
            return Ok(Self::default());
        }
        let size = query()?;
        log::debug!("Detected terminal size: {}x{}", size.cols, size.rows);
        Ok(size)
    }
}

fn query() -> io::Result<TermSize> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok(TermSize::from_cells(cols, rows))
}

/// Target image size in pixels as `(height, width)`.
///
/// Every terminal cell holds two vertical pixels. Without a row override one
/// row is kept free for the shell prompt.
pub fn pixel_envelope(size: TermSize, rows: Option<u16>, cols: Option<u16>) -> (u32, u32) {
    let rows = rows.unwrap_or_else(|| size.rows.saturating_sub(1));
    let cols = cols.unwrap_or(size.cols);
    (2 * u32::from(rows), u32::from(cols))
}
