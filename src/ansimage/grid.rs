//! The pixel grid and its bounds-checked accessors.

use super::error::AnsImageError;
use super::pixel::AnsiPixel;

/// An image encoded as a grid of ANSI pixels.
///
/// Rows are paired when rendering: row `2k` paints the background and row
/// `2k + 1` paints the foreground of terminal line `k`. Height is therefore
/// always even.
#[derive(Debug, Clone)]
pub struct AnsImage {
    pub(super) height: usize,
    pub(super) width: usize,
    pub(super) max_procs: usize,
    /// Row-major, `height * width` entries.
    pub(super) pixmap: Vec<AnsiPixel>,
}

impl AnsImage {
    /// Create an empty (black) grid ready to draw on.
    ///
    /// # Errors
    /// - [`AnsImageError::OddHeight`] if `height` is odd
    /// - [`AnsImageError::InvalidBounds`] if `height` or `width` is below 2
    pub fn new(height: i32, width: i32) -> Result<Self, AnsImageError> {
        if height % 2 != 0 {
            return Err(AnsImageError::OddHeight);
        }
        if height < 2 || width < 2 {
            return Err(AnsImageError::InvalidBounds);
        }

        let (height, width) = (height as usize, width as usize);
        let pixmap = (0..height)
            .flat_map(|row| std::iter::repeat(AnsiPixel::for_row(row)).take(width))
            .collect();

        Ok(Self {
            height,
            width,
            max_procs: 1,
            pixmap,
        })
    }

    /// Total rows of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total columns of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Set the maximum number of row pairs rendered concurrently.
    ///
    /// Zero is treated as 1. This only bounds the workers of a single
    /// render call; no process-wide setting is touched.
    pub fn set_max_procs(&mut self, max: usize) {
        self.max_procs = max.max(1);
    }

    /// Maximum number of row pairs rendered concurrently.
    pub fn max_procs(&self) -> usize {
        self.max_procs
    }

    /// Set the color of the pixel at (`row`, `col`).
    pub fn set_at(
        &mut self,
        row: i32,
        col: i32,
        r: u32,
        g: u32,
        b: u32,
    ) -> Result<(), AnsImageError> {
        let idx = self.index(row, col).ok_or(AnsImageError::OutOfBounds)?;
        self.pixmap[idx].set(row as usize, r, g, b);
        Ok(())
    }

    /// Get a copy of the pixel at (`row`, `col`).
    pub fn get_at(&self, row: i32, col: i32) -> Result<AnsiPixel, AnsImageError> {
        let idx = self.index(row, col).ok_or(AnsImageError::OutOfBounds)?;
        Ok(self.pixmap[idx])
    }

    /// Pixels of a single row.
    pub(super) fn row(&self, row: usize) -> &[AnsiPixel] {
        let start = row * self.width;
        &self.pixmap[start..start + self.width]
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }
}
