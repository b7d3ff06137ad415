//! Concurrent, order-preserving rendering of an [`AnsImage`] to ANSI text.
//!
//! Each terminal line is built from one pair of grid rows. Row pairs are
//! rendered in batches of at most `max_procs` scoped threads; every worker
//! sends `(line index, text)` back on the batch channel and the text is
//! stored in its reserved slot, so completion order never affects output.
//! (Nice info for ANSI true colour: https://gist.github.com/XVilka/8346728)

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;

use super::grid::AnsImage;
use super::pixel::AnsiPixel;

/// Resets all attributes and ends the terminal line.
pub const RESET_LINE: &str = "\x1b[0m\n";

impl AnsImage {
    /// Render the grid as an ANSI-compatible string.
    ///
    /// The result holds `height / 2` lines, each terminated by
    /// [`RESET_LINE`]. Output is identical for every `max_procs` value.
    ///
    /// # Panics
    /// Re-raises the panic of any worker thread.
    pub fn render(&self) -> String {
        let pairs = self.height / 2;
        let batch = self.max_procs.max(1);
        let mut lines = vec![String::new(); pairs];

        for start in (0..pairs).step_by(batch) {
            let end = (start + batch).min(pairs);

            thread::scope(|s| {
                let (tx, rx) = mpsc::channel::<(usize, String)>();

                for k in start..end {
                    let tx = tx.clone();
                    let upper = self.row(2 * k);
                    let lower = self.row(2 * k + 1);
                    s.spawn(move || {
                        tx.send((k, render_line(upper, lower)))
                            .expect("batch receiver outlives workers");
                    });
                }
                // Only workers hold senders now, so the drain below ends
                // once the whole batch has reported.
                drop(tx);

                for (k, line) in rx {
                    lines[k] = line;
                }
            });
        }

        lines.concat()
    }

    /// Write the rendered grid to `out`.
    pub fn draw_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()
    }

    /// Write the rendered grid to standard output.
    pub fn draw(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.draw_to(&mut lock)
    }
}

/// Build one terminal line from an upper and a lower row.
fn render_line(upper: &[AnsiPixel], lower: &[AnsiPixel]) -> String {
    // Each column is at most two 24-byte sequences plus a 3-byte glyph.
    let mut line = String::with_capacity(upper.len() * 48 + RESET_LINE.len());
    for (up, low) in upper.iter().zip(lower) {
        let _ = write!(line, "{}{}", up, low);
    }
    line.push_str(RESET_LINE);
    line
}
