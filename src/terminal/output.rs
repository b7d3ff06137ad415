//! Writing to the terminal.

use std::io::{self, IsTerminal, Write};

/// Moves the cursor home and erases the whole screen.
/// (Nice info: http://unix.stackexchange.com/questions/124762/how-does-clear-command-work)
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Whether standard output is attached to a terminal.
pub fn is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Clear the current terminal buffer.
pub fn clear_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(CLEAR_SCREEN.as_bytes())?;
    stdout.flush()
}
