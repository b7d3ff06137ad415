//! Terminal glue: size detection, TTY detection and screen clearing.

mod output;
mod size;

pub use output::{clear_terminal, is_terminal, CLEAR_SCREEN};
pub use size::{pixel_envelope, TermSize};
