//! pixterm library crate.
//!
//! Converts decoded images into ANSI true-color terminal art. The
//! [`ansimage`] module holds the engine; the remaining modules are the
//! glue used by the `pixterm` binary.

pub mod ansimage;
pub mod cli;
pub mod config;
pub mod terminal;

pub use ansimage::{AnsImage, AnsImageError, AnsiPixel, ScaleMode};
