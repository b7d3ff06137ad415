//! Image-to-terminal-art engine.
//!
//! An [`AnsImage`] is a grid of [`AnsiPixel`]s. Pairs of rows are rendered
//! as one terminal line: the upper pixel sets the background colour and the
//! lower pixel draws a lower-half-block glyph in the foreground colour.
//!
//! 1. **Construction** - empty grids, or ingestion from decoded images
//! 2. **Scaling** - resize, fill or fit before ingestion ([`ScaleMode`])
//! 3. **Rendering** - concurrent, order-preserving ANSI output

mod error;
mod grid;
mod ingest;
mod pixel;
mod render;

pub use error::AnsImageError;
pub use grid::AnsImage;
pub use ingest::ScaleMode;
pub use pixel::{AnsiPixel, LOWER_HALF_BLOCK};
pub use render::RESET_LINE;
