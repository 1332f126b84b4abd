//! Render Model - Positioned page content
//!
//! Layout produces pages of absolutely positioned text runs, lines, and
//! rectangles in layout units with a top-left origin. Output backends scale
//! and flip them as their coordinate systems require.

mod error;
mod render_item;

pub use error::*;
pub use render_item::*;
