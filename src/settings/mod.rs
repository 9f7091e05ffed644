//! Settings for cell highlighting
//!
//! `CellHighlightSettings` is the user-facing `cellHighlighter` section;
//! `CellHighlightLayout` places the highlight within an editor.

mod color;
mod highlight;
mod layout;

pub use color::*;
pub use highlight::*;
pub use layout::*;
