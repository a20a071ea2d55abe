//! Input side of the segmenter: the rendered box tree.
//!
//! [`LayoutBox`] is the narrow interface a layout engine implements.
//! [`LayoutNode`] is an owned implementation used for JSON dumps and tests.

pub mod io;
mod node;
mod traits;

pub use io::{load_layout, write_json_file};
pub use node::{LayoutNode, TEXT_TAG};
pub use traits::{LayoutBox, BACKGROUND_COLOR, FONT_WEIGHT};
