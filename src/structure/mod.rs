//! Visual structure: the recursive partition of the page.
//!
//! Overview
//! - The first pass splits the whole page along horizontal separators, then
//!   every resulting region along vertical separators.
//! - Later passes refresh each leaf's blocks from a finer division and split
//!   the leaves again, horizontal before vertical.
//! - Children always tile their parent: the cut line is the midpoint of the
//!   separator.
//! - After the last pass all separator weights are normalized into DoC values
//!   on one scale, and every node takes its DoC from its bounding separators.
//!
//! Modules
//! - `node` – the [`VisualStructure`] tree node.
//! - `split` – applying separators to a node.
//! - `constructor` – the pass driver [`StructureBuilder`].
//! - `normalize` – global weight normalization.

mod constructor;
mod node;
mod normalize;
mod split;

pub use constructor::{ConstructStats, StructureBuilder};
pub use node::VisualStructure;
pub use normalize::{normalized_doc, NormalizationSummary, REFERENCE_WEIGHT};

#[cfg(test)]
mod tests;
