#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod layout;
pub mod report;
pub mod segmenter;
pub mod types;

// Pipeline stages – public for tools and tests, but considered internals.
pub mod block;
pub mod rules;
pub mod separators;
pub mod structure;

// --- High-level re-exports -------------------------------------------------

// Main entry points: segmenter + results.
pub use crate::error::SegmentationError;
pub use crate::segmenter::{SegmentationResult, Segmenter, SegmenterParams, ThresholdSchedule};
pub use crate::types::{Axis, Doc, Rect, SizeThreshold};

// Diagnostics returned by the segmenter.
pub use crate::diagnostics::{PipelineTrace, SegmentationReport};

// Serializer contract.
pub use crate::report::{build_report, ReportNode};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use vips_segmenter::prelude::*;
///
/// let page = LayoutNode::element("body", Rect::new(0, 0, 800, 600))
///     .as_root()
///     .with_child(
///         LayoutNode::element("div", Rect::new(0, 0, 800, 300))
///             .with_child(LayoutNode::text_node("Hello", Rect::new(0, 0, 50, 16))),
///     );
/// let segmenter = Segmenter::new(SegmenterParams::default());
/// let result = segmenter.process(Some(&page as &dyn LayoutBox)).unwrap();
/// println!("leaves={}", result.structure.leaves().len());
/// ```
pub mod prelude {
    pub use crate::layout::{LayoutBox, LayoutNode};
    pub use crate::types::{Doc, Rect};
    pub use crate::{SegmentationResult, Segmenter, SegmenterParams};
}
