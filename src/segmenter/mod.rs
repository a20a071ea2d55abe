//! VIPS segmenter orchestrating the multi-pass pipeline.
//!
//! Overview
//! - Mirrors the layout tree into a block tree once.
//! - Each pass divides the block tree with a smaller size threshold, so the
//!   visual blocks get finer from pass to pass.
//! - The visual structure is refined in place by every pass and normalized
//!   once at the end.
//!
//! Modules
//! - [`params`] – configuration types.
//! - `pipeline` – the [`Segmenter`] implementation.

pub mod params;
mod pipeline;

pub use params::{PageSize, SegmenterParams, ThresholdSchedule};
pub use pipeline::Segmenter;

use crate::report::{build_report, ReportNode};
use crate::structure::VisualStructure;
use crate::types::{Doc, Rect};
use serde::Serialize;

/// Final visual structure of one page.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    pub structure: VisualStructure,
    pub permitted_doc: Doc,
    pub page: Rect,
    pub passes: usize,
    pub latency_ms: f64,
}

impl SegmentationResult {
    /// Serializer view of the structure, cut at the permitted DoC.
    pub fn report(&self) -> ReportNode {
        build_report(&self.structure, self.permitted_doc)
    }
}
