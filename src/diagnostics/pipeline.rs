use super::{PassStage, TimingBreakdown};
use crate::segmenter::SegmentationResult;
use crate::structure::NormalizationSummary;
use crate::types::Rect;
use serde::Serialize;

/// Result produced by [`Segmenter::process_with_diagnostics`](crate::Segmenter).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationReport {
    pub result: SegmentationResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace of one segmentation run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub passes: Vec<PassStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization: Option<NormalizationSummary>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub page: Rect,
    /// Blocks in the mirrored block tree.
    pub blocks: usize,
    /// Element boxes available to the tag-overlap heuristic.
    pub elements: usize,
}
