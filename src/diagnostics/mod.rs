//! Diagnostics data model returned by the segmenter.
//!
//! `SegmentationReport` is the main entry point: it bundles the
//! `SegmentationResult` with a `PipelineTrace` describing the input, the
//! per-stage timings and what each refinement pass did.

pub mod passes;
pub mod pipeline;
pub mod timing;

pub use passes::PassStage;
pub use pipeline::{InputDescriptor, PipelineTrace, SegmentationReport};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
