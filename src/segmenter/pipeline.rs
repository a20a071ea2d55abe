//! Segmenter pipeline driving VIPS end to end.
//!
//! Typical usage:
//! ```no_run
//! use vips_segmenter::layout::{load_layout, LayoutBox};
//! use vips_segmenter::{Segmenter, SegmenterParams};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), vips_segmenter::SegmentationError> {
//! let page = load_layout(Path::new("page.json"))?;
//! let segmenter = Segmenter::new(SegmenterParams::default());
//! let result = segmenter.process(Some(&page as &dyn LayoutBox))?;
//! println!("leaves={}", result.structure.leaves().len());
//! # Ok(())
//! # }
//! ```

// Stages
// - Block tree: mirror the layout tree once, resolving inherited style.
// - Passes: for each threshold in the schedule, reset the division state,
//   run the divisibility rules, collect visual blocks and refine the visual
//   structure with them.
// - Normalization: rescale every separator weight into a DoC once at the end.

use super::params::{validate_passes, SegmenterParams, ThresholdSchedule};
use super::SegmentationResult;
use crate::block::BlockTree;
use crate::diagnostics::{
    elapsed_ms, InputDescriptor, PassStage, PipelineTrace, SegmentationReport, TimingBreakdown,
};
use crate::error::SegmentationError;
use crate::layout::LayoutBox;
use crate::rules::RuleEngine;
use crate::structure::StructureBuilder;
use crate::types::{Doc, Rect, SizeThreshold};
use log::debug;
use std::time::Instant;

/// VIPS segmenter orchestrating block division, separator detection and
/// structure construction across refinement passes.
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    params: SegmenterParams,
}

impl Segmenter {
    /// Create a segmenter with the supplied parameters.
    pub fn new(params: SegmenterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SegmenterParams {
        &self.params
    }

    pub fn permitted_doc(&self) -> Doc {
        self.params.permitted_doc
    }

    /// Segment the page and return the final visual structure.
    pub fn process(
        &self,
        root: Option<&dyn LayoutBox>,
    ) -> Result<SegmentationResult, SegmentationError> {
        self.run(root).map(|(result, _)| result)
    }

    /// Run the full pipeline and capture detailed diagnostics.
    pub fn process_with_diagnostics(
        &self,
        root: Option<&dyn LayoutBox>,
    ) -> Result<SegmentationReport, SegmentationError> {
        let (result, trace) = self.run(root)?;
        Ok(SegmentationReport { result, trace })
    }

    fn run(
        &self,
        root: Option<&dyn LayoutBox>,
    ) -> Result<(SegmentationResult, PipelineTrace), SegmentationError> {
        let total_start = Instant::now();
        self.params.validate()?;
        let mut timings = TimingBreakdown::default();

        let mut tree = timings.measure("blockTree", || BlockTree::build(root))?;
        let page = self.page_rect(&tree);
        let elements = tree.outlines();
        debug!(
            "Segmenter::process start page={}x{} blocks={} passes={} permitted_doc={}",
            page.width,
            page.height,
            tree.len(),
            self.params.passes,
            self.params.permitted_doc
        );

        let mut builder = StructureBuilder::new(page);
        let mut passes = Vec::with_capacity(self.params.passes);
        for pass in 0..self.params.passes {
            let pass_start = Instant::now();
            let threshold = self.params.schedule.for_pass(pass);
            tree.reset_division();
            let division = RuleEngine::new(threshold, page).divide(&mut tree);
            let blocks = tree.visual_blocks();
            let structure = builder.construct(blocks, &elements);
            let elapsed = elapsed_ms(pass_start);
            timings.push(format!("pass{}", pass + 1), elapsed);
            debug!(
                "pass {} threshold={}x{} visual={} leaves={}",
                pass + 1,
                threshold.width,
                threshold.height,
                division.visual_blocks,
                structure.leaves
            );
            passes.push(PassStage {
                pass: pass + 1,
                threshold,
                division,
                structure,
                elapsed_ms: elapsed,
            });
        }

        let normalization = timings.measure("normalize", || builder.normalize());
        let structure = builder.into_structure().ok_or_else(|| {
            SegmentationError::InvalidConfiguration("no refinement pass ran".to_string())
        })?;
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "Segmenter::process done leaves={} total_ms={:.3}",
            structure.leaves().len(),
            timings.total_ms
        );

        let result = SegmentationResult {
            structure,
            permitted_doc: self.params.permitted_doc,
            page,
            passes: self.params.passes,
            latency_ms: timings.total_ms,
        };
        let trace = PipelineTrace {
            input: InputDescriptor {
                page,
                blocks: tree.len(),
                elements: elements.len(),
            },
            timings,
            passes,
            normalization,
        };
        Ok((result, trace))
    }

    fn page_rect(&self, tree: &BlockTree) -> Rect {
        self.params
            .page_size
            .map(|size| size.rect())
            .unwrap_or_else(|| tree.page())
    }

    /// Update the permitted DoC. Values outside `1..=11` are rejected and the
    /// previous value is kept.
    pub fn set_permitted_doc(&mut self, value: i32) -> Result<(), SegmentationError> {
        self.params.permitted_doc = Doc::new(value)?;
        Ok(())
    }

    /// Use the same size threshold on every pass.
    pub fn set_size_threshold(&mut self, width: i32, height: i32) -> Result<(), SegmentationError> {
        let threshold = SizeThreshold::new(width, height)?;
        self.params.schedule = ThresholdSchedule::uniform(threshold);
        Ok(())
    }

    /// Replace the per-pass threshold schedule. An invalid schedule is
    /// rejected and the previous one is kept.
    pub fn set_schedule(&mut self, schedule: ThresholdSchedule) -> Result<(), SegmentationError> {
        schedule.validate()?;
        self.params.schedule = schedule;
        Ok(())
    }

    /// Update the number of refinement passes (>=1).
    pub fn set_passes(&mut self, passes: usize) -> Result<(), SegmentationError> {
        validate_passes(passes)?;
        self.params.passes = passes;
        Ok(())
    }
}
