use super::normalize::{self, NormalizationSummary};
use super::split::apply_separators;
use super::VisualStructure;
use crate::block::{ElementOutline, VisualBlock};
use crate::separators::SeparatorDetector;
use crate::types::{Axis, Rect};
use log::debug;
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counters for one `construct` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructStats {
    pub pass: usize,
    pub horizontal_splits: usize,
    pub vertical_splits: usize,
    pub leaves: usize,
    /// Leaves whose fresh membership came out empty and kept the old blocks.
    pub retained_leaves: usize,
}

/// Builds and refines the visual structure across passes.
#[derive(Clone, Debug)]
pub struct StructureBuilder {
    page: Rect,
    structure: Option<VisualStructure>,
    pass: usize,
}

impl StructureBuilder {
    pub fn new(page: Rect) -> Self {
        Self {
            page,
            structure: None,
            pass: 0,
        }
    }

    pub fn page(&self) -> Rect {
        self.page
    }

    /// Number of completed `construct` calls.
    pub fn pass(&self) -> usize {
        self.pass
    }

    pub fn structure(&self) -> Option<&VisualStructure> {
        self.structure.as_ref()
    }

    pub fn into_structure(self) -> Option<VisualStructure> {
        self.structure
    }

    /// Run one refinement pass over the current visual blocks.
    ///
    /// The first call partitions the whole page; later calls re-split every
    /// leaf with the finer blocks of the current pass.
    pub fn construct(
        &mut self,
        blocks: Vec<VisualBlock>,
        elements: &[ElementOutline],
    ) -> ConstructStats {
        self.pass += 1;
        let detector = SeparatorDetector::new(elements);
        let mut stats = ConstructStats {
            pass: self.pass,
            ..Default::default()
        };

        let mut root = match self.structure.take() {
            None => {
                let mut root = VisualStructure::new(self.page, blocks);
                let region = root.rect.project(Axis::Horizontal);
                let separators =
                    detector.detect_within(Axis::Horizontal, &root.nested_blocks, region);
                stats.horizontal_splits = apply_separators(&mut root, Axis::Horizontal, separators);
                root
            }
            Some(mut root) => {
                stats.retained_leaves = refine_membership(&mut root, &blocks);
                stats.horizontal_splits = split_leaves(&mut root, Axis::Horizontal, detector);
                root
            }
        };
        stats.vertical_splits = split_leaves(&mut root, Axis::Vertical, detector);

        let mut order = 0;
        assign_ids(&mut root, "1".to_string(), &mut order);
        stats.leaves = root.leaves().len();
        self.structure = Some(root);

        debug!(
            "StructureBuilder::construct pass={} horizontal={} vertical={} leaves={} retained={}",
            stats.pass,
            stats.horizontal_splits,
            stats.vertical_splits,
            stats.leaves,
            stats.retained_leaves
        );
        stats
    }

    /// Rescale all separator weights to DoC values. Run once after the last pass.
    pub fn normalize(&mut self) -> Option<NormalizationSummary> {
        self.structure.as_mut().map(normalize::normalize)
    }
}

/// Reassign every leaf's blocks by origin containment.
///
/// Returns how many leaves received nothing and kept their previous blocks.
fn refine_membership(root: &mut VisualStructure, blocks: &[VisualBlock]) -> usize {
    let mut retained = 0;
    for leaf in root.leaves_mut() {
        let rect = leaf.rect;
        let fresh: Vec<VisualBlock> = if rect.is_empty() {
            Vec::new()
        } else {
            blocks
                .iter()
                .filter(|b| !b.bounds.is_empty() && rect.contains_point(b.bounds.x, b.bounds.y))
                .cloned()
                .collect()
        };
        if fresh.is_empty() {
            debug!(
                "leaf {} got no blocks, keeping {} from previous pass",
                leaf.id,
                leaf.nested_blocks.len()
            );
            retained += 1;
        } else {
            leaf.nested_blocks = fresh;
        }
    }
    retained
}

fn split_leaf(leaf: &mut VisualStructure, axis: Axis, detector: SeparatorDetector<'_>) -> usize {
    let region = leaf.rect.project(axis);
    let separators = detector.detect_within(axis, &leaf.nested_blocks, region);
    apply_separators(leaf, axis, separators)
}

fn split_leaves(root: &mut VisualStructure, axis: Axis, detector: SeparatorDetector<'_>) -> usize {
    let leaves = root.leaves_mut();
    #[cfg(feature = "parallel")]
    {
        leaves
            .into_par_iter()
            .map(|leaf| split_leaf(leaf, axis, detector))
            .sum()
    }
    #[cfg(not(feature = "parallel"))]
    {
        leaves
            .into_iter()
            .map(|leaf| split_leaf(leaf, axis, detector))
            .sum()
    }
}

fn assign_ids(node: &mut VisualStructure, id: String, order: &mut usize) {
    node.id = id;
    node.order = *order;
    *order += 1;
    for (i, child) in node.children.iter_mut().enumerate() {
        assign_ids(child, format!("{}-{}", node.id, i + 1), order);
    }
}
