//! Separator detection between visual blocks.
//!
//! A separator is a maximal band along one axis that no visual block covers.
//! Detection projects every block onto the axis and carves the covered
//! intervals out of the region (`carve`), then scores what is left with the
//! weighting heuristics (`weights`).

mod carve;
mod weights;

pub use weights::width_bonus;

use crate::block::{ElementOutline, VisualBlock};
use crate::types::{Axis, Doc, Span};
use log::debug;
use serde::Serialize;

/// Weight every separator starts from before scoring.
pub const DEFAULT_WEIGHT: i32 = 10;

/// Gap between visual blocks along one axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Separator {
    pub start: i32,
    pub end: i32,
    pub axis: Axis,
    pub weight: i32,
    /// DoC assigned by global normalization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_weight: Option<Doc>,
}

impl Separator {
    pub fn new(start: i32, end: i32, axis: Axis) -> Self {
        Self {
            start,
            end,
            axis,
            weight: DEFAULT_WEIGHT,
            normalized_weight: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.end - self.start
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Key identifying the same gap across passes.
    pub fn key(&self) -> (Axis, i32, i32) {
        (self.axis, self.start, self.end)
    }
}

/// Finds and scores separators for a set of visual blocks.
///
/// `elements` are the outlines of every element on the page; they feed the
/// tag-overlap heuristic.
#[derive(Clone, Copy, Debug)]
pub struct SeparatorDetector<'a> {
    elements: &'a [ElementOutline],
}

impl<'a> SeparatorDetector<'a> {
    pub fn new(elements: &'a [ElementOutline]) -> Self {
        Self { elements }
    }

    /// Separators along `axis` over the whole page extent `[0, extent]`.
    pub fn detect(&self, axis: Axis, blocks: &[VisualBlock], extent: i32) -> Vec<Separator> {
        self.detect_within(axis, blocks, Span::new(0, extent))
    }

    /// Separators along `axis` inside `region`, ascending.
    ///
    /// Gaps touching either end of the region are not reported.
    pub fn detect_within(&self, axis: Axis, blocks: &[VisualBlock], region: Span) -> Vec<Separator> {
        let projections: Vec<Span> = blocks.iter().map(|b| b.bounds.project(axis)).collect();
        let mut separators: Vec<Separator> = carve::carve(region, &projections)
            .into_iter()
            .map(|gap| Separator::new(gap.start, gap.end, axis))
            .collect();
        for separator in &mut separators {
            weights::score(separator, blocks, self.elements);
        }
        debug!(
            "SeparatorDetector::detect axis={} region=[{}, {}] blocks={} found={}",
            axis,
            region.start,
            region.end,
            blocks.len(),
            separators.len()
        );
        separators
    }
}
