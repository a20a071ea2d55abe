use crate::rules::DivisionStats;
use crate::structure::ConstructStats;
use crate::types::SizeThreshold;
use serde::Serialize;

/// What one refinement pass did.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassStage {
    /// One-based pass number.
    pub pass: usize,
    pub threshold: SizeThreshold,
    pub division: DivisionStats,
    pub structure: ConstructStats,
    pub elapsed_ms: f64,
}

impl PassStage {
    pub fn visual_blocks(&self) -> usize {
        self.division.visual_blocks
    }

    pub fn leaves(&self) -> usize {
        self.structure.leaves
    }
}
