//! Parameter types configuring the segmenter.
//!
//! Defaults follow the usual VIPS run: ten refinement passes with a size
//! threshold shrinking from 350x400 down to 1x1, and every node of the
//! visual structure expanded (permitted DoC 11).

use crate::error::SegmentationError;
use crate::types::{Doc, Rect, SizeThreshold};
use serde::{Deserialize, Serialize};

/// Segmenter-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmenterParams {
    /// Nodes whose DoC does not exceed this value are expanded in the report.
    pub permitted_doc: Doc,
    /// Number of refinement passes (>=1).
    pub passes: usize,
    /// Size threshold per pass.
    pub schedule: ThresholdSchedule,
    /// Page size override; `None` uses the bounds of the layout root.
    pub page_size: Option<PageSize>,
}

impl Default for SegmenterParams {
    fn default() -> Self {
        Self {
            permitted_doc: Doc::MAX,
            passes: 10,
            schedule: ThresholdSchedule::default(),
            page_size: None,
        }
    }
}

impl SegmenterParams {
    /// Reject values outside their documented ranges.
    pub fn validate(&self) -> Result<(), SegmentationError> {
        Doc::new(i32::from(self.permitted_doc.value()))?;
        validate_passes(self.passes)?;
        self.schedule.validate()?;
        if let Some(size) = self.page_size {
            if size.width <= 0 || size.height <= 0 {
                return Err(SegmentationError::InvalidConfiguration(format!(
                    "page size must be positive, got {}x{}",
                    size.width, size.height
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_passes(passes: usize) -> Result<(), SegmentationError> {
    if passes == 0 {
        return Err(SegmentationError::InvalidConfiguration(
            "at least one refinement pass is required".to_string(),
        ));
    }
    Ok(())
}

/// Page dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: i32,
    pub height: i32,
}

impl PageSize {
    pub fn rect(self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Size thresholds indexed by pass; passes past the end reuse the last entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdSchedule {
    steps: Vec<SizeThreshold>,
}

impl ThresholdSchedule {
    pub fn new(steps: Vec<SizeThreshold>) -> Result<Self, SegmentationError> {
        let schedule = Self { steps };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Same threshold on every pass.
    pub fn uniform(threshold: SizeThreshold) -> Self {
        Self {
            steps: vec![threshold],
        }
    }

    pub fn steps(&self) -> &[SizeThreshold] {
        &self.steps
    }

    /// Threshold for the zero-based `pass`.
    pub fn for_pass(&self, pass: usize) -> SizeThreshold {
        self.steps
            .get(pass)
            .or_else(|| self.steps.last())
            .copied()
            .unwrap_or_default()
    }

    /// Reject an empty schedule or a non-positive step. Deserialized
    /// schedules skip the check in [`ThresholdSchedule::new`].
    pub fn validate(&self) -> Result<(), SegmentationError> {
        if self.steps.is_empty() {
            return Err(SegmentationError::InvalidConfiguration(
                "threshold schedule is empty".to_string(),
            ));
        }
        for step in &self.steps {
            SizeThreshold::new(step.width, step.height)?;
        }
        Ok(())
    }
}

impl Default for ThresholdSchedule {
    fn default() -> Self {
        const STEPS: [(i32, i32); 10] = [
            (350, 400),
            (300, 350),
            (250, 300),
            (200, 250),
            (150, 200),
            (100, 150),
            (100, 100),
            (80, 80),
            (10, 40),
            (1, 1),
        ];
        Self {
            steps: STEPS
                .iter()
                .map(|&(width, height)| SizeThreshold { width, height })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_reuses_last_step() {
        let schedule = ThresholdSchedule::default();
        assert_eq!(schedule.for_pass(0), SizeThreshold { width: 350, height: 400 });
        assert_eq!(schedule.for_pass(9), SizeThreshold { width: 1, height: 1 });
        assert_eq!(schedule.for_pass(25), SizeThreshold { width: 1, height: 1 });
    }

    #[test]
    fn empty_schedule_is_rejected() {
        assert!(ThresholdSchedule::new(Vec::new()).is_err());
        assert!(ThresholdSchedule::new(vec![SizeThreshold { width: 0, height: 5 }]).is_err());
    }

    #[test]
    fn defaults_are_valid() {
        let params = SegmenterParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.passes, params.schedule.steps().len());
    }

    #[test]
    fn zero_passes_fail_validation() {
        let params = SegmenterParams {
            passes: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SegmentationError::InvalidConfiguration(_))
        ));
    }
}
