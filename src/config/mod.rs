//! JSON configuration for the segmenter.
//!
//! ```json
//! {
//!   "permittedDoc": 8,
//!   "passes": 3,
//!   "schedule": [{"width": 300, "height": 300}, {"width": 100, "height": 100}],
//!   "pageSize": {"width": 1280, "height": 2000}
//! }
//! ```
//! Every field is optional and falls back to [`SegmenterParams::default`].

use crate::error::SegmentationError;
use crate::layout::io::read_json_file;
use crate::segmenter::SegmenterParams;
use std::path::Path;

/// Load and validate segmenter parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<SegmenterParams, SegmentationError> {
    let params: SegmenterParams = read_json_file(path)?;
    params.validate()?;
    Ok(params)
}
