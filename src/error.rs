//! Error type shared by the segmentation pipeline and its file helpers.
//!
//! Only `MissingLayoutRoot` aborts a run. Configuration errors are returned by
//! setters, which leave the previous value in place. Style misses are absorbed
//! where they occur and replaced by documented defaults.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SegmentationError {
    /// No layout root was supplied to the block tree builder.
    #[error("layout tree has no root box")]
    MissingLayoutRoot,

    /// Permitted DoC, size threshold or pass count outside the accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A style property was not resolved for a box.
    #[error("style property `{property}` missing on <{tag}>")]
    StyleLookupMiss { tag: String, property: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to process JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
