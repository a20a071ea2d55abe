//! JSON helpers for layout dumps and reports.
//!
//! - `load_layout`: read a [`LayoutNode`] tree from disk.
//! - `read_json_file`: deserialize any value from a JSON file.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::LayoutNode;
use crate::error::SegmentationError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a layout snapshot previously dumped by a rendering engine.
pub fn load_layout(path: &Path) -> Result<LayoutNode, SegmentationError> {
    read_json_file(path)
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, SegmentationError> {
    let contents = fs::read_to_string(path).map_err(|source| SegmentationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SegmentationError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), SegmentationError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| SegmentationError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| SegmentationError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), SegmentationError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SegmentationError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[test]
    fn layout_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/page.json");
        let page = LayoutNode::element("body", Rect::new(0, 0, 100, 50))
            .as_root()
            .with_child(LayoutNode::text_node("hi", Rect::new(0, 0, 10, 10)));
        write_json_file(&path, &page).unwrap();
        let loaded = load_layout(&path).unwrap();
        assert_eq!(loaded, page);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_layout(Path::new("/nonexistent/page.json")).unwrap_err();
        assert!(matches!(err, SegmentationError::Io { .. }));
    }
}
