use super::{Block, BlockAggregates, BlockId, BlockTree};
use crate::types::{Doc, Rect};
use serde::Serialize;

/// Owned snapshot of a block the rules declared visual.
///
/// Visual blocks outlive the pass that produced them (they move into the
/// visual structure), so they carry copies instead of tree references.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualBlock {
    pub id: BlockId,
    pub tag: String,
    pub bounds: Rect,
    pub doc: Doc,
    /// Text box, or element whose children are all text boxes.
    pub is_text: bool,
    pub font_size: i32,
    pub font_weight: Option<String>,
    pub background_color: String,
    pub stats: BlockAggregates,
}

impl VisualBlock {
    pub(super) fn from_block(tree: &BlockTree, block: &Block) -> Self {
        let plain_text = block.is_text
            || (!block.children.is_empty() && tree.children(block.id).all(|c| c.is_text));
        Self {
            id: block.id,
            tag: block.tag.clone(),
            bounds: block.bounds,
            doc: block.doc,
            is_text: plain_text,
            font_size: block.font_size,
            font_weight: block.font_weight.clone(),
            background_color: block.background_color.clone(),
            stats: tree.aggregates(block.id).clone(),
        }
    }

    pub fn content(&self) -> &str {
        &self.stats.content
    }
}

/// Tag and rectangle of one element box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElementOutline {
    pub tag: String,
    pub bounds: Rect,
}

#[cfg(test)]
impl VisualBlock {
    /// Plain `div` block with default style, for unit tests.
    pub(crate) fn synthetic(id: u32, bounds: Rect) -> Self {
        Self {
            id: BlockId(id),
            tag: "div".to_string(),
            bounds,
            doc: Doc::MAX,
            is_text: false,
            font_size: 16,
            font_weight: Some("400".to_string()),
            background_color: "#ffffff".to_string(),
            stats: BlockAggregates::default(),
        }
    }
}
