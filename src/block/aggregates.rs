use super::{BlockId, BlockTree};
use serde::Serialize;

/// Statistics over a block's subtree.
///
/// Computed once per block on first access and immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAggregates {
    pub image_count: usize,
    pub is_img: bool,
    pub contains_table: bool,
    pub paragraph_count: usize,
    /// Characters of non-blank text, line breaks excluded.
    pub text_len: usize,
    /// Portion of `text_len` found inside `a` elements.
    pub link_text_len: usize,
    /// Visible `img` or `input` somewhere in the subtree.
    #[serde(skip)]
    pub has_visible_media: bool,
    /// Text boxes of the subtree joined by single spaces.
    pub content: String,
}

pub(super) fn compute(tree: &BlockTree, id: BlockId) -> BlockAggregates {
    let block = tree.get(id);
    if block.is_text {
        let trimmed = block.text.trim();
        let text_len = if trimmed.is_empty() {
            0
        } else {
            block
                .text
                .chars()
                .filter(|c| *c != '\n' && *c != '\r')
                .count()
        };
        return BlockAggregates {
            text_len,
            content: trimmed.to_string(),
            ..Default::default()
        };
    }

    let tag = block.tag.as_str();
    let mut agg = BlockAggregates {
        image_count: usize::from(tag == "img"),
        is_img: tag == "img",
        contains_table: tag == "table",
        paragraph_count: usize::from(tag == "p"),
        has_visible_media: block.visible && (tag == "img" || tag == "input"),
        ..Default::default()
    };
    for child in &block.children {
        let c = tree.aggregates(*child);
        agg.image_count += c.image_count;
        agg.contains_table |= c.contains_table;
        agg.paragraph_count += c.paragraph_count;
        agg.text_len += c.text_len;
        agg.link_text_len += c.link_text_len;
        agg.has_visible_media |= c.has_visible_media;
        if !c.content.is_empty() {
            if !agg.content.is_empty() {
                agg.content.push(' ');
            }
            agg.content.push_str(&c.content);
        }
    }
    if tag == "a" {
        agg.link_text_len = agg.text_len;
    }
    agg
}
