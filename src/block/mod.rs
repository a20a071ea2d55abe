//! Block tree mirroring the rendered box tree.
//!
//! The tree is an arena: [`BlockTree`] owns every [`Block`] and links them by
//! [`BlockId`]. It is built once per page; the divisibility rules mutate the
//! division flags in place, so they are reset before every refinement pass.
//! Subtree aggregates do not depend on division and survive the reset.
//!
//! Style that the rules need (background color, font weight) is resolved
//! while building, so nothing downstream walks back up to parents.

mod aggregates;
mod visual;

pub use aggregates::BlockAggregates;
pub use visual::{ElementOutline, VisualBlock};

use crate::error::SegmentationError;
use crate::layout::{LayoutBox, FONT_WEIGHT};
use crate::types::{Doc, Rect};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// Background of the root when the page does not set one.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Index of a block inside its [`BlockTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u32);

impl BlockId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of the block tree.
#[derive(Clone, Debug)]
pub struct Block {
    pub id: BlockId,
    pub tag: String,
    pub bounds: Rect,
    pub is_text: bool,
    pub block_level: bool,
    pub visible: bool,
    pub displayed: bool,
    pub root_element: bool,
    pub text: String,
    pub font_size: i32,
    /// `None` when the layout engine did not resolve a weight for the box.
    pub font_weight: Option<String>,
    /// Effective color after inheritance.
    pub background_color: String,
    pub parent: Option<BlockId>,
    pub children: Vec<BlockId>,
    pub is_visual_block: bool,
    pub is_dividable: bool,
    pub already_divided: bool,
    pub doc: Doc,
    aggregates: OnceCell<BlockAggregates>,
}

impl Block {
    /// Sized box or non-blank text.
    pub fn is_valid_node(&self) -> bool {
        if self.is_text {
            !self.text.trim().is_empty()
        } else {
            !self.bounds.is_empty()
        }
    }

    fn reset_division(&mut self) {
        self.is_visual_block = false;
        self.is_dividable = true;
        self.already_divided = false;
        self.doc = Doc::UNASSIGNED;
    }
}

/// Arena of blocks in pre-order; index 0 is the root.
#[derive(Clone, Debug)]
pub struct BlockTree {
    blocks: Vec<Block>,
}

impl BlockTree {
    /// Mirror a layout tree 1:1, preserving child order.
    pub fn build(root: Option<&dyn LayoutBox>) -> Result<Self, SegmentationError> {
        let root = root.ok_or(SegmentationError::MissingLayoutRoot)?;
        let mut tree = Self { blocks: Vec::new() };
        tree.push(root, None, DEFAULT_BACKGROUND, None);
        debug!(
            "BlockTree::build blocks={} root=<{}> bounds={:?}",
            tree.blocks.len(),
            root.tag(),
            root.absolute_bounds()
        );
        Ok(tree)
    }

    fn push(
        &mut self,
        node: &dyn LayoutBox,
        parent: Option<BlockId>,
        parent_background: &str,
        parent_weight: Option<&str>,
    ) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        let is_text = node.is_text_node();
        let background_color = match resolve_background(node) {
            Ok(color) => color,
            Err(err) => {
                trace!("{err}; inheriting {parent_background}");
                parent_background.to_string()
            }
        };
        let font_weight = if is_text {
            parent_weight.map(str::to_string)
        } else {
            match resolve_style(node, FONT_WEIGHT) {
                Ok(weight) => Some(weight),
                Err(err) => {
                    trace!("{err}");
                    None
                }
            }
        };
        self.blocks.push(Block {
            id,
            tag: node.tag().to_string(),
            bounds: node.absolute_bounds(),
            is_text,
            block_level: node.is_block_level(),
            visible: node.is_visible(),
            displayed: node.is_displayed(),
            root_element: node.is_root_element(),
            text: if is_text {
                node.text().to_string()
            } else {
                String::new()
            },
            font_size: node.font_size(),
            font_weight: font_weight.clone(),
            background_color: background_color.clone(),
            parent,
            children: Vec::new(),
            is_visual_block: false,
            is_dividable: true,
            already_divided: false,
            doc: Doc::UNASSIGNED,
            aggregates: OnceCell::new(),
        });
        if !is_text {
            for child in node.children() {
                let child_id = self.push(child, Some(id), &background_color, font_weight.as_deref());
                self.blocks[id.index()].children.push(child_id);
            }
        }
        id
    }

    pub fn root(&self) -> BlockId {
        BlockId(0)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.blocks[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Bounds of the root box.
    pub fn page(&self) -> Rect {
        self.blocks.first().map(|b| b.bounds).unwrap_or_default()
    }

    pub fn children(&self, id: BlockId) -> impl Iterator<Item = &Block> {
        self.get(id).children.iter().map(move |c| self.get(*c))
    }

    /// Pre-order walk of the subtree below `id`, excluding `id` itself.
    pub fn descendants(&self, id: BlockId) -> Vec<BlockId> {
        let mut out = Vec::new();
        let mut stack: Vec<BlockId> = self.get(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.get(next).children.iter().rev().copied());
        }
        out
    }

    pub fn previous_sibling(&self, id: BlockId) -> Option<BlockId> {
        let parent = self.get(id).parent?;
        let siblings = &self.get(parent).children;
        let pos = siblings.iter().position(|s| *s == id)?;
        pos.checked_sub(1).map(|p| siblings[p])
    }

    /// Aggregated statistics of the subtree, computed on first use.
    pub fn aggregates(&self, id: BlockId) -> &BlockAggregates {
        self.get(id)
            .aggregates
            .get_or_init(|| aggregates::compute(self, id))
    }

    /// Clear division state so the tree can be divided again.
    pub fn reset_division(&mut self) {
        for block in &mut self.blocks {
            block.reset_division();
        }
    }

    /// Every block currently flagged visual, in document order.
    pub fn visual_blocks(&self) -> Vec<VisualBlock> {
        self.blocks
            .iter()
            .filter(|b| b.is_visual_block)
            .map(|b| VisualBlock::from_block(self, b))
            .collect()
    }

    /// Tag and rectangle of every element box, used for tag-overlap scoring.
    pub fn outlines(&self) -> Vec<ElementOutline> {
        self.blocks
            .iter()
            .filter(|b| !b.is_text)
            .map(|b| ElementOutline {
                tag: b.tag.clone(),
                bounds: b.bounds,
            })
            .collect()
    }
}

fn resolve_style(node: &dyn LayoutBox, property: &str) -> Result<String, SegmentationError> {
    node.style_property(property)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SegmentationError::StyleLookupMiss {
            tag: node.tag().to_string(),
            property: property.to_string(),
        })
}

fn resolve_background(node: &dyn LayoutBox) -> Result<String, SegmentationError> {
    node.effective_background_color()
        .ok_or_else(|| SegmentationError::StyleLookupMiss {
            tag: node.tag().to_string(),
            property: crate::layout::BACKGROUND_COLOR.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutNode;

    fn page() -> LayoutNode {
        LayoutNode::element("body", Rect::new(0, 0, 400, 300))
            .as_root()
            .with_background("#eeeeee")
            .with_child(
                LayoutNode::element("div", Rect::new(0, 0, 400, 100))
                    .with_font(16, "400")
                    .with_child(LayoutNode::text_node("Hello\nworld", Rect::new(0, 0, 80, 16)))
                    .with_child(
                        LayoutNode::element("a", Rect::new(0, 20, 40, 16))
                            .inline()
                            .with_child(LayoutNode::text_node("link", Rect::new(0, 20, 40, 16))),
                    ),
            )
            .with_child(
                LayoutNode::element("div", Rect::new(0, 100, 400, 200))
                    .with_background("#000000")
                    .with_child(LayoutNode::element("img", Rect::new(0, 100, 50, 50)))
                    .with_child(LayoutNode::element("p", Rect::new(0, 160, 200, 20))),
            )
    }

    #[test]
    fn missing_root_is_fatal() {
        let err = BlockTree::build(None).unwrap_err();
        assert!(matches!(err, SegmentationError::MissingLayoutRoot));
    }

    #[test]
    fn mirrors_layout_in_preorder() {
        let layout = page();
        let tree = BlockTree::build(Some(&layout)).unwrap();
        assert_eq!(tree.len(), 8);
        let tags: Vec<&str> = tree.iter().map(|b| b.tag.as_str()).collect();
        assert_eq!(tags, ["body", "div", "#text", "a", "#text", "div", "img", "p"]);
        let root = tree.get(tree.root());
        assert_eq!(root.children.len(), 2);
        assert!(root.root_element);
        assert_eq!(tree.descendants(tree.root()).len(), tree.len() - 1);
    }

    #[test]
    fn background_is_inherited() {
        let layout = page();
        let tree = BlockTree::build(Some(&layout)).unwrap();
        let colors: Vec<&str> = tree.iter().map(|b| b.background_color.as_str()).collect();
        assert_eq!(colors[0], "#eeeeee");
        assert_eq!(colors[1], "#eeeeee");
        assert_eq!(colors[5], "#000000");
        assert_eq!(colors[6], "#000000");
    }

    #[test]
    fn aggregates_cover_subtree() {
        let layout = page();
        let tree = BlockTree::build(Some(&layout)).unwrap();
        let first = tree.aggregates(BlockId(1));
        assert_eq!(first.text_len, "Helloworld".len() + "link".len());
        assert_eq!(first.link_text_len, 4);
        let second = tree.aggregates(BlockId(5));
        assert_eq!(second.image_count, 1);
        assert_eq!(second.paragraph_count, 1);
        assert!(!second.is_img);
        assert!(tree.aggregates(BlockId(6)).is_img);
        assert_eq!(tree.aggregates(tree.root()).image_count, 1);
    }

    #[test]
    fn previous_sibling_follows_child_order() {
        let layout = page();
        let tree = BlockTree::build(Some(&layout)).unwrap();
        assert_eq!(tree.previous_sibling(BlockId(5)), Some(BlockId(1)));
        assert_eq!(tree.previous_sibling(BlockId(1)), None);
        assert_eq!(tree.previous_sibling(tree.root()), None);
    }
}
