//! Serializer view of a visual structure.
//!
//! [`build_report`] walks the structure top-down. A node is expanded into its
//! children while the permitted DoC is at least the node's DoC; otherwise it
//! is emitted as a leaf carrying the content of every block below it.

use crate::block::VisualBlock;
use crate::structure::VisualStructure;
use crate::types::{Doc, Rect};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportNode {
    pub id: String,
    pub order: usize,
    pub doc: Doc,
    pub rect: Rect,
    pub image_count: usize,
    pub is_img: bool,
    pub contains_table: bool,
    pub paragraph_count: usize,
    pub text_len: usize,
    pub link_text_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ReportNode>,
}

impl ReportNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Emitted leaves in document order.
    pub fn leaves(&self) -> Vec<&ReportNode> {
        if self.is_leaf() {
            return vec![self];
        }
        self.children.iter().flat_map(|c| c.leaves()).collect()
    }
}

pub fn build_report(structure: &VisualStructure, permitted_doc: Doc) -> ReportNode {
    let blocks = structure.blocks();
    let first = blocks.first();
    let expand = !structure.is_leaf() && permitted_doc >= structure.doc();
    let children = if expand {
        structure
            .children
            .iter()
            .map(|c| build_report(c, permitted_doc))
            .collect()
    } else {
        Vec::new()
    };
    let content = if expand {
        String::new()
    } else {
        join_content(&blocks)
    };

    ReportNode {
        id: structure.id.clone(),
        order: structure.order,
        doc: structure.doc(),
        rect: structure.rect,
        image_count: blocks.iter().map(|b| b.stats.image_count).sum(),
        is_img: !blocks.is_empty() && blocks.iter().all(|b| b.stats.is_img),
        contains_table: blocks.iter().any(|b| b.stats.contains_table),
        paragraph_count: blocks.iter().map(|b| b.stats.paragraph_count).sum(),
        text_len: blocks.iter().map(|b| b.stats.text_len).sum(),
        link_text_len: blocks.iter().map(|b| b.stats.link_text_len).sum(),
        font_size: first.map(|b| b.font_size),
        font_weight: first.and_then(|b| b.font_weight.clone()),
        background_color: first.map(|b| b.background_color.clone()),
        content,
        children,
    }
}

fn join_content(blocks: &[&VisualBlock]) -> String {
    blocks
        .iter()
        .map(|b| b.content())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
