use crate::block::VisualBlock;
use crate::separators::Separator;
use crate::types::{Axis, Doc, Rect};
use serde::Serialize;

/// Node of the spatial partition tree.
///
/// Leaves own the visual blocks inside their rectangle; internal nodes hand
/// their blocks down when they are split, so only leaves carry
/// `nested_blocks`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStructure {
    /// Hierarchical id: `1` for the root, `1-2` for its second child.
    pub id: String,
    /// Pre-order index across the whole tree.
    pub order: usize,
    pub rect: Rect,
    pub nested_blocks: Vec<VisualBlock>,
    pub children: Vec<VisualStructure>,
    pub horizontal_separators: Vec<Separator>,
    pub vertical_separators: Vec<Separator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc: Option<Doc>,
}

impl VisualStructure {
    pub fn new(rect: Rect, nested_blocks: Vec<VisualBlock>) -> Self {
        Self {
            id: String::new(),
            order: 0,
            rect,
            nested_blocks,
            children: Vec::new(),
            horizontal_separators: Vec::new(),
            vertical_separators: Vec::new(),
            doc: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Explicit DoC if one was set, else the strongest bounding separator.
    ///
    /// Before normalization separators carry no DoC and the node reports
    /// [`Doc::MIN`].
    pub fn doc(&self) -> Doc {
        self.doc
            .or_else(|| {
                self.horizontal_separators
                    .iter()
                    .chain(&self.vertical_separators)
                    .filter_map(|s| s.normalized_weight)
                    .max()
            })
            .unwrap_or(Doc::MIN)
    }

    pub fn set_doc(&mut self, doc: Doc) {
        self.doc = Some(doc);
    }

    pub fn separators(&self, axis: Axis) -> &[Separator] {
        match axis {
            Axis::Horizontal => &self.horizontal_separators,
            Axis::Vertical => &self.vertical_separators,
        }
    }

    pub(crate) fn separators_mut(&mut self, axis: Axis) -> &mut Vec<Separator> {
        match axis {
            Axis::Horizontal => &mut self.horizontal_separators,
            Axis::Vertical => &mut self.vertical_separators,
        }
    }

    pub fn leaves(&self) -> Vec<&VisualStructure> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    pub fn leaves_mut(&mut self) -> Vec<&mut VisualStructure> {
        let mut out = Vec::new();
        collect_leaves_mut(self, &mut out);
        out
    }

    /// Pre-order walk of the subtree, this node first.
    pub fn iter(&self) -> Vec<&VisualStructure> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Visual blocks under this node in leaf order.
    pub fn blocks(&self) -> Vec<&VisualBlock> {
        self.leaves()
            .into_iter()
            .flat_map(|leaf| leaf.nested_blocks.iter())
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&VisualStructure> {
        self.iter().into_iter().find(|n| n.id == id)
    }
}

fn collect_leaves<'a>(node: &'a VisualStructure, out: &mut Vec<&'a VisualStructure>) {
    if node.children.is_empty() {
        out.push(node);
    } else {
        for child in &node.children {
            collect_leaves(child, out);
        }
    }
}

fn collect_leaves_mut<'a>(node: &'a mut VisualStructure, out: &mut Vec<&'a mut VisualStructure>) {
    if node.children.is_empty() {
        out.push(node);
    } else {
        for child in &mut node.children {
            collect_leaves_mut(child, out);
        }
    }
}
