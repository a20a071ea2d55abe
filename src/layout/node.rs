use super::traits::{LayoutBox, BACKGROUND_COLOR, FONT_WEIGHT};
use crate::types::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag reported by text boxes.
pub const TEXT_TAG: &str = "#text";

fn default_true() -> bool {
    true
}

fn default_font_size() -> i32 {
    16
}

/// Owned snapshot of a rendered box tree.
///
/// This is the form layout dumps take on disk and the form tests use to build
/// synthetic pages. Flags default to a visible, displayed, block-level box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    pub bounds: Rect,
    #[serde(default = "default_true")]
    pub block_level: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub displayed: bool,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
    #[serde(default)]
    pub style: BTreeMap<String, String>,
    #[serde(default = "default_font_size")]
    pub font_size: i32,
    #[serde(default)]
    pub root: bool,
}

impl LayoutNode {
    /// Block-level element with no children.
    pub fn element(tag: &str, bounds: Rect) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            text: String::new(),
            bounds,
            block_level: true,
            visible: true,
            displayed: true,
            children: Vec::new(),
            style: BTreeMap::new(),
            font_size: default_font_size(),
            root: false,
        }
    }

    /// Inline text box.
    pub fn text_node(content: &str, bounds: Rect) -> Self {
        Self {
            tag: TEXT_TAG.to_string(),
            text: content.to_string(),
            block_level: false,
            ..Self::element(TEXT_TAG, bounds)
        }
    }

    pub fn with_child(mut self, child: LayoutNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = LayoutNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_style(mut self, name: &str, value: &str) -> Self {
        self.style.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_background(self, color: &str) -> Self {
        self.with_style(BACKGROUND_COLOR, color)
    }

    pub fn with_font(mut self, size: i32, weight: &str) -> Self {
        self.font_size = size;
        self.with_style(FONT_WEIGHT, weight)
    }

    pub fn inline(mut self) -> Self {
        self.block_level = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn not_displayed(mut self) -> Self {
        self.displayed = false;
        self
    }

    /// Mark this box as the document root element.
    pub fn as_root(mut self) -> Self {
        self.root = true;
        self
    }
}

impl LayoutBox for LayoutNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn is_text_node(&self) -> bool {
        self.tag == TEXT_TAG
    }

    fn is_block_level(&self) -> bool {
        self.block_level
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_displayed(&self) -> bool {
        self.displayed
    }

    fn absolute_bounds(&self) -> Rect {
        self.bounds
    }

    fn children(&self) -> Vec<&dyn LayoutBox> {
        self.children.iter().map(|c| c as &dyn LayoutBox).collect()
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.style.get(name).cloned()
    }

    fn font_size(&self) -> i32 {
        self.font_size
    }

    fn is_root_element(&self) -> bool {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let json = r##"{
            "tag": "body",
            "bounds": {"x": 0, "y": 0, "width": 800, "height": 600},
            "root": true,
            "children": [
                {"tag": "#text", "text": "hello", "blockLevel": false,
                 "bounds": {"x": 0, "y": 0, "width": 40, "height": 16}}
            ]
        }"##;
        let node: LayoutNode = serde_json::from_str(json).unwrap();
        assert!(node.is_root_element());
        assert!(node.is_visible() && node.is_displayed() && node.is_block_level());
        assert_eq!(node.font_size(), 16);
        let kids = node.children();
        assert_eq!(kids.len(), 1);
        assert!(kids[0].is_text_node());
        assert_eq!(kids[0].text(), "hello");
    }

    #[test]
    fn transparent_background_is_inherited() {
        let a = LayoutNode::element("div", Rect::new(0, 0, 10, 10)).with_background("transparent");
        assert_eq!(a.effective_background_color(), None);
        let b = LayoutNode::element("div", Rect::new(0, 0, 10, 10)).with_background("#FF0000");
        assert_eq!(b.effective_background_color().as_deref(), Some("#ff0000"));
    }
}
