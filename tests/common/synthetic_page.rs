use vips_segmenter::layout::LayoutNode;
use vips_segmenter::Rect;

/// Text box sized roughly like one line of 16px text.
pub fn text(content: &str, x: i32, y: i32) -> LayoutNode {
    let width = 8 * content.chars().count() as i32;
    LayoutNode::text_node(content, Rect::new(x, y, width.max(1), 16))
}

/// Block element holding a single line of text at its origin.
pub fn text_block(tag: &str, rect: Rect, content: &str) -> LayoutNode {
    LayoutNode::element(tag, rect).with_child(text(content, rect.x, rect.y))
}

pub fn body(width: i32, height: i32) -> LayoutNode {
    LayoutNode::element("body", Rect::new(0, 0, width, height)).as_root()
}

/// 1000x600 page with two 300x200 columns separated by a 40px gap.
pub fn two_columns() -> LayoutNode {
    body(1000, 600)
        .with_child(text_block("div", Rect::new(330, 200, 300, 200), "left column"))
        .with_child(text_block("div", Rect::new(670, 200, 300, 200), "right column"))
}

/// Two text blocks with a horizontal rule in the gap between them.
pub fn rule_separated() -> LayoutNode {
    body(1000, 600)
        .with_child(text_block("div", Rect::new(100, 100, 800, 150), "above the rule"))
        .with_child(LayoutNode::element("hr", Rect::new(100, 300, 800, 2)))
        .with_child(text_block("div", Rect::new(100, 350, 800, 150), "below the rule"))
}

/// Article-like page: header, navigation, two content columns and a footer.
pub fn article() -> LayoutNode {
    let nav = LayoutNode::element("ul", Rect::new(0, 110, 1000, 40)).with_children(
        ["Home", "News", "About"]
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let x = 20 + 120 * i as i32;
                LayoutNode::element("li", Rect::new(x, 115, 100, 30))
                    .with_child(LayoutNode::element("a", Rect::new(x, 120, 60, 16))
                        .inline()
                        .with_child(text(label, x, 120)))
            }),
    );

    let left = LayoutNode::element("div", Rect::new(0, 180, 600, 480))
        .with_child(
            LayoutNode::element("h1", Rect::new(10, 190, 580, 40))
                .with_font(32, "700")
                .with_child(text("Headline", 10, 190)),
        )
        .with_child(text_block("p", Rect::new(10, 250, 580, 180), "First paragraph of the story."))
        .with_child(text_block("p", Rect::new(10, 450, 580, 180), "Second paragraph of the story."));

    let right = LayoutNode::element("div", Rect::new(650, 180, 350, 480))
        .with_background("#f0f0f0")
        .with_child(LayoutNode::element("img", Rect::new(660, 190, 300, 200)).inline())
        .with_child(text_block("p", Rect::new(660, 420, 320, 100), "Photo caption"));

    body(1000, 800)
        .with_style("font-weight", "400")
        .with_child(
            LayoutNode::element("div", Rect::new(0, 0, 1000, 90))
                .with_background("#202060")
                .with_child(text("Daily Example", 20, 30)),
        )
        .with_child(nav)
        .with_child(
            LayoutNode::element("div", Rect::new(0, 180, 1000, 480))
                .with_child(left)
                .with_child(right),
        )
        .with_child(
            LayoutNode::element("div", Rect::new(0, 700, 1000, 80))
                .with_background("#333333")
                .with_child(text("Footer notes", 20, 730)),
        )
}
