use crate::types::Rect;

/// Style property carrying the resolved background color.
pub const BACKGROUND_COLOR: &str = "background-color";
/// Style property carrying the resolved font weight.
pub const FONT_WEIGHT: &str = "font-weight";

/// Read-only view of one rendered box produced by an external layout engine.
///
/// The segmenter never mutates the layout tree; it snapshots what it needs
/// into its own block tree.
pub trait LayoutBox {
    /// Lower-case element name, e.g. `div`. Text boxes report `#text`.
    fn tag(&self) -> &str;

    fn is_text_node(&self) -> bool;

    fn is_block_level(&self) -> bool;

    fn is_visible(&self) -> bool;

    fn is_displayed(&self) -> bool;

    /// Content box in absolute page coordinates.
    fn absolute_bounds(&self) -> Rect;

    /// Child boxes in document order.
    fn children(&self) -> Vec<&dyn LayoutBox>;

    /// Raw text of a text box; element boxes may return an empty string.
    fn text(&self) -> &str;

    fn style_property(&self, name: &str) -> Option<String>;

    fn font_size(&self) -> i32;

    fn is_root_element(&self) -> bool;

    /// Background color set on this box itself.
    ///
    /// `None` means the box inherits its parent's color. Implementations
    /// backed by an engine that already resolves inheritance can return the
    /// final value here.
    fn effective_background_color(&self) -> Option<String> {
        self.style_property(BACKGROUND_COLOR)
            .map(|c| c.trim().to_ascii_lowercase())
            .filter(|c| !c.is_empty() && c != "transparent")
    }
}
