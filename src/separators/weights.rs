use super::Separator;
use crate::block::{ElementOutline, VisualBlock};
use crate::types::Axis;

/// Bonus for the separator width: `2 * max(1, ceil(width / 5))`.
pub fn width_bonus(width: i32) -> i32 {
    let steps = (width.max(0) + 4) / 5;
    2 * steps.max(1)
}

pub(super) fn score(separator: &mut Separator, blocks: &[VisualBlock], elements: &[ElementOutline]) {
    separator.weight += width_bonus(separator.width());

    if elements
        .iter()
        .any(|el| el.tag == "hr" && overlaps(separator, el))
    {
        separator.weight += 2;
    }

    let axis = separator.axis;
    let before: Vec<&VisualBlock> = blocks
        .iter()
        .filter(|b| b.bounds.project(axis).end == separator.start - 1)
        .collect();
    let after: Vec<&VisualBlock> = blocks
        .iter()
        .filter(|b| b.bounds.project(axis).start == separator.end + 1)
        .collect();
    if before.is_empty() || after.is_empty() {
        return;
    }

    for top in &before {
        for bottom in &after {
            if top.background_color != bottom.background_color {
                separator.weight += 2;
            }
        }
    }

    if axis != Axis::Horizontal {
        return;
    }
    let pairs = || before.iter().flat_map(|t| after.iter().map(move |b| (*t, *b)));
    if pairs().any(|(t, b)| t.font_size != b.font_size) {
        separator.weight += 2;
    }
    if pairs().any(|(t, b)| t.font_size < b.font_size) {
        separator.weight += 2;
    }
    if pairs().any(|(t, b)| t.is_text && b.is_text) {
        separator.weight -= 2;
    }
}

/// Element straddles either edge of the separator or lies inside it.
fn overlaps(separator: &Separator, element: &ElementOutline) -> bool {
    let proj = element.bounds.project(separator.axis);
    let (lo, hi) = (proj.start, proj.end);
    let (s, e) = (separator.start, separator.end);
    (lo > s && lo < e && hi > e) || (lo < s && hi > s && hi < e) || (lo >= s && hi <= e)
}
