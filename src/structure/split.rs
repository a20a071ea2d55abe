use super::VisualStructure;
use crate::separators::Separator;
use crate::types::{Axis, Rect};
use log::trace;

/// Split `node` along `axis` by each separator in ascending order.
///
/// Returns how many separators produced a split. Separators that do not lie
/// strictly inside the node are skipped.
pub(crate) fn apply_separators(
    node: &mut VisualStructure,
    axis: Axis,
    separators: Vec<Separator>,
) -> usize {
    let mut applied = 0;
    for separator in separators {
        if split(node, axis, separator) {
            applied += 1;
        }
    }
    applied
}

fn fits(rect: Rect, axis: Axis, separator: &Separator) -> bool {
    let start = rect.start(axis);
    separator.start > start && separator.end < start + rect.size(axis)
}

fn split(node: &mut VisualStructure, axis: Axis, separator: Separator) -> bool {
    if !fits(node.rect, axis, &separator) {
        trace!(
            "separator [{}, {}] outside node {:?}, skipped",
            separator.start,
            separator.end,
            node.rect
        );
        return false;
    }

    if node.is_leaf() {
        let source = VisualStructure::new(node.rect, std::mem::take(&mut node.nested_blocks));
        let (first, second) = halves(source, axis, separator);
        node.children = vec![first, second];
        return true;
    }

    let Some(index) = node
        .children
        .iter()
        .position(|child| fits(child.rect, axis, &separator))
    else {
        trace!(
            "no child of {:?} holds separator [{}, {}]",
            node.rect,
            separator.start,
            separator.end
        );
        return false;
    };
    if !node.children[index].is_leaf() {
        return split(&mut node.children[index], axis, separator);
    }
    let replaced = node.children.remove(index);
    let (first, second) = halves(replaced, axis, separator);
    node.children.insert(index, second);
    node.children.insert(index, first);
    true
}

/// Cut `source` at the separator midpoint into two tiling halves.
fn halves(
    source: VisualStructure,
    axis: Axis,
    separator: Separator,
) -> (VisualStructure, VisualStructure) {
    let cut = (separator.start + separator.end + 1) / 2;
    let (rect_a, rect_b) = source.rect.split_at(axis, cut);
    let (blocks_a, blocks_b): (Vec<_>, Vec<_>) = source
        .nested_blocks
        .into_iter()
        .partition(|b| b.bounds.start(axis) <= separator.start);

    let mut first = VisualStructure::new(rect_a, blocks_a);
    let mut second = VisualStructure::new(rect_b, blocks_b);
    let inherited = source
        .horizontal_separators
        .into_iter()
        .chain(source.vertical_separators);
    for sep in inherited {
        for half in [&mut first, &mut second] {
            if touches(half.rect, &sep) {
                half.separators_mut(sep.axis).push(sep.clone());
            }
        }
    }
    for half in [&mut first, &mut second] {
        let list = half.separators_mut(axis);
        list.push(separator.clone());
        list.sort_by_key(|s| s.start);
    }
    (first, second)
}

/// Separator span intersects the closed projection of `rect` on its axis.
fn touches(rect: Rect, separator: &Separator) -> bool {
    let proj = rect.project(separator.axis);
    separator.start <= proj.end && separator.end >= proj.start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::VisualBlock;

    fn block(id: u32, rect: Rect) -> VisualBlock {
        VisualBlock::synthetic(id, rect)
    }

    fn root() -> VisualStructure {
        VisualStructure::new(
            Rect::new(0, 0, 1000, 600),
            vec![
                block(1, Rect::new(0, 0, 1000, 100)),
                block(2, Rect::new(0, 200, 1000, 100)),
                block(3, Rect::new(0, 400, 1000, 100)),
            ],
        )
    }

    #[test]
    fn successive_separators_replace_children_in_place() {
        let mut node = root();
        let seps = vec![
            Separator::new(101, 199, Axis::Horizontal),
            Separator::new(301, 399, Axis::Horizontal),
        ];
        assert_eq!(apply_separators(&mut node, Axis::Horizontal, seps), 2);
        assert_eq!(node.children.len(), 3);
        assert!(node.nested_blocks.is_empty());

        let heights: i32 = node.children.iter().map(|c| c.rect.height).sum();
        assert_eq!(heights, 600);
        for pair in node.children.windows(2) {
            assert_eq!(pair[0].rect.bottom(), pair[1].rect.y);
        }
        let ids: Vec<Vec<u32>> = node
            .children
            .iter()
            .map(|c| c.nested_blocks.iter().map(|b| b.id.0).collect())
            .collect();
        assert_eq!(ids, vec![vec![1], vec![2], vec![3]]);

        let middle = &node.children[1];
        let bounds: Vec<(i32, i32)> = middle
            .horizontal_separators
            .iter()
            .map(|s| (s.start, s.end))
            .collect();
        assert_eq!(bounds, vec![(101, 199), (301, 399)]);
        assert_eq!(node.children[0].horizontal_separators.len(), 1);
        assert_eq!(node.children[2].horizontal_separators.len(), 1);
    }

    #[test]
    fn separator_outside_node_is_ignored() {
        let mut node = root();
        let seps = vec![Separator::new(0, 50, Axis::Horizontal)];
        assert_eq!(apply_separators(&mut node, Axis::Horizontal, seps), 0);
        assert!(node.is_leaf());
        assert_eq!(node.nested_blocks.len(), 3);
    }

    #[test]
    fn other_axis_separators_carry_to_both_halves() {
        let mut leaf = VisualStructure::new(
            Rect::new(0, 0, 500, 600),
            vec![
                block(1, Rect::new(0, 0, 500, 100)),
                block(2, Rect::new(0, 300, 500, 100)),
            ],
        );
        leaf.vertical_separators.push(Separator::new(480, 520, Axis::Vertical));
        let mut parent = VisualStructure::new(Rect::new(0, 0, 500, 600), Vec::new());
        parent.children = vec![leaf];
        let applied = apply_separators(
            &mut parent,
            Axis::Horizontal,
            vec![Separator::new(101, 299, Axis::Horizontal)],
        );
        assert_eq!(applied, 1);
        assert_eq!(parent.children.len(), 2);
        for half in &parent.children {
            assert_eq!(half.vertical_separators.len(), 1);
            assert_eq!(half.horizontal_separators.len(), 1);
        }
    }
}
