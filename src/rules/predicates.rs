use super::Decision;
use crate::block::{Block, BlockId, BlockTree};
use crate::types::{Doc, SizeThreshold};

pub(super) fn apply(
    rule: u8,
    tree: &BlockTree,
    id: BlockId,
    threshold: SizeThreshold,
) -> Option<Decision> {
    match rule {
        1 => rule_one(tree, id),
        2 => rule_two(tree, id),
        3 => rule_three(tree, id),
        4 => rule_four(tree, id),
        5 => rule_five(tree, id),
        6 => rule_six(tree, id),
        7 => rule_seven(tree, id),
        8 => rule_eight(tree, id, threshold),
        9 => rule_nine(tree, id, threshold),
        10 => rule_ten(tree, id),
        11 => rule_eleven(tree, id),
        12 => rule_twelve(tree, id),
        _ => None,
    }
}

fn terminal(doc: u8) -> Option<Decision> {
    Some(Decision::Terminal(Doc::fixed(doc)))
}

fn valid_descendants(tree: &BlockTree, id: BlockId) -> usize {
    tree.descendants(id)
        .into_iter()
        .filter(|d| tree.get(*d).is_valid_node())
        .count()
}

/// Inline element whose children are all text or virtual text.
pub(super) fn is_virtual_text(tree: &BlockTree, block: &Block) -> bool {
    !block.is_text
        && !block.block_level
        && !block.children.is_empty()
        && tree
            .children(block.id)
            .all(|c| c.is_text || is_virtual_text(tree, c))
}

fn is_text_like(tree: &BlockTree, block: &Block) -> bool {
    block.is_text || is_virtual_text(tree, block)
}

fn same_shape(tree: &BlockTree, a: BlockId, b: BlockId) -> bool {
    let (pa, pb) = (tree.get(a), tree.get(b));
    pa.tag == pb.tag
        && pa.children.len() == pb.children.len()
        && pa
            .children
            .iter()
            .zip(&pb.children)
            .all(|(ca, cb)| same_shape(tree, *ca, *cb))
}

fn rule_one(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    let block = tree.get(id);
    if block.is_text {
        return None;
    }
    if block.tag == "img" || block.tag == "input" {
        return if block.bounds.is_empty() {
            Some(Decision::Cut)
        } else {
            terminal(8)
        };
    }
    (valid_descendants(tree, id) == 0).then_some(Decision::Cut)
}

fn rule_two(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    let first = tree.children(id).next()?;
    (!first.is_text && valid_descendants(tree, id) == 1).then_some(Decision::Divide)
}

fn rule_three(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    let block = tree.get(id);
    if !block.root_element {
        return None;
    }
    let matches = tree
        .children(tree.root())
        .filter(|sibling| sibling.tag == block.tag && same_shape(tree, id, sibling.id))
        .count();
    (matches == 1).then_some(Decision::Divide)
}

fn rule_four(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    let block = tree.get(id);
    if block.children.is_empty() || !tree.children(id).all(|c| is_text_like(tree, c)) {
        return None;
    }
    if block.children.len() == 1 {
        let only = tree.get(block.children[0]);
        return terminal(if only.tag == "em" { 11 } else { 10 });
    }
    if tree
        .children(id)
        .any(|c| !c.is_text && c.font_weight.is_none())
    {
        return None;
    }

    let mut children = tree.children(id);
    let first = children.next()?;
    let mut weight = (!first.is_text).then(|| first.font_weight.as_deref()).flatten();
    let mut uniform = true;
    for child in children {
        if child.font_size != first.font_size {
            uniform = false;
            break;
        }
        if !child.is_text {
            let w = child.font_weight.as_deref();
            match weight {
                Some(expected) if Some(expected) != w => {
                    uniform = false;
                    break;
                }
                Some(_) => {}
                None => weight = w,
            }
        }
    }
    terminal(if uniform { 10 } else { 9 })
}

fn rule_five(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    tree.children(id)
        .any(|c| c.block_level)
        .then_some(Decision::Divide)
}

fn rule_six(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    tree.descendants(id)
        .into_iter()
        .any(|d| tree.get(d).tag == "hr")
        .then_some(Decision::Divide)
}

fn rule_seven(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    let block = tree.get(id);
    if block.is_text {
        return None;
    }
    let child_index = tree
        .children(id)
        .position(|c| c.background_color != block.background_color)?;
    Some(Decision::DivideAndTerminateChild {
        child_index,
        doc: Doc::fixed(7),
    })
}

fn rule_eight(tree: &BlockTree, id: BlockId, threshold: SizeThreshold) -> Option<Decision> {
    let block = tree.get(id);
    if !tree.children(id).any(|c| is_text_like(tree, c)) {
        return None;
    }
    if block.bounds.area() == 0
        && tree
            .descendants(id)
            .into_iter()
            .any(|d| !tree.get(d).bounds.is_empty())
    {
        return Some(Decision::Divide);
    }
    if block.bounds.area() > threshold.area() {
        return None;
    }
    match block.tag.as_str() {
        "ul" => Some(Decision::Divide),
        "div" => terminal(5),
        "code" | "xdiv" => terminal(7),
        _ => terminal(8),
    }
}

fn rule_nine(tree: &BlockTree, id: BlockId, threshold: SizeThreshold) -> Option<Decision> {
    let max_area = tree.children(id).map(|c| c.bounds.area()).max()?;
    if max_area > threshold.area() {
        return Some(Decision::Divide);
    }
    match tree.get(id).tag.as_str() {
        "xdiv" => terminal(7),
        "a" => terminal(11),
        _ => terminal(8),
    }
}

fn rule_ten(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    let previous = tree.previous_sibling(id)?;
    tree.get(previous).already_divided.then(|| Decision::Terminal(Doc::MAX))
}

fn rule_eleven(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    (!tree.get(id).is_text).then_some(Decision::Divide)
}

fn rule_twelve(tree: &BlockTree, id: BlockId) -> Option<Decision> {
    match tree.get(id).tag.as_str() {
        "li" | "span" | "sup" | "img" => terminal(8),
        "xdiv" => terminal(7),
        _ => Some(Decision::Terminal(Doc::UNASSIGNED)),
    }
}
