use super::normalize::REFERENCE_WEIGHT;
use super::*;
use crate::block::VisualBlock;
use crate::types::{Axis, Doc, Rect};

fn page() -> Rect {
    Rect::new(0, 0, 1000, 600)
}

fn first_pass(builder: &mut StructureBuilder) -> ConstructStats {
    builder.construct(
        vec![
            VisualBlock::synthetic(1, Rect::new(0, 0, 1000, 250)),
            VisualBlock::synthetic(2, Rect::new(0, 300, 1000, 250)),
        ],
        &[],
    )
}

fn second_pass(builder: &mut StructureBuilder) -> ConstructStats {
    builder.construct(
        vec![
            VisualBlock::synthetic(3, Rect::new(0, 0, 400, 250)),
            VisualBlock::synthetic(4, Rect::new(600, 0, 400, 250)),
        ],
        &[],
    )
}

fn assert_tiles(root: &VisualStructure) {
    let leaves = root.leaves();
    let area: i64 = leaves.iter().map(|l| l.rect.area()).sum();
    assert_eq!(area, root.rect.area());
    for (i, a) in leaves.iter().enumerate() {
        for b in leaves.iter().skip(i + 1) {
            assert!(!a.rect.intersects(&b.rect), "{} overlaps {}", a.id, b.id);
        }
    }
}

#[test]
fn first_pass_splits_horizontally() {
    let mut builder = StructureBuilder::new(page());
    let stats = first_pass(&mut builder);
    assert_eq!(stats.pass, 1);
    assert_eq!(stats.horizontal_splits, 1);
    assert_eq!(stats.vertical_splits, 0);
    assert_eq!(stats.leaves, 2);

    let root = builder.structure().unwrap();
    assert_eq!(root.id, "1");
    let nodes = root.iter();
    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["1", "1-1", "1-2"]);
    let orders: Vec<usize> = nodes.iter().map(|n| n.order).collect();
    assert_eq!(orders, [0, 1, 2]);
    assert_eq!(root.children[0].rect, Rect::new(0, 0, 1000, 275));
    assert_eq!(root.blocks().len(), 2);
    assert!(root.nested_blocks.is_empty());
    assert_tiles(root);
}

#[test]
fn later_pass_refines_leaves_in_place() {
    let mut builder = StructureBuilder::new(page());
    first_pass(&mut builder);
    let stats = second_pass(&mut builder);
    assert_eq!(stats.pass, 2);
    assert_eq!(stats.vertical_splits, 1);
    assert_eq!(stats.retained_leaves, 1);
    assert_eq!(stats.leaves, 3);

    let root = builder.structure().unwrap();
    let top = root.find("1-1").unwrap();
    assert_eq!(top.children.len(), 2);
    assert_eq!(top.children[0].rect, Rect::new(0, 0, 500, 275));
    assert_eq!(top.children[0].id, "1-1-1");
    let bottom = root.find("1-2").unwrap();
    assert_eq!(bottom.nested_blocks.len(), 1);
    assert_eq!(bottom.nested_blocks[0].id.0, 2);
    assert_tiles(root);
}

#[test]
fn normalization_orders_separators_by_strength() {
    let mut builder = StructureBuilder::new(page());
    first_pass(&mut builder);
    second_pass(&mut builder);
    let summary = builder.normalize().unwrap();
    assert_eq!(summary.separators, 2);
    assert_eq!((summary.min_weight, summary.max_weight), (REFERENCE_WEIGHT, 90));

    let root = builder.structure().unwrap();
    let horizontal = &root.find("1-2").unwrap().separators(Axis::Horizontal)[0];
    // 30 sits just above the reference weight 29, one step below the weakest DoC.
    assert_eq!(horizontal.normalized_weight, Some(Doc::fixed(10)));
    let vertical = &root.find("1-1-1").unwrap().separators(Axis::Vertical)[0];
    assert_eq!(vertical.normalized_weight, Some(Doc::MIN));

    assert_eq!(root.doc(), Doc::MIN);
    assert_eq!(root.find("1-1").unwrap().doc(), Doc::fixed(10));
    assert_eq!(root.find("1-1-2").unwrap().doc(), Doc::MIN);
}

#[test]
fn normalize_without_structure_is_noop() {
    let mut builder = StructureBuilder::new(page());
    assert!(builder.normalize().is_none());
    assert_eq!(builder.pass(), 0);
}
