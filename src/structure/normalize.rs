use super::VisualStructure;
use crate::types::{Axis, Doc};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Weight of the page-wide reference separator added to every normalization.
///
/// Pages whose gaps are all weaker than this never reach DoC 1.
pub const REFERENCE_WEIGHT: i32 = 29;

/// Raw weight range used during normalization, reference weight included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationSummary {
    /// Distinct separators after deduplication by axis and span.
    pub separators: usize,
    pub min_weight: i32,
    pub max_weight: i32,
}

/// Map a raw weight onto the DoC scale.
///
/// The lowest weight maps to 11 and the highest to 1. A degenerate range, where
/// every weight equals the reference weight, maps everything to 11.
pub fn normalized_doc(weight: i32, min: i32, max: i32) -> Doc {
    if max <= min {
        return Doc::MAX;
    }
    let scaled = f64::from(weight - min) / f64::from(max - min) * 10.0 + 1.0;
    let level = scaled.ceil().clamp(1.0, 11.0) as u8;
    Doc::fixed(12 - level)
}

/// Rescale every separator in the tree and derive node DoCs from them.
pub(crate) fn normalize(root: &mut VisualStructure) -> NormalizationSummary {
    let mut weights: BTreeMap<(Axis, i32, i32), i32> = BTreeMap::new();
    for node in root.iter() {
        for sep in node.horizontal_separators.iter().chain(&node.vertical_separators) {
            let entry = weights.entry(sep.key()).or_insert(sep.weight);
            *entry = (*entry).max(sep.weight);
        }
    }
    let (min_weight, max_weight) = weights
        .values()
        .fold((REFERENCE_WEIGHT, REFERENCE_WEIGHT), |(lo, hi), &w| {
            (lo.min(w), hi.max(w))
        });
    let summary = NormalizationSummary {
        separators: weights.len(),
        min_weight,
        max_weight,
    };
    debug!(
        "normalize separators={} weight range=[{}, {}]",
        summary.separators, min_weight, max_weight
    );

    let scale = |key: (Axis, i32, i32)| {
        weights
            .get(&key)
            .map(|w| normalized_doc(*w, min_weight, max_weight))
    };
    apply(root, &scale);
    summary
}

fn apply(node: &mut VisualStructure, scale: &dyn Fn((Axis, i32, i32)) -> Option<Doc>) {
    let mut highest: Option<Doc> = None;
    for sep in node
        .horizontal_separators
        .iter_mut()
        .chain(node.vertical_separators.iter_mut())
    {
        sep.normalized_weight = scale(sep.key());
        highest = highest.max(sep.normalized_weight);
    }
    node.set_doc(highest.unwrap_or(Doc::MIN));
    for child in &mut node.children {
        apply(child, scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::separators::Separator;
    use crate::types::Rect;

    #[test]
    fn extremes_map_to_ends_of_scale() {
        assert_eq!(normalized_doc(20, 20, 60), Doc::MAX);
        assert_eq!(normalized_doc(60, 20, 60), Doc::MIN);
        assert_eq!(normalized_doc(33, 33, 33), Doc::MAX);
    }

    #[test]
    fn scale_is_monotone() {
        let mut last = Doc::MAX;
        for w in 12..=80 {
            let doc = normalized_doc(w, 12, 80);
            assert!(doc <= last, "weight {w}");
            last = doc;
        }
    }

    #[test]
    fn duplicated_separator_keeps_largest_weight() {
        let mut weak = Separator::new(100, 120, Axis::Horizontal);
        weak.weight = 14;
        let mut strong = weak.clone();
        strong.weight = 40;
        let mut other = Separator::new(300, 302, Axis::Horizontal);
        other.weight = 12;

        let mut root = VisualStructure::new(Rect::new(0, 0, 100, 400), Vec::new());
        let mut a = VisualStructure::new(Rect::new(0, 0, 100, 110), Vec::new());
        a.horizontal_separators.push(weak);
        let mut b = VisualStructure::new(Rect::new(0, 110, 100, 191), Vec::new());
        b.horizontal_separators.push(strong);
        b.horizontal_separators.push(other.clone());
        let mut c = VisualStructure::new(Rect::new(0, 301, 100, 99), Vec::new());
        c.horizontal_separators.push(other);
        root.children = vec![a, b, c];

        let summary = normalize(&mut root);
        assert_eq!(summary.separators, 2);
        assert_eq!((summary.min_weight, summary.max_weight), (12, 40));
        assert_eq!(root.doc(), Doc::MIN);
        assert_eq!(root.children[0].doc(), Doc::MIN);
        assert_eq!(
            root.children[0].horizontal_separators[0].normalized_weight,
            Some(Doc::MIN)
        );
        assert_eq!(root.children[2].doc(), Doc::MAX);
        assert_eq!(root.children[1].doc(), Doc::MAX);
    }

    #[test]
    fn narrow_gaps_never_reach_strongest_doc() {
        let mut narrow = Separator::new(100, 103, Axis::Horizontal);
        narrow.weight = 12;
        let mut wider = Separator::new(200, 208, Axis::Horizontal);
        wider.weight = 14;

        let mut root = VisualStructure::new(Rect::new(0, 0, 100, 400), Vec::new());
        root.horizontal_separators = vec![narrow, wider];
        let summary = normalize(&mut root);
        assert_eq!(summary.separators, 2);
        assert_eq!((summary.min_weight, summary.max_weight), (12, REFERENCE_WEIGHT));

        let docs: Vec<Option<Doc>> = root
            .horizontal_separators
            .iter()
            .map(|s| s.normalized_weight)
            .collect();
        assert_eq!(docs, [Some(Doc::MAX), Some(Doc::fixed(9))]);
        assert!(root.doc() > Doc::MIN);
    }

    #[test]
    fn reference_weight_alone_is_degenerate() {
        let mut only = Separator::new(10, 20, Axis::Vertical);
        only.weight = REFERENCE_WEIGHT;
        let mut root = VisualStructure::new(Rect::new(0, 0, 100, 100), Vec::new());
        root.vertical_separators.push(only);
        let summary = normalize(&mut root);
        assert_eq!(summary.min_weight, summary.max_weight);
        assert_eq!(root.vertical_separators[0].normalized_weight, Some(Doc::MAX));
    }
}
