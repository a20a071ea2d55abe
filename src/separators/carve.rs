use crate::types::Span;

/// Remove every projected block interval from `region`.
///
/// Projections are processed in document order. The gaps that remain are
/// ascending and disjoint; the ones touching either end of `region` are
/// dropped.
pub(super) fn carve(region: Span, projections: &[Span]) -> Vec<Span> {
    let mut free = vec![region];
    for block in projections {
        let (s, e) = (block.start, block.end);
        let Some(first) = free.iter().position(|gap| gap.end >= s) else {
            continue;
        };
        if e < free[first].start {
            continue;
        }

        free.retain(|gap| !(s <= gap.start && gap.end <= e));

        if let Some(i) = free.iter().position(|gap| gap.start < s && e < gap.end) {
            let tail = Span::new(e + 1, free[i].end);
            free[i].end = s - 1;
            free.insert(i + 1, tail);
            continue;
        }

        for gap in free.iter_mut() {
            if gap.start < s && s <= gap.end {
                gap.end = s - 1;
            } else if gap.start <= e && e < gap.end {
                gap.start = e + 1;
            }
        }
    }

    if free.first().is_some_and(|gap| gap.start == region.start) {
        free.remove(0);
    }
    if free.last().is_some_and(|gap| gap.end == region.end) {
        free.pop();
    }
    free
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(raw: &[(i32, i32)]) -> Vec<Span> {
        raw.iter().map(|&(s, e)| Span::new(s, e)).collect()
    }

    #[test]
    fn block_inside_gap_splits_it() {
        let out = carve(Span::new(0, 100), &spans(&[(20, 40), (60, 80)]));
        assert_eq!(out, spans(&[(41, 59)]));
    }

    #[test]
    fn overlapping_blocks_merge_coverage() {
        let out = carve(Span::new(0, 100), &spans(&[(10, 30), (25, 50), (70, 90)]));
        assert_eq!(out, spans(&[(51, 69)]));
    }

    #[test]
    fn spanning_block_shrinks_both_neighbours() {
        let out = carve(
            Span::new(0, 200),
            &spans(&[(20, 30), (60, 70), (100, 110), (150, 200), (50, 120)]),
        );
        assert_eq!(out, spans(&[(31, 49), (121, 149)]));
    }

    #[test]
    fn flush_blocks_keep_inner_gaps() {
        let out = carve(Span::new(0, 100), &spans(&[(0, 40), (60, 100)]));
        assert_eq!(out, spans(&[(41, 59)]));
    }

    #[test]
    fn no_blocks_no_gaps() {
        assert!(carve(Span::new(0, 100), &[]).is_empty());
    }
}
