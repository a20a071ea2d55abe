use super::predicates;
use super::{Decision, RuleOutcome, TagCategory};
use crate::block::{BlockId, BlockTree};
use crate::types::{Doc, Rect, SizeThreshold};
use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counters collected while dividing one tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionStats {
    pub visited: usize,
    pub divided: usize,
    pub cut: usize,
    pub visual_blocks: usize,
    /// Blocks that turned terminal but failed the validity check.
    pub rejected: usize,
    /// How often each rule fired, keyed by rule number.
    pub rule_hits: BTreeMap<u8, usize>,
}

/// Applies the divisibility rules to a block tree for one pass.
#[derive(Clone, Copy, Debug)]
pub struct RuleEngine {
    threshold: SizeThreshold,
    page: Rect,
}

impl RuleEngine {
    pub fn new(threshold: SizeThreshold, page: Rect) -> Self {
        Self { threshold, page }
    }

    pub fn threshold(&self) -> SizeThreshold {
        self.threshold
    }

    /// First rule of the block's category that fires, if any.
    pub fn evaluate(&self, tree: &BlockTree, id: BlockId) -> Option<RuleOutcome> {
        let category = TagCategory::of(tree.get(id));
        category.rules().iter().find_map(|&rule| {
            predicates::apply(rule, tree, id, self.threshold)
                .map(|decision| RuleOutcome { rule, decision })
        })
    }

    /// Divide the whole tree starting at the root.
    pub fn divide(&self, tree: &mut BlockTree) -> DivisionStats {
        let mut stats = DivisionStats::default();
        let root = tree.root();
        if !tree.is_empty() {
            self.divide_block(tree, root, &mut stats);
        }
        debug!(
            "RuleEngine::divide threshold={}x{} visited={} visual={} cut={} rejected={}",
            self.threshold.width,
            self.threshold.height,
            stats.visited,
            stats.visual_blocks,
            stats.cut,
            stats.rejected
        );
        stats
    }

    fn divide_block(&self, tree: &mut BlockTree, id: BlockId, stats: &mut DivisionStats) {
        stats.visited += 1;
        let mut divides = false;
        if tree.get(id).is_dividable {
            if let Some(outcome) = self.evaluate(tree, id) {
                trace!(
                    "rule {} on <{}> #{} -> {:?}",
                    outcome.rule,
                    tree.get(id).tag,
                    id.0,
                    outcome.decision
                );
                *stats.rule_hits.entry(outcome.rule).or_default() += 1;
                divides = self.apply_decision(tree, id, outcome.decision, stats);
            }
        }

        let (dividable, visual) = {
            let block = tree.get(id);
            (block.is_dividable, block.is_visual_block)
        };
        if divides && dividable && !visual {
            stats.divided += 1;
            tree.get_mut(id).already_divided = true;
            let children: Vec<BlockId> = tree.get(id).children.clone();
            for child in children {
                if !tree.get(child).is_text {
                    self.divide_block(tree, child, stats);
                }
            }
            return;
        }

        if dividable {
            let block = tree.get_mut(id);
            block.is_visual_block = true;
            block.doc = Doc::MAX;
        }
        if tree.get(id).is_visual_block {
            if self.is_valid_visual_block(tree, id) {
                stats.visual_blocks += 1;
            } else {
                trace!("<{}> #{} failed validity, dropped", tree.get(id).tag, id.0);
                tree.get_mut(id).is_visual_block = false;
                stats.rejected += 1;
            }
        }
    }

    /// Returns true when the decision asks to recurse.
    fn apply_decision(
        &self,
        tree: &mut BlockTree,
        id: BlockId,
        decision: Decision,
        stats: &mut DivisionStats,
    ) -> bool {
        match decision {
            Decision::Divide => true,
            Decision::Cut => {
                tree.get_mut(id).is_dividable = false;
                stats.cut += 1;
                false
            }
            Decision::Terminal(doc) => {
                let block = tree.get_mut(id);
                block.is_visual_block = true;
                block.is_dividable = false;
                block.doc = doc;
                false
            }
            Decision::DivideAndTerminateChild { child_index, doc } => {
                if let Some(&child) = tree.get(id).children.get(child_index) {
                    let child = tree.get_mut(child);
                    child.is_visual_block = true;
                    child.is_dividable = false;
                    child.doc = doc;
                }
                true
            }
        }
    }

    fn is_valid_visual_block(&self, tree: &BlockTree, id: BlockId) -> bool {
        let block = tree.get(id);
        let r = block.bounds;
        let page = self.page;
        if r.x < page.x || r.y < page.y || r.right() > page.right() || r.bottom() > page.bottom() {
            return false;
        }
        if r.is_empty() || !block.displayed || !block.visible {
            return false;
        }
        let agg = tree.aggregates(id);
        agg.text_len > 0 || agg.has_visible_media
    }
}
