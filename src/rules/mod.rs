//! Divisibility rules deciding which blocks become visual blocks.
//!
//! Each block is classified by tag into a [`TagCategory`], which selects an
//! ordered subset of the twelve heuristics. The first rule that fires yields a
//! [`Decision`]; the [`RuleEngine`] applies it to the tree and recurses.
//!
//! Modules
//! - `predicates` – the twelve rules as pure functions over the tree.
//! - `engine` – pre-order walk applying decisions and the validity check.

mod engine;
mod predicates;

pub use engine::{DivisionStats, RuleEngine};

use crate::block::Block;
use crate::types::Doc;
use serde::Serialize;

/// Outcome of the first rule that fired for a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Decision {
    /// Not dividable and not a visual block.
    Cut,
    /// Recurse into the children.
    Divide,
    /// Visual block with the given DoC.
    Terminal(Doc),
    /// Recurse, but the child at `child_index` becomes a visual block first.
    DivideAndTerminateChild { child_index: usize, doc: Doc },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOutcome {
    /// Rule number, `1..=12`.
    pub rule: u8,
    pub decision: Decision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagCategory {
    Inline,
    Table,
    TableRow,
    TableCell,
    Paragraph,
    Other,
}

impl TagCategory {
    pub fn of(block: &Block) -> Self {
        if !block.block_level {
            return TagCategory::Inline;
        }
        match block.tag.as_str() {
            "table" => TagCategory::Table,
            "tr" => TagCategory::TableRow,
            "td" => TagCategory::TableCell,
            "p" => TagCategory::Paragraph,
            _ => TagCategory::Other,
        }
    }

    /// Rules tried for this category, in order.
    pub fn rules(self) -> &'static [u8] {
        match self {
            TagCategory::Inline => &[1, 2, 3, 4, 5, 6, 8, 9, 12],
            TagCategory::Table | TagCategory::TableRow => &[1, 2, 3, 7, 9, 12],
            TagCategory::TableCell => &[1, 2, 3, 4, 8, 9, 10, 12],
            TagCategory::Paragraph => &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
            TagCategory::Other => &[1, 2, 3, 4, 6, 8, 9, 11],
        }
    }
}
