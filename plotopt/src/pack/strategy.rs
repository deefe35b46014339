use itertools::Itertools;
use ordered_float::OrderedFloat;
use plotpack::entities::Block;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Area,
    Height,
    Width,
    Title,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A way of ordering the blocks before feeding them to the recursive fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Strategy {
    /// Stable sort on a key of the footprint
    Sorted { key: SortKey, order: SortOrder },
    /// The original order, rotated left by `shift` positions
    CyclicShift { shift: usize },
}

impl Strategy {
    pub const SORT_KEYS: [SortKey; 4] = [SortKey::Area, SortKey::Height, SortKey::Width, SortKey::Title];
    pub const SORT_ORDERS: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    /// All strategies in the order they are tried:
    /// the 8 sort permutations, followed by every cyclic shift of the original order.
    pub fn all(n_blocks: usize) -> Vec<Strategy> {
        let sorted = Self::SORT_KEYS
            .into_iter()
            .cartesian_product(Self::SORT_ORDERS)
            .map(|(key, order)| Strategy::Sorted { key, order });
        let shifted = (0..n_blocks).map(|shift| Strategy::CyclicShift { shift });

        sorted.chain(shifted).collect_vec()
    }

    /// Orders the blocks according to this strategy.
    pub fn order<'a>(&self, blocks: &'a [Block]) -> Vec<&'a Block> {
        match *self {
            Strategy::Sorted { key, order } => blocks
                .iter()
                .sorted_by(|a, b| {
                    let ordering = compare(a, b, key);
                    match order {
                        SortOrder::Ascending => ordering,
                        SortOrder::Descending => ordering.reverse(),
                    }
                })
                .collect_vec(),
            Strategy::CyclicShift { shift } => {
                let shift = match blocks.is_empty() {
                    true => 0,
                    false => shift % blocks.len(),
                };
                blocks[shift..].iter().chain(&blocks[..shift]).collect_vec()
            }
        }
    }
}

fn compare(a: &Block, b: &Block, key: SortKey) -> Ordering {
    match key {
        SortKey::Area => OrderedFloat(a.area()).cmp(&OrderedFloat(b.area())),
        SortKey::Height => OrderedFloat(a.height).cmp(&OrderedFloat(b.height)),
        SortKey::Width => OrderedFloat(a.width).cmp(&OrderedFloat(b.width)),
        SortKey::Title => a.title.cmp(&b.title),
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Sorted { key, order } => write!(f, "sorted by {key:?} ({order:?})"),
            Strategy::CyclicShift { shift } => write!(f, "cyclic shift {shift}"),
        }
    }
}
