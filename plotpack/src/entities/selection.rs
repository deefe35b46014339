use crate::entities::{Block, BuildingFact};
use itertools::Itertools;

/// A building type and how many copies of it were selected
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionEntry {
    pub building: BuildingFact,
    pub count: usize,
}

/// Multiset of buildings chosen by the knapsack stage.
/// Required buildings come first (count 1 each), followed by the flexible types with a non-zero count,
/// both in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub entries: Vec<SelectionEntry>,
    /// Optimized profit of the flexible buildings. Required buildings contribute nothing.
    pub total_profit: f64,
    /// Number of capacity cells available to the flexible buildings
    pub capacity_cells: usize,
    /// Area represented by a single capacity cell
    pub bucket_size: f32,
    /// Whether every flexible type could be taken at its maximum, skipping the optimization
    pub fast_path: bool,
}

impl Selection {
    pub fn total_area(&self) -> f32 {
        self.entries
            .iter()
            .map(|e| e.building.area_with_indent() * e.count as f32)
            .sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.building.price_to_build * e.count as f64)
            .sum()
    }

    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of selected copies of the building with the given title
    pub fn count_of(&self, title: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.building.title == title)
            .map(|e| e.count)
            .sum()
    }

    /// Expands the selection into one block per selected copy
    pub fn blocks(&self) -> Vec<Block> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat_n(e.building.to_block(), e.count))
            .collect_vec()
    }
}
