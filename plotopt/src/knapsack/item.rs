use plotpack::entities::BuildingFact;
use plotpack::util::{FPA, MPA};

/// A flexible building type as seen by the knapsack table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnapsackItem {
    /// Index of the building in the instance
    pub building_idx: usize,
    /// Number of capacity cells a single copy occupies (rounded up, at least 1)
    pub cells: usize,
    /// Maximum number of copies
    pub max_repeat: usize,
    pub profit: f64,
}

impl KnapsackItem {
    /// Derives the item for a flexible building, bounding its repetitions by the budget left after the required buildings.
    pub fn new(
        building_idx: usize,
        building: &BuildingFact,
        remaining_budget: f64,
        bucket_size: f32,
    ) -> Self {
        debug_assert!(building.is_flexible());
        debug_assert!(building.price_to_build > 0.0);

        let affordable = floor_div_money(remaining_budget, building.price_to_build);
        let max_repeat = match building.kind.repeat_cap() {
            Some(cap) => usize::min(affordable, cap),
            None => affordable,
        };

        KnapsackItem {
            building_idx,
            cells: ceil_div_area(building.area_with_indent(), bucket_size).max(1),
            max_repeat,
            profit: building.profit,
        }
    }

    /// Restricts the repetitions to what fits in `capacity_cells` on its own.
    pub fn capped_to(self, capacity_cells: usize) -> Self {
        KnapsackItem {
            max_repeat: usize::min(self.max_repeat, capacity_cells / self.cells),
            ..self
        }
    }
}

/// `floor(amount / price)`, snapping quotients within floating point noise of an integer onto it.
pub(crate) fn floor_div_money(amount: f64, price: f64) -> usize {
    if amount <= 0.0 {
        return 0;
    }
    let q = amount / price;
    match MPA(q.round()) == MPA(q) {
        true => q.round() as usize,
        false => q.floor() as usize,
    }
}

/// `floor(area / bucket)`, snapping quotients within floating point noise of an integer onto it.
pub(crate) fn floor_div_area(area: f32, bucket: f32) -> usize {
    if area <= 0.0 {
        return 0;
    }
    let q = area / bucket;
    match FPA(q.round()) == FPA(q) {
        true => q.round() as usize,
        false => q.floor() as usize,
    }
}

/// `ceil(area / bucket)`, snapping quotients within floating point noise of an integer onto it.
pub(crate) fn ceil_div_area(area: f32, bucket: f32) -> usize {
    if area <= 0.0 {
        return 0;
    }
    let q = area / bucket;
    match FPA(q.round()) == FPA(q) {
        true => q.round() as usize,
        false => q.ceil() as usize,
    }
}
