use crate::knapsack::KnapsackItem;
use anyhow::{Context, Result};
use plotpack::util::MPA;

/// Dynamic programming table of the bounded knapsack.
/// `get(i, c)` is the best profit achievable with the first `i` items and `c` capacity cells.
#[derive(Clone, Debug)]
pub struct DPTable {
    n_items: usize,
    capacity_cells: usize,
    /// Row-major, `(n_items + 1) x (capacity_cells + 1)`
    values: Vec<f64>,
}

impl DPTable {
    /// Fills the table with the direct bounded recurrence:
    /// `t[i][c] = max(t[i-1][c], max_{1 <= k <= max_repeat, k * cells <= c} t[i-1][c - k * cells] + k * profit)`
    ///
    /// The caller is responsible for keeping [`DPTable::n_entries`] within memory.
    pub fn build(items: &[KnapsackItem], capacity_cells: usize) -> Self {
        let width = capacity_cells + 1;
        let mut table = DPTable {
            n_items: items.len(),
            capacity_cells,
            values: vec![0.0; (items.len() + 1) * width],
        };

        for (i, item) in items.iter().enumerate().map(|(i, item)| (i + 1, item)) {
            for c in 0..=capacity_cells {
                let mut best = table.get(i - 1, c);
                for k in (1..=item.max_repeat).take_while(|k| k * item.cells <= c) {
                    let candidate = table.get(i - 1, c - k * item.cells) + k as f64 * item.profit;
                    if candidate > best {
                        best = candidate;
                    }
                }
                table.values[i * width + c] = best;
            }
        }
        table
    }

    /// Number of entries of the table for `n_items` items and `capacity_cells` cells, `None` on overflow
    pub fn n_entries(n_items: usize, capacity_cells: usize) -> Option<usize> {
        capacity_cells.checked_add(1)?.checked_mul(n_items.checked_add(1)?)
    }

    pub fn get(&self, i: usize, c: usize) -> f64 {
        self.values[i * (self.capacity_cells + 1) + c]
    }

    /// The best achievable profit using all items and the full capacity
    pub fn optimum(&self) -> f64 {
        self.get(self.n_items, self.capacity_cells)
    }

    /// Reconstructs the number of copies per item leading to [`DPTable::optimum`].
    /// Items are visited from last to first; for each, the largest count consistent with the table is taken.
    pub fn backtrack(&self, items: &[KnapsackItem]) -> Result<Vec<usize>> {
        debug_assert_eq!(items.len(), self.n_items);
        let mut counts = vec![0; items.len()];
        let mut c = self.capacity_cells;

        for i in (1..=self.n_items).rev() {
            let item = &items[i - 1];
            let value = self.get(i, c);
            let k_max = usize::min(item.max_repeat, c / item.cells);
            let k = (0..=k_max)
                .rev()
                .find(|&k| {
                    MPA(value) == MPA(self.get(i - 1, c - k * item.cells) + k as f64 * item.profit)
                })
                .with_context(|| format!("table value at item {i}, {c} cells is unreachable"))?;
            counts[i - 1] = k;
            c -= k * item.cells;
        }
        Ok(counts)
    }
}
