use crate::config::OptConfig;
use crate::knapsack::item::floor_div_area;
use crate::knapsack::{DPTable, KnapsackItem};
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{debug, info, warn};
use plotpack::entities::{KnapsackInstance, Selection, SelectionEntry};
use plotpack::util::assertions;
use plotpack::util::FPA;
use std::time::Instant;
use thousands::Separable;

/// Bounded knapsack selector for flexible buildings.
/// Maximizes profit under the plot area left by the required buildings, with the repetitions of every
/// building type bounded by the budget left by the required buildings.
#[derive(Clone, Copy, Debug)]
pub struct KnapsackSolver {
    /// Area represented by a single capacity cell
    pub bucket_size: f32,
    /// Take every flexible type at its maximum when that already fits, without building the table
    pub fast_path: bool,
    /// Instances needing a larger table are rejected
    pub max_table_entries: usize,
}

impl KnapsackSolver {
    pub fn new(bucket_size: f32) -> Self {
        Self {
            bucket_size,
            fast_path: true,
            max_table_entries: OptConfig::default().max_table_entries,
        }
    }

    pub fn from_config(config: &OptConfig) -> Self {
        Self::new(config.bucket_size).with_max_table_entries(config.max_table_entries)
    }

    pub fn with_fast_path(self, fast_path: bool) -> Self {
        Self { fast_path, ..self }
    }

    pub fn with_max_table_entries(self, max_table_entries: usize) -> Self {
        Self {
            max_table_entries,
            ..self
        }
    }

    pub fn solve(&self, instance: &KnapsackInstance) -> Result<Selection> {
        ensure!(
            self.bucket_size.is_finite() && self.bucket_size > 0.0,
            "bucket size must be a positive number, got {}",
            self.bucket_size
        );
        let start = Instant::now();

        let required_area: f32 = instance.required().map(|b| b.area_with_indent()).sum();
        let required_cost: f64 = instance.required().map(|b| b.price_to_build).sum();

        let remaining_area = instance.capacity - required_area;
        let remaining_budget = instance.budget - required_cost;

        if remaining_area < 0.0 {
            warn!(
                "[KS] required buildings need {required_area:.1} area, exceeding the capacity of {:.1}",
                instance.capacity
            );
        }
        if remaining_budget < 0.0 {
            warn!(
                "[KS] required buildings cost {required_cost:.2}, exceeding the budget of {:.2}",
                instance.budget
            );
        }

        let capacity_cells = floor_div_area(remaining_area, self.bucket_size);

        let items = instance
            .buildings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_flexible())
            .map(|(idx, b)| KnapsackItem::new(idx, b, remaining_budget, self.bucket_size))
            .filter(|item| item.max_repeat > 0)
            .collect_vec();

        debug!(
            "[KS] {} of {} flexible types affordable, {} capacity cells of {}",
            items.len(),
            instance.flexible().count(),
            capacity_cells.separate_with_commas(),
            self.bucket_size
        );

        let naive_area = required_area as f64
            + items
                .iter()
                .map(|it| instance.buildings[it.building_idx].area_with_indent() as f64 * it.max_repeat as f64)
                .sum::<f64>();

        // a loss-making type is better left out, even when it fits
        let all_profitable = items.iter().all(|it| it.profit >= 0.0);

        let (counts, total_profit, fast_path) =
            if self.fast_path && all_profitable && FPA(naive_area as f32) <= FPA(instance.capacity) {
                // everything affordable fits, nothing to trade off
                let counts = items.iter().map(|it| it.max_repeat).collect_vec();
                let profit = items
                    .iter()
                    .map(|it| it.max_repeat as f64 * it.profit)
                    .sum::<f64>();
                info!("[KS] all affordable buildings fit, skipping optimization");
                (counts, profit, true)
            } else {
                let capped = items
                    .iter()
                    .map(|it| it.capped_to(capacity_cells))
                    .collect_vec();
                // items which can no longer contribute are kept with a zero repeat, so indices stay aligned
                let n_entries = DPTable::n_entries(capped.len(), capacity_cells);
                ensure!(
                    n_entries.is_some_and(|n| n <= self.max_table_entries),
                    "knapsack table of {} rows x {} cells exceeds the limit of {} entries, consider a larger bucket size",
                    capped.len() + 1,
                    capacity_cells.saturating_add(1).separate_with_commas(),
                    self.max_table_entries.separate_with_commas()
                );
                let table = DPTable::build(&capped, capacity_cells);
                let counts = table.backtrack(&capped)?;
                (counts, table.optimum(), false)
            };

        let selection = self.assemble(instance, &items, &counts, total_profit, capacity_cells, fast_path);

        debug_assert!(
            assertions::selection_within_capacity(&selection, instance.capacity),
            "selection exceeds the capacity"
        );

        info!(
            "[KS] selected {} buildings ({} types) with a profit of {:.2} in {:.3}ms",
            selection.total_count().separate_with_commas(),
            selection.entries.len(),
            selection.total_profit,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(selection)
    }

    fn assemble(
        &self,
        instance: &KnapsackInstance,
        items: &[KnapsackItem],
        counts: &[usize],
        total_profit: f64,
        capacity_cells: usize,
        fast_path: bool,
    ) -> Selection {
        let required = instance.required().map(|b| SelectionEntry {
            building: b.clone(),
            count: 1,
        });

        let flexible = items
            .iter()
            .zip(counts)
            .filter(|(_, count)| **count > 0)
            .map(|(item, count)| SelectionEntry {
                building: instance.buildings[item.building_idx].clone(),
                count: *count,
            });

        Selection {
            entries: required.chain(flexible).collect(),
            total_profit,
            capacity_cells,
            bucket_size: self.bucket_size,
            fast_path,
        }
    }
}
