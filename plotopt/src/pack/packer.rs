use crate::config::{OptConfig, PackerConfig};
use crate::pack::{AbortReason, FitResult, SearchBudget, Strategy, try_fit};
use log::{debug, info};
use plotpack::entities::{Layout, PackInstance};
use plotpack::geometry::FreeRectTree;
use plotpack::util::{FPA, assertions};
use std::fmt::{Display, Formatter};
use std::time::Instant;
use thousands::Separable;

/// Progress of the packing search.
/// The search advances through the sort orders, then the cyclic shifts, and ends in one of the terminal states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackState {
    TryingSortOrder(usize),
    TryingCyclicShift(usize),
    Success,
    Exhausted,
    Aborted,
}

impl PackState {
    fn trying(strategy_idx: usize, strategy: &Strategy) -> Self {
        match strategy {
            Strategy::Sorted { .. } => PackState::TryingSortOrder(strategy_idx),
            Strategy::CyclicShift { shift } => PackState::TryingCyclicShift(*shift),
        }
    }
}

impl Display for PackState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PackState::TryingSortOrder(i) => write!(f, "trying sort order {i}"),
            PackState::TryingCyclicShift(j) => write!(f, "trying cyclic shift {j}"),
            PackState::Success => write!(f, "success"),
            PackState::Exhausted => write!(f, "exhausted"),
            PackState::Aborted => write!(f, "aborted"),
        }
    }
}

/// Outcome of a packing search. Only `Success` carries a layout; the others are valid, reportable results.
#[derive(Clone, Debug)]
pub enum PackOutcome {
    Success {
        layout: Layout,
        /// The strategy that produced the layout, `None` if there was nothing to place
        strategy: Option<Strategy>,
        attempts: u64,
    },
    /// Every strategy was tried, no feasible layout exists among them
    Exhausted { attempts: u64 },
    /// The search budget ran out before every strategy was tried
    Aborted { attempts: u64, reason: AbortReason },
}

impl PackOutcome {
    pub fn state(&self) -> PackState {
        match self {
            PackOutcome::Success { .. } => PackState::Success,
            PackOutcome::Exhausted { .. } => PackState::Exhausted,
            PackOutcome::Aborted { .. } => PackState::Aborted,
        }
    }

    pub fn layout(&self) -> Option<&Layout> {
        match self {
            PackOutcome::Success { layout, .. } => Some(layout),
            _ => None,
        }
    }

    pub fn attempts(&self) -> u64 {
        match self {
            PackOutcome::Success { attempts, .. }
            | PackOutcome::Exhausted { attempts }
            | PackOutcome::Aborted { attempts, .. } => *attempts,
        }
    }
}

/// Packs rectangular blocks into a plot with a guillotine free-space tree,
/// trying a fixed list of block orderings until one of them fits.
#[derive(Clone, Copy, Debug)]
pub struct RectanglePacker {
    pub config: PackerConfig,
}

impl RectanglePacker {
    pub fn new(config: PackerConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &OptConfig) -> Self {
        Self::new(config.packer)
    }

    pub fn pack(&self, instance: &PackInstance) -> PackOutcome {
        let start = Instant::now();
        let plot = instance.plot;
        let blocks = &instance.blocks;

        if blocks.is_empty() {
            info!("[PACK] no blocks to place");
            return PackOutcome::Success {
                layout: Layout::new(plot, vec![]),
                strategy: None,
                attempts: 0,
            };
        }

        if let Some(block) = blocks
            .iter()
            .find(|b| !b.fits_within(plot.width(), plot.height()))
        {
            info!(
                "[PACK] block {:?} ({} x {}) does not fit the plot in any orientation",
                block.title, block.width, block.height
            );
            return PackOutcome::Exhausted { attempts: 0 };
        }

        if FPA(instance.block_area()) > FPA(plot.area()) {
            info!(
                "[PACK] blocks cover {:.1}, more than the plot area of {:.1}",
                instance.block_area(),
                plot.area()
            );
            return PackOutcome::Exhausted { attempts: 0 };
        }

        let strategies = Strategy::all(blocks.len());
        let root = FreeRectTree::new(plot.width(), plot.height());
        let mut budget = SearchBudget::from_config(&self.config);

        for (idx, strategy) in strategies.iter().enumerate() {
            debug!(
                "[PACK] {} ({strategy}), {} attempts so far",
                PackState::trying(idx, strategy),
                budget.attempts().separate_with_commas()
            );
            let order = strategy.order(blocks);

            match try_fit(&order, &root, &mut budget) {
                FitResult::Placed { placements, tree } => {
                    debug_assert!(assertions::tree_area_is_conserved(&tree, &placements));
                    let layout = Layout::new(plot, placements);
                    info!(
                        "[PACK] placed {} blocks ({strategy}) with a density of {:.3}% in {:.3}ms ({} attempts)",
                        layout.placements.len(),
                        layout.density() * 100.0,
                        start.elapsed().as_secs_f64() * 1000.0,
                        budget.attempts().separate_with_commas()
                    );
                    return PackOutcome::Success {
                        layout,
                        strategy: Some(*strategy),
                        attempts: budget.attempts(),
                    };
                }
                FitResult::Infeasible => continue,
                FitResult::Aborted(reason) => {
                    info!(
                        "[PACK] search aborted ({reason:?}) during {strategy} after {} attempts",
                        budget.attempts().separate_with_commas()
                    );
                    return PackOutcome::Aborted {
                        attempts: budget.attempts(),
                        reason,
                    };
                }
            }
        }

        info!(
            "[PACK] all {} strategies exhausted in {:.3}ms ({} attempts)",
            strategies.len(),
            start.elapsed().as_secs_f64() * 1000.0,
            budget.attempts().separate_with_commas()
        );
        PackOutcome::Exhausted {
            attempts: budget.attempts(),
        }
    }
}
