use crate::config::OptConfig;
use crate::pack::{AbortReason, PackOutcome, Strategy};
use crate::plan::PlanResult;
use plotpack::entities::Selection;
use plotpack::io::export;
use plotpack::io::ext_repr::{ExtPlacement, ExtSelection};
use serde::{Deserialize, Serialize};

/// External representation of a [`PackOutcome`]
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtPackResult {
    Success {
        /// The ordering that produced the layout, absent if there was nothing to place
        strategy: Option<Strategy>,
        attempts: u64,
        density: f32,
        placements: Vec<ExtPlacement>,
    },
    Exhausted {
        attempts: u64,
    },
    Aborted {
        attempts: u64,
        reason: AbortReason,
    },
}

pub fn export_pack_outcome(outcome: &PackOutcome) -> ExtPackResult {
    match outcome {
        PackOutcome::Success {
            layout,
            strategy,
            attempts,
        } => {
            let ext_layout = export::export_layout(layout);
            ExtPackResult::Success {
                strategy: *strategy,
                attempts: *attempts,
                density: ext_layout.density,
                placements: ext_layout.placements,
            }
        }
        PackOutcome::Exhausted { attempts } => ExtPackResult::Exhausted {
            attempts: *attempts,
        },
        PackOutcome::Aborted { attempts, reason } => ExtPackResult::Aborted {
            attempts: *attempts,
            reason: *reason,
        },
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KnapsackOutput {
    #[serde(flatten)]
    pub selection: ExtSelection,
    pub config: OptConfig,
}

impl KnapsackOutput {
    pub fn new(selection: &Selection, config: OptConfig) -> Self {
        Self {
            selection: export::export_selection(selection),
            config,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackOutput {
    #[serde(flatten)]
    pub result: ExtPackResult,
    pub config: OptConfig,
}

impl PackOutput {
    pub fn new(outcome: &PackOutcome, config: OptConfig) -> Self {
        Self {
            result: export_pack_outcome(outcome),
            config,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanOutput {
    pub selection: ExtSelection,
    pub layout: ExtPackResult,
    pub config: OptConfig,
}

impl PlanOutput {
    pub fn new(result: &PlanResult, config: OptConfig) -> Self {
        Self {
            selection: export::export_selection(&result.selection),
            layout: export_pack_outcome(&result.outcome),
            config,
        }
    }
}
