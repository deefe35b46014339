use crate::config::OptConfig;
use crate::knapsack::KnapsackSolver;
use crate::pack::{PackOutcome, RectanglePacker};
use anyhow::Result;
use log::info;
use plotpack::entities::{BuildingFact, KnapsackInstance, PackInstance, Selection};

/// A selection of buildings together with the attempt to arrange them on the plot
#[derive(Clone, Debug)]
pub struct PlanResult {
    pub selection: Selection,
    pub outcome: PackOutcome,
}

/// Chains both stages: selects the buildings for the whole plot area, then packs the selection.
/// The packer's verdict is reported as is, a selection that does not fit is not revised.
#[derive(Clone, Copy, Debug)]
pub struct Planner {
    pub solver: KnapsackSolver,
    pub packer: RectanglePacker,
}

impl Planner {
    pub fn new(solver: KnapsackSolver, packer: RectanglePacker) -> Self {
        Self { solver, packer }
    }

    pub fn from_config(config: &OptConfig) -> Self {
        Self::new(
            KnapsackSolver::from_config(config),
            RectanglePacker::from_config(config),
        )
    }

    pub fn plan(
        &self,
        plot_width: f32,
        plot_height: f32,
        budget: f64,
        buildings: Vec<BuildingFact>,
    ) -> Result<PlanResult> {
        // validate the plot before it is reduced to an area
        let pack_plot = PackInstance::try_new(plot_width, plot_height, vec![])?;
        let ks_instance = KnapsackInstance::try_new(pack_plot.plot.area(), budget, buildings)?;

        let selection = self.solver.solve(&ks_instance)?;
        info!(
            "[PLAN] selected {} buildings of {} types, packing them in a {plot_width} x {plot_height} plot",
            selection.total_count(),
            selection.entries.len()
        );

        let pack_instance = PackInstance {
            blocks: selection.blocks(),
            ..pack_plot
        };
        let outcome = self.packer.pack(&pack_instance);
        info!("[PLAN] packing finished: {}", outcome.state());

        Ok(PlanResult { selection, outcome })
    }
}
