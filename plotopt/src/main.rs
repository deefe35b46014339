use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use plotopt::config::OptConfig;
use plotopt::io;
use plotopt::io::cli::{Cli, Command};
use plotopt::io::layout_to_svg::layout_to_svg;
use plotopt::io::output::{KnapsackOutput, PackOutput, PlanOutput};
use plotopt::knapsack::KnapsackSolver;
use plotopt::pack::{PackOutcome, RectanglePacker};
use plotopt::plan::Planner;
use plotpack::io::ext_repr::{ExtBlock, ExtBuilding};
use plotpack::io::import;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            OptConfig::default()
        }
        Some(config_file) => io::read_json::<OptConfig>(config_file).context("incorrect config file format")?,
    };
    config.validate()?;

    info!("[MAIN] Successfully parsed OptConfig: {config:?}");

    let output_path = args.output.as_deref();

    match args.command {
        Command::SolveKnapsack {
            plot_area,
            budget,
            buildings,
        } => main_knapsack(plot_area, budget, &buildings, config, output_path),
        Command::Pack {
            plot_width,
            plot_height,
            blocks,
            svg,
        } => main_pack(
            plot_width,
            plot_height,
            &blocks,
            svg.as_deref(),
            config,
            output_path,
        ),
        Command::Plan {
            plot_width,
            plot_height,
            budget,
            buildings,
            svg,
        } => main_plan(
            plot_width,
            plot_height,
            budget,
            &buildings,
            svg.as_deref(),
            config,
            output_path,
        ),
    }
}

fn main_knapsack(
    plot_area: f32,
    budget: f64,
    buildings_path: &Path,
    config: OptConfig,
    output_path: Option<&Path>,
) -> Result<()> {
    let ext_buildings: Vec<ExtBuilding> = io::read_json(buildings_path)?;
    let instance = import::import_knapsack_instance(plot_area, budget, &ext_buildings)?;

    let selection = KnapsackSolver::from_config(&config).solve(&instance)?;

    io::write_json(&KnapsackOutput::new(&selection, config), output_path)
}

fn main_pack(
    plot_width: f32,
    plot_height: f32,
    blocks_path: &Path,
    svg_path: Option<&Path>,
    config: OptConfig,
    output_path: Option<&Path>,
) -> Result<()> {
    let ext_blocks: Vec<ExtBlock> = io::read_json(blocks_path)?;
    let instance = import::import_pack_instance(plot_width, plot_height, &ext_blocks)?;

    let outcome = RectanglePacker::from_config(&config).pack(&instance);

    io::write_json(&PackOutput::new(&outcome, config), output_path)?;
    write_layout_svg(&outcome, svg_path, config)
}

fn main_plan(
    plot_width: f32,
    plot_height: f32,
    budget: f64,
    buildings_path: &Path,
    svg_path: Option<&Path>,
    config: OptConfig,
    output_path: Option<&Path>,
) -> Result<()> {
    let ext_buildings: Vec<ExtBuilding> = io::read_json(buildings_path)?;
    let buildings = import::import_buildings(&ext_buildings)?;

    let result = Planner::from_config(&config).plan(plot_width, plot_height, budget, buildings)?;

    io::write_json(&PlanOutput::new(&result, config), output_path)?;
    write_layout_svg(&result.outcome, svg_path, config)
}

fn write_layout_svg(outcome: &PackOutcome, svg_path: Option<&Path>, config: OptConfig) -> Result<()> {
    match (svg_path, outcome.layout()) {
        (Some(path), Some(layout)) => {
            let title = match outcome {
                PackOutcome::Success {
                    strategy: Some(strategy),
                    ..
                } => strategy.to_string(),
                _ => String::new(),
            };
            let svg = layout_to_svg(layout, config.svg_draw_options, &title);
            io::write_svg(&svg, path)
        }
        (Some(_), None) => {
            warn!("[MAIN] no layout found, no svg written");
            Ok(())
        }
        (None, _) => Ok(()),
    }
}
