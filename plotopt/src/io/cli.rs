use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
    /// Write the JSON result to this file instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Select the most profitable set of buildings for a plot area and a budget
    #[command(allow_negative_numbers = true)]
    SolveKnapsack {
        plot_area: f32,
        budget: f64,
        #[arg(value_name = "BUILDINGS_JSON")]
        buildings: PathBuf,
    },
    /// Arrange rectangular blocks on a plot
    #[command(allow_negative_numbers = true)]
    Pack {
        plot_width: f32,
        plot_height: f32,
        #[arg(value_name = "BLOCKS_JSON")]
        blocks: PathBuf,
        /// Render the layout as SVG, if one is found
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,
    },
    /// Select buildings for a plot and arrange them on it
    #[command(allow_negative_numbers = true)]
    Plan {
        plot_width: f32,
        plot_height: f32,
        budget: f64,
        #[arg(value_name = "BUILDINGS_JSON")]
        buildings: PathBuf,
        /// Render the layout as SVG, if one is found
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,
    },
}
