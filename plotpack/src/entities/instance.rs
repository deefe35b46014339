use crate::entities::{Block, BuildingFact};
use crate::geometry::Rect;
use anyhow::{Result, ensure};

/// Input of the knapsack stage: the usable area of the plot, the budget and all candidate buildings.
#[derive(Clone, Debug)]
pub struct KnapsackInstance {
    /// Usable area of the plot
    pub capacity: f32,
    pub budget: f64,
    /// Required and flexible buildings, in input order
    pub buildings: Vec<BuildingFact>,
}

impl KnapsackInstance {
    pub fn try_new(capacity: f32, budget: f64, buildings: Vec<BuildingFact>) -> Result<Self> {
        ensure!(
            capacity.is_finite() && capacity >= 0.0,
            "plot capacity must be a non-negative number, got {capacity}"
        );
        ensure!(
            budget.is_finite() && budget >= 0.0,
            "budget must be a non-negative number, got {budget}"
        );
        Ok(KnapsackInstance {
            capacity,
            budget,
            buildings,
        })
    }

    /// Buildings which are always built once
    pub fn required(&self) -> impl Iterator<Item = &BuildingFact> {
        self.buildings.iter().filter(|b| !b.is_flexible())
    }

    /// Buildings whose quantity is optimized
    pub fn flexible(&self) -> impl Iterator<Item = &BuildingFact> {
        self.buildings.iter().filter(|b| b.is_flexible())
    }
}

/// Input of the packing stage: a rectangular plot and the blocks to arrange in it.
#[derive(Clone, Debug)]
pub struct PackInstance {
    /// The plot, with its top-left corner at the origin
    pub plot: Rect,
    pub blocks: Vec<Block>,
}

impl PackInstance {
    pub fn try_new(plot_width: f32, plot_height: f32, blocks: Vec<Block>) -> Result<Self> {
        let plot = Rect::try_new(0.0, 0.0, plot_width, plot_height)?;
        Ok(PackInstance { plot, blocks })
    }

    pub fn block_area(&self) -> f32 {
        self.blocks.iter().map(|b| b.area()).sum()
    }
}
