use crate::entities::{Block, BuildingFact, KnapsackInstance, PackInstance};
use crate::io::ext_repr::{ExtBlock, ExtBuilding};
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, warn};

pub fn import_building(ext_building: &ExtBuilding) -> Result<BuildingFact> {
    BuildingFact::try_new(
        ext_building.title.clone(),
        ext_building.width,
        ext_building.height,
        ext_building.indent,
        ext_building.price_to_build,
        ext_building.profit,
        ext_building.kind,
    )
}

pub fn import_block(ext_block: &ExtBlock) -> Result<Block> {
    let block = Block::try_new(
        ext_block.title.clone(),
        ext_block.width,
        ext_block.height,
        ext_block.indent,
    )?;
    match ext_block.rotatable {
        Some(false) => Ok(block.with_fixed_orientation()),
        Some(true) if !block.rotatable => {
            warn!(
                "block {:?} has a square footprint, rotating it has no effect",
                block.title
            );
            Ok(block)
        }
        _ => Ok(block),
    }
}

/// Validates and imports a list of buildings. Fails on the first malformed record.
pub fn import_buildings(ext_buildings: &[ExtBuilding]) -> Result<Vec<BuildingFact>> {
    let buildings = ext_buildings
        .iter()
        .enumerate()
        .map(|(i, eb)| import_building(eb).with_context(|| format!("invalid building at index {i}")))
        .collect::<Result<Vec<BuildingFact>>>()?;

    debug!(
        "imported {} buildings ({} required, {} flexible)",
        buildings.len(),
        buildings.iter().filter(|b| !b.is_flexible()).count(),
        buildings.iter().filter(|b| b.is_flexible()).count()
    );

    let duplicates = buildings.iter().map(|b| &b.title).duplicates().collect_vec();
    if !duplicates.is_empty() {
        warn!("multiple buildings share a title: {duplicates:?}");
    }

    Ok(buildings)
}

/// Validates and imports a knapsack instance. Fails on the first malformed record.
pub fn import_knapsack_instance(
    capacity: f32,
    budget: f64,
    ext_buildings: &[ExtBuilding],
) -> Result<KnapsackInstance> {
    KnapsackInstance::try_new(capacity, budget, import_buildings(ext_buildings)?)
}

/// Validates and imports a packing instance. Fails on the first malformed record.
pub fn import_pack_instance(
    plot_width: f32,
    plot_height: f32,
    ext_blocks: &[ExtBlock],
) -> Result<PackInstance> {
    let blocks = ext_blocks
        .iter()
        .enumerate()
        .map(|(i, eb)| import_block(eb).with_context(|| format!("invalid block at index {i}")))
        .collect::<Result<Vec<Block>>>()?;

    PackInstance::try_new(plot_width, plot_height, blocks).context("invalid plot")
}
