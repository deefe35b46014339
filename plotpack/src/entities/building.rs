use crate::entities::Block;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Category of a building, which decides whether its quantity is optimized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    /// Civic building that is always built exactly once
    Required,
    /// Flexible, can be repeated as often as the budget allows
    Apartment,
    /// Flexible, built at most once
    Shop,
}

impl BuildingKind {
    pub fn is_flexible(self) -> bool {
        self != BuildingKind::Required
    }

    /// Upper bound on the number of copies, independent of the budget. `None` if unbounded.
    pub fn repeat_cap(self) -> Option<usize> {
        match self {
            BuildingKind::Required | BuildingKind::Shop => Some(1),
            BuildingKind::Apartment => None,
        }
    }
}

/// Read-only description of a building type, with all quantities already resolved to plain numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingFact {
    pub title: String,
    /// Width of the building itself, without indent
    pub width: f32,
    /// Height of the building itself, without indent
    pub height: f32,
    /// Uniform border kept free around the building on all four sides
    pub indent: f32,
    pub price_to_build: f64,
    pub profit: f64,
    pub kind: BuildingKind,
}

impl BuildingFact {
    pub fn try_new(
        title: impl Into<String>,
        width: f32,
        height: f32,
        indent: f32,
        price_to_build: f64,
        profit: f64,
        kind: BuildingKind,
    ) -> Result<Self> {
        let title = title.into();
        ensure!(!title.trim().is_empty(), "building title cannot be empty");
        ensure!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "building {title:?} has invalid dimensions: {width} x {height}"
        );
        ensure!(
            indent.is_finite() && indent >= 0.0,
            "building {title:?} has invalid indent: {indent}"
        );
        ensure!(
            price_to_build.is_finite() && price_to_build >= 0.0,
            "building {title:?} has invalid price: {price_to_build}"
        );
        ensure!(
            !kind.is_flexible() || price_to_build > 0.0,
            "flexible building {title:?} must have a positive price, otherwise its repetitions are unbounded"
        );
        ensure!(profit.is_finite(), "building {title:?} has invalid profit: {profit}");

        Ok(BuildingFact {
            title,
            width,
            height,
            indent,
            price_to_build,
            profit,
            kind,
        })
    }

    pub fn is_flexible(&self) -> bool {
        self.kind.is_flexible()
    }

    pub fn footprint_width(&self) -> f32 {
        self.width + 2.0 * self.indent
    }

    pub fn footprint_height(&self) -> f32 {
        self.height + 2.0 * self.indent
    }

    /// Area of the building including its indent on all sides
    pub fn area_with_indent(&self) -> f32 {
        self.footprint_width() * self.footprint_height()
    }

    /// The rectangular block this building occupies on the plot
    pub fn to_block(&self) -> Block {
        Block::from_footprint(
            self.title.clone(),
            self.indent,
            self.footprint_width(),
            self.footprint_height(),
        )
    }
}
