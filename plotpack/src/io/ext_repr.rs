use crate::entities::BuildingKind;
use serde::{Deserialize, Serialize};

/// External representation of a [`BuildingFact`](crate::entities::BuildingFact).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBuilding {
    pub title: String,
    /// Width of the building, without indent
    pub width: f32,
    /// Height of the building, without indent
    pub height: f32,
    /// Border kept free on all four sides. Zero if not specified.
    #[serde(default)]
    pub indent: f32,
    pub price_to_build: f64,
    pub profit: f64,
    pub kind: BuildingKind,
}

/// External representation of a [`Block`](crate::entities::Block).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBlock {
    pub title: String,
    /// Width of the building, without indent
    pub width: f32,
    /// Height of the building, without indent
    pub height: f32,
    /// Border kept free on all four sides. Zero if not specified.
    #[serde(default)]
    pub indent: f32,
    /// Whether the block may be turned by 90°.
    /// Rotatable unless the footprint is square if not specified.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rotatable: Option<bool>,
}

/// External representation of a [`SelectionEntry`](crate::entities::SelectionEntry).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSelectionEntry {
    pub title: String,
    pub kind: BuildingKind,
    pub count: usize,
    pub area_with_indent: f32,
    pub price_to_build: f64,
    pub profit: f64,
}

/// External representation of a [`Selection`](crate::entities::Selection).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSelection {
    pub entries: Vec<ExtSelectionEntry>,
    /// Optimized profit of the flexible buildings
    pub total_profit: f64,
    /// Area (indent included) of all selected buildings
    pub total_area: f32,
    /// Construction cost of all selected buildings
    pub total_cost: f64,
    pub capacity_cells: usize,
    pub bucket_size: f32,
    /// Whether all flexible buildings fit at their maximum repetition, skipping the optimization
    pub fast_path: bool,
}

/// External representation of a [`Placement`](crate::entities::Placement).
/// The origin is the top-left corner of the plot, the y-axis grows downward.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub title: String,
    pub indent: f32,
    /// Footprint width after rotation, indent included
    pub width: f32,
    /// Footprint height after rotation, indent included
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub rotated: bool,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    pub plot_width: f32,
    pub plot_height: f32,
    /// Fraction of the plot covered by footprints
    pub density: f32,
    pub placements: Vec<ExtPlacement>,
}
