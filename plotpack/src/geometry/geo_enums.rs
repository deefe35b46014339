use serde::{Deserialize, Serialize};

/// Geometric relation between two rectangles
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GeoRelation {
    /// Both rectangles share no interior points (touching edges are allowed)
    Disjoint,
    /// `self` completely encloses the other rectangle
    Surrounding,
    /// `self` is completely enclosed by the other rectangle
    Enclosed,
    /// Partial overlap
    Intersecting,
}

/// Orientation of a rectangular footprint with respect to its definition
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// As defined: width along the x-axis
    #[default]
    Original,
    /// Turned by 90°: width and height swapped
    Rotated,
}

impl Orientation {
    pub fn is_rotated(self) -> bool {
        self == Orientation::Rotated
    }
}
