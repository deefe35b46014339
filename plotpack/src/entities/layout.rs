use crate::entities::Placement;
use crate::geometry::Rect;
use crate::util::assertions;

/// A feasible arrangement of blocks on a plot
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub plot: Rect,
    /// Placements in the order the blocks were placed
    pub placements: Vec<Placement>,
}

impl Layout {
    pub fn new(plot: Rect, placements: Vec<Placement>) -> Self {
        let layout = Layout { plot, placements };
        debug_assert!(assertions::layout_is_feasible(&layout));
        layout
    }

    /// Fraction of the plot covered by footprints
    pub fn density(&self) -> f32 {
        let used: f32 = self.placements.iter().map(|p| p.footprint().area()).sum();
        used / self.plot.area()
    }
}
