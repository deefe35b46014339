use crate::entities::Block;
use crate::geometry::Rect;

/// A block placed on the plot.
/// `(x, y)` is the top-left corner of the footprint (y-axis growing downward),
/// `width` and `height` are the final footprint dimensions, after rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub title: String,
    pub indent: f32,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    /// Whether the block was turned by 90° with respect to its definition
    pub rotated: bool,
}

impl Placement {
    /// The rectangle occupied by the footprint (indent included)
    pub fn footprint(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }

    /// The rectangle occupied by the building itself (indent excluded)
    pub fn body(&self) -> Option<Rect> {
        match self.indent > 0.0 {
            true => self.footprint().shrink_by(self.indent),
            false => Some(self.footprint()),
        }
    }

    /// A block with exactly the dimensions this placement ended up with, which the packer may not rotate.
    pub fn to_fixed_block(&self) -> Block {
        Block::from_footprint(self.title.clone(), self.indent, self.width, self.height)
            .with_fixed_orientation()
    }
}
