use crate::geometry::geo_enums::Orientation;
use crate::util::FPA;
use anyhow::{Result, ensure};

/// Rectangular block to be packed in a plot.
/// `width` and `height` are the footprint: the building's own dimensions plus its indent on all four sides.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub title: String,
    pub indent: f32,
    pub width: f32,
    pub height: f32,
    /// Whether the packer may turn the block by 90°
    pub rotatable: bool,
}

impl Block {
    /// Creates a block from the building's own dimensions and indent.
    /// The block is rotatable unless its footprint is square.
    pub fn try_new(title: impl Into<String>, width: f32, height: f32, indent: f32) -> Result<Self> {
        let title = title.into();
        ensure!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "block {title:?} has invalid dimensions: {width} x {height}"
        );
        ensure!(
            indent.is_finite() && indent >= 0.0,
            "block {title:?} has invalid indent: {indent}"
        );
        Ok(Block::from_footprint(
            title,
            indent,
            width + 2.0 * indent,
            height + 2.0 * indent,
        ))
    }

    pub(crate) fn from_footprint(title: String, indent: f32, width: f32, height: f32) -> Self {
        Block {
            title,
            indent,
            width,
            height,
            rotatable: width != height,
        }
    }

    /// Forces the block to be packed only in its current orientation.
    pub fn with_fixed_orientation(mut self) -> Self {
        self.rotatable = false;
        self
    }

    /// Footprint dimensions `(width, height)` in the given orientation
    pub fn dims(&self, orientation: Orientation) -> (f32, f32) {
        match orientation {
            Orientation::Original => (self.width, self.height),
            Orientation::Rotated => (self.height, self.width),
        }
    }

    /// Orientations the packer is allowed to try, in order.
    pub fn orientations(&self) -> &'static [Orientation] {
        match self.rotatable {
            true => &[Orientation::Original, Orientation::Rotated],
            false => &[Orientation::Original],
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the block fits in an empty `width` x `height` plot in any allowed orientation.
    pub fn fits_within(&self, width: f32, height: f32) -> bool {
        self.orientations().iter().any(|o| {
            let (w, h) = self.dims(*o);
            FPA(w) <= FPA(width) && FPA(h) <= FPA(height)
        })
    }
}
