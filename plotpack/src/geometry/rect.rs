use crate::geometry::geo_enums::GeoRelation;
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle.
///The coordinate system has its origin at the top-left corner of the plot, with the y-axis growing downward:
///(`x_min`, `y_min`) is the top-left corner.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self> {
        ensure!(
            x_min.is_finite() && y_min.is_finite() && x_max.is_finite() && y_max.is_finite(),
            "invalid rectangle, non-finite coordinates: [{x_min}, {y_min}, {x_max}, {y_max}]"
        );
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Creates a rectangle from its top-left corner and its dimensions.
    pub fn from_corner(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        Rect::try_new(x, y, x + width, y + height)
    }

    /// Returns the geometric relation between `self` and another [`Rect`], with a tolerance for floating point precision.
    /// Rectangles which merely touch are [`GeoRelation::Disjoint`].
    /// In edge cases, this method will lean towards `Surrounding` and `Enclosed` instead of `Intersecting`.
    #[inline(always)]
    pub fn almost_relation_to(&self, other: Rect) -> GeoRelation {
        if !self.almost_overlaps(&other) {
            return GeoRelation::Disjoint;
        }
        if FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
        {
            return GeoRelation::Surrounding;
        }
        if FPA(self.x_min) >= FPA(other.x_min)
            && FPA(self.y_min) >= FPA(other.y_min)
            && FPA(self.x_max) <= FPA(other.x_max)
            && FPA(self.y_max) <= FPA(other.y_max)
        {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// True if the interiors of both rectangles intersect. Shared edges do not count as overlap.
    #[inline(always)]
    pub fn almost_overlaps(&self, other: &Rect) -> bool {
        FPA(f32::max(self.x_min, other.x_min)) < FPA(f32::min(self.x_max, other.x_max))
            && FPA(f32::max(self.y_min, other.y_min)) < FPA(f32::min(self.y_max, other.y_max))
    }

    /// True if `other` lies completely within `self` (boundaries included).
    pub fn almost_contains(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }

    /// Returns a new rectangle shrunk by `d` on all four sides.
    /// If the new rectangle would be invalid (x_min >= x_max or y_min >= y_max), returns None.
    pub fn shrink_by(mut self, d: f32) -> Option<Self> {
        self.x_min += d;
        self.y_min += d;
        self.x_max -= d;
        self.y_max -= d;

        if self.x_min < self.x_max && self.y_min < self.y_max {
            Some(self)
        } else {
            None
        }
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f32::max(a.x_min, b.x_min);
        let y_min = f32::max(a.y_min, b.y_min);
        let x_max = f32::min(a.x_max, b.x_max);
        let y_max = f32::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }
}
