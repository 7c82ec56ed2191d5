//! Vector overlay descriptors composited over the tile stack.

use geo::Centroid;
use geo_types::{Coord, Geometry};
use serde::{Deserialize, Serialize};

/// RGBA color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Describes one vector overlay: an opaque shape plus paint.
///
/// Overlays draw in registration order; a later overlay lands on top of
/// an earlier one.
#[derive(Debug, Clone)]
pub struct OverlayDescriptor {
    /// The shape to draw, in geographical coordinates
    pub geometry: Geometry<f64>,
    /// Interior paint; `None` leaves the interior unfilled
    pub fill_color: Option<Rgba>,
    /// Outline paint; `None` leaves the outline undrawn
    pub stroke_color: Option<Rgba>,
    /// Outline width in points; never negative
    pub line_width: f64,
}

impl OverlayDescriptor {
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self {
            geometry,
            fill_color: None,
            stroke_color: None,
            line_width: 0.0,
        }
    }

    pub fn with_fill(mut self, color: Rgba) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_stroke(mut self, color: Rgba) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width.max(0.0);
        self
    }

    /// Representative coordinate of the shape, used for the coarse
    /// identity check below.
    pub fn representative_coordinate(&self) -> Option<Coord<f64>> {
        self.geometry.centroid().map(|point| point.0)
    }
}

/// Intentionally coarse equality: representative coordinate and fill
/// color only. Used solely to deduplicate repeated registration, not
/// for full shape comparison.
impl PartialEq for OverlayDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.representative_coordinate() == other.representative_coordinate()
            && self.fill_color == other.fill_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{polygon, LineString};

    fn square() -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ])
    }

    #[test]
    fn test_line_width_never_negative() {
        let descriptor = OverlayDescriptor::new(square()).with_line_width(-3.0);
        assert_eq!(descriptor.line_width, 0.0);
    }

    #[test]
    fn test_representative_coordinate_is_centroid() {
        let descriptor = OverlayDescriptor::new(square());
        let coord = descriptor.representative_coordinate().unwrap();
        assert!((coord.x - 1.0).abs() < 1e-9);
        assert!((coord.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_coarse_equality_matches_on_centroid_and_fill() {
        let red_square = OverlayDescriptor::new(square()).with_fill(Rgba::rgb(255, 0, 0));

        // A different shape with the same centroid and fill compares equal.
        let red_diamond = OverlayDescriptor::new(Geometry::LineString(LineString::from(vec![
            (1.0, 0.0),
            (2.0, 1.0),
            (1.0, 2.0),
            (0.0, 1.0),
            (1.0, 0.0),
        ])))
        .with_fill(Rgba::rgb(255, 0, 0));
        assert_eq!(red_square, red_diamond);

        // Same shape, different fill: not equal.
        let blue_square = OverlayDescriptor::new(square()).with_fill(Rgba::rgb(0, 0, 255));
        assert_ne!(red_square, blue_square);
    }

    #[test]
    fn test_stroke_does_not_affect_equality() {
        let plain = OverlayDescriptor::new(square()).with_fill(Rgba::rgb(0, 128, 0));
        let stroked = OverlayDescriptor::new(square())
            .with_fill(Rgba::rgb(0, 128, 0))
            .with_stroke(Rgba::rgb(0, 0, 0))
            .with_line_width(2.0);
        assert_eq!(plain, stroked);
    }
}
