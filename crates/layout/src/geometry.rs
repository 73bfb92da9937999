//! Card geometry and the predicates the packer accepts placements by.

use dobble_traits::ImageDimensions;
use dobble_types::{Circle, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Distance metric for the "corner inside the circle" test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Containment {
    /// L1 distance. Accepts a diamond inscribed in the circle, not the circle
    /// itself, so cards come out slightly under-packed.
    #[default]
    Manhattan,
    /// True Euclidean distance.
    Euclidean,
}

impl Containment {
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Containment::Manhattan => a.manhattan_distance(b),
            Containment::Euclidean => a.euclidean_distance(b),
        }
    }

    /// A point is inside when its distance to the center is strictly below the radius.
    pub fn admits(self, circle: &Circle, point: Point) -> bool {
        self.distance(point, circle.center) < circle.radius
    }
}

/// The square canvas of one card and the circle symbols must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    canvas: Size,
    circle: Circle,
    circle_area: f64,
}

impl CardGeometry {
    /// A square canvas of `size` drawing units, with the circle centered on
    /// it and one unit smaller than the half-width.
    pub fn square(size: u32) -> Self {
        let half = f64::from(size) / 2.0;
        let radius = half.round_ties_even() - 1.0;
        Self {
            canvas: Size::new(size, size),
            circle: Circle::new(Point::new(half, half), radius),
            circle_area: (PI * radius * radius).round_ties_even(),
        }
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }

    /// The circle's area, rounded to whole square units.
    pub fn circle_area(&self) -> f64 {
        self.circle_area
    }

    /// Area budget of one symbol before its random scale is applied.
    pub fn symbol_area(&self, symbols_per_card: usize, reduction_factor: f64) -> f64 {
        (self.circle_area / (symbols_per_card as f64 * reduction_factor)).round_ties_even()
    }

    /// `true` when all four corners of `rect` pass the containment test.
    pub fn contains(&self, rect: &Rect, metric: Containment) -> bool {
        rect.corners()
            .iter()
            .all(|corner| metric.admits(&self.circle, *corner))
    }

    /// `true` when the rectangle can be positioned on the canvas at all.
    pub fn fits_canvas(&self, size: Size) -> bool {
        size.width <= self.canvas.width && size.height <= self.canvas.height
    }
}

/// Rectangle size for a symbol: the image's aspect ratio stretched over
/// `area`, scaled by `scale_percent` and rounded to whole units (at least 1).
pub fn symbol_size(area: f64, dimensions: ImageDimensions, scale_percent: u32) -> Size {
    let aspect = dimensions.aspect_ratio();
    let height = (area / aspect).sqrt();
    let width = aspect * height;
    let scale = f64::from(scale_percent) / 100.0;
    Size::new(to_units(width * scale), to_units(height * scale))
}

fn to_units(value: f64) -> u32 {
    (value.round_ties_even() as u32).max(1)
}
