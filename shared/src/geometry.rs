//! Percentage coordinate model for map polygons
//!
//! All polygon points live in a normalized 0-100 space on both axes,
//! independent of the rendered pixel size of the map viewport. Stored
//! polygons are therefore invariant to zoom, pan, and resize, as long as
//! the viewport keeps a fixed aspect ratio.

use serde::{Deserialize, Serialize};

/// Number of points in a committed area polygon
pub const POLYGON_POINTS: usize = 4;

/// A point in the 0-100 percentage coordinate space.
///
/// The model does not clamp values; producers must constrain input to
/// the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a pointer event position to a percentage-space point,
    /// given the current on-screen bounding rectangle of the map
    /// container.
    pub fn from_client(client_x: f64, client_y: f64, rect: &ViewportRect) -> Self {
        Self {
            x: (client_x - rect.left) / rect.width * 100.0,
            y: (client_y - rect.top) / rect.height * 100.0,
        }
    }
}

/// On-screen bounding rectangle of the map container, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned bounding box of a polygon, in percentage space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a point slice. Returns `None` for an
    /// empty slice.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }
}

/// Ray-cast point-in-polygon test.
///
/// Edges follow insertion order, with a closing edge from the last point
/// back to the first. Polygons with fewer than 3 points contain nothing.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_coordinates_normalize_to_percentages() {
        let rect = ViewportRect {
            left: 100.0,
            top: 50.0,
            width: 800.0,
            height: 600.0,
        };
        let p = Point::from_client(500.0, 350.0, &rect);
        assert_eq!(p, Point::new(50.0, 50.0));
    }

    #[test]
    fn conversion_does_not_clamp_out_of_bounds_input() {
        let rect = ViewportRect {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let p = Point::from_client(150.0, -10.0, &rect);
        assert_eq!(p, Point::new(150.0, -10.0));
    }

    #[test]
    fn bounding_box_spans_min_and_max() {
        let points = [
            Point::new(10.0, 40.0),
            Point::new(30.0, 5.0),
            Point::new(25.0, 35.0),
            Point::new(12.0, 20.0),
        ];
        let bbox = BoundingBox::of(&points).unwrap();
        assert_eq!(bbox.min_x, 10.0);
        assert_eq!(bbox.max_x, 30.0);
        assert_eq!(bbox.min_y, 5.0);
        assert_eq!(bbox.max_y, 40.0);
        assert_eq!(bbox.center(), Point::new(20.0, 22.5));
    }

    #[test]
    fn bounding_box_of_empty_slice_is_none() {
        assert!(BoundingBox::of(&[]).is_none());
    }

    #[test]
    fn point_in_polygon_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Point::new(5.0, 5.0), &square));
        assert!(!point_in_polygon(Point::new(15.0, 5.0), &square));
        assert!(!point_in_polygon(Point::new(5.0, -1.0), &square));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let segment = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        assert!(!point_in_polygon(Point::new(5.0, 5.0), &segment));
    }
}
