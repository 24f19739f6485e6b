use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Strict counter-clockwise predicate for the triangle `(a, b, c)`.
///
/// Collinear triples are *not* counter-clockwise.
#[inline]
pub fn ccw(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// A straight edge reported by the line detector, in image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p0: Point2<f64>,
    pub p1: Point2<f64>,
}

impl LineSegment {
    pub fn new(p0: Point2<f64>, p1: Point2<f64>) -> Self {
        Self { p0, p1 }
    }

    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[inline]
    pub fn endpoints(&self) -> [Point2<f64>; 2] {
        [self.p0, self.p1]
    }

    /// Transversal crossing test.
    ///
    /// Segments sharing an endpoint, or collinear and overlapping, are
    /// reported as non-intersecting. An endpoint resting on the interior of
    /// the other segment (a T-junction) counts as a crossing.
    #[inline]
    pub fn intersects(&self, other: &LineSegment) -> bool {
        let (a, b) = (self.p0, self.p1);
        let (c, d) = (other.p0, other.p1);
        ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
    }
}
