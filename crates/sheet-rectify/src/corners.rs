use crate::{QuadDefect, QuadValidationParams};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a corner in a [`Quadrilateral`], in image convention (y down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerRole {
    TopLeft,
    BottomLeft,
    BottomRight,
    TopRight,
}

impl CornerRole {
    /// All roles in quadrilateral order.
    pub const ALL: [CornerRole; 4] = [
        CornerRole::TopLeft,
        CornerRole::BottomLeft,
        CornerRole::BottomRight,
        CornerRole::TopRight,
    ];

    /// Direction `(fx, fy)` whose support function selects this corner.
    #[inline]
    pub fn direction(self) -> (f64, f64) {
        match self {
            CornerRole::TopLeft => (-1.0, -1.0),
            CornerRole::BottomLeft => (-1.0, 1.0),
            CornerRole::BottomRight => (1.0, 1.0),
            CornerRole::TopRight => (1.0, -1.0),
        }
    }
}

impl fmt::Display for CornerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CornerRole::TopLeft => "top-left",
            CornerRole::BottomLeft => "bottom-left",
            CornerRole::BottomRight => "bottom-right",
            CornerRole::TopRight => "top-right",
        })
    }
}

/// Four corners of the detected sheet, in source-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quadrilateral {
    pub top_left: Point2<f64>,
    pub bottom_left: Point2<f64>,
    pub bottom_right: Point2<f64>,
    pub top_right: Point2<f64>,
}

impl Quadrilateral {
    /// Build from corners in [`CornerRole::ALL`] order.
    pub fn from_array(corners: [Point2<f64>; 4]) -> Self {
        let [top_left, bottom_left, bottom_right, top_right] = corners;
        Self {
            top_left,
            bottom_left,
            bottom_right,
            top_right,
        }
    }

    /// Corners in [`CornerRole::ALL`] order.
    pub fn to_array(&self) -> [Point2<f64>; 4] {
        [
            self.top_left,
            self.bottom_left,
            self.bottom_right,
            self.top_right,
        ]
    }

    pub fn corner(&self, role: CornerRole) -> Point2<f64> {
        match role {
            CornerRole::TopLeft => self.top_left,
            CornerRole::BottomLeft => self.bottom_left,
            CornerRole::BottomRight => self.bottom_right,
            CornerRole::TopRight => self.top_right,
        }
    }
}

/// First vertex maximizing `fx * x + fy * y`.
fn support_point(vertices: &[Point2<f64>], (fx, fy): (f64, f64)) -> Option<Point2<f64>> {
    let mut best: Option<(f64, Point2<f64>)> = None;
    for &v in vertices {
        let score = fx * v.x + fy * v.y;
        match best {
            Some((max, _)) if score <= max => {}
            _ => best = Some((score, v)),
        }
    }
    best.map(|(_, v)| v)
}

/// Pick the extremal hull vertex for each [`CornerRole`].
///
/// Ties go to the vertex met first in `vertices`. Nothing is validated: a
/// near-triangular hull can put the same vertex in two roles. Returns `None`
/// only for an empty slice.
pub fn select_corners(vertices: &[Point2<f64>]) -> Option<Quadrilateral> {
    let tl = support_point(vertices, CornerRole::TopLeft.direction())?;
    let bl = support_point(vertices, CornerRole::BottomLeft.direction())?;
    let br = support_point(vertices, CornerRole::BottomRight.direction())?;
    let tr = support_point(vertices, CornerRole::TopRight.direction())?;
    Some(Quadrilateral::from_array([tl, bl, br, tr]))
}

/// Reject repeated or nearly collinear corners.
pub fn validate_quadrilateral(
    quad: &Quadrilateral,
    params: &QuadValidationParams,
) -> Result<(), QuadDefect> {
    let pts = quad.to_array();
    let roles = CornerRole::ALL;

    for i in 0..4 {
        for j in (i + 1)..4 {
            if (pts[j] - pts[i]).norm() < params.min_corner_distance {
                return Err(QuadDefect::CoincidentCorners {
                    first: roles[i],
                    second: roles[j],
                });
            }
        }
    }

    // Walking TL -> BL -> BR -> TR every turn has the same sign on a
    // convex, non-self-intersecting quadrilateral.
    let mut sign = 0.0_f64;
    for i in 0..4 {
        let prev = pts[(i + 3) % 4];
        let cur = pts[i];
        let next = pts[(i + 1) % 4];
        let e0 = cur - prev;
        let e1 = next - cur;
        let sin = (e0.x * e1.y - e0.y * e1.x) / (e0.norm() * e1.norm());
        if sin.abs() < params.min_turn_sin || sin * sign < 0.0 || !sin.is_finite() {
            return Err(QuadDefect::NotConvex { corner: roles[i] });
        }
        sign = sin.signum();
    }
    Ok(())
}
