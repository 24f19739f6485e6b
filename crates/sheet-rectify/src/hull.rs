use crate::RectifyError;
use nalgebra::Point2;

#[inline]
fn cross(o: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Convex polygon enclosing a point set.
///
/// Vertices are ordered counter-clockwise in raw `(x, y)` terms (clockwise
/// on screen, where y points down), starting from the lexicographically
/// smallest point. Points lying on an edge are not vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
    pub vertices: Vec<Point2<f64>>,
}

impl ConvexHull {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace area (positive for the stored orientation).
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut twice = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            twice += a.x * b.y - b.x * a.y;
        }
        0.5 * twice
    }

    /// `true` when `p` is inside or within `tol` pixels of the boundary.
    pub fn contains(&self, p: Point2<f64>, tol: f64) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let edge = (b - a).norm();
            edge == 0.0 || cross(a, b, p) / edge >= -tol
        })
    }
}

/// Convex hull of `points` (Andrew's monotone chain).
///
/// Duplicates are allowed. Fails when fewer than three distinct points are
/// given or when all of them are collinear.
pub fn convex_hull(points: &[Point2<f64>]) -> Result<ConvexHull, RectifyError> {
    // `total_cmp` orders -0.0 before 0.0 while `==` and `cross` do not
    let mut pts: Vec<Point2<f64>> = points
        .iter()
        .map(|p| Point2::new(p.x + 0.0, p.y + 0.0))
        .collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();

    let distinct = pts.len();
    if distinct < 3 {
        return Err(RectifyError::InsufficientPoints { distinct });
    }

    let mut lower: Vec<Point2<f64>> = Vec::with_capacity(distinct);
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point2<f64>> = Vec::with_capacity(distinct);
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);

    if lower.len() < 3 {
        return Err(RectifyError::InsufficientPoints { distinct });
    }
    Ok(ConvexHull { vertices: lower })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    /// Small deterministic LCG so the containment test needs no RNG crate.
    fn scatter(n: usize, seed: u64) -> Vec<Point2<f64>> {
        let mut state = seed;
        let mut next = || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as f64) / (1u64 << 31) as f64
        };
        (0..n)
            .map(|_| p(next() * 640.0, next() * 480.0))
            .collect()
    }

    #[test]
    fn square_with_diagonal_endpoints() {
        let pts = [p(0.0, 0.0), p(100.0, 100.0), p(0.0, 100.0), p(100.0, 0.0)];
        let hull = convex_hull(&pts).expect("hull");
        assert_eq!(
            hull.vertices,
            vec![p(0.0, 0.0), p(100.0, 0.0), p(100.0, 100.0), p(0.0, 100.0)]
        );
        assert_eq!(hull.area(), 10_000.0);
    }

    #[test]
    fn interior_and_edge_points_are_dropped() {
        let pts = [
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(5.0, 5.0),
            p(0.0, 10.0),
        ];
        let hull = convex_hull(&pts).expect("hull");
        assert_eq!(hull.len(), 4);
        assert!(!hull.vertices.contains(&p(5.0, 0.0)));
        assert!(!hull.vertices.contains(&p(5.0, 5.0)));
    }

    #[test]
    fn every_input_point_is_contained() {
        for seed in [1_u64, 7, 42, 2024] {
            let pts = scatter(200, seed);
            let hull = convex_hull(&pts).expect("hull");
            assert!(hull.area() > 0.0);
            for q in &pts {
                assert!(hull.contains(*q, 1e-9), "{q:?} outside hull (seed {seed})");
            }
        }
    }

    #[test]
    fn input_order_does_not_matter() {
        let pts = scatter(60, 3);
        let mut reversed = pts.clone();
        reversed.reverse();
        assert_eq!(
            convex_hull(&pts).expect("hull"),
            convex_hull(&reversed).expect("hull")
        );
    }

    #[test]
    fn too_few_distinct_points_fail() {
        let pts = [p(1.0, 1.0), p(1.0, 1.0), p(2.0, 2.0), p(2.0, 2.0)];
        assert_eq!(
            convex_hull(&pts),
            Err(RectifyError::InsufficientPoints { distinct: 2 })
        );
        assert_eq!(
            convex_hull(&[]),
            Err(RectifyError::InsufficientPoints { distinct: 0 })
        );
    }

    #[test]
    fn collinear_points_fail() {
        let pts = [p(0.0, 0.0), p(1.0, 2.0), p(2.0, 4.0), p(3.0, 6.0)];
        assert_eq!(
            convex_hull(&pts),
            Err(RectifyError::InsufficientPoints { distinct: 4 })
        );
    }

    #[test]
    fn outside_point_is_not_contained() {
        let hull = convex_hull(&[p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)]).expect("hull");
        assert!(hull.contains(p(1.0, 1.0), 0.0));
        assert!(hull.contains(p(2.0, 2.0), 1e-9));
        assert!(!hull.contains(p(3.0, 3.0), 1e-9));
    }

    #[test]
    fn negative_zero_sorts_with_positive_zero() {
        let pts = [p(-0.0, 1.0), p(0.0, 0.0), p(0.0, 2.0), p(5.0, 1.0)];
        let hull = convex_hull(&pts).expect("hull");
        assert_eq!(hull.vertices, vec![p(0.0, 0.0), p(5.0, 1.0), p(0.0, 2.0)]);
        assert!(hull.vertices.iter().all(|v| v.x.is_sign_positive()));
        for &q in &pts {
            assert!(hull.contains(q, 1e-9), "{q:?} outside {:?}", hull.vertices);
        }
    }
}
