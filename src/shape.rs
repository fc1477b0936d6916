use crate::{points::Points, utils::orient_2d, PointId};

/// Point equality is exact value comparison, no epsilon anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Default for Point {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// whether the point lies in `[0, width) x [0, height)`
    pub fn in_bounds(&self, width: usize, height: usize) -> bool {
        self.x >= 0. && self.y >= 0. && self.x < width as f64 && self.y < height as f64
    }

    /// hashable key, `-0.0` and `0.0` share a key since they compare equal
    pub(crate) fn key(&self) -> (u64, u64) {
        ((self.x + 0.).to_bits(), (self.y + 0.).to_bits())
    }
}

/// A directed edge between two points.
/// `alive` decides whether the edge is carved into the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// start point
    pub p: PointId,
    /// end point
    pub q: PointId,
    pub alive: bool,
}

impl Edge {
    pub fn new(p: PointId, q: PointId) -> Self {
        Self { p, q, alive: true }
    }

    /// whether `other` runs between the same points in the opposite direction
    pub fn is_reverse_of(&self, other: &Edge) -> bool {
        self.p == other.q && self.q == other.p
    }

    pub fn length(&self, points: &Points) -> f64 {
        points.get(self.p).distance(&points.get(self.q))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// triangle points, counter-clockwise (or collinear)
    pub points: [PointId; 3],
}

impl Triangle {
    /// Create a triangle without checking its winding, caller guarantees ccw.
    pub fn new(a: PointId, b: PointId, c: PointId) -> Self {
        Self { points: [a, b, c] }
    }

    /// Create a triangle, swapping `b` and `c` when `a, b, c` is clockwise.
    /// The winding is fixed here and never flipped afterwards.
    pub fn new_ccw(a: PointId, b: PointId, c: PointId, points: &Points) -> Self {
        if orient_2d(points.get(a), points.get(b), points.get(c)).is_cw() {
            Self::new(a, c, b)
        } else {
            Self::new(a, b, c)
        }
    }

    /// whether contains the point
    pub fn contains(&self, point_id: PointId) -> bool {
        self.points[0] == point_id || self.points[1] == point_id || self.points[2] == point_id
    }

    /// three directed edges, `ab`, `bc`, `ca`
    pub fn edges(&self) -> [(PointId, PointId); 3] {
        let [a, b, c] = self.points;
        [(a, b), (b, c), (c, a)]
    }

    /// zero area triangle, produced by collinear points
    pub fn is_degenerate(&self, points: &Points) -> bool {
        let [a, b, c] = self.points;
        orient_2d(points.get(a), points.get(b), points.get(c)).is_collinear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ccw_fixes_winding() {
        let mut points = Points::new();
        let (a, _) = points.add_point(Point::new(0., 0.));
        let (b, _) = points.add_point(Point::new(0., 1.));
        let (c, _) = points.add_point(Point::new(1., 0.));

        let t = Triangle::new_ccw(a, b, c, &points);
        assert_eq!(t.points, [a, c, b]);

        let t = Triangle::new_ccw(a, c, b, &points);
        assert_eq!(t.points, [a, c, b]);
    }

    #[test]
    fn test_edge_reverse() {
        let e = Edge::new(PointId(0), PointId(1));
        assert!(e.is_reverse_of(&Edge::new(PointId(1), PointId(0))));
        assert!(!e.is_reverse_of(&Edge::new(PointId(0), PointId(1))));
    }

    #[test]
    fn test_point_bounds() {
        assert!(Point::new(0., 0.).in_bounds(10, 10));
        assert!(!Point::new(10., 0.).in_bounds(10, 10));
        assert!(!Point::new(-0.5, 3.).in_bounds(10, 10));
        assert_eq!(Point::new(0., 0.).key(), Point::new(-0., 0.).key());
    }
}
