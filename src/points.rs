use rustc_hash::FxHashMap;

use crate::{shape::Point, PointId};

/// Point store, provide a unique [`PointId`] for each distinct coordinate.
///
/// Points keep insertion order, which is also the order the triangulator
/// processes them in. Adding a point equal to a stored one returns the
/// stored id, so id equality and coordinate equality are the same thing.
#[derive(Debug, Clone, Default)]
pub struct Points {
    points: Vec<Point>,
    index: FxHashMap<(u64, u64), PointId>,
}

impl Points {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Add a point, returns its id and whether it was newly inserted.
    pub fn add_point(&mut self, point: Point) -> (PointId, bool) {
        if let Some(id) = self.index.get(&point.key()) {
            return (*id, false);
        }

        let point_id = PointId(self.points.len());
        self.points.push(point);
        self.index.insert(point.key(), point_id);
        (point_id, true)
    }

    pub fn get_point(&self, id: PointId) -> Option<Point> {
        self.points.get(id.0).copied()
    }

    /// Get point by id, the id must come from this store.
    pub fn get(&self, id: PointId) -> Point {
        self.points[id.0]
    }

    pub fn find(&self, point: Point) -> Option<PointId> {
        self.index.get(&point.key()).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(idx, p)| (PointId(idx), *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_dedup() {
        let mut points = Points::new();
        let (p0, new0) = points.add_point(Point::new(1., 2.));
        let (p1, new1) = points.add_point(Point::new(3., 2.));
        let (p2, new2) = points.add_point(Point::new(1., 2.));

        assert!(new0 && new1 && !new2);
        assert_eq!(p0, p2);
        assert_ne!(p0, p1);
        assert_eq!(points.len(), 2);
        assert_eq!(points.find(Point::new(3., 2.)), Some(p1));
        assert_eq!(points.find(Point::new(3., 2.5)), None);
        assert_eq!(points.get_point(PointId(7)), None);
    }
}
