use rustc_hash::FxHashSet;

use crate::{
    observer::Observer,
    points::Points,
    shape::{Point, Triangle},
    triangles::Triangles,
    utils::in_circle,
    PointId, Result,
};

/// Ids of the super triangle's vertices, they are always the first three
/// points of a [`Triangulation`].
pub const SUPER_TRIANGLE: [PointId; 3] = [PointId(0), PointId(1), PointId(2)];

/// How far the super triangle reaches, in bounding box extents.
const SUPER_TRIANGLE_REACH: f64 = 20.;

/// Result of an incremental Delaunay triangulation.
#[derive(Debug, Clone)]
pub struct Triangulation {
    points: Points,
    triangles: Triangles,
    has_super_triangle: bool,
    skipped: usize,
    unconnected: usize,
}

/// Triangulate `points` in order with the Bowyer-Watson algorithm.
///
/// `width` and `height` describe the area the points are expected in, the
/// super triangle covers it together with every input point. At most
/// `capacity` triangles may be alive at any time.
pub fn triangulate(
    points: &[Point],
    width: usize,
    height: usize,
    capacity: usize,
) -> Result<Triangulation> {
    triangulate_with_observer(points, width, height, capacity, &mut ())
}

pub fn triangulate_with_observer<O: Observer>(
    points: &[Point],
    width: usize,
    height: usize,
    capacity: usize,
    observer: &mut O,
) -> Result<Triangulation> {
    let mut store = Points::with_capacity(points.len() + 3);
    for vertex in super_triangle(points, width, height) {
        store.add_point(vertex);
    }

    let mut triangles = Triangles::with_capacity(capacity);
    let [a, b, c] = SUPER_TRIANGLE;
    triangles.insert(Triangle::new(a, b, c))?;

    let mut polygon: Vec<(PointId, PointId)> = Vec::with_capacity(32);
    let mut polygon_set: FxHashSet<(PointId, PointId)> = FxHashSet::default();
    let mut skipped = 0;
    let mut unconnected = 0;

    for &point in points {
        let (point_id, inserted) = store.add_point(point);
        if !inserted {
            tracing::trace!(?point, "skipping coincident point");
            skipped += 1;
            continue;
        }

        let bad = triangles.drain_where(|t| {
            let [a, b, c] = t.points;
            in_circle(store.get(a), store.get(b), store.get(c), point)
        });

        if bad.is_empty() {
            // only happens for degenerate input, the point stays isolated
            tracing::debug!(?point, "point outside every circumcircle");
            unconnected += 1;
            observer.point_event(point, 0);
            continue;
        }

        polygon.clear();
        for t in bad.iter() {
            polygon.extend(t.edges());
        }

        // an edge shared by two bad triangles shows up once in each
        // direction, only the boundary of the cavity remains
        polygon_set.clear();
        polygon_set.extend(polygon.iter().copied());
        for &(p, q) in polygon.iter() {
            if polygon_set.contains(&(q, p)) {
                continue;
            }
            triangles.insert(Triangle::new_ccw(p, q, point_id, &store))?;
        }

        tracing::trace!(?point, bad = bad.len(), triangles = triangles.len(), "point inserted");
        observer.point_event(point, bad.len());
    }

    tracing::debug!(
        points = points.len(),
        skipped,
        unconnected,
        triangles = triangles.len(),
        "triangulation done"
    );

    Ok(Triangulation {
        points: store,
        triangles,
        has_super_triangle: true,
        skipped,
        unconnected,
    })
}

/// A counter-clockwise triangle far outside the bounding box of
/// `[0, width] x [0, height]` and every point.
fn super_triangle(points: &[Point], width: usize, height: usize) -> [Point; 3] {
    let (mut min_x, mut min_y) = (0_f64, 0_f64);
    let (mut max_x, mut max_y) = (width as f64, height as f64);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let extent = (max_x - min_x).max(max_y - min_y).max(1.);
    let cx = (min_x + max_x) / 2.;
    let cy = (min_y + max_y) / 2.;
    let reach = SUPER_TRIANGLE_REACH * extent;

    [
        Point::new(cx - reach, cy - extent),
        Point::new(cx + reach, cy - extent),
        Point::new(cx, cy + reach),
    ]
}

impl Triangulation {
    pub fn points(&self) -> &Points {
        &self.points
    }

    pub fn triangles(&self) -> &Triangles {
        &self.triangles
    }

    /// whether the id belongs to one of the super triangle's vertices
    pub fn is_super(&self, id: PointId) -> bool {
        SUPER_TRIANGLE.contains(&id)
    }

    pub fn has_super_triangle(&self) -> bool {
        self.has_super_triangle
    }

    /// input points dropped because an equal point came earlier
    pub fn skipped_points(&self) -> usize {
        self.skipped
    }

    /// input points left out of every triangle
    pub fn unconnected_points(&self) -> usize {
        self.unconnected
    }

    /// Remove every triangle referencing a super triangle vertex.
    /// Returns the number of removed triangles.
    pub fn remove_super_triangle(&mut self) -> usize {
        if !self.has_super_triangle {
            return 0;
        }

        let removed = self
            .triangles
            .remove_where(|t| SUPER_TRIANGLE.iter().any(|id| t.contains(*id)));
        self.has_super_triangle = false;

        tracing::debug!(removed, remaining = self.triangles.len(), "super triangle removed");
        removed
    }

    /// Check the empty circumcircle property: no point lies strictly inside
    /// the circumcircle of any non degenerate triangle.
    pub fn is_delaunay(&self) -> bool {
        self.triangles.iter().all(|(_, t)| {
            if t.is_degenerate(&self.points) {
                return true;
            }

            let [a, b, c] = t.points;
            let (a, b, c) = (self.points.get(a), self.points.get(b), self.points.get(c));
            self.points
                .iter()
                .filter(|(id, _)| !t.contains(*id))
                .filter(|(id, _)| self.has_super_triangle || !self.is_super(*id))
                .all(|(_, p)| !in_circle(a, b, c, p))
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::{Buffer, Error};

    #[derive(Default)]
    struct CountObserver {
        points: usize,
    }

    impl Observer for CountObserver {
        fn point_event(&mut self, _point: Point, _bad_triangles: usize) {
            self.points += 1;
        }
    }

    #[test]
    fn test_square() {
        let points = vec![
            Point::new(0., 0.),
            Point::new(10., 0.),
            Point::new(10., 10.),
            Point::new(0., 10.),
        ];
        let mut triangulation = triangulate(&points, 10, 10, 64).unwrap();
        assert!(triangulation.is_delaunay());

        triangulation.remove_super_triangle();
        assert_eq!(triangulation.triangles().len(), 2);

        for (_, t) in triangulation.triangles().iter() {
            let [a, b, c] = t.points.map(|id| triangulation.points().get(id));
            for p in points.iter() {
                if [a, b, c].contains(p) {
                    continue;
                }
                assert!(!in_circle(a, b, c, *p));
            }
        }
    }

    #[test]
    fn test_super_triangle_contains_points() {
        let points = vec![Point::new(-5., 3.), Point::new(12., 40.)];
        let [a, b, c] = super_triangle(&points, 10, 10);
        for p in points {
            assert!(crate::utils::orient_2d(a, b, p).is_ccw());
            assert!(crate::utils::orient_2d(b, c, p).is_ccw());
            assert!(crate::utils::orient_2d(c, a, p).is_ccw());
        }
    }

    #[test]
    fn test_random_points_are_delaunay() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let points = (0..40)
            .map(|_| Point::new(rng.gen_range(0.0..100.), rng.gen_range(0.0..100.)))
            .collect::<Vec<_>>();

        let mut observer = CountObserver::default();
        let mut triangulation =
            triangulate_with_observer(&points, 100, 100, 1024, &mut observer).unwrap();
        assert_eq!(observer.points, 40);

        triangulation.remove_super_triangle();
        assert!(!triangulation.has_super_triangle());
        assert!(triangulation.is_delaunay());
        for (_, t) in triangulation.triangles().iter() {
            assert!(!t.points.iter().any(|id| triangulation.is_super(*id)));
        }
    }

    #[test]
    fn test_coincident_points_skipped() {
        let points = vec![
            Point::new(4., 4.),
            Point::new(8., 4.),
            Point::new(4., 4.),
            Point::new(6., 8.),
        ];
        let mut triangulation = triangulate(&points, 12, 12, 64).unwrap();
        assert_eq!(triangulation.skipped_points(), 1);
        assert_eq!(triangulation.points().len(), 6);

        triangulation.remove_super_triangle();
        assert_eq!(triangulation.triangles().len(), 1);
    }

    #[test]
    fn test_capacity_exceeded() {
        let points = (0..10)
            .map(|i| Point::new((i * 3 % 10) as f64, (i * 7 % 10) as f64))
            .collect::<Vec<_>>();
        // the triangle store is the only bounded buffer while triangulating
        let err = triangulate(&points, 10, 10, 4).unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                buffer: Buffer::Triangles,
                capacity: 4
            }
        );
    }

    #[test]
    fn test_triangles_are_ccw() {
        let points = vec![
            Point::new(2., 1.),
            Point::new(7., 3.),
            Point::new(3., 8.),
            Point::new(9., 9.),
            Point::new(5., 5.),
        ];
        let triangulation = triangulate(&points, 10, 10, 64).unwrap();
        for (_, t) in triangulation.triangles().iter() {
            let [a, b, c] = t.points.map(|id| triangulation.points().get(id));
            assert!(!crate::utils::orient_2d(a, b, c).is_cw());
        }
    }
}
