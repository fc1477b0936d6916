use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};

use crate::{
    delaunay::Triangulation,
    error::{Buffer, Error},
    points::Points,
    shape::Edge,
    PointId, Result,
};

/// Directed edge storage.
///
/// Besides the edges themselves, each point keeps the indexes of the edges
/// starting at it, so a reachability search only looks at the edges it can
/// follow. The index is rebuilt whenever the edge order changes.
#[derive(Debug, Clone)]
pub struct Edges {
    edges: Vec<Edge>,
    outgoing: Vec<SmallVec<[usize; 6]>>,
}

impl Edges {
    /// Create a new [`Edges`] from edges, `point_size` is the size of the
    /// point store the edges refer to.
    pub fn new(edges: Vec<Edge>, point_size: usize) -> Self {
        let mut edges = Self {
            edges,
            outgoing: vec![],
        };
        edges.rebuild_index(point_size);
        edges
    }

    /// Flatten every triangle into its three directed edges, all alive, then
    /// kill the reverse duplicates shared by adjacent triangles.
    /// Fails when the triangles need more than `capacity` edges.
    pub fn from_triangulation(triangulation: &Triangulation, capacity: usize) -> Result<Self> {
        let triangles = triangulation.triangles();
        let needed = triangles.len() * 3;
        if needed > capacity {
            tracing::warn!(capacity, needed, "edge capacity reached");
            return Err(Error::CapacityExceeded {
                buffer: Buffer::Edges,
                capacity,
            });
        }

        let mut list = Vec::with_capacity(needed);
        for (_, t) in triangles.iter() {
            list.extend(t.edges().into_iter().map(|(p, q)| Edge::new(p, q)));
        }

        let mut edges = Self::new(list, triangulation.points().len());
        let killed = edges.mark_reverse_duplicates();
        tracing::debug!(edges = edges.len(), duplicates = killed, "edges extracted");
        Ok(edges)
    }

    fn rebuild_index(&mut self, point_size: usize) {
        let point_size = self
            .edges
            .iter()
            .map(|e| e.p.as_usize().max(e.q.as_usize()) + 1)
            .max()
            .unwrap_or(0)
            .max(point_size);

        self.outgoing = vec![smallvec![]; point_size];
        for (idx, edge) in self.edges.iter().enumerate() {
            self.outgoing[edge.p.as_usize()].push(idx);
        }
    }

    /// For every pair of alive edges where the later one is the exact reverse
    /// of the earlier one, mark the later one dead. Returns how many died.
    pub fn mark_reverse_duplicates(&mut self) -> usize {
        let mut seen: FxHashSet<(PointId, PointId)> = FxHashSet::default();
        let mut killed = 0;
        for edge in self.edges.iter_mut().filter(|e| e.alive) {
            if seen.contains(&(edge.q, edge.p)) {
                edge.alive = false;
                killed += 1;
            } else {
                seen.insert((edge.p, edge.q));
            }
        }
        killed
    }

    /// Stable sort by euclidean length, longest first.
    pub fn sort_by_length_desc(&mut self, points: &Points) {
        self.edges
            .sort_by(|a, b| b.length(points).total_cmp(&a.length(points)));
        let point_size = self.outgoing.len();
        self.rebuild_index(point_size);
    }

    /// Whether `to` can be reached from `from` over alive edges, following
    /// each edge's direction.
    pub fn reachable(&self, from: PointId, to: PointId) -> bool {
        if from == to {
            return true;
        }

        let mut todo = vec![from];
        let mut done: FxHashSet<PointId> = FxHashSet::default();
        done.insert(from);

        while let Some(point) = todo.pop() {
            let Some(outgoing) = self.outgoing.get(point.as_usize()) else {
                continue;
            };
            for edge in outgoing.iter().map(|idx| &self.edges[*idx]) {
                if !edge.alive {
                    continue;
                }
                if edge.q == to {
                    return true;
                }
                if done.insert(edge.q) {
                    todo.push(edge.q);
                }
            }
        }

        false
    }

    /// edges starting at `p`, dead ones included
    pub fn outgoing(&self, p: PointId) -> impl Iterator<Item = &Edge> {
        self.outgoing
            .get(p.as_usize())
            .into_iter()
            .flat_map(|idxs| idxs.iter().map(|idx| &self.edges[*idx]))
    }

    pub fn get(&self, idx: usize) -> Option<&Edge> {
        self.edges.get(idx)
    }

    pub(crate) fn set_alive(&mut self, idx: usize, alive: bool) {
        self.edges[idx].alive = alive;
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{delaunay::triangulate, shape::Point};

    fn edge(p: usize, q: usize) -> Edge {
        Edge::new(PointId(p), PointId(q))
    }

    #[test]
    fn test_edges_outgoing() {
        let edges = Edges::new(vec![edge(0, 1), edge(1, 2), edge(2, 3), edge(0, 3)], 10);

        assert_eq!(edges.outgoing(PointId(0)).count(), 2);
        assert_eq!(edges.outgoing(PointId(1)).count(), 1);
        assert_eq!(edges.outgoing(PointId(3)).count(), 0);
        assert_eq!(edges.outgoing(PointId(42)).count(), 0);
    }

    #[test]
    fn test_mark_reverse_duplicates() {
        let mut edges = Edges::new(vec![edge(0, 1), edge(1, 2), edge(1, 0), edge(2, 1)], 3);
        assert_eq!(edges.mark_reverse_duplicates(), 2);
        let alive = edges.alive().map(|e| (e.p, e.q)).collect::<Vec<_>>();
        assert_eq!(alive, vec![(PointId(0), PointId(1)), (PointId(1), PointId(2))]);

        // a dead edge does not kill its reverse
        let mut edges = Edges::new(vec![edge(0, 1), edge(1, 0)], 2);
        edges.set_alive(0, false);
        assert_eq!(edges.mark_reverse_duplicates(), 0);
        assert!(edges.get(1).unwrap().alive);
    }

    #[test]
    fn test_reachable_follows_direction() {
        let mut edges = Edges::new(vec![edge(0, 1), edge(1, 2), edge(3, 2)], 4);
        assert!(edges.reachable(PointId(0), PointId(2)));
        assert!(!edges.reachable(PointId(2), PointId(0)));
        assert!(!edges.reachable(PointId(0), PointId(3)));

        edges.set_alive(1, false);
        assert!(!edges.reachable(PointId(0), PointId(2)));
    }

    #[test]
    fn test_from_triangulation() {
        let points = vec![
            Point::new(0., 0.),
            Point::new(10., 0.),
            Point::new(10., 10.),
            Point::new(0., 10.),
        ];
        let mut triangulation = triangulate(&points, 10, 10, 64).unwrap();
        triangulation.remove_super_triangle();

        let edges = Edges::from_triangulation(&triangulation, 64).unwrap();
        assert_eq!(edges.len(), 6);
        // four sides and one diagonal
        assert_eq!(edges.alive_count(), 5);

        let err = Edges::from_triangulation(&triangulation, 5).unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                buffer: Buffer::Edges,
                capacity: 5
            }
        );
    }

    #[test]
    fn test_sort_by_length_desc() {
        let mut points = Points::new();
        let a = points.add_point(Point::new(0., 0.)).0;
        let b = points.add_point(Point::new(1., 0.)).0;
        let c = points.add_point(Point::new(5., 0.)).0;

        let mut edges = Edges::new(
            vec![Edge::new(a, b), Edge::new(a, c), Edge::new(b, c)],
            points.len(),
        );
        edges.sort_by_length_desc(&points);

        let order = edges.iter().map(|e| (e.p, e.q)).collect::<Vec<_>>();
        assert_eq!(order, vec![(a, c), (b, c), (a, b)]);
        assert_eq!(edges.outgoing(a).count(), 2);
        assert!(edges.reachable(a, c));
    }
}
