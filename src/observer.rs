use crate::{delaunay::Triangulation, edge::Edges, map::Map, shape::Edge, shape::Point};

/// Why the pruner killed an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneReason {
    /// an endpoint is outside the map, dropped without a connectivity check
    OutOfBounds,
    /// the endpoints stay connected without the edge
    Redundant,
}

/// Hooks into every generation stage. All methods default to no-op,
/// implement the ones you need. `()` observes nothing.
pub trait Observer {
    /// A point was inserted into the triangulation, `bad_triangles` were
    /// re-triangulated around it.
    fn point_event(&mut self, _point: Point, _bad_triangles: usize) {}

    /// Triangulation finished, after super triangle handling.
    fn triangulated(&mut self, _triangulation: &Triangulation) {}

    /// An edge was killed during pruning.
    fn edge_pruned(&mut self, _edge: &Edge, _reason: PruneReason) {}

    /// Pruning finished, including the final duplicate pass.
    fn pruned(&mut self, _edges: &Edges) {}

    /// The map was carved.
    fn carved(&mut self, _map: &Map) {}
}

impl Observer for () {}
