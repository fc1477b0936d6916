use crate::{
    edge::Edges,
    observer::{Observer, PruneReason},
    points::Points,
};

/// Counters from one pruning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// edges with an endpoint outside the map
    pub out_of_bounds: usize,
    /// edges whose endpoints stay connected without them
    pub redundant: usize,
    /// reverse duplicates removed by the final pass
    pub duplicates: usize,
    /// edges still alive afterwards
    pub kept: usize,
}

/// Greedy reverse-delete over the alive edges.
///
/// Edges are visited longest first. An edge with an endpoint outside
/// `[0, width) x [0, height)` dies unconditionally. Any other edge dies
/// when its end stays reachable from its start over the remaining alive
/// edges, otherwise it is restored. The result keeps every connection the
/// graph had, but is not a minimum spanning tree: a cycle survives when no
/// edge on it was ever found redundant.
///
/// Each check is a full search, so the whole pass is `O(E^2)`.
pub fn prune<O: Observer>(
    edges: &mut Edges,
    points: &Points,
    width: usize,
    height: usize,
    observer: &mut O,
) -> PruneStats {
    let mut stats = PruneStats::default();
    edges.sort_by_length_desc(points);

    for idx in 0..edges.len() {
        let Some(edge) = edges.get(idx).copied() else {
            break;
        };
        if !edge.alive {
            continue;
        }

        if !points.get(edge.p).in_bounds(width, height)
            || !points.get(edge.q).in_bounds(width, height)
        {
            edges.set_alive(idx, false);
            stats.out_of_bounds += 1;
            observer.edge_pruned(&edge, PruneReason::OutOfBounds);
            continue;
        }

        edges.set_alive(idx, false);
        if edges.reachable(edge.p, edge.q) {
            stats.redundant += 1;
            observer.edge_pruned(&edge, PruneReason::Redundant);
        } else {
            edges.set_alive(idx, true);
        }
    }

    stats.duplicates = edges.mark_reverse_duplicates();
    stats.kept = edges.alive_count();

    tracing::debug!(
        out_of_bounds = stats.out_of_bounds,
        redundant = stats.redundant,
        duplicates = stats.duplicates,
        kept = stats.kept,
        "pruning done"
    );
    observer.pruned(edges);
    stats
}
