//! Dungeon maps from a pruned Delaunay graph.
//!
//! Random grid-snapped points are triangulated (Bowyer-Watson), the triangle
//! edges are pruned down to a sparse connected graph, and every surviving edge
//! is carved into a tile grid as two rooms joined by an L-shaped corridor.
//!
//! ```no_run
//! let map = delaunay_dungeon::generate(80, 100, 4, 30, 7).unwrap();
//! print!("{map}");
//! ```
mod carve;
mod delaunay;
#[cfg(feature = "draw")]
mod draw;
mod edge;
mod error;
mod generator;
mod map;
mod observer;
mod points;
mod prune;
mod sampler;
mod shape;
mod triangles;
mod utils;

pub use carve::{carve, carve_corridor, Pillars, Room};
pub use delaunay::{triangulate, triangulate_with_observer, Triangulation, SUPER_TRIANGLE};
pub use edge::Edges;
pub use error::{Buffer, Error};
pub use generator::{generate, Generator, GeneratorBuilder, GeneratorConfig};
pub use map::{Decorator, Map, ParseMapError, Tile};
pub use observer::{Observer, PruneReason};
pub use points::Points;
pub use prune::{prune, PruneStats};
pub use sampler::sample;
pub use shape::{Edge, Point, Triangle};
pub use triangles::{TriangleId, Triangles};
pub use utils::{in_circle, orient_2d, Orientation};

pub type Result<T> = std::result::Result<T, Error>;

/// new type for point id, the index in [`Points`]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PointId(pub(crate) usize);

impl PointId {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}
