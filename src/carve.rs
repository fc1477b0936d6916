use rand::Rng;

use crate::{
    edge::Edges,
    map::{Map, Tile},
    points::Points,
    shape::Point,
};

/// Smallest room half extent along an axis.
const MIN_HALF_EXTENT: i64 = 2;

/// How many single pillars a scattered room gets, inclusive.
const SCATTER_MIN: usize = 2;
const SCATTER_MAX: usize = 11;

/// Cosmetic obstruction placed inside a room footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pillars {
    None,
    /// a handful of single wall cells
    Scatter,
    /// one 2x2 block at the centre
    Block,
}

impl Pillars {
    fn pick<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Pillars::None,
            1 => Pillars::Scatter,
            _ => Pillars::Block,
        }
    }
}

/// A rectangular floor footprint around a graph point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: i64,
    pub y: i64,
    pub half_w: i64,
    pub half_h: i64,
}

impl Room {
    pub fn new(center: Point, half_w: i64, half_h: i64) -> Self {
        Self {
            x: center.x as i64,
            y: center.y as i64,
            half_w,
            half_h,
        }
    }

    /// Open every cell of the footprint that lies on the map.
    pub fn carve(&self, map: &mut Map) {
        for dy in -self.half_h..=self.half_h {
            for dx in -self.half_w..=self.half_w {
                map.set(self.x + dx, self.y + dy, Tile::Floor);
            }
        }
    }

    /// Put pillars on floor cells of the footprint, corridors and
    /// junctions are never covered.
    pub fn decorate<R: Rng>(&self, map: &mut Map, pillars: Pillars, rng: &mut R) {
        match pillars {
            Pillars::None => {}
            Pillars::Scatter => {
                for _ in 0..rng.gen_range(SCATTER_MIN..=SCATTER_MAX) {
                    let x = self.x + rng.gen_range(-self.half_w..=self.half_w);
                    let y = self.y + rng.gen_range(-self.half_h..=self.half_h);
                    map.replace(x, y, Tile::Floor, Tile::Wall);
                }
            }
            Pillars::Block => {
                for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                    map.replace(self.x + dx, self.y + dy, Tile::Floor, Tile::Wall);
                }
            }
        }
    }
}

/// Random half extent in `[2, 2 + max(spacing / 2 - 2, 1))`.
fn half_extent<R: Rng>(spacing: usize, rng: &mut R) -> i64 {
    let size = (spacing as i64 / 2 - MIN_HALF_EXTENT).max(1);
    MIN_HALF_EXTENT + rng.gen_range(0..size)
}

/// Trace an L-shaped corridor, the full horizontal run first, then the
/// vertical one. Every cell after the start becomes corridor, overwriting
/// whatever was there, and the last one a junction. The start cell keeps
/// its room tile.
pub fn carve_corridor(map: &mut Map, from: Point, to: Point) {
    let (mut x, mut y) = (from.x as i64, from.y as i64);
    let (tx, ty) = (to.x as i64, to.y as i64);

    let step = (tx - x).signum();
    while x != tx {
        x += step;
        map.set(x, y, Tile::Corridor);
    }
    let step = (ty - y).signum();
    while y != ty {
        y += step;
        map.set(x, y, Tile::Corridor);
    }
    map.set(x, y, Tile::Junction);
}

/// Carve every alive edge into the map.
///
/// All room footprints and their pillars go first, one pair of half extents
/// per edge shared by both ends. Corridors are traced afterwards so no
/// pillar ends up on a corridor.
pub fn carve<R: Rng>(
    map: &mut Map,
    edges: &Edges,
    points: &Points,
    spacing: usize,
    rng: &mut R,
) {
    let mut rooms = 0;
    for edge in edges.alive() {
        let half_w = half_extent(spacing, rng);
        let half_h = half_extent(spacing, rng);

        for end in [edge.p, edge.q] {
            let room = Room::new(points.get(end), half_w, half_h);
            room.carve(map);
            let pillars = Pillars::pick(rng);
            room.decorate(map, pillars, rng);
            rooms += 1;
        }
    }

    let mut corridors = 0;
    for edge in edges.alive() {
        carve_corridor(map, points.get(edge.p), points.get(edge.q));
        corridors += 1;
    }

    tracing::debug!(rooms, corridors, "map carved");
}
