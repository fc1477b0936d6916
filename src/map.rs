use std::{fmt, str::FromStr};

/// Tile vocabulary shared by every generator and renderer.
///
/// The carving pipeline only writes `Wall`, `Floor`, `Corridor` and
/// `Junction`, the liquid and foliage codes belong to decoration passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    Corridor,
    Junction,
    Water,
    Lava,
    Foliage,
}

impl Tile {
    pub const ALL: [Tile; 7] = [
        Tile::Wall,
        Tile::Floor,
        Tile::Corridor,
        Tile::Junction,
        Tile::Water,
        Tile::Lava,
        Tile::Foliage,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => ' ',
            Tile::Corridor => '+',
            Tile::Junction => '*',
            Tile::Water => '?',
            Tile::Lava => '|',
            Tile::Foliage => '"',
        }
    }

    pub fn from_char(c: char) -> Option<Tile> {
        Tile::ALL.into_iter().find(|t| t.as_char() == c)
    }

    /// whether a walker can stand on the tile
    pub fn is_passable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// Owned row-major tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Map {
    /// A map filled with walls.
    pub fn new(width: usize, height: usize) -> Self {
        Self::new_with(width, height, Tile::Wall)
    }

    pub fn new_with(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        self.in_bounds(x, y).then(|| y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Bounds checked write, returns whether the cell exists.
    pub fn set(&mut self, x: i64, y: i64, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Write `tile` only over cells currently holding `target`.
    /// Returns whether the cell was written.
    pub fn replace(&mut self, x: i64, y: i64, target: Tile, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) if self.tiles[idx] == target => {
                self.tiles[idx] = tile;
                true
            }
            _ => false,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Hand out the grid storage.
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Stamp `tile` over the cells equal to `target` inside the region of
    /// `size` at `origin` where `mask(dx, dy)` holds.
    ///
    /// Region coordinates wrap into the map and never land on the first
    /// row or column, which keeps the outer frame readable for renderers.
    /// Returns the number of written cells.
    pub fn overlay_region(
        &mut self,
        origin: (usize, usize),
        size: (usize, usize),
        target: Tile,
        tile: Tile,
        mut mask: impl FnMut(usize, usize) -> bool,
    ) -> usize {
        if self.width == 0 || self.height == 0 {
            return 0;
        }

        let ((x, y), (w, h)) = (origin, size);
        let mut written = 0;
        for dy in 0..h {
            for dx in 0..w {
                if !mask(dx, dy) {
                    continue;
                }
                let mx = ((x + dx) % self.width).max(1);
                let my = ((y + dy) % self.height).max(1);
                if self.replace(mx as i64, my as i64, target, tile) {
                    written += 1;
                }
            }
        }
        written
    }
}

/// A pass that decorates an already generated map in place.
pub trait Decorator {
    fn decorate(&mut self, map: &mut Map);
}

impl<F: FnMut(&mut Map)> Decorator for F {
    fn decorate(&mut self, map: &mut Map) {
        self(map)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMapError {
    #[error("unknown tile {tile:?} at row {row}")]
    UnknownTile { tile: char, row: usize },
    #[error("row {row} has {len} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl FromStr for Map {
    type Err = ParseMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut tiles = vec![];
        let mut height = 0;
        for (row, line) in s.lines().enumerate() {
            let start = tiles.len();
            for c in line.chars() {
                let tile = Tile::from_char(c).ok_or(ParseMapError::UnknownTile { tile: c, row })?;
                tiles.push(tile);
            }
            let len = tiles.len() - start;
            let expected = *width.get_or_insert(len);
            if len != expected {
                return Err(ParseMapError::RaggedRow { row, len, expected });
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            tiles,
        })
    }
}
