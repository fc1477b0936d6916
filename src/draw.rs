use image::{ImageBuffer, Rgb, RgbImage};

use crate::map::{Map, Tile};

impl Tile {
    /// Minimap colour of the tile.
    pub fn color(&self) -> Rgb<u8> {
        match self {
            Tile::Wall => Rgb([64, 64, 64]),
            Tile::Water => Rgb([0, 0, 255]),
            Tile::Junction => Rgb([255, 0, 0]),
            Tile::Lava => Rgb([255, 165, 0]),
            Tile::Foliage => Rgb([0, 128, 0]),
            Tile::Floor | Tile::Corridor => Rgb([139, 69, 19]),
        }
    }
}

impl Map {
    /// Render the map with every tile as a `cell` x `cell` square.
    pub fn to_image(&self, cell: u32) -> RgbImage {
        let cell = cell.max(1);
        let mut img = ImageBuffer::new(self.width() as u32 * cell, self.height() as u32 * cell);

        for (y, row) in self.rows().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                let color = tile.color();
                for dy in 0..cell {
                    for dx in 0..cell {
                        img.put_pixel(x as u32 * cell + dx, y as u32 * cell + dy, color);
                    }
                }
            }
        }
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_image() {
        let map: Map = "###\n#*#\n".parse().unwrap();
        let img = map.to_image(2);
        assert_eq!(img.dimensions(), (6, 4));
        assert_eq!(*img.get_pixel(0, 0), Tile::Wall.color());
        assert_eq!(*img.get_pixel(2, 2), Rgb([255, 0, 0]));
        assert_eq!(*img.get_pixel(3, 3), Rgb([255, 0, 0]));
    }
}
