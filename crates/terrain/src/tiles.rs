use serde::{Deserialize, Serialize};

use crate::height_grid::HeightGrid;

/// Terrain class a tile is painted as, ordered from low/wet to high/dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    DeepWater,
    ShallowWater,
    Sand,
    Grassland,
    Forest,
    Rock,
    Snow,
}

/// Height-ordered tile catalog; `floor(height)` indexes into it.
///
/// `Grassland` appears twice on purpose: it widens the band of heights that
/// render as grass.
pub const TILE_CATALOG: [TileType; 8] = [
    TileType::DeepWater,
    TileType::ShallowWater,
    TileType::Sand,
    TileType::Grassland,
    TileType::Grassland,
    TileType::Forest,
    TileType::Rock,
    TileType::Snow,
];

impl TileType {
    pub const ALL: [TileType; 7] = [
        TileType::DeepWater,
        TileType::ShallowWater,
        TileType::Sand,
        TileType::Grassland,
        TileType::Forest,
        TileType::Rock,
        TileType::Snow,
    ];

    /// Catalog entry for a generated height. Floors, never rounds.
    ///
    /// Heights outside `[0, catalog length)` are clamped to the end entries.
    pub fn from_height(height: f32) -> TileType {
        let last = TILE_CATALOG.len() - 1;
        let idx = if height.is_nan() || height < 0.0 {
            0
        } else {
            (height.floor() as usize).min(last)
        };
        TILE_CATALOG[idx]
    }

    pub fn label(self) -> &'static str {
        match self {
            TileType::DeepWater => "Deep Water",
            TileType::ShallowWater => "Shallow Water",
            TileType::Sand => "Sand",
            TileType::Grassland => "Grassland",
            TileType::Forest => "Forest",
            TileType::Rock => "Rock",
            TileType::Snow => "Snow",
        }
    }

    /// CSS colour name the tile is painted with.
    pub fn css_name(self) -> &'static str {
        match self {
            TileType::DeepWater => "DarkBlue",
            TileType::ShallowWater => "Blue",
            TileType::Sand => "Khaki",
            TileType::Grassland => "YellowGreen",
            TileType::Forest => "Green",
            TileType::Rock => "DarkGrey",
            TileType::Snow => "White",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            TileType::DeepWater => [0, 0, 139],
            TileType::ShallowWater => [0, 0, 255],
            TileType::Sand => [240, 230, 140],
            TileType::Grassland => [154, 205, 50],
            TileType::Forest => [0, 128, 0],
            TileType::Rock => [169, 169, 169],
            TileType::Snow => [255, 255, 255],
        }
    }

    pub fn is_water(self) -> bool {
        matches!(self, TileType::DeepWater | TileType::ShallowWater)
    }
}

// ---------------------------------------------------------------------------
// TileMap
// ---------------------------------------------------------------------------

/// Row-major grid of tile classes derived from a height map.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    pub tiles: Vec<TileType>,
    pub width: usize,
    pub height: usize,
}

impl TileMap {
    pub fn classify(heights: &HeightGrid) -> Self {
        Self {
            tiles: heights
                .cells()
                .iter()
                .map(|&h| TileType::from_height(h))
                .collect(),
            width: heights.width,
            height: heights.height,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> TileType {
        self.tiles[y * self.width + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileType]> {
        self.tiles.chunks_exact(self.width.max(1))
    }

    /// Tile count per class, in `TileType::ALL` order.
    pub fn counts(&self) -> [(TileType, usize); 7] {
        let mut counts = TileType::ALL.map(|t| (t, 0));
        for tile in &self.tiles {
            if let Some(entry) = counts.iter_mut().find(|(t, _)| t == tile) {
                entry.1 += 1;
            }
        }
        counts
    }

    /// Share of tiles of `tile`, in `[0, 1]`. 0 for an empty map.
    pub fn fraction(&self, tile: TileType) -> f32 {
        if self.tiles.is_empty() {
            return 0.0;
        }
        let n = self.tiles.iter().filter(|&&t| t == tile).count();
        n as f32 / self.tiles.len() as f32
    }

    pub fn water_fraction(&self) -> f32 {
        if self.tiles.is_empty() {
            return 0.0;
        }
        let n = self.tiles.iter().filter(|t| t.is_water()).count();
        n as f32 / self.tiles.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_duplicate() {
        let names: Vec<&str> = TILE_CATALOG.iter().map(|t| t.css_name()).collect();
        assert_eq!(
            names,
            [
                "DarkBlue",
                "Blue",
                "Khaki",
                "YellowGreen",
                "YellowGreen",
                "Green",
                "DarkGrey",
                "White"
            ]
        );
    }

    #[test]
    fn test_from_height_floors() {
        assert_eq!(TileType::from_height(0.0), TileType::DeepWater);
        assert_eq!(TileType::from_height(0.99), TileType::DeepWater);
        assert_eq!(TileType::from_height(1.0), TileType::ShallowWater);
        assert_eq!(TileType::from_height(2.5), TileType::Sand);
        // 5.9 would round to Rock; floor keeps it Forest
        assert_eq!(TileType::from_height(5.9), TileType::Forest);
        assert_eq!(TileType::from_height(7.999), TileType::Snow);
    }

    #[test]
    fn test_from_height_grassland_band_is_two_wide() {
        assert_eq!(TileType::from_height(3.0), TileType::Grassland);
        assert_eq!(TileType::from_height(4.5), TileType::Grassland);
    }

    #[test]
    fn test_from_height_clamps_out_of_range() {
        assert_eq!(TileType::from_height(-1.0), TileType::DeepWater);
        assert_eq!(TileType::from_height(f32::NAN), TileType::DeepWater);
        assert_eq!(TileType::from_height(8.0), TileType::Snow);
        assert_eq!(TileType::from_height(1e9), TileType::Snow);
    }

    #[test]
    fn test_classify_preserves_shape() {
        let mut heights = HeightGrid::new(3, 2);
        heights.set(0, 0, 0.5);
        heights.set(1, 0, 3.2);
        heights.set(2, 1, 7.1);
        let map = TileMap::classify(&heights);
        assert_eq!((map.width, map.height), (3, 2));
        assert_eq!(map.get(0, 0), TileType::DeepWater);
        assert_eq!(map.get(1, 0), TileType::Grassland);
        assert_eq!(map.get(2, 1), TileType::Snow);
        assert_eq!(map.rows().count(), 2);
    }

    #[test]
    fn test_counts_and_fractions() {
        let mut heights = HeightGrid::new(2, 2);
        heights.set(0, 0, 0.1);
        heights.set(1, 0, 1.1);
        heights.set(0, 1, 3.5);
        heights.set(1, 1, 4.5);
        let map = TileMap::classify(&heights);

        let counts = map.counts();
        let grass = counts
            .iter()
            .find(|(t, _)| *t == TileType::Grassland)
            .map(|(_, n)| *n);
        assert_eq!(grass, Some(2));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 4);
        assert!((map.fraction(TileType::Grassland) - 0.5).abs() < 1e-6);
        assert!((map.water_fraction() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_map_fractions_are_zero() {
        let map = TileMap::classify(&HeightGrid::new(0, 0));
        assert_eq!(map.fraction(TileType::Sand), 0.0);
        assert_eq!(map.water_fraction(), 0.0);
    }
}
