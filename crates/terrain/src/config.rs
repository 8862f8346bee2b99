use crate::tiles::TILE_CATALOG;

pub const DEFAULT_TERRAIN_VARIABILITY: f32 = 75.0;
pub const DEFAULT_TILE_SIZE: u32 = 2;
pub const DEFAULT_CANVAS_WIDTH: u32 = 160;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 96;

/// Exclusive upper bound for every generated height. Heights map onto
/// [`TILE_CATALOG`] by flooring, so the bound is the catalog length.
pub const HEIGHT_CEILING: f32 = TILE_CATALOG.len() as f32;
