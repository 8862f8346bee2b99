//! Generation settings: canvas size, tile size, variability and seed.
//!
//! Fields missing from a settings document fall back to the defaults in
//! [`crate::config`], the same way an empty input field does.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_TERRAIN_VARIABILITY, DEFAULT_TILE_SIZE,
};
use crate::terrain_error::TerrainError;
use crate::terrain_map::GenerateTerrain;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Drawing surface width in pixels.
    pub canvas_width: u32,
    /// Drawing surface height in pixels.
    pub canvas_height: u32,
    /// Edge length of one tile in pixels.
    pub tile_size: u32,
    /// Perturbation amplitude at the coarsest subdivision level.
    pub variability: f32,
    /// Fixed seed for reproducible maps; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            variability: DEFAULT_TERRAIN_VARIABILITY,
            seed: None,
        }
    }
}

impl TerrainSettings {
    pub fn from_json_str(json: &str) -> Result<Self, TerrainError> {
        let settings: TerrainSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.tile_size == 0 {
            return Err(TerrainError::InvalidTileSize(self.tile_size));
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(TerrainError::InvalidDimensions {
                width: self.canvas_width as usize,
                height: self.canvas_height as usize,
            });
        }
        if !self.variability.is_finite() || self.variability < 0.0 {
            return Err(TerrainError::InvalidVariability(self.variability));
        }
        Ok(())
    }

    /// Tiles needed to cover the canvas width; a partial tile counts.
    pub fn tile_columns(&self) -> usize {
        self.canvas_width.div_ceil(self.tile_size.max(1)) as usize
    }

    /// Tiles needed to cover the canvas height; a partial tile counts.
    pub fn tile_rows(&self) -> usize {
        self.canvas_height.div_ceil(self.tile_size.max(1)) as usize
    }

    pub fn generate_request(&self) -> GenerateTerrain {
        GenerateTerrain {
            width: self.tile_columns(),
            height: self.tile_rows(),
            variability: self.variability,
        }
    }
}
