//! Event-driven map generation for a Bevy app.
//!
//! A `GenerateTerrain` request runs diamond-square with the shared
//! `TerrainRng`, classifies the result into tiles and stores both in the
//! `TerrainMap` resource. Whatever paints the tiles listens for
//! `TerrainGenerated` and reads `TerrainMap`.

use bevy::prelude::*;

use crate::diamond_square::generate_height_map;
use crate::height_grid::HeightGrid;
use crate::terrain_rng::TerrainRng;
use crate::tiles::TileMap;

// =============================================================================
// Events
// =============================================================================

/// Request a new map of `width` x `height` tiles.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct GenerateTerrain {
    pub width: usize,
    pub height: usize,
    pub variability: f32,
}

/// Sent after `TerrainMap` has been replaced.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TerrainGenerated {
    pub width: usize,
    pub height: usize,
    pub generation: u32,
}

// =============================================================================
// Resource
// =============================================================================

/// Most recently generated map. Empty until the first request succeeds.
#[derive(Resource, Default)]
pub struct TerrainMap {
    pub heights: Option<HeightGrid>,
    pub tiles: Option<TileMap>,
    /// Number of maps generated so far.
    pub generation: u32,
}

// =============================================================================
// Systems
// =============================================================================

/// System that processes `GenerateTerrain` events.
///
/// Invalid requests are logged and skipped; the previous map stays in place.
fn handle_generate_terrain(
    mut events: EventReader<GenerateTerrain>,
    mut rng: ResMut<TerrainRng>,
    mut map: ResMut<TerrainMap>,
    mut generated: EventWriter<TerrainGenerated>,
) {
    for ev in events.read() {
        let heights = match generate_height_map(ev.width, ev.height, ev.variability, &mut rng.0) {
            Ok(heights) => heights,
            Err(e) => {
                warn!("GenerateTerrain: rejected request: {}", e);
                continue;
            }
        };

        let tiles = TileMap::classify(&heights);
        map.generation += 1;
        info!(
            "Terrain #{} generated: {}x{} tiles, variability {}, {:.1}% water",
            map.generation,
            ev.width,
            ev.height,
            ev.variability,
            tiles.water_fraction() * 100.0
        );

        map.heights = Some(heights);
        map.tiles = Some(tiles);
        generated.send(TerrainGenerated {
            width: ev.width,
            height: ev.height,
            generation: map.generation,
        });
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct TerrainMapPlugin;

impl Plugin for TerrainMapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainMap>()
            .add_event::<GenerateTerrain>()
            .add_event::<TerrainGenerated>()
            .add_systems(Update, handle_generate_terrain);
    }
}
