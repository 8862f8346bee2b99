use bevy::prelude::*;

pub mod ascii_map;
pub mod config;
pub mod diamond_square;
pub mod height_grid;
pub mod settings;
pub mod terrain_error;
pub mod terrain_map;
pub mod terrain_rng;
pub mod tiles;


pub use diamond_square::generate_height_map;
pub use height_grid::HeightGrid;
pub use settings::TerrainSettings;
pub use terrain_error::TerrainError;
pub use terrain_map::{GenerateTerrain, TerrainGenerated, TerrainMap};
pub use terrain_rng::TerrainRng;
pub use tiles::{TileMap, TileType, TILE_CATALOG};

/// Settings, random source and event-driven generation.
///
/// Insert `TerrainSettings` before adding the plugin to choose a seed; the
/// RNG is seeded from `TerrainSettings::seed` at build time.
pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainSettings>();
        let seed = app.world().resource::<TerrainSettings>().seed;
        app.insert_resource(TerrainRng::from_optional_seed(seed));

        app.add_plugins((
            terrain_rng::TerrainRngPlugin,
            terrain_map::TerrainMapPlugin,
        ));
    }
}
