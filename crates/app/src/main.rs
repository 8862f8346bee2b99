use bevy::log::LogPlugin;
use bevy::prelude::*;

use terrain::ascii_map::{legend, render_ansi, render_ascii};
use terrain::{GenerateTerrain, TerrainMap, TerrainPlugin, TerrainSettings};

mod env_settings;

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(LogPlugin::default());

    let settings = match env_settings::load_from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid terrain settings: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Canvas {}x{} px, tile size {} px -> {}x{} tiles, variability {}, seed {:?}",
        settings.canvas_width,
        settings.canvas_height,
        settings.tile_size,
        settings.tile_columns(),
        settings.tile_rows(),
        settings.variability,
        settings.seed
    );

    app.insert_resource(settings);
    app.add_plugins(TerrainPlugin);
    app.add_systems(Startup, request_map);

    // One frame: Startup sends the request, Update generates the map.
    app.update();

    let map = app.world().resource::<TerrainMap>();
    let Some(tiles) = map.tiles.as_ref() else {
        error!("No terrain was generated");
        std::process::exit(1);
    };

    for (tile, count) in tiles.counts() {
        if count > 0 {
            info!(
                "{:<14}{:>6} tiles ({:.1}%)",
                tile.label(),
                count,
                tiles.fraction(tile) * 100.0
            );
        }
    }

    if env_settings::color_enabled() {
        println!("{}", render_ansi(tiles));
    } else {
        println!("{}", render_ascii(tiles));
    }
    println!();
    print!("{}", legend());
}

fn request_map(settings: Res<TerrainSettings>, mut events: EventWriter<GenerateTerrain>) {
    events.send(settings.generate_request());
}
