//! Settings for the headless map binary.
//!
//! `TERRAIN_SETTINGS` names a JSON settings file; the individual variables
//! below override its fields. Empty variables are ignored, so an unset
//! field keeps its default.

use std::str::FromStr;

use terrain::{TerrainError, TerrainSettings};

pub const SETTINGS_PATH_VAR: &str = "TERRAIN_SETTINGS";
pub const COLOR_VAR: &str = "TERRAIN_COLOR";

pub fn load_from_env() -> Result<TerrainSettings, TerrainError> {
    let lookup = |key: &str| std::env::var(key).ok();
    let base = match lookup(SETTINGS_PATH_VAR).filter(|p| !p.trim().is_empty()) {
        Some(path) => {
            let json = std::fs::read_to_string(path.trim()).map_err(|e| {
                TerrainError::Settings(format!("failed to read {}: {}", path.trim(), e))
            })?;
            TerrainSettings::from_json_str(&json)?
        }
        None => TerrainSettings::default(),
    };
    apply_overrides(base, lookup)
}

/// Apply `TERRAIN_*` overrides from `lookup` and validate the result.
pub fn apply_overrides<F>(
    mut settings: TerrainSettings,
    lookup: F,
) -> Result<TerrainSettings, TerrainError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = parse_var(&lookup, "TERRAIN_WIDTH")? {
        settings.canvas_width = v;
    }
    if let Some(v) = parse_var(&lookup, "TERRAIN_HEIGHT")? {
        settings.canvas_height = v;
    }
    if let Some(v) = parse_var(&lookup, "TERRAIN_TILE_SIZE")? {
        settings.tile_size = v;
    }
    if let Some(v) = parse_var(&lookup, "TERRAIN_VARIABILITY")? {
        settings.variability = v;
    }
    if let Some(v) = parse_var(&lookup, "TERRAIN_SEED")? {
        settings.seed = Some(v);
    }
    settings.validate()?;
    Ok(settings)
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, TerrainError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|e| TerrainError::Settings(format!("{key}={raw:?}: {e}")))
}

pub fn color_enabled() -> bool {
    std::env::var(COLOR_VAR)
        .map(|v| !matches!(v.trim(), "" | "0" | "false"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let settings = apply_overrides(TerrainSettings::default(), lookup_from(&[])).unwrap();
        assert_eq!(settings, TerrainSettings::default());
    }

    #[test]
    fn test_overrides_replace_fields() {
        let settings = apply_overrides(
            TerrainSettings::default(),
            lookup_from(&[
                ("TERRAIN_WIDTH", "320"),
                ("TERRAIN_HEIGHT", " 200 "),
                ("TERRAIN_TILE_SIZE", "5"),
                ("TERRAIN_VARIABILITY", "12.5"),
                ("TERRAIN_SEED", "99"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.canvas_width, 320);
        assert_eq!(settings.canvas_height, 200);
        assert_eq!(settings.tile_size, 5);
        assert_eq!(settings.variability, 12.5);
        assert_eq!(settings.seed, Some(99));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let settings = apply_overrides(
            TerrainSettings::default(),
            lookup_from(&[("TERRAIN_VARIABILITY", "")]),
        )
        .unwrap();
        assert_eq!(settings.variability, TerrainSettings::default().variability);
    }

    #[test]
    fn test_unparseable_override_is_an_error() {
        let err = apply_overrides(
            TerrainSettings::default(),
            lookup_from(&[("TERRAIN_TILE_SIZE", "big")]),
        )
        .unwrap_err();
        match err {
            TerrainError::Settings(msg) => {
                assert!(msg.contains("TERRAIN_TILE_SIZE"), "got: {msg}")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let err = apply_overrides(
            TerrainSettings::default(),
            lookup_from(&[("TERRAIN_TILE_SIZE", "0")]),
        )
        .unwrap_err();
        assert_eq!(err, TerrainError::InvalidTileSize(0));
    }
}
