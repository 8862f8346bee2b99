// ---------------------------------------------------------------------------
// TerrainError: rejected generation requests and settings
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised before any generation work starts.
///
/// The generator itself has no failure path once its inputs are accepted;
/// every variant here describes an input that would otherwise produce a
/// degenerate grid.
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// Requested map has a zero width or height.
    InvalidDimensions { width: usize, height: usize },
    /// Variability is negative, NaN or infinite.
    InvalidVariability(f32),
    /// Tile size of 0 pixels.
    InvalidTileSize(u32),
    /// Settings document could not be parsed.
    Settings(String),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidDimensions { width, height } => {
                write!(f, "Invalid map dimensions: {width}x{height} (both must be > 0)")
            }
            TerrainError::InvalidVariability(v) => {
                write!(f, "Invalid variability: {v} (must be finite and >= 0)")
            }
            TerrainError::InvalidTileSize(size) => {
                write!(f, "Invalid tile size: {size} (must be > 0)")
            }
            TerrainError::Settings(msg) => write!(f, "Settings error: {msg}"),
        }
    }
}

impl std::error::Error for TerrainError {}

impl From<serde_json::Error> for TerrainError {
    fn from(e: serde_json::Error) -> Self {
        TerrainError::Settings(e.to_string())
    }
}
