//! Random source for terrain generation.
//!
//! Wraps `ChaCha8Rng` so maps are reproducible across platforms when a seed
//! is given. Without one the generator is seeded from OS entropy and every
//! map differs.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// RNG resource handed to the diamond-square generator.
///
/// Systems take `ResMut<TerrainRng>` and pass `&mut rng.0`.
#[derive(Resource)]
pub struct TerrainRng(pub ChaCha8Rng);

impl Default for TerrainRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl TerrainRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Entropy-seeded unless `seed` is given.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map(Self::from_seed_u64).unwrap_or_default()
    }
}

pub struct TerrainRngPlugin;

impl Plugin for TerrainRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainRng>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_from_seed_u64_deterministic() {
        let mut a = TerrainRng::from_seed_u64(12345);
        let mut b = TerrainRng::from_seed_u64(12345);
        let vals_a: Vec<f32> = (0..20).map(|_| a.0.gen::<f32>()).collect();
        let vals_b: Vec<f32> = (0..20).map(|_| b.0.gen::<f32>()).collect();
        assert_eq!(vals_a, vals_b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = TerrainRng::from_seed_u64(1);
        let mut b = TerrainRng::from_seed_u64(2);
        let vals_a: Vec<f32> = (0..10).map(|_| a.0.gen::<f32>()).collect();
        let vals_b: Vec<f32> = (0..10).map(|_| b.0.gen::<f32>()).collect();
        assert_ne!(vals_a, vals_b);
    }

    #[test]
    fn test_optional_seed_matches_explicit_seed() {
        let mut a = TerrainRng::from_optional_seed(Some(77));
        let mut b = TerrainRng::from_seed_u64(77);
        assert_eq!(a.0.gen::<u64>(), b.0.gen::<u64>());
    }

    #[test]
    fn test_default_draws_from_entropy() {
        let mut a = TerrainRng::default();
        let mut b = TerrainRng::default();
        let vals_a: Vec<u64> = (0..4).map(|_| a.0.gen()).collect();
        let vals_b: Vec<u64> = (0..4).map(|_| b.0.gen()).collect();
        assert_ne!(vals_a, vals_b);
    }
}
