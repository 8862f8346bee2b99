//! Diamond-square height-map generation.
//!
//! Builds a square grid of side `2^k + 1` covering the requested rectangle,
//! seeds its four corners, then alternates square and diamond passes at
//! halving step sizes until every cell is written. Heights are kept inside
//! `[0, HEIGHT_CEILING)` by a reflecting wrap so that they can be floored
//! straight into a tile catalog index.
//!
//! Randomness is injected as any [`rand::Rng`], so callers choose between
//! entropy-seeded output and reproducible sequences.

use bevy::log::debug;
use rand::Rng;

use crate::config::HEIGHT_CEILING;
use crate::height_grid::HeightGrid;
use crate::terrain_error::TerrainError;

// ---------------------------------------------------------------------------
// Value wrapper
// ---------------------------------------------------------------------------

/// Fold `value` back into `[min, max)` by reflecting at the bounds.
///
/// The number of whole `max` spans in `|value|` picks the direction: an even
/// count counts up from `min`, an odd count counts down from `max`. Values
/// just above `max` therefore bounce back downward instead of jumping to
/// `min`. A result landing exactly on `max` is folded to `min`.
///
/// `max` must be positive. A non-finite `value` has no position inside the
/// range and folds to `min`.
pub fn wrap_number(min: f32, max: f32, value: f32) -> f32 {
    if !value.is_finite() {
        return min;
    }

    let magnitude = value.abs();
    let remainder = magnitude % max;
    let wraps = (magnitude / max).floor();

    let wrapped = if wraps % 2.0 == 0.0 {
        min + remainder
    } else {
        max - remainder
    };

    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

/// Uniform perturbation in `[-scale, scale)`.
///
/// The unit draw is centred before scaling so the magnitude never exceeds
/// `scale`, even at `f32::MAX`.
#[inline]
fn perturbation<R: Rng + ?Sized>(rng: &mut R, scale: f32) -> f32 {
    scale * (rng.gen::<f32>() * 2.0 - 1.0)
}

// ---------------------------------------------------------------------------
// Square and diamond steps
// ---------------------------------------------------------------------------

/// Square step: average the four diagonal corners `step / 2` away from
/// `(col, row)`, perturb, wrap and write the centre.
///
/// All four corners must lie inside the grid and already hold values.
pub fn square_step<R: Rng + ?Sized>(
    grid: &mut HeightGrid,
    col: usize,
    row: usize,
    step: usize,
    scale: f32,
    rng: &mut R,
) {
    let half = step / 2;
    let nw = grid.get(col - half, row - half);
    let ne = grid.get(col + half, row - half);
    let sw = grid.get(col - half, row + half);
    let se = grid.get(col + half, row + half);

    let avg = (nw + ne + sw + se) / 4.0;
    grid.set(
        col,
        row,
        wrap_number(0.0, HEIGHT_CEILING, avg + perturbation(rng, scale)),
    );
}

/// Diamond step: average the orthogonal neighbours `step / 2` away from
/// `(col, row)`, perturb, wrap and write the centre.
///
/// Neighbours outside `[0, max_size)` are skipped, so boundary cells average
/// three neighbours and corner cells two.
pub fn diamond_step<R: Rng + ?Sized>(
    grid: &mut HeightGrid,
    col: usize,
    row: usize,
    step: usize,
    scale: f32,
    max_size: usize,
    rng: &mut R,
) {
    let half = step / 2;
    let mut sum = 0.0;
    let mut samples = 0u32;

    // North
    if row >= half {
        sum += grid.get(col, row - half);
        samples += 1;
    }
    // East
    if col + half < max_size {
        sum += grid.get(col + half, row);
        samples += 1;
    }
    // South
    if row + half < max_size {
        sum += grid.get(col, row + half);
        samples += 1;
    }
    // West
    if col >= half {
        sum += grid.get(col - half, row);
        samples += 1;
    }

    let avg = sum / samples as f32;
    grid.set(
        col,
        row,
        wrap_number(0.0, HEIGHT_CEILING, avg + perturbation(rng, scale)),
    );
}

// ---------------------------------------------------------------------------
// Grid generator
// ---------------------------------------------------------------------------

/// Side length of the working grid for a `width` x `height` request: the
/// smallest `2^k + 1` (k >= 0) that covers the longer side.
pub fn working_size(width: usize, height: usize) -> usize {
    let longest = width.max(height);
    longest.saturating_sub(1).max(1).next_power_of_two() + 1
}

/// Run diamond-square over a fresh `size` x `size` grid and return it whole.
///
/// `size` must be of the form `2^k + 1`. The corners are seeded uniformly in
/// `[0, HEIGHT_CEILING)` and are never written again.
pub fn generate_working_grid<R: Rng + ?Sized>(
    size: usize,
    variability: f32,
    rng: &mut R,
) -> HeightGrid {
    let mut grid = HeightGrid::square(size);
    let last = size - 1;

    grid.set(0, 0, rng.gen::<f32>() * HEIGHT_CEILING);
    grid.set(last, 0, rng.gen::<f32>() * HEIGHT_CEILING);
    grid.set(0, last, rng.gen::<f32>() * HEIGHT_CEILING);
    grid.set(last, last, rng.gen::<f32>() * HEIGHT_CEILING);

    let mut step = last;
    let mut scale = variability;

    while step > 1 {
        let half = step / 2;

        for row in (half..size).step_by(step) {
            for col in (half..size).step_by(step) {
                square_step(&mut grid, col, row, step, scale, rng);
            }
        }

        // Diamond centres sit on every half-step row, offset by half a step
        // on rows that also hold square corners.
        for row in (0..size).step_by(half) {
            for col in ((row + half) % step..size).step_by(step) {
                diamond_step(&mut grid, col, row, step, scale, size, rng);
            }
        }

        step /= 2;
        scale /= 2.0;
    }

    grid
}

/// Generate a `height` rows x `width` columns height map with every value in
/// `[0, HEIGHT_CEILING)`.
///
/// `variability` is the perturbation amplitude at the coarsest level and
/// halves at each finer level.
pub fn generate_height_map<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    variability: f32,
    rng: &mut R,
) -> Result<HeightGrid, TerrainError> {
    if width == 0 || height == 0 {
        return Err(TerrainError::InvalidDimensions { width, height });
    }
    if !variability.is_finite() || variability < 0.0 {
        return Err(TerrainError::InvalidVariability(variability));
    }

    let size = working_size(width, height);
    debug!(
        "diamond-square: {}x{} request on {}x{} working grid, variability {}",
        width, height, size, size, variability
    );

    let grid = generate_working_grid(size, variability, rng);
    Ok(grid.trimmed(width, height))
}
