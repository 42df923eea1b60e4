//! Seed patterns — the default glider and random boards

use super::{Cell, Dimensions, Grid};
use crate::error::{LifeError, Result};
use rand::Rng;

/// Default probability of a cell starting alive on a random board
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Glider cells as (column, row), anchored at the top-left corner
pub const GLIDER: &[(usize, usize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// Glider on an otherwise dead board; boards smaller than 3x3 stay dead
pub fn glider_seed(dims: Dimensions) -> Grid {
    if dims.rows < 3 || dims.cols < 3 {
        return Grid::dead(dims);
    }
    Grid::from_fn(dims, |x, y| Cell::from(GLIDER.contains(&(x, y))))
}

/// Board where each cell is alive with probability `density`
pub fn random_grid<R: Rng + ?Sized>(dims: Dimensions, density: f64, rng: &mut R) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }
    Ok(Grid::from_fn(dims, |_, _| Cell::from(rng.gen_bool(density))))
}
