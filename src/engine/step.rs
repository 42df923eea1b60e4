//! Generation stepping on a toroidal board
//!
//! Every next state is computed from the pre-step grid only; the input is
//! borrowed immutably and a fresh grid is returned.

use super::RuleSet;
use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};

/// Live cells among the 8 Moore neighbors of column `x`, row `y`, wrapping at the edges
pub fn neighbor_count(grid: &Grid, x: usize, y: usize) -> Result<u8> {
    if grid.is_empty() {
        return Err(LifeError::EmptyGrid);
    }
    grid.at(x, y)?;
    Ok(count_wrapped(grid, x, y))
}

fn count_wrapped(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if (dx, dy) != (0, 0) && grid.at_wrapping(x + dx, y + dy).is_alive() {
                count += 1;
            }
        }
    }
    count
}

/// State of one cell after a generation under `rules`
pub fn next_cell_state(grid: &Grid, x: usize, y: usize, rules: RuleSet) -> Result<Cell> {
    let current = grid.at(x, y)?;
    Ok(rules.apply(current, neighbor_count(grid, x, y)?))
}

/// Advance the whole board one generation
pub fn step(grid: &Grid, rules: RuleSet) -> Result<Grid> {
    if grid.is_empty() {
        return Err(LifeError::EmptyGrid);
    }
    Ok(Grid::from_fn(grid.dimensions(), |x, y| {
        let current = grid.row(y)[x];
        rules.apply(current, count_wrapped(grid, x, y))
    }))
}

/// Run `generations` steps, returning every produced frame in order
pub fn evolve(grid: &Grid, rules: RuleSet, generations: usize) -> Result<Vec<Grid>> {
    let mut frames: Vec<Grid> = Vec::with_capacity(generations);
    for _ in 0..generations {
        let next = step(frames.last().unwrap_or(grid), rules)?;
        frames.push(next);
    }
    Ok(frames)
}
