//! Render — text views of a grid
//!
//! Two densities: one character per cell, or one character per vertical
//! pair of cells using half-block glyphs.

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FULL_BLOCK: char = '█';
pub const UPPER_HALF: char = '▀';
pub const LOWER_HALF: char = '▄';
pub const DEAD_SPACE: char = ' ';
/// Separator between rendered rows, shared with the codecs
pub const LINE_BREAK: char = '\n';

/// Rendering density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One character per cell
    Full,
    /// One character per vertically stacked pair of cells
    #[default]
    Half,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Full, DisplayMode::Half];

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Full => "full",
            DisplayMode::Half => "half",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        DisplayMode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| LifeError::InvalidDisplayMode(s.to_string()))
    }
}

/// Glyph for a (top, bottom) cell pair
pub fn half_glyph(top: Cell, bottom: Cell) -> char {
    match (top, bottom) {
        (Cell::Dead, Cell::Dead) => DEAD_SPACE,
        (Cell::Dead, Cell::Alive) => LOWER_HALF,
        (Cell::Alive, Cell::Dead) => UPPER_HALF,
        (Cell::Alive, Cell::Alive) => FULL_BLOCK,
    }
}

/// One line per row, `█` for alive and space for dead
pub fn render_full(grid: &Grid) -> Result<String> {
    if grid.is_empty() {
        return Err(LifeError::EmptyGrid);
    }
    let lines: Vec<String> = grid
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|&c| if c.is_alive() { FULL_BLOCK } else { DEAD_SPACE })
                .collect()
        })
        .collect();
    Ok(lines.join("\n"))
}

/// One line per pair of rows; an odd last row pairs with a dead row
pub fn render_half(grid: &Grid) -> Result<String> {
    if grid.is_empty() {
        return Err(LifeError::EmptyGrid);
    }
    let dead_row = vec![Cell::Dead; grid.cols()];
    let mut lines = Vec::with_capacity(grid.rows().div_ceil(2));
    for top in (0..grid.rows()).step_by(2) {
        let upper = grid.row(top);
        let lower = if top + 1 < grid.rows() {
            grid.row(top + 1)
        } else {
            dead_row.as_slice()
        };
        let line: String = upper
            .iter()
            .zip(lower)
            .map(|(&t, &b)| half_glyph(t, b))
            .collect();
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

pub fn render(grid: &Grid, mode: DisplayMode) -> Result<String> {
    match mode {
        DisplayMode::Full => render_full(grid),
        DisplayMode::Half => render_half(grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Grid {
        Grid::from_bits(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap()
    }

    #[test]
    fn test_render_full() {
        assert_eq!(render_full(&diamond()).unwrap(), " █ \n█ █\n █ ");
    }

    #[test]
    fn test_render_half_even_height() {
        let grid = Grid::from_bits(&[[0, 1, 0], [1, 0, 1], [0, 1, 0], [1, 0, 1]]).unwrap();
        assert_eq!(render_half(&grid).unwrap(), "▄▀▄\n▄▀▄");
    }

    #[test]
    fn test_render_half_odd_height() {
        assert_eq!(render_half(&diamond()).unwrap(), "▄▀▄\n ▀ ");
    }

    #[test]
    fn test_render_half_all_combinations() {
        let grid = Grid::from_bits(&[[0, 0, 1, 1], [0, 1, 0, 1]]).unwrap();
        assert_eq!(render_half(&grid).unwrap(), " ▄▀█");
    }

    #[test]
    fn test_render_half_single_row() {
        let grid = Grid::from_bits(&[[1, 0, 1]]).unwrap();
        assert_eq!(render_half(&grid).unwrap(), "▀ ▀");
    }

    #[test]
    fn test_render_dispatch() {
        let grid = diamond();
        assert_eq!(render(&grid, DisplayMode::Full).unwrap(), render_full(&grid).unwrap());
        assert_eq!(render(&grid, DisplayMode::Half).unwrap(), render_half(&grid).unwrap());
    }

    #[test]
    fn test_display_mode_parse() {
        assert_eq!("full".parse::<DisplayMode>().unwrap(), DisplayMode::Full);
        assert_eq!("half".parse::<DisplayMode>().unwrap(), DisplayMode::Half);
        assert!(matches!(
            "quarter".parse::<DisplayMode>(),
            Err(LifeError::InvalidDisplayMode(_))
        ));
        assert_eq!(DisplayMode::default(), DisplayMode::Half);
    }
}
