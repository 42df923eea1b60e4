//! Grid model — rectangular board of binary cells
//!
//! Cells are stored row-major in a single vector. A `Grid` can only be
//! built through validating constructors, so every value is rectangular
//! with at least one row and one column.

use crate::error::{LifeError, Result};
use sha2::{Digest, Sha256};
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Validated board size, both axes at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(LifeError::InvalidDimensions(format!(
                "{}x{} (rows and columns must both be at least 1)",
                rows, cols
            )));
        }
        Ok(Self { rows, cols })
    }

    /// Number of cells on a board of this size
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Immutable Game of Life board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid, checking that `cells` has exactly `rows` rows of `cols` cells
    pub fn new(rows: usize, cols: usize, cells: Vec<Vec<Cell>>) -> Result<Self> {
        let dims = Dimensions::new(rows, cols)?;
        if cells.len() != rows {
            return Err(LifeError::InvalidDimensions(format!(
                "expected {} rows, found {}",
                rows,
                cells.len()
            )));
        }
        let mut flat = Vec::with_capacity(dims.area());
        for (y, row) in cells.into_iter().enumerate() {
            if row.len() != cols {
                return Err(LifeError::InvalidDimensions(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    cols
                )));
            }
            flat.extend(row);
        }
        Ok(Self { rows, cols, cells: flat })
    }

    /// Build a grid from rows, taking the size from the data
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        Self::new(rows, cols, cells)
    }

    /// Build a grid from 0/1 rows; any non-zero value is alive
    pub fn from_bits<R: AsRef<[u8]>>(bits: &[R]) -> Result<Self> {
        let cells = bits
            .iter()
            .map(|row| row.as_ref().iter().map(|&b| Cell::from(b != 0)).collect())
            .collect();
        Self::from_rows(cells)
    }

    /// All-dead board
    pub fn dead(dims: Dimensions) -> Self {
        Self {
            rows: dims.rows,
            cols: dims.cols,
            cells: vec![Cell::Dead; dims.area()],
        }
    }

    /// Board whose cell at column `x`, row `y` is `f(x, y)`
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(dims.area());
        for y in 0..dims.rows {
            for x in 0..dims.cols {
                cells.push(f(x, y));
            }
        }
        Self {
            rows: dims.rows,
            cols: dims.cols,
            cells,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Cell at column `x`, row `y`
    pub fn at(&self, x: usize, y: usize) -> Result<Cell> {
        if x >= self.cols || y >= self.rows {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[y * self.cols + x])
    }

    /// Cell at signed coordinates, wrapped onto the torus
    pub fn at_wrapping(&self, x: isize, y: isize) -> Cell {
        let x = x.rem_euclid(self.cols as isize) as usize;
        let y = y.rem_euclid(self.rows as isize) as usize;
        self.cells[y * self.cols + x]
    }

    /// Row `y` as a slice; panics if `y` is out of range
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.cols..(y + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|c| c.is_alive() as u8).collect())
            .collect()
    }

    /// Copy the overlapping top-left region onto a dead board of `dims`
    pub fn resized(&self, dims: Dimensions) -> Grid {
        Grid::from_fn(dims, |x, y| {
            if x < self.cols && y < self.rows {
                self.cells[y * self.cols + x]
            } else {
                Cell::Dead
            }
        })
    }

    /// SHA-256 over the size and cell states, hex encoded
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.rows as u64).to_le_bytes());
        hasher.update((self.cols as u64).to_le_bytes());
        let bits: Vec<u8> = self.cells.iter().map(|c| c.is_alive() as u8).collect();
        hasher.update(&bits);
        hex::encode(hasher.finalize())
    }

    pub fn summary(&self) -> String {
        format!(
            "Grid {} | population={} | fingerprint={}",
            self.dimensions(),
            self.population(),
            &self.fingerprint()[..12]
        )
    }
}
