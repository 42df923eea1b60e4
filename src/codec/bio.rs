//! Bio codec — the grid's only durable storage
//!
//! The profile field is capped, carries no metadata, and can be edited by
//! hand between runs. Decoding therefore never fails: rows are padded or
//! cut to the caller's dimensions, unknown glyphs read as dead, and an
//! entirely blank field is replaced by a glider. Encoding flattens the
//! rendered board and truncates it to the length budget.
//!
//! Neither side stores the dimensions. A flat bio only decodes back to the
//! same board when `decode` is given the rows/cols used to produce it.

use crate::error::Result;
use crate::grid::{glider_seed, Cell, Dimensions, Grid};
use crate::render::{self, DisplayMode, DEAD_SPACE, FULL_BLOCK, LINE_BREAK};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Alive glyph for a whole cell; stands in for `█`, which renders wider in the profile font
pub const BIO_FULL: char = '■';
pub const BIO_TOP: char = '▀';
pub const BIO_BOTTOM: char = '▄';
/// Dead glyph
pub const BIO_EMPTY: char = '□';
/// Glyphs that decode as alive
pub const BIO_ALIVE: [char; 3] = [BIO_FULL, BIO_TOP, BIO_BOTTOM];

/// Which columns of a decoded row are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnGuard {
    /// Every one of the `cols` cells
    #[default]
    Columns,
    /// Legacy behaviour: only column indices below `rows`, the rest read as dead
    Rows,
}

/// Result of reading a bio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBio {
    pub grid: Grid,
    /// False when rows were missing or had the wrong width; diagnostic only
    pub is_valid: bool,
}

/// Result of writing a bio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBio {
    /// Flat text for the external field, at most `max_length` characters
    pub flat: String,
    /// Same glyphs with row breaks, for local inspection
    pub display: String,
    pub truncated: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BioCodec {
    column_guard: ColumnGuard,
}

impl BioCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column_guard(column_guard: ColumnGuard) -> Self {
        Self { column_guard }
    }

    /// Read `raw` as a `dims` board, repairing whatever is malformed
    pub fn decode(&self, raw: &str, dims: Dimensions) -> DecodedBio {
        let Dimensions { rows, cols } = dims;

        let inflated;
        let text = if !raw.is_empty() && !raw.contains(LINE_BREAK) {
            inflated = inflate_flat(raw, dims);
            inflated.as_str()
        } else {
            raw
        };

        // Lines beyond `rows` are ignored and do not affect validity.
        let mut lines: Vec<Vec<char>> = text
            .split(LINE_BREAK)
            .take(rows)
            .map(|l| l.chars().collect())
            .collect();

        let mut is_valid = true;
        if lines.len() < rows {
            debug!("Bio has {} of {} rows, padding with dead rows", lines.len(), rows);
            is_valid = false;
        }
        for (y, line) in lines.iter_mut().enumerate() {
            if line.len() != cols {
                debug!("Bio row {} has width {}, expected {}", y, line.len(), cols);
                is_valid = false;
                line.resize(cols, BIO_EMPTY);
            }
        }
        lines.resize(rows, vec![BIO_EMPTY; cols]);

        let blank = lines
            .iter()
            .flatten()
            .all(|&ch| ch == BIO_EMPTY || ch.is_whitespace());
        if !is_valid && blank {
            debug!("Bio is blank and invalid, seeding a glider");
            return DecodedBio {
                grid: glider_seed(dims),
                is_valid,
            };
        }

        let guard = match self.column_guard {
            ColumnGuard::Columns => cols,
            ColumnGuard::Rows => rows,
        };
        let grid = Grid::from_fn(dims, |x, y| {
            Cell::from(x < guard && BIO_ALIVE.contains(&lines[y][x]))
        });
        DecodedBio { grid, is_valid }
    }

    /// Render `grid` in bio glyphs and flatten it under `max_length`
    pub fn encode(&self, grid: &Grid, mode: DisplayMode, max_length: usize) -> Result<EncodedBio> {
        let display: String = render::render(grid, mode)?
            .chars()
            .map(to_bio_glyph)
            .collect();

        let total = display.chars().filter(|&c| c != LINE_BREAK).count();
        let truncated = total > max_length;
        if truncated {
            warn!(
                "Bio is {} characters, truncating to {}; trailing cells will read back as dead",
                total, max_length
            );
        }
        let flat: String = display
            .chars()
            .filter(|&c| c != LINE_BREAK)
            .take(max_length)
            .collect();

        Ok(EncodedBio {
            flat,
            display,
            truncated,
        })
    }
}

/// Chunk a flat bio into `cols`-wide rows, padding the last chunk and missing rows
fn inflate_flat(raw: &str, dims: Dimensions) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut lines: Vec<String> = chars
        .chunks(dims.cols)
        .map(|chunk| {
            let mut line: String = chunk.iter().collect();
            line.extend(std::iter::repeat(BIO_EMPTY).take(dims.cols - chunk.len()));
            line
        })
        .collect();
    while lines.len() < dims.rows {
        lines.push(std::iter::repeat(BIO_EMPTY).take(dims.cols).collect());
    }
    lines.join("\n")
}

fn to_bio_glyph(ch: char) -> char {
    match ch {
        FULL_BLOCK => BIO_FULL,
        DEAD_SPACE => BIO_EMPTY,
        other => other,
    }
}
