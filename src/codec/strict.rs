//! Strict grid codec for curated seed files
//!
//! Alive cells are `1` or `█`, dead cells are `0` or a space. Any other
//! character, a ragged line, or an empty file is an error.

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};
use crate::render::{DEAD_SPACE, FULL_BLOCK, LINE_BREAK};

fn classify(ch: char, line: usize) -> Result<Cell> {
    match ch {
        '1' | FULL_BLOCK => Ok(Cell::Alive),
        '0' | DEAD_SPACE => Ok(Cell::Dead),
        _ => Err(LifeError::InvalidCharacter { ch, line }),
    }
}

/// Parse a seed block; the first line fixes the width of every line
pub fn decode(text: &str) -> Result<Grid> {
    // Only line breaks are trimmed: leading and trailing spaces are dead cells.
    let trimmed = text.trim_matches(|c| c == '\n' || c == '\r');
    if trimmed.trim().is_empty() {
        return Err(LifeError::EmptyInput);
    }

    let lines: Vec<&str> = trimmed
        .split(LINE_BREAK)
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    let expected = lines[0].chars().count();

    let mut cells = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let number = i + 1;
        let found = line.chars().count();
        if found != expected {
            return Err(LifeError::InconsistentWidth {
                line: number,
                expected,
                found,
            });
        }
        let row = line
            .chars()
            .map(|ch| classify(ch, number))
            .collect::<Result<Vec<Cell>>>()?;
        cells.push(row);
    }
    Grid::from_rows(cells)
}

/// Write a grid as `1`/`0` lines that [`decode`] reads back
pub fn encode(grid: &Grid) -> String {
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .map(|c| if c.is_alive() { '1' } else { '0' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ones_and_zeros() {
        let grid = decode("101\n010\n101").unwrap();
        assert_eq!(grid.to_bits(), vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]]);
    }

    #[test]
    fn test_decode_blocks_and_spaces() {
        let grid = decode("█ █\n █ \n█ █").unwrap();
        assert_eq!(grid.to_bits(), vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]]);
    }

    #[test]
    fn test_decode_mixed_alphabet() {
        let grid = decode("1 █\n0█ \n█01").unwrap();
        assert_eq!(grid.to_bits(), vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]]);
    }

    #[test]
    fn test_decode_keeps_edge_spaces() {
        let grid = decode("\n █ \n█ █\n █ \n\n").unwrap();
        assert_eq!(grid.dimensions().cols, 3);
        assert_eq!(grid.to_bits(), vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn test_decode_crlf() {
        let grid = decode("10\r\n01\r\n").unwrap();
        assert_eq!(grid.to_bits(), vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode(""), Err(LifeError::EmptyInput)));
        assert!(matches!(decode("\n\n"), Err(LifeError::EmptyInput)));
        assert!(matches!(decode("   "), Err(LifeError::EmptyInput)));
    }

    #[test]
    fn test_decode_inconsistent_width() {
        match decode("101\n10\n101") {
            Err(LifeError::InconsistentWidth { line, expected, found }) => {
                assert_eq!((line, expected, found), (2, 3, 2));
            }
            other => panic!("expected InconsistentWidth, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_invalid_character() {
        let err = decode("101\n1X0\n101").unwrap_err();
        assert!(matches!(err, LifeError::InvalidCharacter { ch: 'X', line: 2 }));
        assert!(err.to_string().contains("Invalid character"));
    }

    #[test]
    fn test_encode_reads_back() {
        let grid = Grid::from_bits(&[[0, 1, 1], [1, 0, 0]]).unwrap();
        let text = encode(&grid);
        assert_eq!(text, "011\n100");
        assert_eq!(decode(&text).unwrap(), grid);
    }
}
