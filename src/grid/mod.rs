//! Grid — the immutable board and the patterns that seed it
//!
//! A grid is created by a decoder, a random generator, or a literal
//! pattern, and every transform after that produces a new value.

mod model;
mod patterns;

pub use model::{Cell, Dimensions, Grid};
pub use patterns::{glider_seed, random_grid, DEFAULT_DENSITY, GLIDER};
