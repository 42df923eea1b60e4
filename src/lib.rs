//! biolife — a Game of Life board that lives in a profile bio
//!
//! Each invocation decodes the board from a length-capped text field,
//! advances it one generation on a torus, and writes it back.

pub mod channel;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod render;
pub mod runner;

pub use channel::{BioChannel, FileChannel, MemoryChannel};
pub use codec::{calculate_safe_dimensions, BioCodec, ColumnGuard, DecodedBio, EncodedBio};
pub use config::RunConfig;
pub use engine::{neighbor_count, step, RuleSet};
pub use error::{LifeError, Result};
pub use grid::{Cell, Dimensions, Grid};
pub use render::{render_full, render_half, DisplayMode};
pub use runner::{Runner, Seed};
