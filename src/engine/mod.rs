//! Engine — rule sets and synchronous toroidal evolution
//!
//! - **Rules**: the closed set of birth/survival tables
//! - **Step**: neighbor counting with wraparound and whole-board generations
//! - **History**: fingerprint ring used to spot repeating boards

mod history;
mod rules;
mod step;

pub use history::CycleHistory;
pub use rules::{RuleSet, RuleSpec};
pub use step::{evolve, neighbor_count, next_cell_state, step};
