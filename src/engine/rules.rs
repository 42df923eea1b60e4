//! Rule sets — birth and survival neighbor counts
//!
//! Each variant carries its tables as data; selection is a single match.

use crate::error::LifeError;
use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Birth/survival table for one rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Live-neighbor counts at which a dead cell is born
    pub birth: &'static [u8],
    /// Live-neighbor counts at which a live cell survives
    pub survive: &'static [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Conway's rules, B3/S23
    #[default]
    Standard,
    /// Day & Night, B3678/S34678
    DayNight,
    /// HighLife, B36/S23
    HighLife,
}

impl RuleSet {
    pub const ALL: [RuleSet; 3] = [RuleSet::Standard, RuleSet::DayNight, RuleSet::HighLife];

    pub fn spec(self) -> RuleSpec {
        match self {
            RuleSet::Standard => RuleSpec {
                birth: &[3],
                survive: &[2, 3],
            },
            RuleSet::DayNight => RuleSpec {
                birth: &[3, 6, 7, 8],
                survive: &[3, 4, 6, 7, 8],
            },
            RuleSet::HighLife => RuleSpec {
                birth: &[3, 6],
                survive: &[2, 3],
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RuleSet::Standard => "standard",
            RuleSet::DayNight => "daynight",
            RuleSet::HighLife => "highlife",
        }
    }

    /// Next state of a cell given its current state and live-neighbor count
    pub fn apply(self, cell: Cell, neighbors: u8) -> Cell {
        let spec = self.spec();
        let counts = match cell {
            Cell::Alive => spec.survive,
            Cell::Dead => spec.birth,
        };
        Cell::from(counts.contains(&neighbors))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleSet {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleSet::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| LifeError::InvalidRuleSet(s.to_string()))
    }
}
