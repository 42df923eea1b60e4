//! Runner — one generation per invocation
//!
//! Reads the board from its seed (usually the bio itself), advances it one
//! generation, and writes the encoded result back through the channel.
//! A repaired bio is only a warning; strict seed errors abort the run.

use crate::channel::BioChannel;
use crate::codec::{calculate_safe_dimensions, encoded_length, strict, BioCodec, EncodedBio};
use crate::config::RunConfig;
use crate::engine::{step, CycleHistory, RuleSet};
use crate::error::Result;
use crate::grid::{glider_seed, random_grid, Dimensions, Grid};
use crate::render::DisplayMode;
use chrono::{DateTime, Utc};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Where the starting board comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    /// Decode the current bio from the channel
    Bio,
    /// Strict seed file, resized to the configured dimensions
    File(PathBuf),
    /// Strict seed text, resized to the configured dimensions
    Text(String),
    /// Random board; density falls back to the config, seed to entropy
    Random {
        density: Option<f64>,
        seed: Option<u64>,
    },
    /// Glider in the top-left corner
    Glider,
}

/// Starting board plus the bio validity when it came from the bio
#[derive(Debug, Clone)]
pub struct SeededGrid {
    pub grid: Grid,
    pub bio_valid: Option<bool>,
}

/// Outcome of a single run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub previous: Grid,
    pub next: Grid,
    pub encoded: EncodedBio,
    pub bio_valid: Option<bool>,
    pub rules: RuleSet,
    pub display: DisplayMode,
    pub ran_at: DateTime<Utc>,
}

impl RunReport {
    pub fn summary(&self) -> String {
        format!(
            "Run {} | rules={} | display={} | population {} -> {} | {} chars{}",
            self.ran_at.format("%Y-%m-%d %H:%M:%S"),
            self.rules,
            self.display,
            self.previous.population(),
            self.next.population(),
            self.encoded.flat.chars().count(),
            if self.encoded.truncated { " (truncated)" } else { "" }
        )
    }
}

/// Generations produced without touching the channel
#[derive(Debug, Clone)]
pub struct Preview {
    /// Starting board followed by each generation
    pub frames: Vec<Grid>,
    /// Generation at which a board repeated, if the preview stopped early
    pub cycle_at: Option<usize>,
    /// Encoding of the last frame
    pub encoded: EncodedBio,
    pub rules: RuleSet,
    pub display: DisplayMode,
}

pub struct Runner<C: BioChannel> {
    config: RunConfig,
    codec: BioCodec,
    channel: C,
}

impl<C: BioChannel> Runner<C> {
    pub fn new(config: RunConfig, channel: C) -> Self {
        let codec = BioCodec::with_column_guard(config.column_guard);
        Self {
            config,
            codec,
            channel,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Board size for this run; shrunk by the planner only with `fit_to_budget`
    ///
    /// The budget is checked against the encoded length in the effective
    /// display mode, so a half-mode board may hold more cells than `max_length`.
    pub fn dimensions(&self) -> Result<Dimensions> {
        let dims = self.config.dimensions()?;
        let (_, display) = self.config.effective_options();
        let needed = encoded_length(dims.rows, dims.cols, display);
        if needed <= self.config.max_length {
            return Ok(dims);
        }
        if self.config.fit_to_budget {
            let (rows, cols) =
                calculate_safe_dimensions(dims.rows, dims.cols, self.config.max_length, display);
            info!(
                "Fitting {} grid into {} characters as {}x{}",
                dims, self.config.max_length, rows, cols
            );
            return Dimensions::new(rows, cols);
        }
        warn!(
            "Grid {} needs {} characters in {} mode, over the {} character budget; \
             trailing cells will be cut",
            dims, needed, display, self.config.max_length
        );
        Ok(dims)
    }

    pub fn seed_grid(&mut self, seed: &Seed, dims: Dimensions) -> Result<SeededGrid> {
        let seeded = match seed {
            Seed::Bio => {
                let raw = self.channel.get_text()?;
                let decoded = self.codec.decode(&raw, dims);
                if !decoded.is_valid {
                    warn!("Bio format was invalid or empty, continuing with the repaired grid");
                }
                SeededGrid {
                    grid: decoded.grid,
                    bio_valid: Some(decoded.is_valid),
                }
            }
            Seed::File(path) => {
                info!("Loading grid from file: {}", path.display());
                let text = std::fs::read_to_string(path)?;
                SeededGrid {
                    grid: fit(strict::decode(&text)?, dims),
                    bio_valid: None,
                }
            }
            Seed::Text(text) => SeededGrid {
                grid: fit(strict::decode(text)?, dims),
                bio_valid: None,
            },
            Seed::Random { density, seed } => {
                let density = density.unwrap_or(self.config.random_density);
                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(*s),
                    None => StdRng::from_entropy(),
                };
                info!("Generating random board with density {}", density);
                SeededGrid {
                    grid: random_grid(dims, density, &mut rng)?,
                    bio_valid: None,
                }
            }
            Seed::Glider => SeededGrid {
                grid: glider_seed(dims),
                bio_valid: None,
            },
        };
        Ok(seeded)
    }

    /// Seed, step once, encode, and write the flat bio
    pub fn run_once(&mut self, seed: &Seed) -> Result<RunReport> {
        let dims = self.dimensions()?;
        let (rules, display) = self.config.effective_options();
        let seeded = self.seed_grid(seed, dims)?;

        let next = step(&seeded.grid, rules)?;
        let encoded = self.codec.encode(&next, display, self.config.max_length)?;
        self.channel.put_text(&encoded.flat)?;

        let report = RunReport {
            previous: seeded.grid,
            next,
            encoded,
            bio_valid: seeded.bio_valid,
            rules,
            display,
            ran_at: Utc::now(),
        };
        info!("{}", report.summary());
        Ok(report)
    }

    /// Evolve up to `iterations` generations without writing, stopping on a repeat
    pub fn preview(&mut self, seed: &Seed, iterations: usize) -> Result<Preview> {
        let dims = self.dimensions()?;
        let (rules, display) = self.config.effective_options();
        let seeded = self.seed_grid(seed, dims)?;

        let mut history = CycleHistory::new(self.config.history_depth);
        history.record(&seeded.grid);
        let mut frames = vec![seeded.grid];
        let mut cycle_at = None;
        for generation in 1..=iterations {
            let next = step(&frames[frames.len() - 1], rules)?;
            let repeated = history.record(&next);
            frames.push(next);
            if repeated {
                info!("Board repeated at generation {}, stopping preview", generation);
                cycle_at = Some(generation);
                break;
            }
        }

        let last = &frames[frames.len() - 1];
        let encoded = self.codec.encode(last, display, self.config.max_length)?;
        Ok(Preview {
            frames,
            cycle_at,
            encoded,
            rules,
            display,
        })
    }
}

fn fit(grid: Grid, dims: Dimensions) -> Grid {
    if grid.dimensions() == dims {
        return grid;
    }
    info!("Resizing grid from {} to {}", grid.dimensions(), dims);
    grid.resized(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MemoryChannel;
    use crate::codec::ColumnGuard;

    fn small_config() -> RunConfig {
        RunConfig {
            rows: 3,
            cols: 3,
            max_length: 160,
            display: DisplayMode::Full,
            ..RunConfig::default()
        }
    }

    #[test]
    fn test_run_once_writes_flat_bio() {
        let mut runner = Runner::new(small_config(), MemoryChannel::new("□■□\n□■□\n□■□"));
        let report = runner.run_once(&Seed::Bio).unwrap();
        assert_eq!(report.bio_valid, Some(true));
        assert_eq!(report.previous.to_bits(), vec![vec![0, 1, 0]; 3]);
        assert_eq!(report.next.to_bits(), vec![vec![1, 1, 1]; 3]);
        assert_eq!(runner.channel().current(), "■■■■■■■■■");
        assert_eq!(runner.channel().writes().len(), 1);
        println!("{}", report.summary());
    }

    #[test]
    fn test_run_once_reads_its_own_output() {
        let config = RunConfig {
            rows: 6,
            cols: 6,
            ..small_config()
        };
        let mut runner = Runner::new(config, MemoryChannel::new(""));
        let first = runner.run_once(&Seed::Bio).unwrap();
        assert_eq!(first.bio_valid, Some(false));
        assert_eq!(first.previous, glider_seed(first.previous.dimensions()));

        let second = runner.run_once(&Seed::Bio).unwrap();
        assert_eq!(second.bio_valid, Some(true));
        assert_eq!(second.previous, first.next);
        assert_eq!(second.next.population(), 5);
    }

    #[test]
    fn test_run_once_truncates_default_board() {
        let config = RunConfig {
            display: DisplayMode::Full,
            ..RunConfig::default()
        };
        let mut runner = Runner::new(config, MemoryChannel::new(""));
        let seed = Seed::Random {
            density: Some(1.0),
            seed: Some(3),
        };
        let report = runner.run_once(&seed).unwrap();
        assert_eq!(report.previous.dimensions(), Dimensions::new(5, 33).unwrap());
        assert!(report.encoded.truncated);
        assert_eq!(runner.channel().current().chars().count(), 160);
    }

    #[test]
    fn test_fit_to_budget_uses_planner() {
        let config = RunConfig {
            rows: 20,
            cols: 20,
            display: DisplayMode::Half,
            fit_to_budget: true,
            ..RunConfig::default()
        };
        let runner = Runner::new(config, MemoryChannel::default());
        assert_eq!(runner.dimensions().unwrap(), Dimensions::new(16, 20).unwrap());
    }

    #[test]
    fn test_over_budget_kept_without_fit() {
        let config = RunConfig {
            display: DisplayMode::Full,
            ..RunConfig::default()
        };
        let runner = Runner::new(config, MemoryChannel::default());
        assert_eq!(runner.dimensions().unwrap(), Dimensions::new(5, 33).unwrap());
    }

    #[test]
    fn test_default_half_board_fits_budget() {
        // 165 cells, but half mode packs them into 3 rows of 33
        let config = RunConfig {
            fit_to_budget: true,
            ..RunConfig::default()
        };
        let mut runner = Runner::new(config, MemoryChannel::new(""));
        assert_eq!(runner.dimensions().unwrap(), Dimensions::new(5, 33).unwrap());

        let seed = Seed::Random {
            density: Some(1.0),
            seed: Some(3),
        };
        let report = runner.run_once(&seed).unwrap();
        assert!(!report.encoded.truncated);
        assert_eq!(report.encoded.flat.chars().count(), 99);
    }

    #[test]
    fn test_full_mode_fit_shrinks_default_board() {
        let config = RunConfig {
            display: DisplayMode::Full,
            fit_to_budget: true,
            ..RunConfig::default()
        };
        let runner = Runner::new(config, MemoryChannel::default());
        assert_eq!(runner.dimensions().unwrap(), Dimensions::new(4, 33).unwrap());
    }

    #[test]
    fn test_text_seed_is_resized() {
        let mut runner = Runner::new(small_config(), MemoryChannel::default());
        let dims = runner.dimensions().unwrap();
        let seeded = runner.seed_grid(&Seed::Text("11\n11".into()), dims).unwrap();
        assert_eq!(seeded.bio_valid, None);
        assert_eq!(seeded.grid.to_bits(), vec![vec![1, 1, 0], vec![1, 1, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn test_strict_seed_error_aborts_without_write() {
        let mut runner = Runner::new(small_config(), MemoryChannel::new("■■■"));
        assert!(runner.run_once(&Seed::Text("1X1".into())).is_err());
        assert!(runner.channel().writes().is_empty());
    }

    #[test]
    fn test_missing_seed_file_is_io_error() {
        let mut runner = Runner::new(small_config(), MemoryChannel::default());
        let path = std::env::temp_dir().join("biolife-no-such-seed.txt");
        let err = runner.run_once(&Seed::File(path)).unwrap_err();
        assert!(matches!(err, crate::error::LifeError::Io(_)));
    }

    #[test]
    fn test_runner_uses_configured_column_guard() {
        let config = RunConfig {
            rows: 2,
            cols: 4,
            column_guard: ColumnGuard::Rows,
            ..small_config()
        };
        let mut runner = Runner::new(config, MemoryChannel::new("■■■■\n■■■■"));
        let dims = runner.dimensions().unwrap();
        let seeded = runner.seed_grid(&Seed::Bio, dims).unwrap();
        assert_eq!(seeded.grid.to_bits(), vec![vec![1, 1, 0, 0], vec![1, 1, 0, 0]]);
    }

    #[test]
    fn test_preview_stops_on_cycle() {
        let config = RunConfig {
            rows: 3,
            cols: 3,
            ..small_config()
        };
        let mut runner = Runner::new(config, MemoryChannel::new("□■□\n□■□\n□■□"));
        let preview = runner.preview(&Seed::Bio, 10).unwrap();
        // full board, then empty, then empty again
        assert_eq!(preview.cycle_at, Some(3));
        assert_eq!(preview.frames.len(), 4);
        assert_eq!(preview.frames[3].population(), 0);
        assert_eq!(preview.encoded.flat, "□□□□□□□□□");
        assert!(runner.channel().writes().is_empty());
    }

    #[test]
    fn test_preview_runs_all_iterations() {
        let config = RunConfig {
            rows: 6,
            cols: 6,
            ..small_config()
        };
        let mut runner = Runner::new(config, MemoryChannel::default());
        let preview = runner.preview(&Seed::Glider, 5).unwrap();
        assert_eq!(preview.cycle_at, None);
        assert_eq!(preview.frames.len(), 6);
        assert_eq!(preview.rules, RuleSet::Standard);
    }

    #[test]
    fn test_preview_from_grid_file_and_random_seed() {
        let path = std::env::temp_dir().join(format!("biolife-preview-{}.txt", std::process::id()));
        std::fs::write(&path, "010\n010\n010\n").unwrap();
        let mut runner = Runner::new(small_config(), MemoryChannel::default());
        let from_file = runner.preview(&Seed::File(path.clone()), 10).unwrap();
        assert_eq!(from_file.frames[0].to_bits(), vec![vec![0, 1, 0]; 3]);
        assert_eq!(from_file.cycle_at, Some(3));
        std::fs::remove_file(&path).unwrap();

        let seed = Seed::Random {
            density: Some(0.5),
            seed: Some(11),
        };
        let first = runner.preview(&seed, 3).unwrap();
        let again = runner.preview(&seed, 3).unwrap();
        assert_eq!(first.frames[0], again.frames[0]);
        assert!(runner.channel().writes().is_empty());
    }
}
