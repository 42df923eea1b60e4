//! biolife CLI — advance the bio board one generation
//!
//! Commands:
//!   biolife run     — step the board stored in a bio file
//!   biolife seed    — start from a strict grid file, step, write the bio
//!   biolife random  — start from a random board, step, write the bio
//!   biolife preview — print several generations from a bio, grid file or
//!                     random board without writing
//!   biolife plan    — suggest dimensions that fit a length budget
//!   biolife config  — write the default configuration

use biolife::codec::calculate_safe_dimensions;
use biolife::render::render;
use biolife::runner::{Preview, RunReport};
use biolife::{DisplayMode, FileChannel, MemoryChannel, Result, RunConfig, Runner, Seed};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

const CONFIG_ENV: &str = "BIOLIFE_CONFIG";
const CONFIG_FILE: &str = "biolife.json";
const DEFAULT_PREVIEW_ITERATIONS: usize = 5;

fn print_usage() {
    println!(
        r#"
biolife — Game of Life in a 160-character bio

Usage: biolife <command> [options]

Commands:
  run     <bio-file>                             Step the board stored in <bio-file>
  seed    <bio-file> <grid-file>                 Seed from a 1/0 grid file, step, write
  random  <bio-file> [density]                   Seed a random board, step, write
  preview [iterations] [bio-file]                Print generations, write nothing
  preview [iterations] --grid <grid-file>        Preview from a 1/0 grid file
  preview [iterations] --random [density]        Preview from a random board
  plan    <rows> <cols> <max-length> [full|half] Suggest dimensions for a budget
  config  [path]                                 Write the default configuration

Configuration is read from ${CONFIG_ENV} (default: {CONFIG_FILE}).
Set RUST_LOG=debug to see bio repairs.
"#,
        CONFIG_ENV = CONFIG_ENV,
        CONFIG_FILE = CONFIG_FILE,
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "seed" => cmd_seed(&args[2..]),
        "random" => cmd_random(&args[2..]),
        "preview" => cmd_preview(&args[2..]),
        "plan" => cmd_plan(&args[2..]),
        "config" => cmd_config(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn config_path() -> PathBuf {
    env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE))
}

fn load_config() -> Result<RunConfig> {
    RunConfig::load_or_default(config_path())
}

fn print_report(report: &RunReport) -> Result<()> {
    println!("\n  Previous grid:");
    println!("{}", render(&report.previous, report.display)?);
    println!("\n  Output grid (as displayed in the bio):");
    println!("{}", report.encoded.display);
    println!("\n  Content written (without newlines):");
    println!("{}", report.encoded.flat);
    println!("\n  {}", report.summary());
    Ok(())
}

fn run_with(bio_file: &str, seed: Seed) -> Result<()> {
    let config = load_config()?;
    let mut runner = Runner::new(config, FileChannel::new(bio_file));
    let report = runner.run_once(&seed)?;
    print_report(&report)?;
    println!("  Bio file: {}", runner.channel().path().display());
    Ok(())
}

/// Density argument, or `None` after reporting a value that is not a number
fn parse_density(s: &str) -> Option<f64> {
    let value = s.parse().ok();
    if value.is_none() {
        eprintln!("  density must be a number, got '{}'", s);
    }
    value
}

fn cmd_run(args: &[String]) -> Result<()> {
    match args.first() {
        Some(bio_file) => run_with(bio_file, Seed::Bio),
        None => {
            eprintln!("Usage: biolife run <bio-file>");
            Ok(())
        }
    }
}

fn cmd_seed(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Usage: biolife seed <bio-file> <grid-file>");
        return Ok(());
    }
    run_with(&args[0], Seed::File(PathBuf::from(&args[1])))
}

fn cmd_random(args: &[String]) -> Result<()> {
    let Some(bio_file) = args.first() else {
        eprintln!("Usage: biolife random <bio-file> [density]");
        return Ok(());
    };
    let density = match args.get(1) {
        Some(s) => match parse_density(s) {
            Some(density) => Some(density),
            None => return Ok(()),
        },
        None => None,
    };
    run_with(bio_file, Seed::Random { density, seed: None })
}

fn cmd_preview(args: &[String]) -> Result<()> {
    const USAGE: &str =
        "Usage: biolife preview [iterations] [bio-file | --grid <grid-file> | --random [density]]";
    let (iterations, rest) = match args.first().map(|s| s.parse::<usize>()) {
        Some(Ok(iterations)) => (iterations, &args[1..]),
        _ => (DEFAULT_PREVIEW_ITERATIONS, args),
    };
    let config = load_config()?;

    let preview = match rest {
        [] => Runner::new(config, MemoryChannel::default()).preview(&Seed::Glider, iterations)?,
        [flag, grid_file] if flag.as_str() == "--grid" => {
            let seed = Seed::File(PathBuf::from(grid_file));
            Runner::new(config, MemoryChannel::default()).preview(&seed, iterations)?
        }
        [flag, density @ ..] if flag.as_str() == "--random" && density.len() <= 1 => {
            let density = match density.first() {
                Some(s) => match parse_density(s) {
                    Some(density) => Some(density),
                    None => return Ok(()),
                },
                None => None,
            };
            let seed = Seed::Random { density, seed: None };
            Runner::new(config, MemoryChannel::default()).preview(&seed, iterations)?
        }
        [bio_file] if !bio_file.starts_with("--") => {
            Runner::new(config, FileChannel::new(bio_file)).preview(&Seed::Bio, iterations)?
        }
        _ => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
    };
    print_preview(&preview)
}

fn print_preview(preview: &Preview) -> Result<()> {
    println!(
        "\n  Initial grid (rules: {}, display: {}):",
        preview.rules, preview.display
    );
    for (generation, frame) in preview.frames.iter().enumerate() {
        if generation > 0 {
            println!("\n  Generation {}/{}:", generation, preview.frames.len() - 1);
        }
        println!("{}", render(frame, preview.display)?);
    }
    if let Some(at) = preview.cycle_at {
        println!("\n  Board repeated at generation {}", at);
    }
    println!("\n  Final grid (formatted for the bio):");
    println!("{}", preview.encoded.display);
    println!("\n  Content that would be written:");
    println!("{}", preview.encoded.flat);
    Ok(())
}

fn cmd_plan(args: &[String]) -> Result<()> {
    if args.len() < 3 {
        eprintln!("Usage: biolife plan <rows> <cols> <max-length> [full|half]");
        return Ok(());
    }
    let parse = |s: &str, what: &str| -> Option<usize> {
        let value = s.parse().ok();
        if value.is_none() {
            eprintln!("  {} must be a number, got '{}'", what, s);
        }
        value
    };
    let (Some(rows), Some(cols), Some(max_length)) = (
        parse(&args[0], "rows"),
        parse(&args[1], "cols"),
        parse(&args[2], "max-length"),
    ) else {
        return Ok(());
    };
    let mode: DisplayMode = match args.get(3) {
        Some(s) => s.parse()?,
        None => DisplayMode::Full,
    };

    let (safe_rows, safe_cols) = calculate_safe_dimensions(rows, cols, max_length, mode);
    println!(
        "\n  Requested: {}x{} ({} cells)",
        rows,
        cols,
        rows.saturating_mul(cols)
    );
    println!("  Budget:    {} characters ({} mode)", max_length, mode);
    println!("  Suggested: {}x{}", safe_rows, safe_cols);
    Ok(())
}

fn cmd_config(args: &[String]) -> Result<()> {
    let path = args.first().map(PathBuf::from).unwrap_or_else(config_path);
    RunConfig::default().save(&path)?;
    println!("\n  Wrote default configuration to {}", path.display());
    Ok(())
}
