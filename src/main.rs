use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, info};

use caged::{find_all_positions, position_report, FinderConfig, PositionReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "caged")]
#[command(version, about = "Show the notes of a scale inside a CAGED position")]
struct Cli {
    /// Root key, e.g. C, F♯, Bb
    key: String,

    /// Scale mode, e.g. "Major Scale", "Minor Pentatonic"
    mode: String,

    /// CAGED position: C, A, G, E or D
    #[arg(required_unless_present = "all")]
    position: Option<String>,

    /// Show all five positions
    #[arg(long, conflicts_with = "position")]
    all: bool,

    /// YAML file with per-shape margins
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<FinderConfig> {
    let Some(path) = path else {
        return Ok(FinderConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading config '{}'", path.display()))?;
    let config = FinderConfig::from_yaml(&content)?;
    info!("Loaded margins from {}", path.display());
    Ok(config)
}

fn print_text(report: &PositionReport) {
    println!(
        "{} {} - {} shape (start fret {})",
        report.key, report.mode, report.position, report.start_fret
    );
    for note in &report.notes {
        println!(
            "  string {}  fret {:>2}  {:<2}  {}",
            note.string, note.fret, note.name, note.interval
        );
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    debug!("Using {:?}", config);

    let reports = match &cli.position {
        Some(position) if !cli.all => {
            vec![position_report(&cli.key, &cli.mode, position, &config)?]
        }
        _ => find_all_positions(&cli.key, &cli.mode, &config)?,
    };

    match cli.format {
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_text(report);
            }
        }
        OutputFormat::Json => {
            let json = if reports.len() == 1 {
                serde_json::to_string_pretty(&reports[0])?
            } else {
                serde_json::to_string_pretty(&reports)?
            };
            println!("{}", json);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
