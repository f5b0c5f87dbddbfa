//!
//! Command-line driver: reads an event file and a detector layout, runs the
//! matching pipeline, and writes accepted records.
#![allow(clippy::uninlined_format_args)]

use clap::{Parser, Subcommand, ValueEnum};

use crtmatch_algorithms::{match_events, match_events_parallel, EventMatcher};
use crtmatch_core::{MatchConfig, OperatingMode};
use crtmatch_io::MatchFileWriter;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] crtmatch_io::Error),

    #[error("matching error: {0}")]
    Core(#[from] crtmatch_core::Error),
}

/// Operating-mode selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Simulated production constants
    Simulation,
    /// Beam-data constants, mirroring, and trigger gating
    Beam,
}

impl From<Mode> for OperatingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Simulation => OperatingMode::Simulation,
            Mode::Beam => OperatingMode::Beam,
        }
    }
}

/// Cosmic-ray-tagger hit reconstruction and track matching.
#[derive(Parser)]
#[command(name = "crtmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match tracks to CRT hits and write accepted records
    Process {
        /// Input event file (JSON)
        input: PathBuf,

        /// Detector layout file (JSON)
        #[arg(short, long)]
        layout: PathBuf,

        /// Output file path (.csv or .jsonl)
        #[arg(short, long)]
        output: PathBuf,

        /// Operating mode
        #[arg(short, long, value_enum, default_value = "beam")]
        mode: Mode,

        /// Fan events across the thread pool
        #[arg(long)]
        parallel: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about an event file
    Info {
        /// Input event file (JSON)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            layout,
            output,
            mode,
            parallel,
            verbose,
        } => {
            if verbose {
                eprintln!("Mode: {:?}", mode);
                eprintln!("Reading layout: {}", layout.display());
            }
            let geometry = crtmatch_io::read_layout(&layout)?;
            if verbose {
                eprintln!("  {} strips", geometry.len());
                eprintln!("Reading events: {}", input.display());
            }
            let events = crtmatch_io::read_events(&input)?;
            if verbose {
                eprintln!("  {} events", events.len());
            }

            let matcher = EventMatcher::new(MatchConfig::for_mode(mode.into()));

            let start = Instant::now();
            let batch = if parallel {
                match_events_parallel(&matcher, &events, &geometry)?
            } else {
                match_events(&matcher, &events, &geometry)?
            };
            let elapsed = start.elapsed();

            let mut writer = MatchFileWriter::create(&output)?;
            let format = output
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or_else(|| "csv".to_string(), str::to_lowercase);
            match format.as_str() {
                "jsonl" => writer.write_records_jsonl(&batch.records)?,
                _ => writer.write_records_csv(&batch.records, true)?,
            }
            if verbose {
                eprintln!("Wrote {}", output.display());
            }

            let stats = batch.stats;
            println!(
                "Processed {} events in {:.2}s",
                events.len(),
                elapsed.as_secs_f64()
            );
            println!(
                "Skipped: {} (quality), {} (trigger pixels)",
                stats.events_skipped_quality, stats.events_skipped_pixels
            );
            println!("Readings kept: {}", stats.readings_kept);
            println!("Hits built: {}", stats.hits_built);
            println!("Candidate pairs: {}", stats.candidates);
            println!("Accepted pairs: {}", stats.accepted);
        }

        Commands::Info { input } => {
            let events = crtmatch_io::read_events(&input)?;
            println!("File: {}", input.display());
            println!("Events: {}", events.len());

            let readings: usize = events.iter().map(|e| e.readings.len()).sum();
            let tracks: usize = events.iter().map(|e| e.tracks.len()).sum();
            let flashes: usize = events.iter().map(|e| e.flashes.len()).sum();
            let coincidences: usize = events.iter().map(|e| e.coincidences.len()).sum();
            println!("Readings: {}", readings);
            println!("Tracks: {}", tracks);
            println!("Flashes: {}", flashes);
            println!("Coincidences: {}", coincidences);

            if let Some(max_adc) = events
                .iter()
                .flat_map(|e| e.readings.iter())
                .map(|r| r.adc)
                .max()
            {
                println!("Max ADC: {}", max_adc);
            }
        }
    }

    Ok(())
}
