//! Command-line interface for inspecting recording containers.
//!
//! A thin caller over `mearec-h5`: open a recording, inspect or window-read
//! it, close it.

use clap::{Parser, Subcommand};
use mearec_h5::Recording;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("recording error: {0}")]
    Recording(#[from] mearec_h5::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Multi-electrode array recording inspector.
#[derive(Parser)]
#[command(name = "mearec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print recording metadata
    Info {
        /// Recording file
        input: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Read a window of samples from one channel
    Read {
        /// Recording file
        input: PathBuf,

        /// Channel row to read (ignored with --digital)
        #[arg(short, long, default_value_t = 0)]
        channel: usize,

        /// First sample of the window
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Past-the-last sample of the window
        #[arg(long)]
        end: usize,

        /// Read the digital stream instead of raw data
        #[arg(long)]
        digital: bool,

        /// Read samples as floating point
        #[arg(long)]
        float: bool,
    },
    /// List event streams or print one event sequence
    Events {
        /// Recording file
        input: PathBuf,

        /// Event stream to print; omit to list counts
        #[arg(long)]
        index: Option<usize>,
    },
    /// List stored peak trains or print one train's length
    Peaks {
        /// Recording file
        input: PathBuf,

        /// Peak train label
        label: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input, json } => {
            let recording = Recording::open(&input)?;
            if json {
                let summary = serde_json::json!({
                    "date": recording.date(),
                    "datalen": recording.datalen(),
                    "sampling_frequency": recording.sampling_frequency(),
                    "has_digital": recording.has_digital(),
                    "n_events": recording.n_events(),
                    "channels": recording.raw_group().channels(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("date:               {}", recording.date());
                println!("samples:            {}", recording.datalen());
                println!("sampling frequency: {} Hz", recording.sampling_frequency());
                println!("raw channels:       {}", recording.n_channels());
                println!("digital stream:     {}", recording.has_digital());
                println!("event streams:      {}", recording.n_events());
                for label in recording.labels() {
                    println!("  {label}");
                }
            }
            recording.close()?;
        }
        Commands::Read {
            input,
            channel,
            start,
            end,
            digital,
            float,
        } => {
            let recording = Recording::open(&input)?;
            if float {
                let window: Vec<f32> = if digital {
                    recording.digital(start, end)?
                } else {
                    recording.raw_data(channel, start, end)?
                };
                print_window(&window);
            } else {
                let window: Vec<i32> = if digital {
                    recording.digital(start, end)?
                } else {
                    recording.raw_data(channel, start, end)?
                };
                print_window(&window);
            }
            recording.close()?;
        }
        Commands::Events { input, index } => {
            let recording = Recording::open(&input)?;
            if let Some(index) = index {
                print_window(&recording.events(index)?);
            } else {
                for i in 0..recording.n_events() {
                    println!("EventEntity_{i}: {} events", recording.events_len(i)?);
                }
            }
            recording.close()?;
        }
        Commands::Peaks { input, label } => {
            let recording = Recording::open(&input)?;
            if let Some(label) = label {
                println!("{}: {} peaks", label, recording.peak_train_len(&label)?);
            } else {
                for label in recording.peak_train_labels()? {
                    println!("{}: {} peaks", label, recording.peak_train_len(&label)?);
                }
            }
            recording.close()?;
        }
    }

    Ok(())
}

fn print_window<T: std::fmt::Display>(window: &[T]) {
    for sample in window {
        println!("{sample}");
    }
}
