//! `slots` CLI -- find meeting slots in a day's calendar from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve the request in a day file (stdin → stdout)
//! cat day.json | slots find
//!
//! # Read from a file, write JSON to a file
//! slots find -i day.json -o slots.json --format json
//!
//! # Show raw free gaps for some attendees
//! slots free -i day.json --attendee alice --attendee bob --duration 30
//!
//! # Debug logging (or set RUST_LOG)
//! slots -v find -i day.json
//! ```
//!
//! A day file looks like:
//!
//! ```json
//! {
//!   "events": [{"title": "Standup", "start": "09:00", "end": "09:15", "attendees": ["alice"]}],
//!   "request": {"duration": 30, "attendees": ["alice"], "optional_attendees": ["bob"]}
//! }
//! ```

mod day;

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slot_engine::TimeRange;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::day::{DayFile, FindOutput, SlotOutput};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find meeting slots in a day's calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the meeting request in a day file
    Find {
        /// Input day file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format: "text" or "json"
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show free gaps for a set of attendees, ignoring any request
    Free {
        /// Input day file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Attendee whose events count as busy (repeatable)
        #[arg(short, long = "attendee", required = true)]
        attendees: Vec<String>,
        /// Minimum gap length in minutes
        #[arg(short, long, default_value_t = 0)]
        duration: u32,
        /// Output format: "text" or "json"
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Clone, Copy)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
        } => {
            let format = parse_format(&format)?;
            let day = DayFile::parse(&read_input(input.as_deref())?)?;
            let request = day
                .request
                .as_ref()
                .context("Day file has no \"request\" to resolve")?
                .to_request();
            let events = day.events()?;

            let resolution = slot_engine::resolve(&events, &request);
            info!(
                events = events.len(),
                slots = resolution.slots.len(),
                tier = ?resolution.tier,
                "resolved meeting request"
            );

            let rendered = match format {
                Format::Text => render_text(&resolution.slots),
                Format::Json => {
                    let out = FindOutput {
                        tier: resolution.tier,
                        slots: resolution.slots.iter().map(SlotOutput::from).collect(),
                    };
                    serde_json::to_string_pretty(&out)? + "\n"
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Free {
            input,
            attendees,
            duration,
            format,
        } => {
            let format = parse_format(&format)?;
            let day = DayFile::parse(&read_input(input.as_deref())?)?;
            let events = day.events()?;
            let people: BTreeSet<String> = attendees.into_iter().collect();

            let gaps = slot_engine::find_gaps(slot_engine::relevant_events(&events, &people), duration);
            info!(attendees = people.len(), gaps = gaps.len(), "computed free gaps");

            let rendered = match format {
                Format::Text => render_text(&gaps),
                Format::Json => {
                    let out: Vec<SlotOutput> = gaps.iter().map(SlotOutput::from).collect();
                    serde_json::to_string_pretty(&out)? + "\n"
                }
            };
            write_output(None, &rendered)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for slot output.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_format(format: &str) -> Result<Format> {
    match format {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => anyhow::bail!("Unknown format: '{}'. Available formats: text, json", other),
    }
}

fn render_text(slots: &[TimeRange]) -> String {
    if slots.is_empty() {
        return "No available slots\n".to_string();
    }
    slots
        .iter()
        .map(|slot| format!("{} ({} min)\n", slot, slot.duration()))
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
