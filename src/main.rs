use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use vitalcare_lib::config;
use vitalcare_lib::consultation::ConsultationRecord;
use vitalcare_lib::intelligence::HealthInsights;
use vitalcare_lib::models::{reference_ranges, VitalPanel};
use vitalcare_lib::session::{SessionSnapshot, SessionState, SnapshotError};

#[derive(Parser)]
#[command(name = "vitalcare")]
#[command(about = "Wellness tracker advisory engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print insights and answered questions for a session snapshot
    Report {
        /// Path to a session snapshot (JSON)
        snapshot: PathBuf,
    },
    /// Ask one consultation question against a session snapshot
    Ask {
        /// Path to a session snapshot (JSON)
        snapshot: PathBuf,
        /// Question text
        query: String,
    },
    /// Print the vitals reference ranges and each panel's fields with units
    Ranges,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    insights: HealthInsights,
    consultations: &'a [ConsultationRecord],
}

fn load_session(path: &Path) -> Result<SessionState, SnapshotError> {
    let snapshot = SessionSnapshot::load(path)?;
    SessionState::from_snapshot(snapshot)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Report { snapshot } => {
            let state = load_session(&snapshot)?;
            let report = Report {
                insights: state.insights(),
                consultations: state.history().as_slice(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Ask { snapshot, query } => {
            let mut state = load_session(&snapshot)?;
            match state.ask(&query) {
                Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
                None => tracing::warn!("Empty question, nothing to answer"),
            }
        }
        Commands::Ranges => {
            for (label, range) in reference_ranges() {
                println!("{label}: {range}");
            }
            for panel in VitalPanel::ALL {
                println!();
                println!("{}", panel.label());
                for field in panel.fields() {
                    println!("  {} ({})", field.as_str(), field.unit());
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    config::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "vitalcare failed");
            ExitCode::FAILURE
        }
    }
}
