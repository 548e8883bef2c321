use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::quantity::{capacity::AmpereHours, voltage::Volts};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a measurement log and report per-cell health.
    Analyze(AnalyzeArgs),

    /// Query the voltage to state-of-charge calibration curve.
    Soc(SocArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Measurement log in CSV format:
    /// `timestamp,cell_id,voltage_v,current_a,temperature_c`.
    pub input: PathBuf,

    /// Acceptance thresholds in TOML format. Without it, every cell passes.
    #[clap(long, env = "CELLWATCH_THRESHOLDS")]
    pub thresholds: Option<PathBuf>,

    /// Nominal cell capacity, the 100% anchor for capacity-based SoH scoring.
    #[clap(long = "nominal-capacity-ah", default_value = "50", env = "NOMINAL_CAPACITY_AH")]
    pub nominal_capacity: AmpereHours,

    /// Print one JSON object per cell instead of the table.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct SocArgs {
    /// Cell voltage in volts.
    pub voltage: Volts,
}
