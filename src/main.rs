mod cli;
mod health;
mod measurement;
mod prelude;
mod quantity;
mod tables;
mod threshold;

use std::{fs::File, process::ExitCode};

use clap::{Parser, crate_version};
use itertools::Itertools;
use serde::Serialize;

use crate::{
    cli::{AnalyzeArgs, Args, Command},
    health::{
        processor::{CellHealthMetric, HealthProcessor},
        soc::estimate_soc,
        soh::SohEstimator,
    },
    measurement::read_batch,
    prelude::*,
    tables::build_metrics_table,
    threshold::Thresholds,
};

fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Analyze(args) => analyze(&args),
        Command::Soc(args) => {
            info!(voltage = %args.voltage, soc = %estimate_soc(args.voltage));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// A metric together with its verdict, as emitted by `--json`.
#[derive(Serialize)]
struct JudgedMetric<'a> {
    #[serde(flatten)]
    metric: &'a CellHealthMetric,
    passes_thresholds: bool,
}

fn analyze(args: &AnalyzeArgs) -> Result<ExitCode> {
    // Snapshot the thresholds up front: the whole batch is judged by one
    // consistent configuration.
    let thresholds = match &args.thresholds {
        Some(path) => Thresholds::read_from(path)?,
        None => Thresholds::default(),
    };

    let file = File::open(&args.input)
        .with_context(|| format!("failed to open `{}`", args.input.display()))?;
    let samples = read_batch(file)?;
    info!(n_samples = samples.len(), "parsed the measurement log");

    let processor = HealthProcessor::new(SohEstimator::new(args.nominal_capacity));
    let judged = processor
        .process(&samples)
        .into_iter()
        .map(|metric| {
            let passes = thresholds.passes(&metric);
            (metric, passes)
        })
        .collect_vec();

    if args.json {
        for (metric, passes) in &judged {
            let record = JudgedMetric { metric, passes_thresholds: *passes };
            println!("{}", serde_json::to_string(&record)?);
        }
    } else {
        println!("{}", build_metrics_table(&judged));
    }

    let n_failed = judged.iter().filter(|(_, passes)| !passes).count();
    if n_failed != 0 {
        warn!(n_failed, "cells out of specification");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
