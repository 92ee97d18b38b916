#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::Parser;
use fitcalc::{SummaryReport, cli, samples, utils};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let workouts = samples::sample_workouts()?;
    dlog!(
        "loaded samples total={} only={:?} format={:?}",
        workouts.len(),
        cli.only,
        cli.format
    );

    let reports: Vec<SummaryReport> = workouts
        .iter()
        .filter(|w| cli.wants(w.kind()))
        .map(|w| {
            dlog!(
                "computing kind={:?} duration={}",
                w.kind(),
                utils::format_duration(w.base().duration())
            );
            w.summary()
        })
        .collect();

    if reports.is_empty() {
        tracing::warn!("no workouts selected");
    }

    match cli.format {
        cli::OutputFormat::Text => {
            for report in &reports {
                println!("{report}");
            }
        }
        cli::OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}
