// File: crates/perfchart/src/main.rs
// Summary: Entry point; parses flags, loads the CSV or sample dataset and writes the report PNG.

mod cli;
mod data;
mod report;
mod sample;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::cli::{Cli, DataSource};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Cli::parse().into_config();
    let dataset = match cfg.source {
        DataSource::Sample => {
            info!("using embedded sample dataset");
            sample::sample_dataset()
        }
        DataSource::Csv => data::load_dataset(&cfg.output_dir, &cfg.report_name)
            .with_context(|| format!("loading report '{}' from {}", cfg.report_name, cfg.output_dir.display()))?,
    };

    report::render_report(&dataset, &cfg)?;
    Ok(())
}
