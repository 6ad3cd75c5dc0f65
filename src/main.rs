//! scroll-lock-report - structure analysis of the scroll lock page
//!
//! Prints a fixed description of the embedded scrollytelling markup.

mod core;
mod error;

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::markup::Markup;
use crate::core::report::Report;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let markup = Markup::embedded();
    tracing::info!("Analysing \"{}\"", markup.title());

    let ignored = std::env::args_os().skip(1).count();
    if ignored > 0 {
        tracing::debug!("Ignoring {} command-line argument(s)", ignored);
    }

    let report = Report::structure_analysis();
    tracing::debug!(
        "Markup is {} bytes, report is {} lines",
        markup.len(),
        report.lines().count()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = report.write_to(&mut out) {
        if err.is_broken_pipe() {
            tracing::warn!("Reader closed stdout before the report was complete");
        }
        return Err(err).context("Failed to write structure analysis to stdout");
    }

    Ok(())
}
