//! `skein`: find a root of an equation in one variable from the terminal.

mod args;
mod logger;
mod report;
mod request;

use anyhow::Context;
use clap::Parser;
use log::info;
use skein_core::sample;

use crate::{
    args::{Args, Format},
    report::{Report, Trace},
    request::RequestFile,
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.log_level())?;

    let file = match &args.request {
        Some(path) => RequestFile::load(path)?,
        None => RequestFile::default(),
    };
    let request = file.with_overrides(&args).into_request()?;

    info!(
        "solving {} = 0 with {} (tolerance {}, at most {} iterations)",
        request.expression,
        request.method.name(),
        request.config.tolerance(),
        request.config.max_iters()
    );

    let outcome = match request.method.solve(&request.expression, &request.config) {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Some(trace) = Trace::of_error(&err) {
                eprintln!("{}", trace.table());
            }
            return Err(err).with_context(|| format!("{} failed", request.method.name()));
        }
    };

    let plot = request.plot;
    let samples = sample(&request.expression, plot.start, plot.end, plot.points)
        .context("invalid plot range")?;
    let report = Report::new(&request, outcome, samples);

    match args.format {
        Format::Table => println!("{}", report.render()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
