use anyhow::Result;

use super::args::Arguments;
use super::report;
use crate::config::Config;
use crate::pipeline::{self, RunReport};

/// Resolve configuration from the parsed arguments and run the pipeline.
pub fn run(args: Arguments) -> Result<RunReport> {
    let config = Config::from(args);
    config.validate()?;

    report::print_header(&config);
    let report = pipeline::run(&config)?;

    Ok(report)
}
