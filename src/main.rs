use std::process::ExitCode;

use clap::Parser;
use locgen::cli::{Arguments, ExitStatus, report};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match locgen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
