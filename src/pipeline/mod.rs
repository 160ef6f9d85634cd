//! The translation compiler pipeline.
//!
//! One linear pass per invocation: validate the input, compile it with the
//! external compiler into the temp directory, load the artifact's exports,
//! project them per locale and write the output files. The temp directory is
//! removed on every exit path.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::report::SUCCESS_MARK;
use crate::config::Config;
use crate::error::PipelineError;
use crate::translations::{self, ModuleExports};
use crate::writer;

pub mod compiler;
pub mod loader;
pub mod temp;

use temp::TempDirGuard;

/// Outcome of a successful run, for the CLI report layer.
#[derive(Debug)]
pub struct RunReport {
    /// Locales the run fanned out to (post-defaulting).
    pub locales: Vec<String>,
    /// Output files written, in write order.
    pub written: Vec<PathBuf>,
    /// True when the module exported no locales and the default was used.
    pub defaulted_locales: bool,
}

/// Run the pipeline to completion.
///
/// Output files written before a later failure are not rolled back; the
/// temp directory is the only resource with a cleanup guarantee.
pub fn run(config: &Config) -> Result<RunReport, PipelineError> {
    if !config.input_file.exists() {
        return Err(PipelineError::InputNotFound(config.input_file.clone()));
    }

    fs::create_dir_all(&config.out_dir).map_err(|source| PipelineError::Write {
        path: config.out_dir.clone(),
        source,
    })?;

    // From here on the compiler may create the temp directory; the guard
    // removes it whether we return Ok, Err, or unwind.
    let _cleanup = TempDirGuard::new(config.temp_dir.clone());

    println!("Compiling translation source...");
    compiler::compile(config)?;

    let artifact = config.artifact_path();
    if !artifact.exists() {
        dump_temp_dir(&config.temp_dir);
        return Err(PipelineError::ArtifactMissing(artifact));
    }

    println!("Loading translation exports from {}...", artifact.display());
    let exports = loader::load_exports(config, &artifact)?;

    let (locales, defaulted_locales) = exports.resolved_locales();
    if defaulted_locales {
        eprintln!(
            "{}: locales list is empty or invalid; defaulting to [\"{}\"]",
            "warning".bold().yellow(),
            crate::config::DEFAULT_LOCALE
        );
    }

    let written = if config.raw {
        write_raw(config, &exports)?
    } else {
        write_locales(config, &exports, &locales)?
    };

    Ok(RunReport {
        locales,
        written,
        defaulted_locales,
    })
}

/// Fan-out mode: one `{Key, Value}` projection per declared locale.
fn write_locales(
    config: &Config,
    exports: &ModuleExports,
    locales: &[String],
) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = exports
        .entries()
        .map_err(|err| PipelineError::Load(format!("invalid translation entry: {}", err)))?;

    let mut written = Vec::with_capacity(locales.len());
    for locale in locales {
        let path = config.locale_output_path(locale);
        writer::write_json(&path, &translations::project(&entries, locale))?;
        println!(
            "{} Locale file generated: {}",
            SUCCESS_MARK.green(),
            path.display()
        );
        written.push(path);
    }
    Ok(written)
}

/// Raw mode: the exported array verbatim, written once.
fn write_raw(config: &Config, exports: &ModuleExports) -> Result<Vec<PathBuf>, PipelineError> {
    let path = config.raw_output_path();
    writer::write_json(&path, &exports.translations)?;
    println!(
        "{} Translations file generated: {}",
        SUCCESS_MARK.green(),
        path.display()
    );
    Ok(vec![path])
}

/// List the temp directory on stderr when the compiler/loader contract
/// breaks, to show what the compiler actually produced.
fn dump_temp_dir(temp_dir: &Path) {
    eprintln!("Temp directory contents:");
    match fs::read_dir(temp_dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                eprintln!("  - {}", entry.path().display());
            }
        }
        Err(_) => eprintln!("  (temp directory does not exist)"),
    }
}
