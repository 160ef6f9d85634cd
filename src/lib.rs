//! Locgen - typed translation sources to locale JSON files
//!
//! Locgen compiles a TypeScript translation module (exporting `locales` and
//! `translations`) and fans its entries out into one JSON file per declared
//! locale, ready for consumption by a runtime localization system.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and reporting)
//! - `config`: Run configuration resolved from arguments/environment
//! - `error`: Pipeline failure taxonomy
//! - `pipeline`: The compile/load/fan-out pipeline itself
//! - `translations`: Translation data model and locale projection
//! - `writer`: Pretty-JSON output file writing

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod translations;
pub mod writer;
