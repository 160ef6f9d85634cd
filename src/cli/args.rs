//! CLI argument definitions using clap.
//!
//! Every path argument doubles as an environment variable with a hard-coded
//! fallback, so the tool can run with no flags at all inside a build script:
//!
//! - `TRANSLATIONS_INPUT_FILE` → `--input`
//! - `LOCALES_OUTPUT_DIRECTORY` → `--out-dir`

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Typed translation source module exporting `locales` and `translations`
    #[arg(
        long,
        env = "TRANSLATIONS_INPUT_FILE",
        default_value = "src/translations/index.ts"
    )]
    pub input: PathBuf,

    /// Directory receiving one <locale>.json file per declared locale
    #[arg(
        long,
        env = "LOCALES_OUTPUT_DIRECTORY",
        default_value = "public/locales"
    )]
    pub out_dir: PathBuf,

    /// Scratch directory for the compiled intermediate; removed after every run
    #[arg(long, default_value = ".temp")]
    pub temp_dir: PathBuf,

    /// Project source root; the artifact keeps the input's sub-path below it
    #[arg(long, default_value = "src")]
    pub source_root: PathBuf,

    /// Compiler command producing a loadable artifact from the input
    #[arg(long, default_value = "npx tsc")]
    pub compiler: String,

    /// Runtime used to load the compiled artifact and serialize its exports
    #[arg(long, default_value = "node")]
    pub loader: String,

    /// Write the exported translations array verbatim instead of fanning out per locale
    #[arg(long)]
    pub raw: bool,
}
