use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};

use crate::cli::Arguments;

pub const DEFAULT_LOCALE: &str = "en-us";

/// File name used in raw mode, where the exported array is written once
/// instead of fanning out per locale.
pub const RAW_OUTPUT_FILE_NAME: &str = "translations.json";

/// Resolved configuration for one pipeline run.
///
/// Populated from CLI arguments (each backed by an environment variable with
/// a literal default), validated once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Typed source module exporting `locales` and `translations`.
    pub input_file: PathBuf,
    /// Destination for the generated locale files.
    pub out_dir: PathBuf,
    /// Scratch directory owned by this run; deleted on every exit path.
    pub temp_dir: PathBuf,
    /// Source root the compiler mirrors beneath `temp_dir`.
    pub source_root: PathBuf,
    /// Compiler command line, split on whitespace into program + args.
    pub compiler: String,
    /// Runtime command used to load the artifact and print its exports as JSON.
    pub loader: String,
    /// Write the raw exported array once instead of projecting per locale.
    pub raw: bool,
}

impl From<Arguments> for Config {
    fn from(args: Arguments) -> Self {
        Self {
            input_file: args.input,
            out_dir: args.out_dir,
            temp_dir: args.temp_dir,
            source_root: args.source_root,
            compiler: args.compiler,
            loader: args.loader,
            raw: args.raw,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The compiler and loader command lines must name a program to execute.
    pub fn validate(&self) -> Result<()> {
        if self.compiler.split_whitespace().next().is_none() {
            bail!("'compiler' must not be empty");
        }
        if self.loader.split_whitespace().next().is_none() {
            bail!("'loader' must not be empty");
        }
        Ok(())
    }

    /// Path where the compiler is expected to drop the loadable artifact.
    ///
    /// The input's directory is taken relative to `source_root` and mirrored
    /// beneath `temp_dir`, with the extension swapped for `.js`:
    /// `src/translations/index.ts` → `<temp_dir>/translations/index.js`.
    /// Inputs outside `source_root` land directly under `temp_dir`. Both
    /// paths are normalized first so `./src/...` still strips against `src`.
    pub fn artifact_path(&self) -> PathBuf {
        let parent = normalized(self.input_file.parent().unwrap_or_else(|| Path::new("")));
        let relative = parent
            .strip_prefix(normalized(&self.source_root))
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut name = self
            .input_file
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_default();
        name.push(".js");

        self.temp_dir.join(relative).join(name)
    }

    /// Destination of the single output file in raw mode.
    pub fn raw_output_path(&self) -> PathBuf {
        self.out_dir.join(RAW_OUTPUT_FILE_NAME)
    }

    /// Destination of one locale's output file in fan-out mode.
    pub fn locale_output_path(&self, locale: &str) -> PathBuf {
        self.out_dir.join(format!("{}.json", locale))
    }
}

/// Drop `.` components so env-supplied paths like `./src` compare equal to
/// `src` in prefix matching.
fn normalized(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
