use std::fs;
use std::path::Path;
use std::process::Command;

use crate::config::Config;
use crate::error::PipelineError;
use crate::translations::ModuleExports;

/// Inline script run by the loader runtime. It registers ts-node when
/// available (the compiled module may import sibling typed sources), then
/// requires the artifact and prints its exports as JSON on stdout.
const LOADER_SCRIPT: &str = "\
try { require('ts-node').register(); } catch (_) {}\n\
const m = require(process.argv[1]);\n\
process.stdout.write(JSON.stringify(m));";

/// Load the compiled artifact's exported bindings.
///
/// The loader command line is split on whitespace into program and leading
/// arguments, then `-e <script> <artifact>` is appended; the artifact path
/// is made absolute first so `require` resolves it as a file. Stdout is the
/// serialized exports; stderr is forwarded. Any failure along the way
/// (spawn, non-zero exit, non-UTF-8 or malformed output) is a load error.
pub fn load_exports(config: &Config, artifact: &Path) -> Result<ModuleExports, PipelineError> {
    let mut parts = config.loader.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| PipelineError::Load("loader command is empty".to_string()))?;

    let artifact = fs::canonicalize(artifact)
        .map_err(|err| PipelineError::Load(format!("cannot resolve {}: {}", artifact.display(), err)))?;

    let output = Command::new(program)
        .args(parts)
        .arg("-e")
        .arg(LOADER_SCRIPT)
        .arg(&artifact)
        .output()
        .map_err(|err| PipelineError::Load(format!("failed to run '{}': {}", program, err)))?;

    if !output.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
    }

    if !output.status.success() {
        return Err(PipelineError::Load(format!(
            "'{}' exited with {} while loading {}",
            config.loader,
            output.status,
            artifact.display()
        )));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|err| PipelineError::Load(format!("exports are not valid UTF-8: {}", err)))?;

    serde_json::from_str(&stdout)
        .map_err(|err| PipelineError::Load(format!("malformed exports from {}: {}", artifact.display(), err)))
}
