use std::process::Command;

use crate::config::Config;
use crate::error::PipelineError;

/// Invoke the external compiler as a blocking subprocess.
///
/// The configured command line is split on whitespace into program and
/// leading arguments, then `<input> --outDir <temp_dir>` is appended. Stdio
/// is inherited so compiler diagnostics stream straight through. A non-zero
/// exit (or spawn failure) is fatal.
pub fn compile(config: &Config) -> Result<(), PipelineError> {
    let mut parts = config.compiler.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| PipelineError::Compilation("compiler command is empty".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(&config.input_file)
        .arg("--outDir")
        .arg(&config.temp_dir)
        .status()
        .map_err(|err| PipelineError::Compilation(format!("failed to run '{}': {}", program, err)))?;

    if !status.success() {
        return Err(PipelineError::Compilation(format!(
            "'{}' exited with {}",
            config.compiler, status
        )));
    }

    Ok(())
}
