//! Pipeline failure taxonomy.
//!
//! Each fatal failure mode gets its own variant so callers (tests, build
//! tooling) can branch on the kind of failure instead of parsing messages.
//! An empty `locales` export is deliberately absent here: it is a soft
//! recovery (default locale substituted, warning logged), not a failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The translation source file does not exist. Raised before any side
    /// effect: no temp directory, no output writes.
    #[error("Translation file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The external compiler exited non-zero (or could not be spawned).
    /// Its own diagnostics stream through the inherited stdio.
    #[error("Compiler failed: {0}")]
    Compilation(String),

    /// The compiler succeeded but the artifact is not at the computed path.
    #[error("Compiled artifact not found: {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// Loading the compiled artifact failed: the loader exited non-zero, or
    /// its output was not the expected exports structure.
    #[error("Failed to load compiled artifact: {0}")]
    Load(String),

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
