use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): All output files were generated.
/// - `Error` (1): The pipeline failed (missing input, compiler failure,
///   artifact/load failure, write failure).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// All output files were generated.
    Success,
    /// The pipeline failed before producing a complete output set.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
