use std::fs;
use std::path::PathBuf;

/// Scoped ownership of the scratch directory.
///
/// The compiler creates the directory as a side effect; this guard only
/// guarantees removal. Dropping it deletes the directory recursively on
/// every exit path, success or failure. A missing directory at cleanup time
/// is a logged no-op.
#[derive(Debug)]
pub struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        println!("Cleaning up temporary files...");
        if self.path.exists() {
            match fs::remove_dir_all(&self.path) {
                Ok(()) => println!("Temporary files cleaned."),
                Err(err) => eprintln!(
                    "warning: failed to remove temp directory {}: {}",
                    self.path.display(),
                    err
                ),
            }
        } else {
            println!("Temp directory already cleaned or missing.");
        }
    }
}
