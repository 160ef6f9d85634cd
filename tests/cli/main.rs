// The external compiler and loader are stubbed with shell scripts, so these
// tests only run on unix.
#![cfg(unix)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;


const BIN_NAME: &str = "locgen";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a translation source, a fake compiler honoring
    /// `--outDir` (copies `exports.json` to `<outDir>/translations/index.js`)
    /// and a fake loader that prints the artifact verbatim.
    pub fn with_exports(exports_json: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file("src/translations/index.ts", "export {};")?;
        test.write_file("exports.json", exports_json)?;
        test.write_script(
            "fake-tsc",
            &format!(
                "#!/bin/sh\nmkdir -p \"$3/translations\"\ncp \"{}\" \"$3/translations/index.js\"\n",
                test.root().join("exports.json").display()
            ),
        )?;
        test.write_script("fake-node", "#!/bin/sh\ncat \"$3\"\n")?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_script(&self, path: &str, content: &str) -> Result<()> {
        self.write_file(path, content)?;
        let file_path = self.project_dir.join(path);
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to chmod: {}", file_path.display()))?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path); // The stub scripts need the shell utilities
        }
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// Command wired to the stub compiler and loader.
    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--compiler")
            .arg(self.project_dir.join("fake-tsc"))
            .arg("--loader")
            .arg(self.project_dir.join("fake-node"));
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
