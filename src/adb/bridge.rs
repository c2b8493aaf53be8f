use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::PathBuf;
use std::process::Command;

use super::{DeviceBridge, ShellOutput};

/// Real device bridge backed by the `adb` executable.
#[derive(Debug, Clone)]
pub struct Adb {
    program: PathBuf,
}

impl Adb {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Run `<adb> shell <args...>` and capture its output.
    ///
    /// A non-zero exit status is not an error here: the tool prints
    /// diagnostics without exit-code discipline and callers only care about
    /// the captured text. A spawn failure (executable missing, permission
    /// denied) does propagate.
    #[tracing::instrument(skip(self))]
    fn shell(&self, args: &[&str]) -> Result<ShellOutput> {
        debug!("Running {:?} shell {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .arg("shell")
            .args(args)
            .output()
            .with_context(|| {
                format!(
                    "Failed to run device bridge {:?} shell {}",
                    self.program,
                    args.join(" ")
                )
            })?;

        if !output.status.success() {
            warn!(
                "{:?} shell {} exited with {}",
                self.program,
                args.join(" "),
                output.status
            );
        }

        Ok(ShellOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl DeviceBridge for Adb {
    fn list_packages(&self) -> Result<ShellOutput> {
        self.shell(&["pm", "list", "packages", "-3"])
    }

    fn dumpsys_package(&self, package: &str) -> Result<ShellOutput> {
        self.shell(&["dumpsys", "package", package])
    }
}
