//! Device bridge invocation.
//!
//! Everything that talks to a connected device goes through the
//! [`DeviceBridge`] trait so scan logic can be unit-tested without a device.
//! [`Adb`] is the real implementation backed by the `adb` executable;
//! [`locate_adb`] resolves which executable to run.

mod bridge;
mod locate;

pub use bridge::Adb;
pub use locate::locate_adb;

use anyhow::Result;

/// Captured output of one device-bridge invocation.
#[derive(Debug, Clone, Default)]
pub struct ShellOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ShellOutput {
    /// Stdout followed by stderr as one block of text.
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait DeviceBridge: Send + Sync {
    /// List user-installed packages (`shell pm list packages -3`).
    fn list_packages(&self) -> Result<ShellOutput>;

    /// Dump package-manager metadata for one package
    /// (`shell dumpsys package <package>`).
    fn dumpsys_package(&self, package: &str) -> Result<ShellOutput>;
}
