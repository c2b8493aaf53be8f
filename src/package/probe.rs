use anyhow::Result;
use log::debug;

use crate::adb::DeviceBridge;

/// Check whether a package's metadata carries the given version.
///
/// A literal substring test for `versionName=<version>` against the combined
/// output text of `dumpsys package`.
#[tracing::instrument(skip(bridge))]
pub fn matches_version<B: DeviceBridge>(bridge: &B, package: &str, version: &str) -> Result<bool> {
    let needle = format!("versionName={version}");
    let output = bridge.dumpsys_package(package)?;
    Ok(output.combined().contains(&needle))
}

/// Probe packages in the given order and return the first one whose metadata
/// matches the version, or `None` after a complete scan.
///
/// Packages after the first match are not probed.
#[tracing::instrument(skip(bridge, packages))]
pub fn find_package_with_version<B: DeviceBridge>(
    bridge: &B,
    packages: &[String],
    version: &str,
) -> Result<Option<String>> {
    for package in packages {
        debug!("Probing {}", package);
        if matches_version(bridge, package, version)? {
            return Ok(Some(package.clone()));
        }
    }
    Ok(None)
}
