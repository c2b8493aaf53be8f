use anyhow::Result;
use log::debug;

use crate::adb::DeviceBridge;

/// Line prefix the package manager puts before every identifier.
const PACKAGE_PREFIX: &str = "package:";

/// List user-installed package identifiers on the connected device.
#[tracing::instrument(skip(bridge))]
pub fn list_packages<B: DeviceBridge>(bridge: &B) -> Result<Vec<String>> {
    let output = bridge.list_packages()?;
    let packages = parse_package_list(&output.stdout);
    debug!("Device reported {} user-installed package(s)", packages.len());
    Ok(packages)
}

/// Extract package identifiers from `pm list packages` output.
///
/// Each line of interest starts with `package:`; the identifier is the text
/// after the first colon, trimmed of surrounding whitespace (device output
/// may carry a CR).
pub fn parse_package_list(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| line.starts_with(PACKAGE_PREFIX))
        .filter_map(|line| line.split_once(':'))
        .map(|(_, id)| id.trim().to_string())
        .collect()
}
