use anyhow::Result;
use log::info;

use crate::adb::DeviceBridge;
use crate::package::{find_package_with_version, list_packages};

/// Scan user-installed packages for one whose metadata carries the given
/// version, reporting the first match.
#[tracing::instrument(skip(bridge))]
pub fn scan<B: DeviceBridge>(bridge: &B, version: &str) -> Result<()> {
    println!("     listing user-installed packages");
    let packages = list_packages(bridge)?;
    println!(
        "    scanning {} package(s) for versionName={}",
        packages.len(),
        version
    );

    match find_package_with_version(bridge, &packages, version)? {
        Some(package) => {
            info!("Match found: {}", package);
            println!("      match {}", package);
        }
        None => println!("   no match versionName={}", version),
    }

    Ok(())
}
