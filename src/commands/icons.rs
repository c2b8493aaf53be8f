use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;

use crate::icons::{DENSITIES, LAUNCHER_ICON, LAUNCHER_ICON_ROUND, Scaler};
use crate::runtime::Runtime;

/// Render the launcher icon set into every density bucket present under the
/// resource directory.
///
/// The source image is decoded before any file is touched; a decode failure
/// writes nothing. Missing buckets are skipped with a warning. Each bucket
/// gets the square and the round icon from the same rendered buffer, so the
/// two files are byte-identical.
#[tracing::instrument(skip(runtime, source, res_dir))]
pub fn icons<R: Runtime>(runtime: &R, source: &Path, res_dir: &Path) -> Result<()> {
    if !runtime.exists(source) {
        anyhow::bail!("Source image not found at {:?}", source);
    }

    let bytes = runtime
        .read(source)
        .with_context(|| format!("Failed to read source image {:?}", source))?;
    let scaler = Scaler::from_bytes(&bytes)?;
    let (width, height) = scaler.dimensions();
    info!("Loaded source image {:?} ({}x{})", source, width, height);
    println!("     loaded {}", source.display());

    for &(bucket, size) in DENSITIES {
        let target_dir = res_dir.join(bucket);
        if !runtime.is_dir(&target_dir) {
            warn!("Directory {:?} does not exist, skipping", target_dir);
            eprintln!(
                "Warning: directory {:?} does not exist, skipping",
                target_dir
            );
            continue;
        }

        debug!("Rendering {}x{} icon for {}", size, size, bucket);
        let png = scaler.render_png(size)?;

        for name in [LAUNCHER_ICON, LAUNCHER_ICON_ROUND] {
            let target = target_dir.join(name);
            runtime
                .write(&target, &png)
                .with_context(|| format!("Failed to write {:?}", target))?;
            println!("      saved {}", target.display());
        }
    }

    Ok(())
}
