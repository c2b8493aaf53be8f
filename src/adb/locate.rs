use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

#[cfg(windows)]
const ADB_EXE: &str = "adb.exe";
#[cfg(not(windows))]
const ADB_EXE: &str = "adb";

/// Resolve the device bridge executable path.
///
/// Resolution order: explicit override (flag or ADB environment variable,
/// both handled by the CLI layer), `$ANDROID_HOME` / `$ANDROID_SDK_ROOT`
/// platform-tools, the default SDK location under the home directory, then
/// plain `adb` deferring to `PATH`.
#[tracing::instrument(skip(runtime, explicit))]
pub fn locate_adb<R: Runtime>(runtime: &R, explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        debug!("Using explicit device bridge path {:?}", path);
        return path;
    }

    for var in ["ANDROID_HOME", "ANDROID_SDK_ROOT"] {
        if let Ok(sdk) = runtime.env_var(var) {
            let candidate = PathBuf::from(sdk).join("platform-tools").join(ADB_EXE);
            if runtime.exists(&candidate) {
                debug!("Using adb from {}: {:?}", var, candidate);
                return candidate;
            }
        }
    }

    if let Some(home) = runtime.home_dir() {
        let candidate = home
            .join("Android")
            .join("Sdk")
            .join("platform-tools")
            .join(ADB_EXE);
        if runtime.exists(&candidate) {
            debug!("Using adb from default SDK location: {:?}", candidate);
            return candidate;
        }
    }

    debug!("Falling back to adb on PATH");
    PathBuf::from(ADB_EXE)
}
