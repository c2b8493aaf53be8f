//! File system operations (read, write, existence checks).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_dir_impl(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_impl(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).context("Failed to read file")
    }

    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).context("Failed to write to file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_read_write_roundtrip() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        runtime.write(&path, b"hello").unwrap();
        assert!(runtime.exists(&path));
        assert!(!runtime.is_dir(&path));
        assert!(runtime.is_dir(dir.path()));
        assert_eq!(runtime.read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_real_runtime_read_missing_file() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        assert!(!runtime.exists(&path));
        assert!(runtime.read(&path).is_err());
    }
}
