// src/platform/mod.rs

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod noop;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as imp;
#[cfg(target_os = "macos")]
use macos as imp;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use noop as imp;
#[cfg(target_os = "windows")]
use windows as imp;

use crate::error::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::Path;

/// Check that the export directory can be created and written to.
/// The desktop stand-in for the mobile storage-permission request:
/// denial aborts the export before anything is rendered.
pub fn ensure_storage_access(dir: &Path) -> AppResult<()> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(AppError::StoragePermissionDenied(dir.display().to_string()))
        }
        Err(e) => return Err(AppError::Io(e)),
    }

    // The directory may exist but be read-only.
    let probe = dir.join(".write-probe");
    match std::fs::write(&probe, b"") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(AppError::StoragePermissionDenied(dir.display().to_string()))
        }
        Err(e) => Err(AppError::Io(e)),
    }
}

/// Hand the generated file to the OS default handler — the desktop analog
/// of the mobile share sheet.
pub fn share_file(path: &Path) -> AppResult<()> {
    imp::open_with_default_handler(path)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_storage_access_creates_missing_dirs() {
        let td = tempfile::tempdir().expect("tempdir");
        let dir = td.path().join("a").join("b");

        ensure_storage_access(&dir).expect("storage access");
        assert!(dir.is_dir());
        assert!(!dir.join(".write-probe").exists());
    }

    #[test]
    fn ensure_storage_access_fails_when_a_file_blocks_the_dir() {
        let td = tempfile::tempdir().expect("tempdir");
        let blocker = td.path().join("PDFs");
        std::fs::write(&blocker, b"not a dir").expect("write blocker");

        assert!(ensure_storage_access(&blocker).is_err());
    }
}
