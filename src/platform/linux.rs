// src/platform/linux.rs

use crate::error::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub(super) fn open_with_default_handler(path: &Path) -> AppResult<()> {
    Command::new("xdg-open")
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| AppError::ShareFailed(format!("xdg-open: {e}")))
}
