// src/platform/windows.rs

use crate::error::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub(super) fn open_with_default_handler(path: &Path) -> AppResult<()> {
    // `start` is a cmd builtin; the empty string is the window title slot.
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| AppError::ShareFailed(format!("start: {e}")))
}
