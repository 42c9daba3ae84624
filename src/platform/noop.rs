// src/platform/noop.rs

use crate::error::AppResult;
use std::path::Path;

pub(super) fn open_with_default_handler(_path: &Path) -> AppResult<()> {
    Ok(())
}
