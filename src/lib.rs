// src/lib.rs

pub mod command;
pub mod context;
pub mod error;
pub mod export;
pub mod export_log;
pub mod form;
pub mod platform;
pub mod report;
pub mod types;

use crate::error::AppResult;
use crate::export_log::ExportLog;
use crate::report::LabelTable;
use crate::types::AppState;
use std::path::Path;
use std::sync::Mutex;

pub fn init_state(app_data_dir: &Path) -> AppResult<AppState> {
    std::fs::create_dir_all(app_data_dir)?;

    let labels = LabelTable::builtin()?;
    let export_log = ExportLog::init(app_data_dir)?;

    Ok(AppState {
        labels,
        export_log: Mutex::new(export_log),
    })
}

impl AppState {
    pub fn new_for_tests(app_data_dir: &Path) -> AppResult<Self> {
        crate::init_state(app_data_dir)
    }
}
