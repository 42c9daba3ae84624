// src/types.rs

use crate::export_log::ExportLog;
use crate::report::LabelTable;
use std::sync::Mutex;

pub struct AppState {
    pub labels: LabelTable,
    pub export_log: Mutex<ExportLog>,
}
