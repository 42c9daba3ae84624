// src/export_log.rs

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AppResult;

pub const LOG_FILE_NAME: &str = "export.log.jsonl";
pub const MAX_LOG_EVENTS: usize = 50;
pub const LOAD_TAIL_LINES: usize = 200;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExportOutcome {
    Success,
    Failure,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportEvent {
    pub id: u64,
    pub ts_ms: u64,
    pub outcome: ExportOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub msg: String,
}

/// Append-only JSONL record of submission attempts, with a bounded
/// in-memory ring for display. File IO is best-effort: logging never
/// fails an export.
pub struct ExportLog {
    path: PathBuf,
    buf: VecDeque<ExportEvent>,
    next_id: u64,
}

impl ExportLog {
    pub fn init(app_data_dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(app_data_dir)?;

        let mut log = Self {
            path: app_data_dir.join(LOG_FILE_NAME),
            buf: VecDeque::with_capacity(MAX_LOG_EVENTS),
            next_id: 1,
        };

        log.load_tail_best_effort();
        log.next_id = log.compute_next_id();

        Ok(log)
    }

    pub fn record(&mut self, outcome: ExportOutcome, path: Option<&Path>, msg: &str) {
        let ev = ExportEvent {
            id: self.alloc_id(),
            ts_ms: now_ms(),
            outcome,
            path: path.map(|p| p.display().to_string()),
            msg: msg.to_string(),
        };

        if self.buf.len() >= MAX_LOG_EVENTS {
            self.buf.pop_front();
        }
        self.buf.push_back(ev.clone());

        let _ = self.append_jsonl_best_effort(&ev);
    }

    pub fn recent(&self) -> Vec<ExportEvent> {
        self.buf.iter().cloned().collect()
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn compute_next_id(&self) -> u64 {
        self.buf
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    fn load_tail_best_effort(&mut self) {
        let Ok(file) = fs::File::open(&self.path) else {
            return;
        };

        let lines: Vec<String> = BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .collect();

        let start = lines.len().saturating_sub(LOAD_TAIL_LINES);
        for line in &lines[start..] {
            if let Ok(ev) = serde_json::from_str::<ExportEvent>(line) {
                if self.buf.len() >= MAX_LOG_EVENTS {
                    self.buf.pop_front();
                }
                self.buf.push_back(ev);
            }
        }
    }

    fn append_jsonl_best_effort(&self, ev: &ExportEvent) -> std::io::Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(ev).unwrap_or_default();
        writeln!(f, "{line}")
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_kept_in_order_with_increasing_ids() {
        let td = tempfile::tempdir().expect("tempdir");
        let mut log = ExportLog::init(td.path()).expect("init");

        log.record(ExportOutcome::Success, None, "first");
        log.record(ExportOutcome::Failure, None, "second");

        let recent = log.recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].msg, "first");
        assert_eq!(recent[1].msg, "second");
        assert!(recent[0].id < recent[1].id);
    }

    #[test]
    fn events_survive_reinit_from_disk() {
        let td = tempfile::tempdir().expect("tempdir");

        {
            let mut log = ExportLog::init(td.path()).expect("init");
            log.record(ExportOutcome::Success, Some(Path::new("/tmp/x.pdf")), "ok");
        }

        let log = ExportLog::init(td.path()).expect("reinit");
        let recent = log.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].outcome, ExportOutcome::Success);
        assert_eq!(recent[0].path.as_deref(), Some("/tmp/x.pdf"));
    }

    #[test]
    fn ring_is_bounded() {
        let td = tempfile::tempdir().expect("tempdir");
        let mut log = ExportLog::init(td.path()).expect("init");

        for i in 0..(MAX_LOG_EVENTS + 10) {
            log.record(ExportOutcome::Success, None, &format!("ev{i}"));
        }

        assert_eq!(log.recent().len(), MAX_LOG_EVENTS);
    }
}
