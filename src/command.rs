// src/command.rs

use crate::context::AppCtx;
use crate::error::AppResult;
use crate::export::{ExportStyle, PdfExporter};
use crate::export_log::ExportOutcome;
use crate::form::FormRecord;
use crate::platform;
use crate::report;
use crate::types::AppState;
use std::path::{Path, PathBuf};

/// Submit the assembled record: storage check, then format, render,
/// persist, share — strictly in that order, each step gating the next.
/// The caller's wizard state is untouched on success or failure so the
/// user can retry from the same screen.
pub fn submit_report(form: &FormRecord, state: &AppState, ctx: &AppCtx) -> AppResult<PathBuf> {
    submit_report_with(form, state, ctx, platform::share_file)
}

/// Same flow with an injected share hand-off.
pub fn submit_report_with<F>(
    form: &FormRecord,
    state: &AppState,
    ctx: &AppCtx,
    share: F,
) -> AppResult<PathBuf>
where
    F: FnOnce(&Path) -> AppResult<()>,
{
    let res = submit_inner(form, state, ctx, share);

    match &res {
        Ok(path) => record_event(state, ExportOutcome::Success, Some(path.as_path()), "pdf exported"),
        Err(e) => record_event(state, ExportOutcome::Failure, None, &e.to_string()),
    }

    res
}

fn submit_inner<F>(form: &FormRecord, state: &AppState, ctx: &AppCtx, share: F) -> AppResult<PathBuf>
where
    F: FnOnce(&Path) -> AppResult<()>,
{
    platform::ensure_storage_access(&ctx.pdf_dir())?;

    let doc = report::format(form, &state.labels);

    let exporter = PdfExporter::new(ExportStyle::default());
    let path = ctx.pdf_path();
    exporter.write(&doc, &path)?;

    share(&path)?;

    Ok(path)
}

fn record_event(state: &AppState, outcome: ExportOutcome, path: Option<&Path>, msg: &str) {
    // Logging is best-effort; a poisoned lock must not fail the export.
    if let Ok(mut log) = state.export_log.lock() {
        log.record(outcome, path, msg);
    }
}
