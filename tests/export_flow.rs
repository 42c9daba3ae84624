// tests/export_flow.rs

use informe_tecnico_lib::command;
use informe_tecnico_lib::context::AppCtx;
use informe_tecnico_lib::error::AppError;
use informe_tecnico_lib::export_log::ExportOutcome;
use informe_tecnico_lib::form::{FormRecord, ImageData, Maintenance};
use informe_tecnico_lib::types::AppState;
use std::cell::Cell;

// 1x1 PNG, the usual transparent pixel.
const TINY_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn test_env() -> (tempfile::TempDir, AppState, AppCtx) {
    let td = tempfile::tempdir().expect("tempdir");
    let state = AppState::new_for_tests(td.path()).expect("init state");
    let ctx = AppCtx::new(td.path().to_path_buf());
    (td, state, ctx)
}

fn tiny_png() -> ImageData {
    ImageData {
        mime: "image/png".to_string(),
        base64: TINY_PNG_B64.to_string(),
    }
}

#[test]
fn submit_writes_the_pdf_to_the_fixed_path_and_shares_exactly_once() {
    let (_td, state, ctx) = test_env();

    let mut form = FormRecord::default();
    form.general.projects = Some("P1".to_string());
    form.intervention.maintenance = Some(Maintenance::Preventive);

    let shares = Cell::new(0usize);
    let path = command::submit_report_with(&form, &state, &ctx, |p| {
        shares.set(shares.get() + 1);
        assert!(p.exists(), "file must be persisted before the hand-off");
        Ok(())
    })
    .expect("submit");

    assert_eq!(shares.get(), 1);
    assert_eq!(path, ctx.pdf_path());

    let bytes = std::fs::read(&path).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));

    let log = state.export_log.lock().expect("log lock");
    let recent = log.recent();
    assert_eq!(recent.last().expect("event").outcome, ExportOutcome::Success);
}

#[test]
fn resubmission_overwrites_the_previous_file() {
    let (_td, state, ctx) = test_env();

    let mut form = FormRecord::default();
    form.general.projects = Some("P1".to_string());

    command::submit_report_with(&form, &state, &ctx, |_| Ok(())).expect("first submit");

    form.general.address = Some("Calle 1".to_string());
    command::submit_report_with(&form, &state, &ctx, |_| Ok(())).expect("second submit");

    let entries: Vec<_> = std::fs::read_dir(ctx.pdf_dir())
        .expect("read pdf dir")
        .collect();
    assert_eq!(entries.len(), 1, "static file name, no versioning");
}

#[test]
fn a_fully_populated_record_with_images_exports_cleanly() {
    let (_td, state, ctx) = test_env();

    let mut form = FormRecord::default();
    form.general.projects = Some("Subestación Norte".to_string());
    form.general.requested_by.business_name = Some("ACME S.A.".to_string());
    form.intervention.installation = Some(true);
    form.equipment.kind = Some("UPS".to_string());
    form.equipment.battery_bank.has_battery_bank = Some(true);

    let leg = form.transfer.push_departure_leg().expect("leg");
    leg.date = chrono::NaiveDate::from_ymd_opt(2024, 5, 10).and_then(|d| d.and_hms_opt(0, 0, 0));

    let day = form.execution.push_day().expect("day");
    day.technical_leader = Some("Ana Pérez".to_string());

    let photo = form.photos.push_photo();
    photo.name = Some("Tablero".to_string());
    photo.image = Some(tiny_png());

    form.validation.technical_leader.signature = Some(tiny_png());
    form.validation.technical_leader.name = Some("Ana Pérez".to_string());

    let path = command::submit_report_with(&form, &state, &ctx, |_| Ok(()))
        .expect("submit with images");
    assert!(path.exists());
}

#[test]
fn share_failure_surfaces_the_generic_message_and_is_logged() {
    let (_td, state, ctx) = test_env();

    let err = command::submit_report_with(&FormRecord::default(), &state, &ctx, |_| {
        Err(AppError::ShareFailed("handler exploded".to_string()))
    })
    .unwrap_err();

    assert!(matches!(err, AppError::ShareFailed(_)));
    assert_eq!(err.user_msg().short, "No se pudo generar el PDF.");

    let log = state.export_log.lock().expect("log lock");
    let recent = log.recent();
    assert_eq!(recent.last().expect("event").outcome, ExportOutcome::Failure);
}

#[test]
fn a_corrupt_image_payload_fails_the_export_but_not_the_process() {
    let (_td, state, ctx) = test_env();

    let mut form = FormRecord::default();
    form.validation.end_user.signature = Some(ImageData {
        mime: "image/png".to_string(),
        base64: "AAAA".to_string(), // decodes, but is not an image
    });

    let shares = Cell::new(0usize);
    let err = command::submit_report_with(&form, &state, &ctx, |_| {
        shares.set(shares.get() + 1);
        Ok(())
    })
    .unwrap_err();

    assert!(matches!(err, AppError::ImageDecode(_)));
    assert_eq!(shares.get(), 0, "share never runs after a failed render");
}

#[cfg(unix)]
#[test]
fn storage_permission_denial_aborts_before_rendering() {
    use std::os::unix::fs::PermissionsExt;

    let (_td, state, ctx) = test_env();
    let pdf_dir = ctx.pdf_dir();
    std::fs::create_dir_all(&pdf_dir).expect("mkdir");
    std::fs::set_permissions(&pdf_dir, std::fs::Permissions::from_mode(0o555)).expect("chmod");

    // Mode bits do not bind root; skip if the dir is still writable.
    if std::fs::write(pdf_dir.join(".probe"), b"").is_ok() {
        let _ = std::fs::remove_file(pdf_dir.join(".probe"));
        return;
    }

    let shares = Cell::new(0usize);
    let err = command::submit_report_with(&FormRecord::default(), &state, &ctx, |_| {
        shares.set(shares.get() + 1);
        Ok(())
    })
    .unwrap_err();

    assert!(matches!(err, AppError::StoragePermissionDenied(_)));
    assert_eq!(
        err.user_msg().short,
        "No se puede guardar el PDF sin permisos de almacenamiento."
    );
    assert_eq!(shares.get(), 0);
    assert!(!ctx.pdf_path().exists());

    let _ = std::fs::set_permissions(&pdf_dir, std::fs::Permissions::from_mode(0o755));
}
