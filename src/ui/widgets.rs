// src/ui/widgets.rs

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use eframe::egui;
use std::collections::BTreeMap;
use std::path::Path;

/// Labeled single-line text input over an optional field. Empty text maps
/// back to "never touched" so the report skips the row entirely.
pub fn form_field(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) {
    ui.label(label);
    let mut buf = value.clone().unwrap_or_default();
    if ui.add(egui::TextEdit::singleline(&mut buf)).changed() {
        *value = if buf.is_empty() { None } else { Some(buf) };
    }
    ui.add_space(6.0);
}

pub fn form_field_multiline(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) {
    ui.label(label);
    let mut buf = value.clone().unwrap_or_default();
    if ui
        .add(egui::TextEdit::multiline(&mut buf).desired_rows(4))
        .changed()
    {
        *value = if buf.is_empty() { None } else { Some(buf) };
    }
    ui.add_space(6.0);
}

pub fn checkbox_field(ui: &mut egui::Ui, label: &str, value: &mut Option<bool>) {
    let mut v = value.unwrap_or(false);
    if ui.checkbox(&mut v, label).changed() {
        *value = Some(v);
    }
}

/// Horizontal radio group over an optional enum-ish value.
pub fn radio_row<T: PartialEq + Copy>(
    ui: &mut egui::Ui,
    label: &str,
    options: &[(T, &str)],
    value: &mut Option<T>,
) {
    ui.label(label);
    ui.horizontal(|ui| {
        for (opt, text) in options {
            if ui.radio(*value == Some(*opt), *text).clicked() {
                *value = Some(*opt);
            }
        }
    });
    ui.add_space(6.0);
}

/// Calendar picker bound to the date part of an optional date-time.
pub fn date_field(
    ui: &mut egui::Ui,
    id_salt: &str,
    label: &str,
    value: &mut Option<NaiveDateTime>,
) {
    ui.label(label);
    let mut d: NaiveDate = value
        .map(|dt| dt.date())
        .unwrap_or_else(|| Local::now().date_naive());

    let resp = ui.add(egui_extras::DatePickerButton::new(&mut d).id_salt(id_salt));
    if resp.changed() {
        if let Some(dt) = d.and_hms_opt(0, 0, 0) {
            *value = Some(dt);
        }
    }
    ui.add_space(6.0);
}

/// HH:MM text input combined with a date hint into a full date-time.
/// Keeps its own buffer so partially typed times are not lost mid-edit.
pub fn time_field(
    ui: &mut egui::Ui,
    buf: &mut BTreeMap<String, String>,
    buf_key: &str,
    label: &str,
    value: &mut Option<NaiveDateTime>,
    date_hint: Option<NaiveDateTime>,
) {
    ui.label(label);

    let entry = buf
        .entry(buf_key.to_string())
        .or_insert_with(|| value.map(|dt| dt.format("%H:%M").to_string()).unwrap_or_default());

    let resp = ui.add(
        egui::TextEdit::singleline(entry)
            .hint_text("HH:MM")
            .desired_width(70.0),
    );

    if resp.changed() {
        if let Ok(t) = NaiveTime::parse_from_str(entry.trim(), "%H:%M") {
            let date = date_hint
                .map(|dt| dt.date())
                .unwrap_or_else(|| Local::now().date_naive());
            *value = Some(NaiveDateTime::new(date, t));
        }
    }
    ui.add_space(6.0);
}

pub fn subtitle(ui: &mut egui::Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(egui::RichText::new(text).strong().size(16.0));
    ui.add_space(4.0);
}

pub fn image_mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/png",
    }
}

/// Native image picker; returns the file's bytes and MIME type.
pub fn pick_image_file() -> Option<(Vec<u8>, &'static str)> {
    let path = rfd::FileDialog::new()
        .add_filter("Imagen", &["png", "jpg", "jpeg"])
        .pick_file()?;

    let bytes = std::fs::read(&path).ok()?;
    Some((bytes, image_mime_for(&path)))
}
