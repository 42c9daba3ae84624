// src/report/format.rs

use crate::form::model::FormRecord;
use crate::form::value::FieldValue;
use crate::form::wizard::SectionId;
use crate::report::document::{
    CellContent, Fragment, ReportDocument, RowEntry, SectionBlock, REPORT_HEADER, REPORT_TITLE,
};
use crate::report::labels::LabelTable;
use chrono::NaiveDateTime;

/// Walk the assembled record and produce the renderable document: fixed
/// header, one table per section in wizard order, label column translated
/// through the table, values formatted by type.
///
/// Pure and deterministic: the same snapshot always yields the same
/// document.
pub fn format(form: &FormRecord, labels: &LabelTable) -> ReportDocument {
    let sections = SectionId::ALL
        .iter()
        .map(|id| SectionBlock {
            title: id.title().to_string(),
            rows: section_rows(form, *id, labels),
        })
        .collect();

    ReportDocument {
        header: REPORT_HEADER.to_string(),
        title: REPORT_TITLE.to_string(),
        sections,
    }
}

fn section_rows(form: &FormRecord, id: SectionId, labels: &LabelTable) -> Vec<RowEntry> {
    match id {
        SectionId::General => entry_rows(form.general.entries(), labels),
        SectionId::Intervention => entry_rows(form.intervention.entries(), labels),
        SectionId::Equipment => entry_rows(form.equipment.entries(), labels),
        SectionId::Transfer => entry_rows(form.transfer.entries(), labels),
        SectionId::Execution => list_rows(form.execution.items(), labels),
        SectionId::Measurement => entry_rows(form.measurement.entries(), labels),
        SectionId::Acceptance => entry_rows(form.acceptance.entries(), labels),
        SectionId::Activities => entry_rows(form.activities.entries(), labels),
        SectionId::Photos => list_rows(form.photos.items(), labels),
        SectionId::Validation => entry_rows(form.validation.entries(), labels),
    }
}

fn entry_rows(entries: Vec<(&'static str, FieldValue)>, labels: &LabelTable) -> Vec<RowEntry> {
    entries
        .into_iter()
        .map(|(key, value)| RowEntry {
            label: labels.translate(key).to_string(),
            content: format_value(key, &value, labels),
        })
        .collect()
}

/// Sections whose sub-record is an ordered list get one row per element,
/// labeled with the 1-based position.
fn list_rows(items: Vec<FieldValue>, labels: &LabelTable) -> Vec<RowEntry> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| RowEntry {
            label: (i + 1).to_string(),
            content: format_value("", item, labels),
        })
        .collect()
}

/// Format a single value under its field key. The key drives the date and
/// image classification; the tagged union keeps the dispatch exhaustive.
pub fn format_value(key: &str, value: &FieldValue, labels: &LabelTable) -> CellContent {
    let mut fragments = Vec::new();
    push_value(key, value, labels, &mut fragments);
    CellContent { fragments }
}

fn push_value(key: &str, value: &FieldValue, labels: &LabelTable, out: &mut Vec<Fragment>) {
    match value {
        FieldValue::Missing => out.push(Fragment::Text(String::new())),
        FieldValue::Text(s) => out.push(Fragment::Text(s.clone())),
        FieldValue::Flag(b) => out.push(Fragment::Text(flag_text(*b).to_string())),
        FieldValue::Moment(dt) => out.push(Fragment::Text(moment_text(key, dt))),
        FieldValue::Image(img) => out.push(Fragment::Image(img.clone())),

        FieldValue::Group(entries) => {
            for (k, sub) in entries {
                match sub {
                    FieldValue::Image(img) => {
                        out.push(Fragment::Text(format!("{}:", labels.translate(k))));
                        out.push(Fragment::Image(img.clone()));
                    }
                    FieldValue::Group(_) | FieldValue::List(_) => {
                        out.push(Fragment::Text(format!("{}:", labels.translate(k))));
                        push_value(k, sub, labels, out);
                    }
                    scalar => out.push(Fragment::Text(format!(
                        "{}: {}",
                        labels.translate(k),
                        scalar_text(k, scalar)
                    ))),
                }
            }
        }

        FieldValue::List(items) => {
            for (i, item) in items.iter().enumerate() {
                match item {
                    FieldValue::Group(_) => push_value(key, item, labels, out),
                    FieldValue::Image(img) => {
                        out.push(Fragment::Text(format!("{}:", i + 1)));
                        out.push(Fragment::Image(img.clone()));
                    }
                    scalar => {
                        out.push(Fragment::Text(format!("{}: {}", i + 1, scalar_text(key, scalar))))
                    }
                }
            }
        }
    }
}

fn scalar_text(key: &str, value: &FieldValue) -> String {
    match value {
        FieldValue::Missing => String::new(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::Flag(b) => flag_text(*b).to_string(),
        FieldValue::Moment(dt) => moment_text(key, dt),
        // Non-scalars are routed elsewhere by the callers.
        FieldValue::Image(_) | FieldValue::Group(_) | FieldValue::List(_) => String::new(),
    }
}

fn flag_text(b: bool) -> &'static str {
    if b {
        "Sí"
    } else {
        "No"
    }
}

/// `date` keys render as `DD/MM/YYYY`; the time-role keys (departureTime,
/// arrivalTime, startTime, endTime — and any other key that happens to hold
/// a date-like value) carry the time-of-day.
fn moment_text(key: &str, dt: &NaiveDateTime) -> String {
    if key == "date" {
        dt.format("%d/%m/%Y").to_string()
    } else {
        dt.format("%d/%m/%Y %H:%M:%S").to_string()
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::value::ImageData;
    use chrono::NaiveDate;

    fn labels() -> LabelTable {
        LabelTable::builtin().expect("builtin labels")
    }

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .expect("valid date")
            .and_hms_opt(h, mi, s)
            .expect("valid time")
    }

    #[test]
    fn flags_render_si_and_no() {
        let l = labels();
        assert_eq!(format_value("x", &FieldValue::Flag(true), &l).text(), "Sí");
        assert_eq!(format_value("x", &FieldValue::Flag(false), &l).text(), "No");
    }

    #[test]
    fn date_key_renders_date_only_zero_padded() {
        let l = labels();
        let v = FieldValue::Moment(dt(2024, 3, 5, 8, 7, 9));
        assert_eq!(format_value("date", &v, &l).text(), "05/03/2024");
    }

    #[test]
    fn time_role_keys_render_full_timestamp() {
        let l = labels();
        let v = FieldValue::Moment(dt(2024, 3, 5, 8, 7, 9));
        for key in ["departureTime", "arrivalTime", "startTime", "endTime"] {
            assert_eq!(format_value(key, &v, &l).text(), "05/03/2024 08:07:09");
        }
    }

    #[test]
    fn group_renders_translated_label_lines_in_order() {
        let l = labels();
        let v = FieldValue::Group(vec![
            ("phone", FieldValue::Text("555".to_string())),
            ("contact", FieldValue::Text("Ana".to_string())),
        ]);
        assert_eq!(format_value("requestedBy", &v, &l).text(), "Teléfono: 555\nContacto: Ana");
    }

    #[test]
    fn list_of_groups_concatenates_elements() {
        let l = labels();
        let v = FieldValue::List(vec![
            FieldValue::Group(vec![("date", FieldValue::Moment(dt(2024, 1, 2, 0, 0, 0)))]),
            FieldValue::Group(vec![(
                "departureTime",
                FieldValue::Moment(dt(2024, 1, 2, 6, 30, 0)),
            )]),
        ]);
        assert_eq!(
            format_value("departure", &v, &l).text(),
            "Fecha: 02/01/2024\nHora de salida: 02/01/2024 06:30:00"
        );
    }

    #[test]
    fn list_scalars_render_one_based_index_prefix() {
        let l = labels();
        let v = FieldValue::List(vec![
            FieldValue::Text("uno".to_string()),
            FieldValue::Text("dos".to_string()),
        ]);
        assert_eq!(format_value("x", &v, &l).text(), "1: uno\n2: dos");
    }

    #[test]
    fn image_in_group_emits_label_line_then_image_fragment() {
        let l = labels();
        let img = ImageData::from_bytes("image/png", b"fake");
        let v = FieldValue::Group(vec![
            ("signature", FieldValue::Image(img.clone())),
            ("name", FieldValue::Text("Ana".to_string())),
        ]);

        let cell = format_value("technicalLeader", &v, &l);
        assert_eq!(cell.fragments.len(), 3);
        assert_eq!(cell.fragments[0], Fragment::Text("Firma:".to_string()));
        assert_eq!(cell.fragments[1], Fragment::Image(img));
        assert_eq!(cell.fragments[2], Fragment::Text("Nombre: Ana".to_string()));
    }

    #[test]
    fn missing_renders_empty() {
        let l = labels();
        assert_eq!(format_value("x", &FieldValue::Missing, &l).text(), "");
    }

    #[test]
    fn untranslated_keys_pass_through_in_group_lines() {
        let l = labels();
        let v = FieldValue::Group(vec![("mysteryKey", FieldValue::Text("v".to_string()))]);
        assert_eq!(format_value("g", &v, &l).text(), "mysteryKey: v");
    }

    #[test]
    fn empty_form_yields_all_sections_with_no_rows() {
        let l = labels();
        let doc = format(&FormRecord::default(), &l);
        assert_eq!(doc.header, REPORT_HEADER);
        assert_eq!(doc.title, REPORT_TITLE);
        assert_eq!(doc.sections.len(), SectionId::ALL.len());
        for s in &doc.sections {
            assert!(s.rows.is_empty(), "section '{}' should be empty", s.title);
        }
    }
}
