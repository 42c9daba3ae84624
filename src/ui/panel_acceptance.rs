// src/ui/panel_acceptance.rs

use crate::ui::widgets::{checkbox_field, form_field_multiline};
use eframe::egui;
use informe_tecnico_lib::form::AcceptanceAndConformityData;

pub fn ui(ui: &mut egui::Ui, data: &mut AcceptanceAndConformityData) {
    checkbox_field(
        ui,
        "Intervención técnica conforme",
        &mut data.technical_intervention_conform,
    );
    ui.add_space(6.0);
    form_field_multiline(ui, "Comentarios", &mut data.comments);
}
