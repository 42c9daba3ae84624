// src/ui/panel_intervention.rs

use crate::ui::widgets::{checkbox_field, form_field, radio_row, subtitle};
use eframe::egui;
use informe_tecnico_lib::form::{Maintenance, TechnicalInterventionData};

pub fn ui(ui: &mut egui::Ui, data: &mut TechnicalInterventionData) {
    checkbox_field(ui, "Arranque y puesta en marcha", &mut data.arrangement_and_startup);
    checkbox_field(ui, "Inspección en sitio", &mut data.on_site_inspection);
    checkbox_field(ui, "Asistencia en sitio", &mut data.on_site_assistance);
    checkbox_field(ui, "Instalación", &mut data.installation);
    checkbox_field(ui, "Prueba Autonomía Baterías", &mut data.battery_autonomy_test);
    checkbox_field(ui, "Prueba capacidad Baterías", &mut data.battery_capacity_test);
    checkbox_field(ui, "Asistencia telefónica", &mut data.phone_assistance);

    subtitle(ui, "Mantenimiento");
    radio_row(
        ui,
        "",
        &[
            (Maintenance::Preventive, "Preventivo"),
            (Maintenance::Corrective, "Correctivo"),
        ],
        &mut data.maintenance,
    );

    form_field(ui, "Otro", &mut data.other);
}
