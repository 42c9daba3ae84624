// src/ui/panel_measurement.rs

use crate::ui::widgets::{checkbox_field, form_field, subtitle};
use eframe::egui;
use informe_tecnico_lib::form::MeasurementAndEnvironmentData;

pub fn ui(ui: &mut egui::Ui, data: &mut MeasurementAndEnvironmentData) {
    subtitle(ui, "Instrumentos de Medición");
    checkbox_field(ui, "Multímetro Digital", &mut data.digital_multimeter);
    checkbox_field(ui, "Pinza Amperimétrica", &mut data.clamp_meter);
    checkbox_field(ui, "Probador de Baterías", &mut data.battery_tester);
    checkbox_field(ui, "Torquímetro", &mut data.torque_wrench);
    checkbox_field(ui, "Medidor de Temperatura", &mut data.temperature_meter);
    form_field(ui, "Otros", &mut data.other_instruments);

    subtitle(ui, "Ambiente de Operación");
    form_field(ui, "Temperatura Ambiente (°C)", &mut data.ambient_temperature);
    form_field(ui, "Humedad Relativa (%)", &mut data.relative_humidity);
    checkbox_field(ui, "Presencia de Polvo Excesivo", &mut data.excessive_dust);
}
