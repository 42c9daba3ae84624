// src/ui/panel_execution.rs

use crate::ui::message::PanelMsgState;
use crate::ui::widgets::{date_field, form_field, time_field};
use eframe::egui;
use informe_tecnico_lib::form::{ExecutionData, MAX_EXECUTION_DAYS};
use std::collections::BTreeMap;

pub fn ui(
    ui: &mut egui::Ui,
    msg: &mut PanelMsgState,
    time_buf: &mut BTreeMap<String, String>,
    data: &mut ExecutionData,
) {
    for (i, day) in data.days.iter_mut().enumerate() {
        let date_hint = day.date;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new(format!("Día {}", i + 1)).strong());
            ui.add_space(4.0);

            form_field(ui, "Día de la semana", &mut day.day_of_week);
            date_field(ui, &format!("dia_{i}_fecha"), "Fecha", &mut day.date);
            time_field(
                ui,
                time_buf,
                &format!("dia_{i}_inicio"),
                "Hora de inicio",
                &mut day.start_time,
                date_hint,
            );
            time_field(
                ui,
                time_buf,
                &format!("dia_{i}_fin"),
                "Hora de fin",
                &mut day.end_time,
                date_hint,
            );
            form_field(ui, "Número de Técnicos", &mut day.number_of_technicians);
            form_field(ui, "Líder Técnico", &mut day.technical_leader);
        });
        ui.add_space(6.0);
    }

    if data.days.len() < MAX_EXECUTION_DAYS && ui.button("+ Agregar Día").clicked() {
        if let Err(e) = data.push_day() {
            msg.from_app_error(&e, false);
        }
    }
}
