// src/ui/panel_transfer.rs

use crate::ui::message::PanelMsgState;
use crate::ui::widgets::{date_field, subtitle, time_field};
use eframe::egui;
use informe_tecnico_lib::form::{TransferData, TransferLeg, MAX_TRANSFER_LEGS};
use std::collections::BTreeMap;

pub fn ui(
    ui: &mut egui::Ui,
    msg: &mut PanelMsgState,
    time_buf: &mut BTreeMap<String, String>,
    data: &mut TransferData,
) {
    subtitle(ui, "Ida");
    leg_rows(ui, time_buf, "ida", &mut data.departure);
    if data.departure.len() < MAX_TRANSFER_LEGS && ui.button("+ Agregar Fecha de Ida").clicked() {
        if let Err(e) = data.push_departure_leg() {
            msg.from_app_error(&e, false);
        }
    }

    subtitle(ui, "Llegada");
    leg_rows(ui, time_buf, "llegada", &mut data.return_trip);
    if data.return_trip.len() < MAX_TRANSFER_LEGS && ui.button("+ Agregar Fecha de Llegada").clicked()
    {
        if let Err(e) = data.push_return_leg() {
            msg.from_app_error(&e, false);
        }
    }
}

fn leg_rows(
    ui: &mut egui::Ui,
    time_buf: &mut BTreeMap<String, String>,
    salt: &str,
    legs: &mut [TransferLeg],
) {
    for (i, leg) in legs.iter_mut().enumerate() {
        let date_hint = leg.date;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            date_field(ui, &format!("{salt}_{i}_fecha"), "Fecha", &mut leg.date);
            time_field(
                ui,
                time_buf,
                &format!("{salt}_{i}_salida"),
                "Hora de salida",
                &mut leg.departure_time,
                date_hint,
            );
            time_field(
                ui,
                time_buf,
                &format!("{salt}_{i}_llegada"),
                "Hora de llegada",
                &mut leg.arrival_time,
                date_hint,
            );
        });
        ui.add_space(6.0);
    }
}
