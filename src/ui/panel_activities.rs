// src/ui/panel_activities.rs

use crate::ui::widgets::form_field_multiline;
use eframe::egui;
use informe_tecnico_lib::form::ActivitiesDescriptionData;

pub fn ui(ui: &mut egui::Ui, data: &mut ActivitiesDescriptionData) {
    form_field_multiline(ui, "Comentarios", &mut data.comments);
}
