// src/ui/panel_general.rs

use crate::ui::widgets::{form_field, subtitle};
use eframe::egui;
use informe_tecnico_lib::form::{ContactInfo, GeneralData};

pub fn ui(ui: &mut egui::Ui, data: &mut GeneralData) {
    form_field(ui, "Proyecto", &mut data.projects);
    form_field(ui, "Orden de compra", &mut data.purchase_order);
    form_field(ui, "Dirección", &mut data.address);

    subtitle(ui, "Solicitado por");
    contact_fields(ui, &mut data.requested_by);

    subtitle(ui, "Usuario final");
    contact_fields(ui, &mut data.end_user);
}

fn contact_fields(ui: &mut egui::Ui, c: &mut ContactInfo) {
    form_field(ui, "Razón Social", &mut c.business_name);
    form_field(ui, "Contacto", &mut c.contact);
    form_field(ui, "Teléfono", &mut c.phone);
    form_field(ui, "e-mail", &mut c.email);
}
