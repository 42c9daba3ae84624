// src/ui/panel_validation.rs

use crate::ui::message::PanelMsgState;
use crate::ui::widgets::{form_field, pick_image_file, subtitle};
use eframe::egui;
use informe_tecnico_lib::form::{ImageData, SignatureBlock, ValidationData};

pub fn ui(ui: &mut egui::Ui, msg: &mut PanelMsgState, data: &mut ValidationData) {
    subtitle(ui, "Firma Líder Técnico");
    signer_fields(ui, msg, &mut data.technical_leader);

    subtitle(ui, "Firma Usuario Final");
    signer_fields(ui, msg, &mut data.end_user);
}

fn signer_fields(ui: &mut egui::Ui, msg: &mut PanelMsgState, block: &mut SignatureBlock) {
    ui.horizontal(|ui| {
        if ui.button("Firmar").clicked() {
            match pick_image_file() {
                Some((bytes, mime)) => {
                    block.signature = Some(ImageData::from_bytes(mime, &bytes));
                    msg.clear();
                }
                None => msg.set_info("No se seleccionó ninguna firma."),
            }
        }

        match &block.signature {
            Some(_) => ui.label("Firma cargada"),
            None => ui.label("Sin firma"),
        };
    });
    ui.add_space(6.0);

    form_field(ui, "Nombre", &mut block.name);
    form_field(ui, "Cédula", &mut block.id);
}
