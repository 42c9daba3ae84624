// src/ui/panel_photos.rs

use crate::ui::message::PanelMsgState;
use crate::ui::widgets::{form_field, pick_image_file};
use eframe::egui;
use informe_tecnico_lib::form::{ImageData, PhotographicRecordData};

pub fn ui(ui: &mut egui::Ui, msg: &mut PanelMsgState, data: &mut PhotographicRecordData) {
    for (i, photo) in data.photos.iter_mut().enumerate() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            form_field(ui, "Nombre de la foto", &mut photo.name);

            ui.horizontal(|ui| {
                if ui.button("Seleccionar").clicked() {
                    match pick_image_file() {
                        Some((bytes, mime)) => {
                            photo.image = Some(ImageData::from_bytes(mime, &bytes));
                            msg.clear();
                        }
                        None => msg.set_info("No se seleccionó ninguna imagen."),
                    }
                }

                match &photo.image {
                    Some(img) => ui.label(format!(
                        "Imagen cargada ({} KB)",
                        img.base64.len() * 3 / 4 / 1024
                    )),
                    None => ui.label("Sin imagen"),
                };
            });

            ui.label(
                egui::RichText::new(format!("Foto {}", i + 1))
                    .small()
                    .weak(),
            );
        });
        ui.add_space(6.0);
    }

    if ui.button("+ Agregar Foto").clicked() {
        data.push_photo();
    }
}
