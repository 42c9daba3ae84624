// src/ui/panel_protocol.rs

use eframe::egui;

/// Second entry route from the home screen. The protocol form shares the
/// structure of the intervention wizard and is not wired up yet.
pub struct ProtocolPanel;

impl ProtocolPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Protocolo");
        ui.add_space(8.0);
        ui.label("Protocolo de arranque y puesta en marcha.");
        ui.label("Disponible próximamente.");
    }
}
