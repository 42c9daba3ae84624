// src/ui/form_panel.rs

use crate::ui::message::PanelMsgState;
use crate::ui::{
    panel_acceptance, panel_activities, panel_equipment, panel_execution, panel_general,
    panel_intervention, panel_measurement, panel_photos, panel_transfer, panel_validation,
};
use eframe::egui;
use informe_tecnico_lib::command;
use informe_tecnico_lib::context::{AppCtx, PDF_FILE_NAME};
use informe_tecnico_lib::form::{SectionId, WizardState, SECTION_COUNT};
use informe_tecnico_lib::types::AppState;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The "Formato TL" wizard screen: one section at a time, with
/// Anterior / Siguiente navigation and Enviar on the last section.
pub struct FormPanel {
    wizard: WizardState,
    msg: PanelMsgState,

    // Raw text buffers for HH:MM inputs that are edited as text.
    time_buf: BTreeMap<String, String>,

    last_export: Option<PathBuf>,
}

impl FormPanel {
    pub fn new() -> Self {
        Self {
            wizard: WizardState::new(),
            msg: PanelMsgState::default(),
            time_buf: BTreeMap::new(),
            last_export: None,
        }
    }

    pub fn reset_inputs(&mut self) {
        self.wizard = WizardState::new();
        self.time_buf.clear();
        self.last_export = None;
        self.msg.clear();
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx) {
        let section = self.wizard.current();

        ui.heading(section.title());
        ui.label(format!(
            "Sección {}/{}",
            self.wizard.section_index() + 1,
            SECTION_COUNT
        ));
        ui.add_space(6.0);

        self.msg.show(ui);
        if let Some(p) = &self.last_export {
            ui.label(
                egui::RichText::new(format!("Último PDF: {}", p.display()))
                    .small()
                    .weak(),
            );
        }
        ui.add_space(6.0);

        // Borrow-splitting: the section views take disjoint &mut fields.
        let wizard = &mut self.wizard;
        let msg = &mut self.msg;
        let time_buf = &mut self.time_buf;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_height(ui.available_height() - 48.0)
            .show(ui, |ui| match section {
                SectionId::General => panel_general::ui(ui, &mut wizard.form.general),
                SectionId::Intervention => {
                    panel_intervention::ui(ui, &mut wizard.form.intervention)
                }
                SectionId::Equipment => panel_equipment::ui(ui, &mut wizard.form.equipment),
                SectionId::Transfer => {
                    panel_transfer::ui(ui, msg, time_buf, &mut wizard.form.transfer)
                }
                SectionId::Execution => {
                    panel_execution::ui(ui, msg, time_buf, &mut wizard.form.execution)
                }
                SectionId::Measurement => panel_measurement::ui(ui, &mut wizard.form.measurement),
                SectionId::Acceptance => panel_acceptance::ui(ui, &mut wizard.form.acceptance),
                SectionId::Activities => panel_activities::ui(ui, &mut wizard.form.activities),
                SectionId::Photos => panel_photos::ui(ui, msg, &mut wizard.form.photos),
                SectionId::Validation => panel_validation::ui(ui, msg, &mut wizard.form.validation),
            });

        ui.add_space(8.0);
        self.controls(ui, state, ctx);
    }

    fn controls(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx) {
        ui.horizontal(|ui| {
            if !self.wizard.is_first() && ui.button("Anterior").clicked() {
                self.wizard.previous();
                self.msg.clear();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.wizard.can_submit() {
                    if ui.button("Enviar").clicked() {
                        self.submit(state, ctx);
                    }
                } else if ui.button("Siguiente").clicked() {
                    self.wizard.next();
                    self.msg.clear();
                }
            });
        });
    }

    fn submit(&mut self, state: &AppState, ctx: &AppCtx) {
        match command::submit_report(&self.wizard.form, state, ctx) {
            Ok(path) => {
                self.last_export = Some(path);
                self.msg.set_success(format!(
                    "PDF Generado ✅  Archivo guardado como: {PDF_FILE_NAME}"
                ));
            }
            Err(e) => self.msg.from_app_error(&e, ctx.debug_ui),
        }
    }
}
