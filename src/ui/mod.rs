// src/ui/mod.rs

pub mod form_panel;
pub mod message;
pub mod widgets;

pub mod panel_acceptance;
pub mod panel_activities;
pub mod panel_equipment;
pub mod panel_execution;
pub mod panel_general;
pub mod panel_intervention;
pub mod panel_measurement;
pub mod panel_photos;
pub mod panel_protocol;
pub mod panel_transfer;
pub mod panel_validation;

use eframe::egui;
use std::sync::Arc;

use form_panel::FormPanel;
use informe_tecnico_lib::context::AppCtx;
use informe_tecnico_lib::types::AppState;
use panel_protocol::ProtocolPanel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    FormatoTl,
    Protocol,
}

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,

    route: Route,

    form: FormPanel,
    protocol: ProtocolPanel,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>) -> Self {
        Self {
            state,
            ctx,
            route: Route::Home,
            form: FormPanel::new(),
            protocol: ProtocolPanel::new(),
        }
    }

    fn ui_home(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);

            let button = |text: &str| {
                egui::Button::new(egui::RichText::new(text).size(18.0).strong())
                    .min_size(egui::vec2(260.0, 44.0))
            };

            if ui.add(button("Formato TL")).clicked() {
                self.route = Route::FormatoTl;
            }
            ui.add_space(10.0);
            if ui.add(button("Protocolo")).clicked() {
                self.route = Route::Protocol;
            }
        });
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.route != Route::Home && ui.button("← Inicio").clicked() {
                    self.route = Route::Home;
                    self.form.clear_messages();
                }
                if self.route == Route::FormatoTl && ui.button("Nuevo").clicked() {
                    self.form.reset_inputs();
                }
                ui.label(egui::RichText::new("Informe Técnico").strong());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::Home => self.ui_home(ui),
            Route::FormatoTl => {
                self.form.ui(ui, self.state.as_ref(), self.ctx.as_ref());
            }
            Route::Protocol => self.protocol.ui(ui),
        });
    }
}
