// src/ui/message.rs

use informe_tecnico_lib::error::{AppError, UserMsgKind};

use super::egui;
use super::egui::{Color32, Ui};

#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
    }

    pub fn is_set(&self) -> bool {
        self.kind.is_some() && self.short.is_some()
    }

    pub fn set_success(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Success);
        self.short = Some(short.into());
    }

    pub fn set_warn(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Warn);
        self.short = Some(short.into());
    }

    pub fn set_info(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Info);
        self.short = Some(short.into());
    }

    pub fn set_error(&mut self, short: impl Into<String>) {
        self.kind = Some(UserMsgKind::Error);
        self.short = Some(short.into());
    }

    pub fn from_app_error(&mut self, err: &AppError, debug_ui: bool) {
        let msg = err.user_msg();

        // Debug builds surface the internal detail instead of the short.
        let text = if debug_ui {
            err.to_string()
        } else {
            msg.short.to_string()
        };

        self.kind = Some(msg.kind);
        self.short = Some(text);
    }

    pub fn show(&self, ui: &mut Ui) {
        if !self.is_set() {
            return;
        }

        let kind = self.kind.unwrap_or(UserMsgKind::Info);
        let short = self.short.as_deref().unwrap_or("");

        let (stroke, fill) = match kind {
            UserMsgKind::Success => (
                Color32::from_rgb(20, 200, 100),
                Color32::from_rgb(0, 70, 35),
            ),
            UserMsgKind::Warn => (
                Color32::from_rgb(250, 180, 20),
                Color32::from_rgb(80, 55, 0),
            ),
            UserMsgKind::Error => (
                Color32::from_rgb(240, 70, 70),
                Color32::from_rgb(80, 5, 5),
            ),
            UserMsgKind::Info => (
                Color32::from_rgb(90, 170, 250),
                Color32::from_rgb(12, 38, 72),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(8u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, short);
            });
    }
}
