// src/ui/panel_equipment.rs

use crate::ui::widgets::{form_field, radio_row, subtitle};
use eframe::egui;
use informe_tecnico_lib::form::{CurrentKind, EquipmentData};

const AC_DC: [(CurrentKind, &str); 2] = [(CurrentKind::Ac, "AC"), (CurrentKind::Dc, "DC")];

pub fn ui(ui: &mut egui::Ui, data: &mut EquipmentData) {
    form_field(ui, "Tipo", &mut data.kind);
    form_field(ui, "Modelo", &mut data.model);
    form_field(ui, "Serial", &mut data.serial);

    subtitle(ui, "Entrada");
    radio_row(ui, "Tipo", &AC_DC, &mut data.input.kind);
    form_field(ui, "Nº Fases", &mut data.input.phases);
    form_field(ui, "Corriente (A)", &mut data.input.current);

    subtitle(ui, "Salida");
    radio_row(ui, "Tipo", &AC_DC, &mut data.output.kind);
    form_field(ui, "Corriente (A) / Potencia (RVA)", &mut data.output.current_or_power);
    form_field(ui, "Frecuencia (HZ)", &mut data.output.frequency);

    subtitle(ui, "Banco de Baterías");
    radio_row(
        ui,
        "Tiene Banco de Baterías",
        &[(true, "Sí"), (false, "No")],
        &mut data.battery_bank.has_battery_bank,
    );
    form_field(ui, "Nº de Bancos", &mut data.battery_bank.number_of_banks);
    form_field(ui, "Marca", &mut data.battery_bank.brand);
    form_field(ui, "Modelo", &mut data.battery_bank.model);
    form_field(ui, "Capacidad (A/H)", &mut data.battery_bank.capacity);
    form_field(ui, "Nº de Celdas", &mut data.battery_bank.number_of_cells);
}
