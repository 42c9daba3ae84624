// src/form/model.rs

use crate::error::{AppError, AppResult};
use crate::form::value::{FieldValue, ImageData};
use chrono::NaiveDateTime;

pub const MAX_TRANSFER_LEGS: usize = 3;
pub const MAX_EXECUTION_DAYS: usize = 7;

/// Entry keys are the report-facing field identifiers; the label table and
/// the formatter's date/image classification both key off them. A field that
/// was never touched stays `None` and produces no entry at all.
fn push_text(out: &mut Vec<(&'static str, FieldValue)>, key: &'static str, v: &Option<String>) {
    if let Some(s) = v {
        out.push((key, FieldValue::Text(s.clone())));
    }
}

fn push_flag(out: &mut Vec<(&'static str, FieldValue)>, key: &'static str, v: &Option<bool>) {
    if let Some(b) = v {
        out.push((key, FieldValue::Flag(*b)));
    }
}

fn push_moment(
    out: &mut Vec<(&'static str, FieldValue)>,
    key: &'static str,
    v: &Option<NaiveDateTime>,
) {
    if let Some(dt) = v {
        out.push((key, FieldValue::Moment(*dt)));
    }
}

fn push_image(out: &mut Vec<(&'static str, FieldValue)>, key: &'static str, v: &Option<ImageData>) {
    if let Some(img) = v {
        out.push((key, FieldValue::Image(img.clone())));
    }
}

// --------------------------------------------------
// Datos Generales
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub business_name: Option<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.business_name.is_none()
            && self.contact.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }

    fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_text(&mut out, "businessName", &self.business_name);
        push_text(&mut out, "contact", &self.contact);
        push_text(&mut out, "phone", &self.phone);
        push_text(&mut out, "email", &self.email);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneralData {
    pub projects: Option<String>,
    pub purchase_order: Option<String>,
    pub address: Option<String>,
    pub requested_by: ContactInfo,
    pub end_user: ContactInfo,
}

impl GeneralData {
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_text(&mut out, "projects", &self.projects);
        push_text(&mut out, "purchaseOrder", &self.purchase_order);
        push_text(&mut out, "address", &self.address);
        if !self.requested_by.is_empty() {
            out.push(("requestedBy", FieldValue::Group(self.requested_by.entries())));
        }
        if !self.end_user.is_empty() {
            out.push(("endUser", FieldValue::Group(self.end_user.entries())));
        }
        out
    }
}

// --------------------------------------------------
// Intervención Técnica
// --------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maintenance {
    Preventive,
    Corrective,
}

impl Maintenance {
    pub fn as_str(self) -> &'static str {
        match self {
            Maintenance::Preventive => "preventivo",
            Maintenance::Corrective => "correctivo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnicalInterventionData {
    pub arrangement_and_startup: Option<bool>,
    pub maintenance: Option<Maintenance>,
    pub on_site_inspection: Option<bool>,
    pub on_site_assistance: Option<bool>,
    pub installation: Option<bool>,
    pub battery_autonomy_test: Option<bool>,
    pub battery_capacity_test: Option<bool>,
    pub phone_assistance: Option<bool>,
    pub other: Option<String>,
}

impl TechnicalInterventionData {
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_flag(&mut out, "arrangementAndStartup", &self.arrangement_and_startup);
        if let Some(m) = self.maintenance {
            out.push(("maintenance", FieldValue::Text(m.as_str().to_string())));
        }
        push_flag(&mut out, "onSiteInspection", &self.on_site_inspection);
        push_flag(&mut out, "onSiteAssistance", &self.on_site_assistance);
        push_flag(&mut out, "installation", &self.installation);
        push_flag(&mut out, "batteryAutonomyTest", &self.battery_autonomy_test);
        push_flag(&mut out, "batteryCapacityTest", &self.battery_capacity_test);
        push_flag(&mut out, "phoneAssistance", &self.phone_assistance);
        push_text(&mut out, "other", &self.other);
        out
    }
}

// --------------------------------------------------
// Datos del Equipo
// --------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentKind {
    Ac,
    Dc,
}

impl CurrentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CurrentKind::Ac => "AC",
            CurrentKind::Dc => "DC",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentInput {
    pub kind: Option<CurrentKind>,
    pub phases: Option<String>,
    pub current: Option<String>,
}

impl EquipmentInput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.phases.is_none() && self.current.is_none()
    }

    fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        if let Some(k) = self.kind {
            out.push(("type", FieldValue::Text(k.as_str().to_string())));
        }
        push_text(&mut out, "phases", &self.phases);
        push_text(&mut out, "current", &self.current);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentOutput {
    pub kind: Option<CurrentKind>,
    pub current_or_power: Option<String>,
    pub frequency: Option<String>,
}

impl EquipmentOutput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.current_or_power.is_none() && self.frequency.is_none()
    }

    fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        if let Some(k) = self.kind {
            out.push(("type", FieldValue::Text(k.as_str().to_string())));
        }
        push_text(&mut out, "currentOrPower", &self.current_or_power);
        push_text(&mut out, "frequency", &self.frequency);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatteryBank {
    pub has_battery_bank: Option<bool>,
    pub number_of_banks: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub capacity: Option<String>,
    pub number_of_cells: Option<String>,
}

impl BatteryBank {
    pub fn is_empty(&self) -> bool {
        self.has_battery_bank.is_none()
            && self.number_of_banks.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.capacity.is_none()
            && self.number_of_cells.is_none()
    }

    fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_flag(&mut out, "hasBatteryBank", &self.has_battery_bank);
        push_text(&mut out, "numberOfBanks", &self.number_of_banks);
        push_text(&mut out, "brand", &self.brand);
        push_text(&mut out, "model", &self.model);
        push_text(&mut out, "capacity", &self.capacity);
        push_text(&mut out, "numberOfCells", &self.number_of_cells);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentData {
    pub kind: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub input: EquipmentInput,
    pub output: EquipmentOutput,
    pub battery_bank: BatteryBank,
}

impl EquipmentData {
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_text(&mut out, "type", &self.kind);
        push_text(&mut out, "model", &self.model);
        push_text(&mut out, "serial", &self.serial);
        if !self.input.is_empty() {
            out.push(("input", FieldValue::Group(self.input.entries())));
        }
        if !self.output.is_empty() {
            out.push(("output", FieldValue::Group(self.output.entries())));
        }
        if !self.battery_bank.is_empty() {
            out.push(("batteryBank", FieldValue::Group(self.battery_bank.entries())));
        }
        out
    }
}

// --------------------------------------------------
// Traslado
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferLeg {
    pub date: Option<NaiveDateTime>,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
}

impl TransferLeg {
    fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_moment(&mut out, "date", &self.date);
        push_moment(&mut out, "departureTime", &self.departure_time);
        push_moment(&mut out, "arrivalTime", &self.arrival_time);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferData {
    pub departure: Vec<TransferLeg>,
    pub return_trip: Vec<TransferLeg>,
}

impl TransferData {
    /// Appending beyond the cap is rejected and leaves the list unchanged.
    pub fn push_departure_leg(&mut self) -> AppResult<&mut TransferLeg> {
        push_leg(&mut self.departure)
    }

    pub fn push_return_leg(&mut self) -> AppResult<&mut TransferLeg> {
        push_leg(&mut self.return_trip)
    }

    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        if !self.departure.is_empty() {
            out.push(("departure", leg_list(&self.departure)));
        }
        if !self.return_trip.is_empty() {
            out.push(("return", leg_list(&self.return_trip)));
        }
        out
    }
}

fn push_leg(legs: &mut Vec<TransferLeg>) -> AppResult<&mut TransferLeg> {
    if legs.len() >= MAX_TRANSFER_LEGS {
        return Err(AppError::TransferLegsFull {
            max: MAX_TRANSFER_LEGS,
        });
    }
    legs.push(TransferLeg::default());
    Ok(legs.last_mut().expect("just pushed"))
}

fn leg_list(legs: &[TransferLeg]) -> FieldValue {
    FieldValue::List(
        legs.iter()
            .map(|l| FieldValue::Group(l.entries()))
            .collect(),
    )
}

// --------------------------------------------------
// Ejecución
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionDay {
    pub day_of_week: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub number_of_technicians: Option<String>,
    pub technical_leader: Option<String>,
}

impl ExecutionDay {
    fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_text(&mut out, "dayOfWeek", &self.day_of_week);
        push_moment(&mut out, "date", &self.date);
        push_moment(&mut out, "startTime", &self.start_time);
        push_moment(&mut out, "endTime", &self.end_time);
        push_text(&mut out, "numberOfTechnicians", &self.number_of_technicians);
        push_text(&mut out, "technicalLeader", &self.technical_leader);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionData {
    pub days: Vec<ExecutionDay>,
}

impl ExecutionData {
    /// One entry per calendar day, at most seven.
    pub fn push_day(&mut self) -> AppResult<&mut ExecutionDay> {
        if self.days.len() >= MAX_EXECUTION_DAYS {
            return Err(AppError::ExecutionDaysFull {
                max: MAX_EXECUTION_DAYS,
            });
        }
        self.days.push(ExecutionDay::default());
        Ok(self.days.last_mut().expect("just pushed"))
    }

    pub fn items(&self) -> Vec<FieldValue> {
        self.days
            .iter()
            .map(|d| FieldValue::Group(d.entries()))
            .collect()
    }
}

// --------------------------------------------------
// Instrumentos de Medición y Ambiente
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementAndEnvironmentData {
    pub digital_multimeter: Option<bool>,
    pub clamp_meter: Option<bool>,
    pub battery_tester: Option<bool>,
    pub torque_wrench: Option<bool>,
    pub temperature_meter: Option<bool>,
    pub other_instruments: Option<String>,
    pub ambient_temperature: Option<String>,
    pub relative_humidity: Option<String>,
    pub excessive_dust: Option<bool>,
}

impl MeasurementAndEnvironmentData {
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_flag(&mut out, "digitalMultimeter", &self.digital_multimeter);
        push_flag(&mut out, "clampMeter", &self.clamp_meter);
        push_flag(&mut out, "batteryTester", &self.battery_tester);
        push_flag(&mut out, "torqueWrench", &self.torque_wrench);
        push_flag(&mut out, "temperatureMeter", &self.temperature_meter);
        push_text(&mut out, "otherInstruments", &self.other_instruments);
        push_text(&mut out, "ambientTemperature", &self.ambient_temperature);
        push_text(&mut out, "relativeHumidity", &self.relative_humidity);
        push_flag(&mut out, "excessiveDust", &self.excessive_dust);
        out
    }
}

// --------------------------------------------------
// Aceptación y Conformidad
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptanceAndConformityData {
    pub technical_intervention_conform: Option<bool>,
    pub comments: Option<String>,
}

impl AcceptanceAndConformityData {
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_flag(
            &mut out,
            "technicalInterventionConform",
            &self.technical_intervention_conform,
        );
        push_text(&mut out, "comments", &self.comments);
        out
    }
}

// --------------------------------------------------
// Descripción de actividades
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitiesDescriptionData {
    pub comments: Option<String>,
}

impl ActivitiesDescriptionData {
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_text(&mut out, "comments", &self.comments);
        out
    }
}

// --------------------------------------------------
// Registro Fotográfico
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoRecord {
    pub name: Option<String>,
    pub image: Option<ImageData>,
}

impl PhotoRecord {
    fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_text(&mut out, "name", &self.name);
        push_image(&mut out, "base64", &self.image);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotographicRecordData {
    pub photos: Vec<PhotoRecord>,
}

impl PhotographicRecordData {
    pub fn push_photo(&mut self) -> &mut PhotoRecord {
        self.photos.push(PhotoRecord::default());
        self.photos.last_mut().expect("just pushed")
    }

    pub fn items(&self) -> Vec<FieldValue> {
        self.photos
            .iter()
            .map(|p| FieldValue::Group(p.entries()))
            .collect()
    }
}

// --------------------------------------------------
// Validación
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureBlock {
    pub signature: Option<ImageData>,
    pub name: Option<String>,
    pub id: Option<String>,
}

impl SignatureBlock {
    pub fn is_empty(&self) -> bool {
        self.signature.is_none() && self.name.is_none() && self.id.is_none()
    }

    fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        push_image(&mut out, "signature", &self.signature);
        push_text(&mut out, "name", &self.name);
        push_text(&mut out, "id", &self.id);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationData {
    pub technical_leader: SignatureBlock,
    pub end_user: SignatureBlock,
}

impl ValidationData {
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        if !self.technical_leader.is_empty() {
            out.push((
                "technicalLeader",
                FieldValue::Group(self.technical_leader.entries()),
            ));
        }
        if !self.end_user.is_empty() {
            out.push(("endUser", FieldValue::Group(self.end_user.entries())));
        }
        out
    }
}

// --------------------------------------------------
// The assembled record
// --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRecord {
    pub general: GeneralData,
    pub intervention: TechnicalInterventionData,
    pub equipment: EquipmentData,
    pub transfer: TransferData,
    pub execution: ExecutionData,
    pub measurement: MeasurementAndEnvironmentData,
    pub acceptance: AcceptanceAndConformityData,
    pub activities: ActivitiesDescriptionData,
    pub photos: PhotographicRecordData,
    pub validation: ValidationData,
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_records_produce_no_entries() {
        let g = GeneralData::default();
        assert!(g.entries().is_empty());

        let e = EquipmentData::default();
        assert!(e.entries().is_empty());

        let v = ValidationData::default();
        assert!(v.entries().is_empty());
    }

    #[test]
    fn entries_keep_declaration_order_and_skip_absent_fields() {
        let mut g = GeneralData::default();
        g.address = Some("Calle 1".to_string());
        g.projects = Some("P1".to_string());

        let keys: Vec<&str> = g.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["projects", "address"]);
    }

    #[test]
    fn nested_contact_appears_once_any_field_is_set() {
        let mut g = GeneralData::default();
        assert!(g.entries().is_empty());

        g.requested_by.phone = Some("555".to_string());
        let entries = g.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "requestedBy");
        match &entries[0].1 {
            FieldValue::Group(inner) => {
                assert_eq!(inner.len(), 1);
                assert_eq!(inner[0].0, "phone");
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn transfer_legs_cap_at_three() {
        let mut t = TransferData::default();
        for _ in 0..MAX_TRANSFER_LEGS {
            t.push_departure_leg().expect("leg under cap");
        }

        let err = t.push_departure_leg().unwrap_err();
        assert!(matches!(err, AppError::TransferLegsFull { max: 3 }));
        assert_eq!(t.departure.len(), MAX_TRANSFER_LEGS);

        // The other direction has its own cap.
        t.push_return_leg().expect("return leg");
        assert_eq!(t.return_trip.len(), 1);
    }

    #[test]
    fn execution_days_cap_at_seven() {
        let mut e = ExecutionData::default();
        for _ in 0..MAX_EXECUTION_DAYS {
            e.push_day().expect("day under cap");
        }

        let err = e.push_day().unwrap_err();
        assert!(matches!(err, AppError::ExecutionDaysFull { max: 7 }));
        assert_eq!(e.days.len(), MAX_EXECUTION_DAYS);
    }

    #[test]
    fn maintenance_serializes_to_original_literals() {
        assert_eq!(Maintenance::Preventive.as_str(), "preventivo");
        assert_eq!(Maintenance::Corrective.as_str(), "correctivo");
    }
}
