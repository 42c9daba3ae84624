// src/form/wizard.rs

use crate::form::model::FormRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    General,
    Intervention,
    Equipment,
    Transfer,
    Execution,
    Measurement,
    Acceptance,
    Activities,
    Photos,
    Validation,
}

impl SectionId {
    pub const ALL: [SectionId; 10] = [
        SectionId::General,
        SectionId::Intervention,
        SectionId::Equipment,
        SectionId::Transfer,
        SectionId::Execution,
        SectionId::Measurement,
        SectionId::Acceptance,
        SectionId::Activities,
        SectionId::Photos,
        SectionId::Validation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::General => "Datos Generales",
            SectionId::Intervention => "Intervención Técnica",
            SectionId::Equipment => "Datos del Equipo",
            SectionId::Transfer => "Traslado",
            SectionId::Execution => "Ejecución",
            SectionId::Measurement => "Instrumentos de Medición y Ambiente",
            SectionId::Acceptance => "Aceptación y Conformidad",
            SectionId::Activities => "Descripción de actividades",
            SectionId::Photos => "Registro Fotográfico",
            SectionId::Validation => "Validación",
        }
    }
}

pub const SECTION_COUNT: usize = SectionId::ALL.len();

/// Sequential multi-screen form flow. Holds the section cursor and the
/// form record; never blocks navigation on content (there are no required
/// fields), and submit is only reachable on the last section.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    section: usize,
    pub form: FormRecord,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section_index(&self) -> usize {
        self.section
    }

    pub fn current(&self) -> SectionId {
        SectionId::ALL[self.section]
    }

    pub fn is_first(&self) -> bool {
        self.section == 0
    }

    pub fn is_last(&self) -> bool {
        self.section + 1 == SECTION_COUNT
    }

    /// No-op on the last section.
    pub fn next(&mut self) {
        if self.section + 1 < SECTION_COUNT {
            self.section += 1;
        }
    }

    /// No-op on the first section.
    pub fn previous(&mut self) {
        if self.section > 0 {
            self.section -= 1;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.is_last()
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_general_data() {
        let w = WizardState::new();
        assert_eq!(w.section_index(), 0);
        assert_eq!(w.current(), SectionId::General);
        assert!(w.is_first());
        assert!(!w.can_submit());
    }

    #[test]
    fn previous_is_noop_on_first_section() {
        let mut w = WizardState::new();
        w.previous();
        assert_eq!(w.section_index(), 0);
    }

    #[test]
    fn next_is_noop_on_last_section() {
        let mut w = WizardState::new();
        for _ in 0..SECTION_COUNT * 2 {
            w.next();
        }
        assert_eq!(w.section_index(), SECTION_COUNT - 1);
        assert_eq!(w.current(), SectionId::Validation);
        assert!(w.is_last());
    }

    #[test]
    fn submit_only_reachable_on_last_section() {
        let mut w = WizardState::new();
        for _ in 0..SECTION_COUNT - 2 {
            w.next();
            assert!(!w.can_submit());
        }
        w.next();
        assert!(w.can_submit());

        w.previous();
        assert!(!w.can_submit());
    }

    #[test]
    fn section_order_matches_report_order() {
        let mut w = WizardState::new();
        let mut seen = vec![w.current()];
        while !w.is_last() {
            w.next();
            seen.push(w.current());
        }
        assert_eq!(seen, SectionId::ALL);
    }
}
