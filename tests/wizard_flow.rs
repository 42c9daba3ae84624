// tests/wizard_flow.rs

use informe_tecnico_lib::error::AppError;
use informe_tecnico_lib::form::{
    SectionId, WizardState, MAX_EXECUTION_DAYS, MAX_TRANSFER_LEGS, SECTION_COUNT,
};

#[test]
fn wizard_walks_all_sections_in_order_and_clamps_at_both_ends() {
    let mut w = WizardState::new();

    assert_eq!(w.current(), SectionId::General);
    w.previous();
    assert_eq!(w.current(), SectionId::General, "previous is a no-op on the first section");

    let mut visited = vec![w.current()];
    for _ in 0..SECTION_COUNT - 1 {
        w.next();
        visited.push(w.current());
    }
    assert_eq!(visited, SectionId::ALL.to_vec());

    w.next();
    assert_eq!(
        w.current(),
        SectionId::Validation,
        "next is a no-op on the last section"
    );
}

#[test]
fn submit_is_only_available_on_the_validation_section() {
    let mut w = WizardState::new();

    while !w.is_last() {
        assert!(!w.can_submit());
        w.next();
    }

    assert_eq!(w.current(), SectionId::Validation);
    assert!(w.can_submit());
}

#[test]
fn navigation_never_blocks_on_empty_content() {
    // There are no required fields: an untouched record can reach submit.
    let mut w = WizardState::new();
    for _ in 0..SECTION_COUNT {
        w.next();
    }
    assert!(w.can_submit());
}

#[test]
fn transfer_leg_cap_is_enforced_through_the_wizard_record() {
    let mut w = WizardState::new();

    for _ in 0..MAX_TRANSFER_LEGS {
        w.form.transfer.push_departure_leg().expect("under cap");
    }

    let err = w.form.transfer.push_departure_leg().unwrap_err();
    assert!(matches!(err, AppError::TransferLegsFull { max: 3 }));
    assert_eq!(w.form.transfer.departure.len(), MAX_TRANSFER_LEGS);

    assert_eq!(
        err.user_msg().short,
        "Máximo 3 fechas de traslado.",
        "the rejection is surfaced as a warning, not a crash"
    );
}

#[test]
fn execution_day_cap_is_enforced_through_the_wizard_record() {
    let mut w = WizardState::new();

    for _ in 0..MAX_EXECUTION_DAYS {
        w.form.execution.push_day().expect("under cap");
    }

    let err = w.form.execution.push_day().unwrap_err();
    assert!(matches!(err, AppError::ExecutionDaysFull { max: 7 }));
    assert_eq!(w.form.execution.days.len(), MAX_EXECUTION_DAYS);
}
