use super::*;

#[test]
fn marks_around_current_step() {
    assert_eq!(step_mark(1, 3), StepMark::Completed);
    assert_eq!(step_mark(2, 3), StepMark::Completed);
    assert_eq!(step_mark(3, 3), StepMark::Current);
    assert_eq!(step_mark(3, 2), StepMark::Upcoming);
}

#[test]
fn connectors_fill_behind_current() {
    assert!(connector_filled(1, 2));
    assert!(!connector_filled(2, 2));
    assert!(connector_filled(2, 3));
}

#[test]
fn mark_modifiers() {
    assert_eq!(StepMark::Completed.modifier(), "completed");
    assert_eq!(StepMark::Current.modifier(), "current");
    assert_eq!(StepMark::Upcoming.modifier(), "upcoming");
}
