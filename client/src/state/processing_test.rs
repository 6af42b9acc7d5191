use super::*;

#[test]
fn stage_rows_split_around_cursor() {
    let rows = stage_rows(2);
    let statuses: Vec<StageStatus> = rows.iter().map(|(_, status)| *status).collect();
    assert_eq!(
        statuses,
        vec![
            StageStatus::Completed,
            StageStatus::Completed,
            StageStatus::Active,
            StageStatus::Pending,
            StageStatus::Pending,
            StageStatus::Pending,
        ]
    );
    assert_eq!(rows[2].0, "Content Analysis");
}

#[test]
fn stage_rows_cursor_past_end_marks_everything_completed() {
    assert!(stage_rows(9).iter().all(|(_, status)| *status == StageStatus::Completed));
}

#[test]
fn current_label_falls_back_when_out_of_range() {
    let state = ProcessingState { stage: 6, progress: 0 };
    assert_eq!(state.current_label(), FALLBACK_STAGE_LABEL);
    let state = ProcessingState { stage: 0, progress: 0 };
    assert_eq!(state.current_label(), "Upload Certificate");
}

#[test]
fn progress_style_is_unclamped() {
    assert_eq!(ProcessingState { stage: 2, progress: 45 }.progress_style(), "width: 45%");
    assert_eq!(ProcessingState { stage: 0, progress: 140 }.progress_style(), "width: 140%");
}

#[test]
fn tick_stops_at_ceilings() {
    let mut state = ProcessingState { stage: 1, progress: 25 };
    for _ in 0..20 {
        state.tick();
    }
    assert_eq!(state.stage, 4);
    assert_eq!(state.progress, 90);
}

#[test]
fn finish_reaches_last_stage() {
    let mut state = ProcessingState { stage: 2, progress: 55 };
    state.finish();
    assert_eq!(state.stage, 5);
    assert_eq!(state.progress, 100);
    assert_eq!(state.current_label(), "Results Generation");
}

#[test]
fn stage_status_modifiers() {
    assert_eq!(StageStatus::Completed.modifier(), "completed");
    assert_eq!(StageStatus::Active.modifier(), "active");
    assert_eq!(StageStatus::Pending.modifier(), "pending");
}
