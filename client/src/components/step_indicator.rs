//! Three-step progress header shared by the results and appeal views.

#[cfg(test)]
#[path = "step_indicator_test.rs"]
mod step_indicator_test;

use leptos::prelude::*;

pub const STEP_LABELS: [&str; 3] = ["Upload", "Review", "Results"];

/// Position of a step relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepMark {
    Completed,
    Current,
    Upcoming,
}

impl StepMark {
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Upcoming => "upcoming",
        }
    }
}

/// Mark for 1-based step `n` when `current` is active.
pub fn step_mark(n: usize, current: usize) -> StepMark {
    match n.cmp(&current) {
        std::cmp::Ordering::Less => StepMark::Completed,
        std::cmp::Ordering::Equal => StepMark::Current,
        std::cmp::Ordering::Greater => StepMark::Upcoming,
    }
}

/// Connector after step `n` is filled once that step is done.
pub fn connector_filled(n: usize, current: usize) -> bool {
    n < current
}

#[component]
pub fn StepIndicator(current: usize) -> impl IntoView {
    let last = STEP_LABELS.len();
    view! {
        <ol class="step-indicator">
            {STEP_LABELS
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let n = index + 1;
                    let mark = step_mark(n, current);
                    let glyph = if mark == StepMark::Completed { "✓".to_owned() } else { n.to_string() };
                    view! {
                        <li class=format!("step-indicator__step step-indicator__step--{}", mark.modifier())>
                            <span class="step-indicator__dot">{glyph}</span>
                            <span class="step-indicator__label">{*label}</span>
                        </li>
                        {(n < last)
                            .then(|| {
                                let filled = if connector_filled(n, current) { " step-indicator__connector--filled" } else { "" };
                                view! { <li class=format!("step-indicator__connector{filled}") aria-hidden="true"></li> }
                            })}
                    }
                })
                .collect_view()}
        </ol>
    }
}
