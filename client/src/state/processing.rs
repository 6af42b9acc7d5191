//! Processing-progress state shown by the processing modal.
//!
//! DESIGN
//! ======
//! The stage cursor and progress percentage are reported by whatever drives
//! certificate processing. Views only classify stages against the cursor, so
//! every render recomputes status from scratch with no hidden transitions.

#[cfg(test)]
#[path = "processing_test.rs"]
mod processing_test;

/// Ordered pipeline stage labels.
pub const PROCESSING_STAGES: [&str; 6] = [
    "Upload Certificate",
    "OCR Text Extraction",
    "Content Analysis",
    "Degree Evaluation",
    "Credit Calculation",
    "Results Generation",
];

/// Label shown when the cursor points outside the stage table.
pub const FALLBACK_STAGE_LABEL: &str = "Processing...";

/// Highest stage the waiting ticker may reach before the response arrives.
const TICKER_STAGE_CEILING: usize = 4;
/// Highest progress the waiting ticker may reach before the response arrives.
const TICKER_PROGRESS_CEILING: i32 = 90;
const TICKER_PROGRESS_STEP: i32 = 10;

/// Visual status of a single stage relative to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Active,
    Pending,
}

impl StageStatus {
    /// CSS modifier suffix for stage rows.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

/// Externally reported processing position.
///
/// `progress` is rendered as-is; keeping it within `0..=100` is the
/// reporter's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessingState {
    pub stage: usize,
    pub progress: i32,
}

impl ProcessingState {
    /// Label of the stage under the cursor, or the fallback when out of range.
    pub fn current_label(&self) -> &'static str {
        PROCESSING_STAGES
            .get(self.stage)
            .copied()
            .unwrap_or(FALLBACK_STAGE_LABEL)
    }

    /// Inline style for the overall progress bar fill.
    pub fn progress_style(&self) -> String {
        format!("width: {}%", self.progress)
    }

    /// Nudge the display forward while a processing request is outstanding.
    pub fn tick(&mut self) {
        if self.stage < TICKER_STAGE_CEILING {
            self.stage += 1;
        }
        if self.progress < TICKER_PROGRESS_CEILING {
            self.progress = (self.progress + TICKER_PROGRESS_STEP).min(TICKER_PROGRESS_CEILING);
        }
    }

    /// Jump to the terminal stage with a full bar.
    pub fn finish(&mut self) {
        self.stage = PROCESSING_STAGES.len() - 1;
        self.progress = 100;
    }
}

/// Classify stage `index` against the cursor.
pub fn stage_status(index: usize, cursor: usize) -> StageStatus {
    match index.cmp(&cursor) {
        std::cmp::Ordering::Less => StageStatus::Completed,
        std::cmp::Ordering::Equal => StageStatus::Active,
        std::cmp::Ordering::Greater => StageStatus::Pending,
    }
}

/// Every stage label paired with its status for the given cursor.
pub fn stage_rows(cursor: usize) -> Vec<(&'static str, StageStatus)> {
    PROCESSING_STAGES
        .iter()
        .enumerate()
        .map(|(index, label)| (*label, stage_status(index, cursor)))
        .collect()
}
