// crates/gifcount-core/src/state.rs
// Selection and batch status — no egui, no ffmpeg, no runtime handles.
// Lives for one app session; nothing here is persisted between runs.
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

use crate::helpers::time::format_hms;
use crate::media_types::CountResult;
use crate::report::AggregateReport;

/// Shown while a batch runs. Picked from the batch id so the same batch
/// always shows the same line.
pub const LOADING_MESSAGES: &[&str] = &[
    "Training a hamster to run faster on its wheel…",
    "Summoning the Avengers to calculate this for you…",
    "Looking for the missing sock in the server room…",
    "Putting the code in turbo mode and hoping for the best…",
    "Translating binary to Danish…",
    "Teaching the computer to dance the Macarena…",
];

pub const NO_INPUT_NOTICE: &str = "Hey buddy, you need to pick some files or a folder first!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no GIF files selected")]
pub struct NoInput;

/// What the UI shows once a batch has come back.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub report:      AggregateReport,
    pub report_path: Option<PathBuf>,
    /// Set when the durations were computed but the text file was not written.
    pub write_error: Option<String>,
}

#[derive(Debug, Default)]
pub struct CounterState {
    /// Files to measure, in the order they will be reported.
    pub files:           Vec<PathBuf>,
    /// Batch currently running in the background, if any.
    pub active_batch:    Option<Uuid>,
    pub loading_message: Option<&'static str>,
    pub outcome:         Option<BatchOutcome>,
    /// One-line message for validation and I/O problems.
    pub notice:          Option<String>,
}

impl CounterState {
    pub fn is_busy(&self) -> bool {
        self.active_batch.is_some()
    }

    /// Replaces the selection. Any previous result no longer describes it.
    pub fn set_files(&mut self, files: Vec<PathBuf>) {
        self.files   = files;
        self.outcome = None;
        self.notice  = None;
    }

    /// Appends files not already selected, keeping first-seen order.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = PathBuf>) {
        let mut changed = false;
        for path in files {
            if !self.files.contains(&path) {
                self.files.push(path);
                changed = true;
            }
        }
        if changed {
            self.outcome = None;
            self.notice  = None;
        }
    }

    pub fn clear_files(&mut self) {
        self.set_files(Vec::new());
    }

    /// Validates the selection and, if non-empty, hands it to `start`, which
    /// dispatches the background work and returns its batch id.
    ///
    /// With no files selected `start` is never called and the no-input notice
    /// is raised instead.
    pub fn begin_batch<F>(&mut self, start: F) -> Result<Uuid, NoInput>
    where
        F: FnOnce(Vec<PathBuf>) -> Uuid,
    {
        if self.files.is_empty() {
            self.notice = Some(NO_INPUT_NOTICE.to_string());
            return Err(NoInput);
        }
        let id = start(self.files.clone());
        self.active_batch    = Some(id);
        self.loading_message = Some(loading_message_for(id));
        self.outcome         = None;
        self.notice          = None;
        Ok(id)
    }

    /// Applies a finished batch. Returns false (and changes nothing) when the
    /// result belongs to a batch that is no longer the active one.
    pub fn finish_batch(&mut self, result: CountResult) -> bool {
        if self.active_batch != Some(result.batch_id()) {
            return false;
        }
        self.active_batch    = None;
        self.loading_message = None;
        self.outcome = Some(match result {
            CountResult::Finished { report, report_path, .. } => BatchOutcome {
                report,
                report_path,
                write_error: None,
            },
            CountResult::ReportFailed { report, msg, .. } => {
                self.notice = Some(format!("Could not write the report: {msg}"));
                BatchOutcome { report, report_path: None, write_error: Some(msg) }
            }
        });
        true
    }

    /// The two result lines shown under the Calculate button.
    pub fn summary_text(&self) -> Option<String> {
        let report = &self.outcome.as_ref()?.report;
        Some(format!(
            "Total playback length (HH:MM:SS): {}\nFiles that could not be read: {}",
            format_hms(report.total_seconds),
            report.skipped_count,
        ))
    }
}

pub fn loading_message_for(id: Uuid) -> &'static str {
    let idx = id.as_bytes()[0] as usize % LOADING_MESSAGES.len();
    LOADING_MESSAGES[idx]
}
