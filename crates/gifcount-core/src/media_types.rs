// crates/gifcount-core/src/media_types.rs
//
// Types that flow across the channel between gifcount-media and gifcount-ui.
// No egui, no ffmpeg — just plain data.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

use crate::helpers::time::format_hms;
use crate::report::AggregateReport;

/// Why a file was left out of the total.
///
/// Decoding backends map their own errors into one of these; anything they
/// cannot classify is an `Open` failure carrying the backend's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// Missing file, unreadable file, or a container the backend rejects.
    #[error("could not open file: {msg}")]
    Open { msg: String },
    /// Opened fine but neither the container nor any stream reports a duration.
    #[error("no playback duration in container or streams")]
    UnknownDuration,
    /// A duration was found but no image could be decoded from the file.
    #[error("no decodable frame: {msg}")]
    Corrupt { msg: String },
}

/// Outcome of probing a single file.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationResult {
    Decoded { seconds: f64 },
    Skipped(DecodeFailure),
}

impl DurationResult {
    /// Classifies a raw probe result. A negative or non-finite duration is
    /// treated as unknown rather than trusted.
    pub fn from_probe(probed: Result<f64, DecodeFailure>) -> Self {
        match probed {
            Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Self::Decoded { seconds },
            Ok(_)       => Self::Skipped(DecodeFailure::UnknownDuration),
            Err(reason) => Self::Skipped(reason),
        }
    }

    /// Contribution to the total: always 0.0 for a skipped file.
    pub fn seconds(&self) -> f64 {
        match self {
            Self::Decoded { seconds } => *seconds,
            Self::Skipped(_)          => 0.0,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// `HH:MM:SS.ff` for a decoded file, `SKIPPED` otherwise.
    pub fn display(&self) -> String {
        match self {
            Self::Decoded { seconds } => format_hms(*seconds),
            Self::Skipped(_)          => "SKIPPED".to_string(),
        }
    }
}

/// Sent once per batch by `CountWorker` when both the aggregation and the
/// report write have completed.
#[derive(Debug, Clone)]
pub enum CountResult {
    /// `report_path` is None only when the batch had no input files.
    Finished     { batch_id: Uuid, report: AggregateReport, report_path: Option<PathBuf> },
    /// Durations were computed but the text report could not be written.
    ReportFailed { batch_id: Uuid, report: AggregateReport, msg: String },
}

impl CountResult {
    pub fn batch_id(&self) -> Uuid {
        match self {
            Self::Finished { batch_id, .. } | Self::ReportFailed { batch_id, .. } => *batch_id,
        }
    }
}
