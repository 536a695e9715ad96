// crates/gifcount-core/src/lib.rs
//
// Plain data shared by gifcount-media and gifcount-ui.
// No egui, no ffmpeg — anything here must be testable without either.

pub mod commands;
pub mod helpers;
pub mod media_types;
pub mod report;
pub mod state;

pub use media_types::{CountResult, DecodeFailure, DurationResult};
pub use report::{AggregateReport, FileEntry};
