// crates/gifcount-media/src/lib.rs
//
// No egui dependency — communicates with gifcount-ui via channels only.
//
// Pipeline for one batch (all driven from worker.rs):
//   probe     — per-file duration via FFmpeg, behind the DurationProbe seam
//   aggregate — fans probes out on the rayon pool, keeps input order
//   export    — writes individual_video_lengths.txt next to the first file

pub mod aggregate;
pub mod export;
pub mod probe;
pub mod scan;
pub mod worker;

// Re-export the main public API so gifcount-ui imports are simple.
pub use worker::CountWorker;
pub use probe::{DurationProbe, FfmpegProbe};
pub use gifcount_core::media_types::CountResult;
