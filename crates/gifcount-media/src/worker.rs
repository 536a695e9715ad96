// crates/gifcount-media/src/worker.rs
//
// CountWorker: runs batches off the UI thread and reports back over a channel.
// All public API that gifcount-ui calls lives here.

use std::path::PathBuf;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{error, info};
use uuid::Uuid;

use gifcount_core::media_types::CountResult;

use crate::aggregate::aggregate;
use crate::export::export_report;
use crate::probe::{DurationProbe, FfmpegProbe};

pub struct CountWorker {
    /// One `CountResult` per started batch, sent after the report file is
    /// written (or failed to write). Drained by the UI with `try_recv`.
    pub rx:   Receiver<CountResult>,
    tx:       Sender<CountResult>,
    probe:    Arc<dyn DurationProbe>,
    shutdown: Arc<AtomicBool>,
}

impl CountWorker {
    pub fn new() -> Self {
        Self::with_probe(Arc::new(FfmpegProbe))
    }

    pub fn with_probe(probe: Arc<dyn DurationProbe>) -> Self {
        let (tx, rx) = bounded(16);
        Self {
            rx,
            tx,
            probe,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawn a background thread that measures `paths`, writes the report and
    /// sends a single result tagged with the returned batch id.
    ///
    /// Returns immediately. Probes inside the batch run on the rayon pool; the
    /// batch thread itself only waits for them and does the file write.
    pub fn start_batch(&self, paths: Vec<PathBuf>) -> Uuid {
        let batch_id = Uuid::new_v4();
        let tx       = self.tx.clone();
        let sd       = self.shutdown.clone();
        let probe    = Arc::clone(&self.probe);

        thread::spawn(move || {
            info!("batch {batch_id}: measuring {} file(s)", paths.len());
            let report = aggregate(&paths, probe.as_ref());

            // Nobody is listening after shutdown; skip the write as well so a
            // late batch does not touch disk after the window closed.
            if sd.load(Ordering::Relaxed) { return; }

            let result = match export_report(&report, &paths) {
                Ok(report_path) => {
                    info!(
                        "batch {batch_id}: total {:.2}s, {} skipped",
                        report.total_seconds, report.skipped_count,
                    );
                    CountResult::Finished { batch_id, report, report_path }
                }
                Err(e) => {
                    error!("batch {batch_id}: report write failed: {e:#}");
                    CountResult::ReportFailed { batch_id, report, msg: format!("{e:#}") }
                }
            };
            let _ = tx.send(result);
        });

        batch_id
    }

    /// In-flight probes are not interrupted; their batch just never reports.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl Default for CountWorker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::REPORT_FILE_NAME;
    use gifcount_core::media_types::DecodeFailure;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use std::time::Duration;

    /// a.gif = 2.0 s, c.gif = 1.5 s, anything else is corrupt.
    struct ScriptedProbe;

    impl DurationProbe for ScriptedProbe {
        fn probe(&self, path: &Path) -> Result<f64, DecodeFailure> {
            match path.file_name().and_then(|n| n.to_str()) {
                Some("a.gif") => Ok(2.0),
                Some("c.gif") => Ok(1.5),
                _ => Err(DecodeFailure::Open { msg: "Invalid data found when processing input".into() }),
            }
        }
    }

    const WAIT: Duration = Duration::from_secs(10);

    #[test]
    fn batch_reports_once_and_writes_file() {
        let dir    = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = ["a.gif", "b.gif", "c.gif"]
            .iter()
            .map(|n| dir.path().join(n))
            .collect();
        let worker = CountWorker::with_probe(Arc::new(ScriptedProbe));

        let id = worker.start_batch(paths);
        let result = worker.rx.recv_timeout(WAIT).expect("batch never finished");
        assert_eq!(result.batch_id(), id);

        let CountResult::Finished { report, report_path, .. } = result else {
            panic!("report write should have succeeded");
        };
        assert_eq!(report.total_seconds, 3.5);
        assert_eq!(report.skipped_count, 1);

        let dest = dir.path().join(REPORT_FILE_NAME);
        assert_eq!(report_path, Some(dest.clone()));
        assert_eq!(
            std::fs::read_to_string(dest).unwrap(),
            "a.gif: 00:00:02.00\nb.gif: SKIPPED\nc.gif: 00:00:01.50\n\n\
             Total GIF Video Length (HH:MM:SS): 00:00:03.50",
        );

        assert!(worker.rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn write_failure_still_delivers_totals() {
        let dir    = tempfile::tempdir().unwrap();
        let paths  = vec![dir.path().join("no-such-dir").join("a.gif")];
        let worker = CountWorker::with_probe(Arc::new(ScriptedProbe));

        let id = worker.start_batch(paths);
        match worker.rx.recv_timeout(WAIT).expect("batch never finished") {
            CountResult::ReportFailed { batch_id, report, msg } => {
                assert_eq!(batch_id, id);
                assert_eq!(report.total_seconds, 2.0);
                assert!(msg.contains("no-such-dir"));
            }
            other => panic!("expected ReportFailed, got {other:?}"),
        }
    }

    #[test]
    fn empty_batch_finishes_without_a_file() {
        let worker = CountWorker::with_probe(Arc::new(ScriptedProbe));
        let id = worker.start_batch(Vec::new());
        match worker.rx.recv_timeout(WAIT).expect("batch never finished") {
            CountResult::Finished { batch_id, report, report_path } => {
                assert_eq!(batch_id, id);
                assert!(report.is_empty());
                assert_eq!(report_path, None);
            }
            other => panic!("expected Finished, got {other:?}"),
        }
    }
}
