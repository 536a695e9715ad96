// crates/gifcount-media/src/aggregate.rs
//
// Turns an ordered path list into an AggregateReport.
//
// Each probe runs on the rayon global pool (one worker per hardware thread).
// `collect` on an indexed parallel iterator writes every result into its own
// slot, so the Vec comes back in input order whatever order the probes finish
// in, and it only returns once every probe has.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::warn;

use gifcount_core::media_types::DurationResult;
use gifcount_core::report::AggregateReport;

use crate::probe::DurationProbe;

pub fn aggregate<P>(paths: &[PathBuf], probe: &P) -> AggregateReport
where
    P: DurationProbe + ?Sized,
{
    let results: Vec<DurationResult> = paths
        .par_iter()
        .map(|path| {
            let result = DurationResult::from_probe(probe.probe(path));
            if let DurationResult::Skipped(reason) = &result {
                warn!("skipping {}: {reason}", path.display());
            }
            result
        })
        .collect();

    AggregateReport::from_results(paths.iter().cloned().zip(results))
}
