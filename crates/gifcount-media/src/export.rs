// crates/gifcount-media/src/export.rs
//
// Writes the per-file text report. Renders from the AggregateReport the
// aggregator already produced; nothing is probed twice.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::{Builder, NamedTempFile};

use gifcount_core::report::AggregateReport;

pub const REPORT_FILE_NAME: &str = "individual_video_lengths.txt";

/// `individual_video_lengths.txt` in the directory of the first input path.
/// None for an empty selection.
pub fn report_destination(paths: &[PathBuf]) -> Option<PathBuf> {
    let first = paths.first()?;
    let dir   = first.parent().unwrap_or_else(|| Path::new(""));
    Some(dir.join(REPORT_FILE_NAME))
}

/// Writes `report` to `dest`, replacing any existing file.
///
/// The text goes to a temp file in the same directory first and is renamed
/// over `dest`, so a failure part-way never leaves a truncated report behind.
/// An existing report keeps its permissions; a new one gets the mode a plain
/// file create would give it.
pub fn write_report(report: &AggregateReport, dest: &Path) -> Result<()> {
    let dir = match dest.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };

    let mut tmp = report_tempfile(dir)
        .with_context(|| format!("Failed to create report file in {}", dir.display()))?;
    if let Ok(existing) = fs::metadata(dest) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", dest.display()))?;
    }
    tmp.write_all(report.render().as_bytes())
        .with_context(|| format!("Failed to write report for {}", dest.display()))?;
    tmp.flush()
        .with_context(|| format!("Failed to flush report for {}", dest.display()))?;
    tmp.persist(dest)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", dest.display()))?;
    Ok(())
}

// NamedTempFile defaults to 0600; ask for 0666 so the umask decides instead.
#[cfg(unix)]
fn report_tempfile(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn report_tempfile(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

/// Writes the report next to the first input file. Returns where it went,
/// or None (without touching the filesystem) when there were no inputs.
pub fn export_report(report: &AggregateReport, paths: &[PathBuf]) -> Result<Option<PathBuf>> {
    let Some(dest) = report_destination(paths) else { return Ok(None) };
    write_report(report, &dest)?;
    tracing::info!("report written → {}", dest.display());
    Ok(Some(dest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gifcount_core::media_types::{DecodeFailure, DurationResult};
    use pretty_assertions::assert_eq;

    fn report_for(paths: &[PathBuf]) -> AggregateReport {
        AggregateReport::from_results(vec![
            (paths[0].clone(), DurationResult::Decoded { seconds: 2.0 }),
            (paths[1].clone(), DurationResult::Skipped(DecodeFailure::UnknownDuration)),
            (paths[2].clone(), DurationResult::Decoded { seconds: 1.5 }),
        ])
    }

    #[test]
    fn destination_is_next_to_first_file() {
        let paths = vec![PathBuf::from("/a/one.gif"), PathBuf::from("/b/two.gif")];
        assert_eq!(
            report_destination(&paths),
            Some(PathBuf::from("/a").join(REPORT_FILE_NAME)),
        );
        assert_eq!(report_destination(&[]), None);
    }

    #[test]
    fn writes_lines_and_total() {
        let dir   = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = ["a.gif", "b.gif", "c.gif"]
            .iter()
            .map(|n| dir.path().join(n))
            .collect();

        let written = export_report(&report_for(&paths), &paths).unwrap();
        let dest    = dir.path().join(REPORT_FILE_NAME);
        assert_eq!(written, Some(dest.clone()));
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "a.gif: 00:00:02.00\n\
             b.gif: SKIPPED\n\
             c.gif: 00:00:01.50\n\
             \n\
             Total GIF Video Length (HH:MM:SS): 00:00:03.50",
        );
    }

    #[test]
    fn overwrites_existing_report() {
        let dir  = tempfile::tempdir().unwrap();
        let dest = dir.path().join(REPORT_FILE_NAME);
        fs::write(&dest, "stale contents that are longer than the new report").unwrap();

        let report = AggregateReport::from_results(vec![
            (dir.path().join("x.gif"), DurationResult::Decoded { seconds: 61.0 }),
        ]);
        write_report(&report, &dest).unwrap();
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "x.gif: 00:01:01.00\n\nTotal GIF Video Length (HH:MM:SS): 00:01:01.00",
        );
    }

    #[test]
    fn empty_selection_writes_nothing() {
        let written = export_report(&AggregateReport::default(), &[]).unwrap();
        assert_eq!(written, None);
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing-dir").join(REPORT_FILE_NAME);
        let err  = write_report(&AggregateReport::default(), &dest).unwrap_err();
        assert!(format!("{err:#}").contains("missing-dir"));
        assert!(!dest.exists());
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn new_report_gets_default_file_mode() {
        let dir       = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.txt");
        fs::write(&reference, "").unwrap();

        let dest = dir.path().join(REPORT_FILE_NAME);
        write_report(&AggregateReport::default(), &dest).unwrap();
        assert_eq!(mode_of(&dest), mode_of(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir  = tempfile::tempdir().unwrap();
        let dest = dir.path().join(REPORT_FILE_NAME);
        fs::write(&dest, "old").unwrap();
        fs::set_permissions(&dest, fs::Permissions::from_mode(0o640)).unwrap();

        write_report(&AggregateReport::default(), &dest).unwrap();
        assert_eq!(mode_of(&dest), 0o640);
    }
}
