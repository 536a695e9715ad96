// crates/gifcount-core/src/report.rs
//
// AggregateReport: the single immutable value a batch produces.
// Both the summary panel and the text report render from it.

use std::path::{Path, PathBuf};

use crate::helpers::time::format_hms;
use crate::media_types::DurationResult;

/// One input file and what probing it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub path:   PathBuf,
    /// Basename used in the report; falls back to the full path when the
    /// path has no file name component.
    pub name:   String,
    pub result: DurationResult,
}

impl FileEntry {
    pub fn new(path: PathBuf, result: DurationResult) -> Self {
        let name = display_name(&path);
        Self { path, name, result }
    }

    /// `<basename>: <HH:MM:SS.ff>` or `<basename>: SKIPPED`.
    pub fn line(&self) -> String {
        format!("{}: {}", self.name, self.result.display())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateReport {
    pub total_seconds: f64,
    pub skipped_count: usize,
    /// One entry per input path, in input order.
    pub per_file:      Vec<FileEntry>,
}

impl AggregateReport {
    /// Builds the report from per-file results already in input order.
    /// Totals are derived here so they always agree with `per_file`.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (PathBuf, DurationResult)>,
    {
        let per_file: Vec<FileEntry> = results
            .into_iter()
            .map(|(path, result)| FileEntry::new(path, result))
            .collect();
        let total_seconds = per_file.iter().map(|e| e.result.seconds()).sum();
        let skipped_count = per_file.iter().filter(|e| e.result.is_skipped()).count();
        Self { total_seconds, skipped_count, per_file }
    }

    pub fn is_empty(&self) -> bool {
        self.per_file.is_empty()
    }

    pub fn total_display(&self) -> String {
        format_hms(self.total_seconds)
    }

    pub fn total_line(&self) -> String {
        format!("Total GIF Video Length (HH:MM:SS): {}", self.total_display())
    }

    /// Full contents of the text report: one line per file, a blank line,
    /// then the total. No newline after the total.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.per_file {
            out.push_str(&entry.line());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.total_line());
        out
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_types::DecodeFailure;
    use pretty_assertions::assert_eq;

    fn sample() -> AggregateReport {
        AggregateReport::from_results(vec![
            (PathBuf::from("/gifs/a.gif"), DurationResult::Decoded { seconds: 2.0 }),
            (PathBuf::from("/gifs/b.gif"), DurationResult::Skipped(DecodeFailure::UnknownDuration)),
            (PathBuf::from("/gifs/c.gif"), DurationResult::Decoded { seconds: 1.5 }),
        ])
    }

    #[test]
    fn totals_follow_entries() {
        let report = sample();
        assert_eq!(report.total_seconds, 3.5);
        assert_eq!(report.skipped_count, 1);
        assert_eq!(report.per_file.len(), 3);
    }

    #[test]
    fn lines_use_basenames_in_input_order() {
        let lines: Vec<String> = sample().per_file.iter().map(FileEntry::line).collect();
        assert_eq!(lines, vec![
            "a.gif: 00:00:02.00".to_string(),
            "b.gif: SKIPPED".to_string(),
            "c.gif: 00:00:01.50".to_string(),
        ]);
    }

    #[test]
    fn render_matches_report_file_layout() {
        assert_eq!(
            sample().render(),
            "a.gif: 00:00:02.00\n\
             b.gif: SKIPPED\n\
             c.gif: 00:00:01.50\n\
             \n\
             Total GIF Video Length (HH:MM:SS): 00:00:03.50",
        );
    }

    #[test]
    fn empty_report_is_zeroed() {
        let report = AggregateReport::from_results(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.total_seconds, 0.0);
        assert_eq!(report.skipped_count, 0);
        assert_eq!(report, AggregateReport::default());
    }
}
