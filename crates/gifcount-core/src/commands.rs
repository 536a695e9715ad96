// crates/gifcount-core/src/commands.rs
//
// Every user action in GifCount is expressed as a CounterCommand.
// Modules emit these; app.rs processes them after the UI pass.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum CounterCommand {
    // ── Selection ────────────────────────────────────────────────────────────
    /// Replace the selection (file picker).
    SetFiles(Vec<PathBuf>),
    /// Append to the selection, skipping paths already present (drag-and-drop).
    AddFiles(Vec<PathBuf>),
    /// Replace the selection with every GIF directly inside the folder.
    LoadFolder(PathBuf),
    ClearFiles,

    // ── Batch ────────────────────────────────────────────────────────────────
    Calculate,
    DismissNotice,
}
