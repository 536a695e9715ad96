// crates/gifcount-ui/src/helpers/format.rs
//
// UI-layer string utilities that don't belong in gifcount-core.
//
// Duration formatting lives in gifcount_core::helpers::time — the report file
// and the summary panel must share it. This module only holds strings that
// have no meaning outside of a display context.

/// Shortens a file name so it stays within roughly `max_px` of list width,
/// ending it with "…" when cut. Width is estimated at 7 px per character,
/// about the advance of the file list's 12 px monospace font.
pub fn fit_label(text: &str, max_px: f32) -> String {
    const AVG_CHAR_PX: f32 = 7.0;
    const ELLIPSIS: &str = "…";
    let max_chars = (max_px / AVG_CHAR_PX).max(0.0) as usize;
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    // Reserve one slot for the ellipsis character itself.
    let keep = max_chars.saturating_sub(1);
    text.chars().take(keep).collect::<String>() + ELLIPSIS
}

/// `"1 file"`, `"3 files"`.
pub fn count_label(n: usize, noun: &str) -> String {
    if n == 1 { format!("1 {noun}") } else { format!("{n} {noun}s") }
}
