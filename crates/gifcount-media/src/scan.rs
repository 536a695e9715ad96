// crates/gifcount-media/src/scan.rs
//
// Folder import: the GIFs directly inside a directory, sorted by name.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// True for a `.gif` extension in any letter case. Content is not checked;
/// a misnamed file is caught later as a skip.
pub fn is_gif(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gif"))
}

/// Regular files in `dir` (not recursive) that pass [`is_gif`], sorted by
/// file name so the report order does not depend on the filesystem.
pub fn list_gifs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read folder {}", dir.display()))?;

    let mut gifs = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to list folder {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_gif(&path) {
            gifs.push(path);
        }
    }
    gifs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(gifs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        assert!(is_gif(Path::new("/x/a.gif")));
        assert!(is_gif(Path::new("/x/B.GIF")));
        assert!(!is_gif(Path::new("/x/c.png")));
        assert!(!is_gif(Path::new("/x/gif")));
    }

    #[test]
    fn lists_only_gifs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.gif", "a.GIF", "notes.txt", "c.gif"] {
            fs::write(dir.path().join(name), b"GIF89a").unwrap();
        }
        fs::create_dir(dir.path().join("nested.gif")).unwrap();

        let names: Vec<String> = list_gifs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.GIF", "b.gif", "c.gif"]);
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_gifs(&dir.path().join("gone")).is_err());
    }
}
