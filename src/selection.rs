//! Up-front checks on the selected photos, run before any side effect.

use std::path::{Path, PathBuf};

use log::warn;

/// Image types accepted as input photos.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff"];

/// Outcome of validating one selection.
#[derive(Debug, Default)]
pub struct SelectionReport {
    /// One message per unusable file.
    pub problems: Vec<String>,
    /// Some photos have a different extension than the first one. They would
    /// stage under the first file's glob suffix and be skipped by the
    /// encoder, so this is surfaced as a warning rather than silently lost.
    pub extension_mismatch: bool,
}

impl SelectionReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn summary(&self) -> String {
        self.problems.join("; ")
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}

/// Validate every selected path: it must exist, be a non-empty regular file
/// and carry a supported image extension.
pub fn validate(selection: &[PathBuf]) -> SelectionReport {
    let mut report = SelectionReport::default();
    let first_ext = selection.first().and_then(|p| extension_of(p));

    for path in selection {
        let display = path.display();
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(_) => {
                report.problems.push(format!("{}: file does not exist", display));
                continue;
            }
        };
        if !metadata.is_file() {
            report.problems.push(format!("{}: not a regular file", display));
            continue;
        }
        if metadata.len() == 0 {
            report.problems.push(format!("{}: file is empty", display));
            continue;
        }

        match extension_of(path) {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => {
                if first_ext.as_deref() != Some(ext.as_str()) {
                    warn!(
                        "{}: extension differs from the first photo; it will not match the staging glob",
                        display
                    );
                    report.extension_mismatch = true;
                }
            }
            _ => {
                report.problems.push(format!(
                    "{}: unsupported file type (expected one of {})",
                    display,
                    SUPPORTED_EXTENSIONS.join(", ")
                ));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn a_good_selection_passes() {
        let dir = tempfile::tempdir().unwrap();
        let selection = vec![
            touch(dir.path(), "a.jpg", b"x"),
            touch(dir.path(), "b.JPG", b"x"),
        ];
        let report = validate(&selection);
        assert!(report.is_valid());
        assert!(!report.extension_mismatch);
    }

    #[test]
    fn missing_and_empty_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let selection = vec![
            dir.path().join("gone.jpg"),
            touch(dir.path(), "empty.jpg", b""),
        ];
        let report = validate(&selection);
        assert_eq!(report.problems.len(), 2);
        assert!(report.summary().contains("does not exist"));
        assert!(report.summary().contains("is empty"));
    }

    #[test]
    fn unsupported_extensions_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let selection = vec![touch(dir.path(), "clip.mp4", b"x")];
        let report = validate(&selection);
        assert!(!report.is_valid());
        assert!(report.summary().contains("unsupported file type"));
    }

    #[test]
    fn mixed_extensions_flag_a_mismatch_but_stay_valid() {
        let dir = tempfile::tempdir().unwrap();
        let selection = vec![
            touch(dir.path(), "a.jpg", b"x"),
            touch(dir.path(), "b.png", b"x"),
        ];
        let report = validate(&selection);
        assert!(report.is_valid());
        assert!(report.extension_mismatch);
    }
}
