//! Temp-directory staging of the selected photos.
//!
//! ffmpeg's glob input consumes files in name order, so the selection is
//! mirrored into a fresh temp directory as symlinks named by a zero-padded
//! sequential index. The directory and its links are removed when the
//! [`Staging`] value is dropped, whether the encode succeeded or not.

use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

use crate::error::JobError;

#[cfg(unix)]
use std::os::unix::fs::symlink;
#[cfg(windows)]
use std::os::windows::fs::symlink_file as symlink;

/// A staged selection, alive for the duration of one job.
pub struct Staging {
    dir: TempDir,
    /// Glob matching every staged link, e.g. `/tmp/timelapse_abc/*.jpg`.
    pub input_pattern: String,
    /// Extension shared by the staged links (taken from the first photo).
    pub extension: String,
}

impl Staging {
    /// Mirror `selection` (already sorted) into a new staging directory.
    ///
    /// The link suffix comes from the first photo's extension. Photos with a
    /// different extension still get a link under that suffix and end up
    /// outside the glob; callers that care run selection validation first.
    pub fn stage(selection: &[PathBuf]) -> Result<Self, JobError> {
        let first = selection.first().ok_or(JobError::NoPhotos)?;
        let extension = first
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let dir = tempfile::Builder::new()
            .prefix("timelapse_")
            .tempdir()
            .map_err(JobError::Staging)?;

        for (index, photo) in selection.iter().enumerate() {
            let link = dir.path().join(format!("img_{:05}{}", index, extension));
            symlink(photo, &link).map_err(JobError::Staging)?;
        }
        debug!(
            "staged {} photos in {}",
            selection.len(),
            dir.path().display()
        );

        let input_pattern = format!("{}/*{}", dir.path().display(), extension);
        Ok(Self {
            dir,
            input_pattern,
            extension,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
