//! The one job this crate performs: photos in, timelapse video out.

use std::path::PathBuf;

use chrono::Local;
use log::{info, warn};

use crate::command;
use crate::error::JobError;
use crate::ffmpeg;
use crate::selection;
use crate::settings::TimelapseSettings;
use crate::staging::Staging;

/// Knobs the caller may override. By default the ffmpeg binary is
/// discovered and the output lands on the desktop.
#[derive(Debug, Default, Clone)]
pub struct JobOptions {
    pub output_dir: Option<PathBuf>,
    /// ffmpeg binary for generated commands. Ignored when a custom template
    /// is set; the template names its own binary.
    pub encoder: Option<PathBuf>,
}

/// What a finished job reports back.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub output_path: PathBuf,
    pub frames: usize,
}

fn default_output_dir() -> PathBuf {
    dirs::desktop_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Create a timelapse from `photos` with the given settings.
///
/// Blocking, single best-effort call: sort, validate, stage, build the
/// command, run ffmpeg, report. The staging directory is removed on every
/// exit path, including unwinds, because [`Staging`] owns a `TempDir`.
pub fn run(
    photos: &[PathBuf],
    settings: &TimelapseSettings,
    options: &JobOptions,
) -> Result<JobOutcome, JobError> {
    if photos.is_empty() {
        return Err(JobError::NoPhotos);
    }

    let report = selection::validate(photos);
    if !report.is_valid() {
        return Err(JobError::InvalidSelection(report.summary()));
    }
    if report.extension_mismatch {
        warn!("selection mixes file extensions; photos not matching the first extension are skipped");
    }

    // Frame order is the lexicographic order of the selected paths.
    let mut sorted = photos.to_vec();
    sorted.sort();

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(default_output_dir);
    let output_path =
        output_dir.join(format!("timelapse_{}{}", timestamp, settings.output_extension()));

    let staging = Staging::stage(&sorted)?;
    let encoder_command = command::build(
        settings,
        &staging.input_pattern,
        &output_path.to_string_lossy(),
    );

    info!(
        "creating timelapse from {} photos -> {}",
        sorted.len(),
        output_path.display()
    );
    let result = ffmpeg::run_encoder(options.encoder.as_deref(), &encoder_command);
    drop(staging);
    result?;

    Ok(JobOutcome {
        output_path,
        frames: sorted.len(),
    })
}
