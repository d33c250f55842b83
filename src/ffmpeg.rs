//! Locating and running the ffmpeg binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::command::EncoderCommand;
use crate::error::JobError;

/// How many characters of stderr are kept when the encoder fails.
const STDERR_TAIL_CHARS: usize = 200;

/// Find the ffmpeg executable: PATH first, then common install locations.
pub fn find_ffmpeg() -> Result<PathBuf, JobError> {
    if let Ok(path) = which::which("ffmpeg") {
        return Ok(path);
    }

    let common_paths: &[&str] = if cfg!(target_os = "macos") {
        &[
            "/opt/homebrew/bin/ffmpeg",
            "/usr/local/bin/ffmpeg",
            "/opt/local/bin/ffmpeg",
        ]
    } else if cfg!(windows) {
        &[
            r"C:\ffmpeg\bin\ffmpeg.exe",
            r"C:\Program Files\ffmpeg\bin\ffmpeg.exe",
        ]
    } else {
        &["/usr/bin/ffmpeg", "/usr/local/bin/ffmpeg"]
    };

    for candidate in common_paths {
        let path = Path::new(candidate);
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    Err(JobError::EncoderNotFound)
}

/// Run one encoder invocation to completion, blocking the caller.
///
/// Generated argument vectors go straight to the ffmpeg binary, discovered
/// unless `encoder` overrides it. A custom template is a free-text command
/// line that names its own binary and runs under `sh -c`.
pub fn run_encoder(encoder: Option<&Path>, command: &EncoderCommand) -> Result<(), JobError> {
    let output = match command {
        EncoderCommand::Args(args) => {
            let ffmpeg = match encoder {
                Some(path) => path.to_path_buf(),
                None => find_ffmpeg()?,
            };
            debug!("running {} {}", ffmpeg.display(), args.join(" "));
            Command::new(&ffmpeg)
                .args(args)
                .output()
                .map_err(JobError::Spawn)?
        }
        EncoderCommand::Shell(line) => {
            debug!("running custom command: {}", line);
            Command::new("sh")
                .arg("-c")
                .arg(line)
                .output()
                .map_err(JobError::Spawn)?
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(JobError::EncoderFailed(tail(&stderr, STDERR_TAIL_CHARS)));
    }

    info!("encoder finished with {}", output.status);
    Ok(())
}

/// Last `limit` characters of `text`, on char boundaries.
fn tail(text: &str, limit: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(limit)).collect()
}
