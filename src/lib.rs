//! Core of a small timelapse utility: stage a sorted photo selection as
//! sequentially named symlinks, build an ffmpeg invocation from a settings
//! value (or a user-supplied command template), run it synchronously and
//! report the result. The UI shell that drives this lives in the binary.

pub mod command;
pub mod error;
pub mod ffmpeg;
pub mod job;
pub mod selection;
pub mod settings;
pub mod staging;

pub use error::JobError;
pub use job::{run, JobOptions, JobOutcome};
pub use settings::{Codec, Framerate, Resolution, TimelapseSettings};
