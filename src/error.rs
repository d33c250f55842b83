use thiserror::Error;

/// Everything that can go wrong while creating a timelapse.
#[derive(Error, Debug)]
pub enum JobError {
    #[error("no photos selected")]
    NoPhotos,

    #[error("selection is not usable: {0}")]
    InvalidSelection(String),

    #[error("ffmpeg not found. Install it or point --ffmpeg at the binary")]
    EncoderNotFound,

    #[error("failed to stage photos: {0}")]
    Staging(#[source] std::io::Error),

    #[error("failed to start the encoder: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("encoder failed: {0}")]
    EncoderFailed(String),
}
