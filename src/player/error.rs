use std::{io, path::PathBuf, time::Duration};
use thiserror::Error;

/// Reasons the audio resource could not be made ready for playback
#[derive(Error, Debug)]
pub enum AudioLoadError {
    #[error("Audio file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
#[error("Could not seek to {}s: {reason}", offset.as_secs_f32())]
pub struct SeekError {
    pub offset: Duration,
    pub reason: String,
}
