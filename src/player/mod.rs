mod backend_rodio;
mod error;
mod track;

pub use backend_rodio::RodioSink;
pub use error::{AudioLoadError, SeekError};
pub use track::TrackHandle;

use std::{path::Path, time::Duration};

/// Audio output the progress controller drives.
///
/// Implementations own the decoded stream between `load` and `stop`;
/// the controller owns the handle.
pub trait AudioSink {
    /// Open and decode `path`, leaving it ready but silent
    fn load(&mut self, path: &Path) -> Result<TrackHandle, AudioLoadError>;
    fn play(&mut self, track: &TrackHandle);
    /// Halt output and release the loaded stream
    fn stop(&mut self);
    fn seek(&mut self, track: &TrackHandle, offset: Duration) -> Result<(), SeekError>;
}
