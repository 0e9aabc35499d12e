use super::{ProgressState, SinkCommand, Transition};
use crate::player::{AudioSink, TrackHandle};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, error, info, warn};

/// Keeps the scrubber, the playhead and the audio sink in agreement.
///
/// All position logic lives in [`ProgressState`]; this type only carries
/// out the `SinkCommand` each transition asks for and owns the
/// [`TrackHandle`] for as long as a play session lasts.
pub struct PlaybackController {
    state: ProgressState,
    sink: Box<dyn AudioSink>,
    path: PathBuf,
    session: Option<TrackHandle>,
    error: Option<String>,
}

impl PlaybackController {
    pub fn new(sink: Box<dyn AudioSink>, path: PathBuf, duration: Duration) -> Self {
        PlaybackController {
            state: ProgressState::new(duration),
            sink,
            path,
            session: None,
            error: None,
        }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn is_seeking(&self) -> bool {
        self.state.is_seeking()
    }

    pub fn elapsed(&self) -> Duration {
        self.state.elapsed()
    }

    pub fn duration(&self) -> Duration {
        self.state.duration()
    }

    pub fn slider_position(&self) -> f64 {
        self.state.slider()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Last load failure, if it has not been dismissed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    pub fn toggle_play(&mut self) {
        let transition = self.state.toggle_play();
        self.apply(transition);
    }

    pub fn on_tick(&mut self, delta: Duration) {
        let transition = self.state.tick(delta);
        if transition.command == Some(SinkCommand::Stop) {
            info!("Reached end of {}", self.path.display());
        }
        self.apply(transition);
    }

    pub fn on_seek_begin(&mut self) {
        self.state = self.state.seek_begin();
    }

    pub fn on_seek_change(&mut self, fraction: f64) {
        self.state = self.state.seek_change(fraction);
    }

    pub fn on_seek_end(&mut self, fraction: f64) {
        let transition = self.state.seek_end(fraction);
        self.apply(transition);
    }

    /// Commit the scrubber where it currently sits
    pub fn commit_seek(&mut self) {
        if self.state.is_seeking() {
            let transition = self.state.seek_commit();
            self.apply(transition);
        }
    }

    pub fn cancel_seek(&mut self) {
        self.state = self.state.seek_cancel();
    }

    pub fn nudge(&mut self, step: f64) {
        self.state = self.state.nudge(step);
    }

    /// Release the sink regardless of state, used on shutdown
    pub fn shutdown(&mut self) {
        if self.session.take().is_some() {
            self.sink.stop();
        }
    }

    fn apply(&mut self, transition: Transition) {
        self.state = transition.state;

        match transition.command {
            Some(SinkCommand::Start { from }) => self.start(from),
            Some(SinkCommand::Stop) => self.stop(),
            Some(SinkCommand::Seek(offset)) => self.seek(offset),
            None => (),
        }
    }

    fn start(&mut self, from: Duration) {
        let track = match self.sink.load(&self.path) {
            Ok(track) => track,
            Err(e) => {
                error!("Failed to load audio: {e}");
                self.state = self.state.play_failed();
                self.error = Some(e.to_string());
                return;
            }
        };

        self.sink.play(&track);
        info!(
            "Playing {} from {:.1}s",
            track.path().display(),
            from.as_secs_f32()
        );

        if !from.is_zero() {
            if let Err(e) = self.sink.seek(&track, from) {
                warn!("{e}");
            }
        }

        self.session = Some(track);
    }

    fn stop(&mut self) {
        if let Some(track) = self.session.take() {
            self.sink.stop();
            info!("Stopped session {}", track.id());
        }
    }

    fn seek(&mut self, offset: Duration) {
        match &self.session {
            Some(track) => match self.sink.seek(track, offset) {
                Ok(()) => debug!("Seeked to {:.1}s", offset.as_secs_f32()),
                Err(e) => warn!("{e}"),
            },
            None => debug!("No active session, seek deferred to next play"),
        }
    }
}
