use std::time::Duration;

/// Side effect a transition asks of the audio sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkCommand {
    /// Load the track and begin playback at `from`
    Start { from: Duration },
    Stop,
    Seek(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: ProgressState,
    pub command: Option<SinkCommand>,
}

impl Transition {
    fn quiet(state: ProgressState) -> Self {
        Transition {
            state,
            command: None,
        }
    }

    fn with(state: ProgressState, command: SinkCommand) -> Self {
        Transition {
            state,
            command: Some(command),
        }
    }
}

/// Playback position and scrubber state for a single track.
///
/// Every method consumes the current state and hands back the next one,
/// so the view never mutates position behind the controller's back.
///
/// Invariants:
/// - `elapsed <= duration`
/// - `slider` is always within `[0, 1]`
/// - while `seeking`, ticks leave both `elapsed` and `slider` alone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    playing: bool,
    elapsed: Duration,
    duration: Duration,
    seeking: bool,
    slider: f64,
}

impl ProgressState {
    pub fn new(duration: Duration) -> Self {
        ProgressState {
            playing: false,
            elapsed: Duration::ZERO,
            duration,
            seeking: false,
            slider: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn slider(&self) -> f64 {
        self.slider
    }

    /// Fraction of the track already played, regardless of the scrubber
    pub fn ratio(&self) -> f64 {
        ratio_of(self.elapsed, self.duration)
    }

    pub fn toggle_play(self) -> Transition {
        match self.playing {
            true => Transition::with(
                ProgressState {
                    playing: false,
                    ..self
                },
                SinkCommand::Stop,
            ),
            false => Transition::with(
                ProgressState {
                    playing: true,
                    ..self
                },
                SinkCommand::Start { from: self.elapsed },
            ),
        }
    }

    /// Revert a `Start` the sink could not honor
    pub fn play_failed(self) -> Self {
        ProgressState {
            playing: false,
            ..self
        }
    }

    pub fn tick(self, delta: Duration) -> Transition {
        if !self.playing || self.seeking {
            return Transition::quiet(self);
        }

        let elapsed = self.elapsed.saturating_add(delta);

        if elapsed >= self.duration {
            return Transition::with(
                ProgressState {
                    playing: false,
                    elapsed: Duration::ZERO,
                    slider: 0.0,
                    ..self
                },
                SinkCommand::Stop,
            );
        }

        Transition::quiet(ProgressState {
            elapsed,
            slider: ratio_of(elapsed, self.duration),
            ..self
        })
    }

    pub fn seek_begin(self) -> Self {
        ProgressState {
            seeking: true,
            ..self
        }
    }

    /// Moves the scrubber only. A change without a prior begin starts a seek.
    pub fn seek_change(self, fraction: f64) -> Self {
        ProgressState {
            seeking: true,
            slider: clamp_fraction(fraction),
            ..self
        }
    }

    /// Shift the scrubber by `step`, starting a seek from the current
    /// slider position if none is active
    pub fn nudge(self, step: f64) -> Self {
        self.seek_change(self.slider + step)
    }

    pub fn seek_end(self, fraction: f64) -> Transition {
        let fraction = clamp_fraction(fraction);
        let elapsed = self.duration.mul_f64(fraction).min(self.duration);

        let state = ProgressState {
            seeking: false,
            elapsed,
            slider: fraction,
            ..self
        };

        match self.playing {
            true => Transition::with(state, SinkCommand::Seek(elapsed)),
            false => Transition::quiet(state),
        }
    }

    /// Commit whatever the scrubber currently shows
    pub fn seek_commit(self) -> Transition {
        self.seek_end(self.slider)
    }

    /// Abandon a seek, snapping the scrubber back to the playhead
    pub fn seek_cancel(self) -> Self {
        ProgressState {
            seeking: false,
            slider: self.ratio(),
            ..self
        }
    }
}

fn ratio_of(elapsed: Duration, duration: Duration) -> f64 {
    match duration.is_zero() {
        true => 0.0,
        false => clamp_fraction(elapsed.as_secs_f64() / duration.as_secs_f64()),
    }
}

fn clamp_fraction(fraction: f64) -> f64 {
    match fraction.is_finite() {
        true => fraction.clamp(0.0, 1.0),
        false => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);
    const SONG: Duration = Duration::from_secs(180);

    fn playing() -> ProgressState {
        ProgressState::new(SONG).toggle_play().state
    }

    #[test]
    fn starts_stopped_at_zero() {
        let state = ProgressState::new(SONG);
        assert!(!state.is_playing());
        assert!(!state.is_seeking());
        assert_eq!(state.elapsed(), Duration::ZERO);
        assert_eq!(state.slider(), 0.0);
    }

    #[test]
    fn toggle_requests_start_from_elapsed() {
        let state = ProgressState::new(SONG).seek_end(0.25).state;
        let t = state.toggle_play();

        assert!(t.state.is_playing());
        assert_eq!(
            t.command,
            Some(SinkCommand::Start {
                from: Duration::from_secs(45)
            })
        );
    }

    #[test]
    fn toggle_off_requests_stop_and_keeps_position() {
        let state = playing().tick(TICK).state;
        let t = state.toggle_play();

        assert!(!t.state.is_playing());
        assert_eq!(t.command, Some(SinkCommand::Stop));
        assert_eq!(t.state.elapsed(), TICK);
    }

    #[test]
    fn tick_is_noop_when_stopped() {
        let state = ProgressState::new(SONG);
        let t = state.tick(TICK);
        assert_eq!(t.state, state);
        assert_eq!(t.command, None);
    }

    #[test]
    fn tick_advances_and_tracks_slider() {
        let t = playing().tick(Duration::from_secs(90));
        assert_eq!(t.state.elapsed(), Duration::from_secs(90));
        assert_eq!(t.state.slider(), 0.5);
        assert_eq!(t.command, None);
    }

    #[test]
    fn full_song_of_ticks_stops_and_rewinds() {
        let mut state = playing();

        for _ in 0..1799 {
            let t = state.tick(TICK);
            assert!(t.command.is_none());
            state = t.state;
        }
        assert_eq!(state.elapsed(), Duration::from_millis(179_900));

        let t = state.tick(TICK);
        assert_eq!(t.command, Some(SinkCommand::Stop));
        assert!(!t.state.is_playing());
        assert_eq!(t.state.elapsed(), Duration::ZERO);
        assert_eq!(t.state.slider(), 0.0);
    }

    #[test]
    fn ticks_during_seek_leave_position_alone() {
        let state = playing().tick(TICK).state.seek_begin().seek_change(0.8);
        let t = state.tick(TICK);

        assert_eq!(t.state, state);
        assert_eq!(t.state.elapsed(), TICK);
        assert_eq!(t.state.slider(), 0.8);
        assert_eq!(t.command, None);
    }

    #[test]
    fn ticks_resume_after_seek_ends() {
        let state = playing().seek_begin().tick(TICK).state;
        assert_eq!(state.elapsed(), Duration::ZERO);

        let state = state.seek_end(0.5).state.tick(TICK).state;
        assert_eq!(state.elapsed(), Duration::from_millis(90_100));
    }

    #[test]
    fn seek_end_sets_elapsed_from_fraction() {
        let t = ProgressState::new(SONG).seek_begin().seek_end(0.5);
        assert_eq!(t.state.elapsed(), Duration::from_secs(90));
        assert_eq!(t.state.slider(), 0.5);
        assert!(!t.state.is_seeking());
        // Nothing to seek while stopped
        assert_eq!(t.command, None);
    }

    #[test]
    fn seek_end_while_playing_commands_seek() {
        let t = playing().seek_begin().seek_end(0.5);
        assert_eq!(t.command, Some(SinkCommand::Seek(Duration::from_secs(90))));
    }

    #[test]
    fn fractions_are_clamped() {
        let state = ProgressState::new(SONG);
        assert_eq!(state.seek_change(1.7).slider(), 1.0);
        assert_eq!(state.seek_change(-0.3).slider(), 0.0);
        assert_eq!(state.seek_change(f64::NAN).slider(), 0.0);

        let t = state.seek_end(4.0);
        assert_eq!(t.state.elapsed(), SONG);
    }

    #[test]
    fn seek_to_end_then_tick_stops() {
        let state = playing().seek_end(1.0).state;
        let t = state.tick(TICK);
        assert_eq!(t.command, Some(SinkCommand::Stop));
        assert_eq!(t.state.elapsed(), Duration::ZERO);
    }

    #[test]
    fn cancel_snaps_slider_back() {
        let state = playing().tick(Duration::from_secs(18)).state;
        let state = state.nudge(0.3).seek_cancel();

        assert!(!state.is_seeking());
        assert!((state.slider() - 0.1).abs() < 1e-9);
        assert_eq!(state.elapsed(), Duration::from_secs(18));
    }

    #[test]
    fn nudge_moves_from_slider() {
        let state = ProgressState::new(SONG).nudge(0.05).nudge(0.05);
        assert!(state.is_seeking());
        assert!((state.slider() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_never_divides() {
        let state = ProgressState::new(Duration::ZERO);
        assert_eq!(state.ratio(), 0.0);
        let t = state.toggle_play().state.tick(TICK);
        assert!(!t.state.is_playing());
    }
}
