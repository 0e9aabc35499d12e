use crate::{
    Config, PlaybackController, key_handler, overwrite_line,
    domain::TrackInfo,
    player::AudioSink,
    progress::Ticker,
    tui,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::{
        ExecutableCommand,
        event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    },
};
use std::time::Instant;
use tracing::info;

pub struct Scrubline {
    pub(crate) ui: UiState,
    ticker: Ticker,
}

impl Scrubline {
    pub fn new(config: Config, sink: Box<dyn AudioSink>) -> Self {
        let track = TrackInfo::resolve(config.track_path, config.overrides);
        info!(
            "Loaded \"{}\" by {} ({:.1}s)",
            track.title,
            track.artist,
            track.duration.as_secs_f32()
        );

        let player = PlaybackController::new(sink, track.path.clone(), track.duration);

        Scrubline {
            ui: UiState::new(player, track, config.theme),
            ticker: Ticker::new(config.tick, Instant::now()),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;
        std::io::stdout().execute(EnableMouseCapture)?;

        let result = self.main_loop(&mut terminal);

        // The sink is released even when the loop bailed out early
        self.ui.player.shutdown();

        std::io::stdout().execute(DisableMouseCapture)?;
        ratatui::restore();
        overwrite_line("Thanks for listening!\n")?;

        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        // MAIN ROUTINE
        loop {
            self.ui.check_player_error();
            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            let timeout = self.ticker.timeout(Instant::now());

            let action = match key_handler::next_event(timeout)? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    key_handler::handle_key_event(key, &self.ui)
                }
                Some(Event::Mouse(mouse)) => key_handler::handle_mouse_event(mouse, &self.ui),
                _ => None,
            };

            if let Some(action) = action {
                self.handle_action(action);
            }

            self.fire_ticks(Instant::now());

            if self.ui.get_mode() == Mode::QUIT {
                info!("Quitting");
                return Ok(());
            }
        }
    }

    fn fire_ticks(&mut self, now: Instant) {
        let delta = self.ticker.interval();
        for _ in 0..self.ticker.fire(now) {
            self.ui.player.on_tick(delta);
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> UiState {
    use crate::{
        domain::TrackOverrides,
        player::{AudioLoadError, SeekError, TrackHandle},
        ui_state::Theme,
    };
    use std::{
        path::{Path, PathBuf},
        time::Duration,
    };

    struct MissingFile;

    impl AudioSink for MissingFile {
        fn load(&mut self, path: &Path) -> Result<TrackHandle, AudioLoadError> {
            Err(AudioLoadError::NotFound(path.to_path_buf()))
        }
        fn play(&mut self, _: &TrackHandle) {}
        fn stop(&mut self) {}
        fn seek(&mut self, _: &TrackHandle, _: Duration) -> Result<(), SeekError> {
            Ok(())
        }
    }

    let path = PathBuf::from("/nowhere/harry.mp3");
    let track = TrackInfo::resolve(path.clone(), TrackOverrides::default());
    let player = PlaybackController::new(Box::new(MissingFile), path, track.duration);

    UiState::new(player, track, Theme::default())
}
