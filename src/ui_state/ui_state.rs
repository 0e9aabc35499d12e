use super::{Mode, PopupType, Theme};
use crate::{DurationStyle, PlaybackController, domain::TrackInfo, get_readable_duration};
use ratatui::layout::Rect;

pub struct UiState {
    // Backend Modules
    pub(crate) player: PlaybackController,

    // Visual Elements
    pub(crate) theme: Theme,
    pub(crate) popup: PopupType,
    mode: Mode,

    // View models
    pub(crate) track: TrackInfo,
    /// Where the scrubber gauge was last drawn, for mapping mouse columns
    pub(crate) scrubber_area: Rect,
}

impl UiState {
    pub fn new(player: PlaybackController, track: TrackInfo, theme: Theme) -> Self {
        UiState {
            player,
            theme,
            popup: PopupType::None,
            mode: Mode::default(),
            track,
            scrubber_area: Rect::default(),
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode
    }

    /// Move a load failure reported by the controller into the error popup
    pub fn check_player_error(&mut self) {
        if let Some(e) = self.player.take_error() {
            self.show_popup(PopupType::Error(e));
        }
    }

    pub fn elapsed_display(&self) -> String {
        match self.player.is_seeking() {
            // Preview where the scrub will land
            true => get_readable_duration(
                self.player.duration().mul_f64(self.player.slider_position()),
                DurationStyle::CompactTenths,
            ),
            false => get_readable_duration(self.player.elapsed(), DurationStyle::Compact),
        }
    }

    pub fn duration_display(&self) -> String {
        get_readable_duration(self.player.duration(), DurationStyle::Compact)
    }

    /// Translate a terminal column into a scrubber fraction. Columns left
    /// or right of the gauge clamp to its ends.
    pub fn scrubber_fraction(&self, column: u16) -> f64 {
        let area = self.scrubber_area;
        if area.width <= 1 {
            return 0.0;
        }

        let offset = column.saturating_sub(area.x).min(area.width - 1);
        offset as f64 / (area.width - 1) as f64
    }

    pub fn on_scrubber(&self, column: u16, row: u16) -> bool {
        let area = self.scrubber_area;
        area.width > 0 && row == area.y && column >= area.x && column < area.right()
    }
}
