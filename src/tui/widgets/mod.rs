mod background;
mod cover;
mod error;
mod help;
mod key_hints;
mod play_button;
mod scrubber;
mod timer;
mod track_labels;

pub use background::Background;
pub use cover::Cover;
pub use error::ErrorMsg;
pub use help::HelpMsg;
pub use key_hints::KeyHints;
pub use play_button::PlayButton;
pub use scrubber::Scrubber;
pub use timer::Timer;
pub use track_labels::TrackLabels;

const PLAY_ICON: &str = "▶";
const PAUSE_ICON: &str = "⏸";

static POPUP_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};
