mod action;

pub use action::{handle_key_event, handle_mouse_event, next_event};

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

/// Scrubber steps as a fraction of the track, matching the 1% slider step
pub const SCRUB_SMALL: f64 = 0.01;
pub const SCRUB_LARGE: f64 = 0.05;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Action {
    // Player Controls
    TogglePlay,

    // Scrubber
    SeekBegin(f64),
    SeekChange(f64),
    SeekEnd(f64),
    Scrub(f64),
    CommitSeek,
    CancelSeek,

    // Popups
    ShowHelp,
    ClosePopup,

    QUIT,
}
