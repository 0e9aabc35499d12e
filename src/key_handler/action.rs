use crate::{
    app_core::Scrubline,
    key_handler::*,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use KeyCode::*;

pub fn handle_key_event(key: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key) {
        return Some(action);
    }

    match state.popup_is_open() {
        true => handle_popup(&key),
        false => handle_player(&key, state),
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Char('q')) => Some(Action::QUIT),
        _ => None,
    }
}

fn handle_popup(key: &KeyEvent) -> Option<Action> {
    match key.code {
        Esc | Enter | Char('?') => Some(Action::ClosePopup),
        _ => None,
    }
}

fn handle_player(key: &KeyEvent, state: &UiState) -> Option<Action> {
    let seeking = state.player.is_seeking();

    match (key.modifiers, key.code) {
        (X, Char(' ')) => Some(Action::TogglePlay),

        (X, Left) | (X, Char('h')) => Some(Action::Scrub(-SCRUB_SMALL)),
        (X, Right) | (X, Char('l')) => Some(Action::Scrub(SCRUB_SMALL)),
        (S, Left) | (S, Char('H')) => Some(Action::Scrub(-SCRUB_LARGE)),
        (S, Right) | (S, Char('L')) => Some(Action::Scrub(SCRUB_LARGE)),

        (X, Enter) if seeking => Some(Action::CommitSeek),
        (X, Esc) if seeking => Some(Action::CancelSeek),

        (X, Char('?')) | (S, Char('?')) => Some(Action::ShowHelp),
        _ => None,
    }
}

/// Press on the scrubber starts a seek, dragging moves it and release
/// commits it wherever the pointer is
pub fn handle_mouse_event(mouse: MouseEvent, state: &UiState) -> Option<Action> {
    if state.popup_is_open() {
        return None;
    }

    let fraction = state.scrubber_fraction(mouse.column);
    let seeking = state.player.is_seeking();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if state.on_scrubber(mouse.column, mouse.row) => {
            Some(Action::SeekBegin(fraction))
        }
        MouseEventKind::Drag(MouseButton::Left) if seeking => Some(Action::SeekChange(fraction)),
        MouseEventKind::Up(MouseButton::Left) if seeking => Some(Action::SeekEnd(fraction)),
        _ => None,
    }
}

pub fn next_event(timeout: Duration) -> Result<Option<Event>> {
    match event::poll(timeout)? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}

impl Scrubline {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) {
        let player = &mut self.ui.player;

        match action {
            // Player
            Action::TogglePlay      => player.toggle_play(),

            // Scrubber
            Action::SeekBegin(f)    => {
                player.on_seek_begin();
                player.on_seek_change(f);
            }
            Action::SeekChange(f)   => player.on_seek_change(f),
            Action::SeekEnd(f)      => player.on_seek_end(f),
            Action::Scrub(step)     => player.nudge(step),
            Action::CommitSeek      => player.commit_seek(),
            Action::CancelSeek      => player.cancel_seek(),

            // Popups
            Action::ShowHelp        => self.ui.show_popup(crate::ui_state::PopupType::Help),
            Action::ClosePopup      => self.ui.close_popup(),

            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn global_quit_keys() {
        assert_eq!(global_commands(&key(C, Char('c'))), Some(Action::QUIT));
        assert_eq!(global_commands(&key(X, Char('q'))), Some(Action::QUIT));
        assert_eq!(global_commands(&key(X, Char(' '))), None);
    }

    #[test]
    fn popup_keys_only_close() {
        assert_eq!(handle_popup(&key(X, Esc)), Some(Action::ClosePopup));
        assert_eq!(handle_popup(&key(X, Char(' '))), None);
    }

    #[test]
    fn player_keys() {
        let ui = crate::app_core::test_state();

        assert_eq!(handle_player(&key(X, Char(' ')), &ui), Some(Action::TogglePlay));
        assert_eq!(handle_player(&key(X, Right), &ui), Some(Action::Scrub(SCRUB_SMALL)));
        assert_eq!(handle_player(&key(S, Left), &ui), Some(Action::Scrub(-SCRUB_LARGE)));
        // Enter and Esc only mean something mid-seek
        assert_eq!(handle_player(&key(X, Enter), &ui), None);
        assert_eq!(handle_player(&key(X, Esc), &ui), None);
    }

    #[test]
    fn seek_keys_while_scrubbing() {
        let mut ui = crate::app_core::test_state();
        ui.player.nudge(SCRUB_SMALL);

        assert_eq!(handle_player(&key(X, Enter), &ui), Some(Action::CommitSeek));
        assert_eq!(handle_player(&key(X, Esc), &ui), Some(Action::CancelSeek));
    }

    #[test]
    fn mouse_drag_sequence() {
        let mut ui = crate::app_core::test_state();
        ui.scrubber_area = ratatui::layout::Rect::new(0, 10, 11, 1);

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 5, 10);
        assert_eq!(handle_mouse_event(down, &ui), Some(Action::SeekBegin(0.5)));

        // Press off the gauge does nothing
        let stray = mouse(MouseEventKind::Down(MouseButton::Left), 5, 3);
        assert_eq!(handle_mouse_event(stray, &ui), None);

        // Drag and release are ignored until a seek is under way
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 8, 4);
        assert_eq!(handle_mouse_event(drag, &ui), None);

        ui.player.on_seek_begin();
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 8, 4);
        assert_eq!(handle_mouse_event(drag, &ui), Some(Action::SeekChange(0.8)));

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 20, 4);
        assert_eq!(handle_mouse_event(up, &ui), Some(Action::SeekEnd(1.0)));
    }
}
