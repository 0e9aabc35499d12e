use super::{
    AppLayout, Background, Cover, ErrorMsg, HelpMsg, KeyHints, PlayButton, Scrubber, Timer,
    TrackLabels,
};
use crate::ui_state::{PopupType, UiState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area());

    Background.render(f.area(), f.buffer_mut(), state);
    Cover.render(layout.cover, f.buffer_mut(), state);
    TrackLabels.render(layout.title.union(layout.artist), f.buffer_mut(), state);
    Scrubber.render(layout.scrubber, f.buffer_mut(), state);
    Timer.render(layout.timer, f.buffer_mut(), state);
    PlayButton.render(layout.button, f.buffer_mut(), state);
    KeyHints.render(layout.hints, f.buffer_mut(), state);

    if state.popup_is_open() {
        let popup_rect = match &state.popup {
            PopupType::Error(_) => centered_rect(50, 30, f.area()),
            _ => centered_rect(40, 50, f.area()),
        };

        Clear.render(popup_rect, f.buffer_mut());
        match &state.popup {
            PopupType::Error(_) => ErrorMsg.render(popup_rect, f.buffer_mut(), state),
            PopupType::Help => HelpMsg.render(popup_rect, f.buffer_mut(), state),
            PopupType::None => (),
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_labels_and_times() {
        let mut state = crate::app_core::test_state();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        terminal.draw(|f| render(f, &mut state)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("harry"));
        assert!(text.contains("Unknown Artist"));
        assert!(text.contains("0:00"));
        assert!(text.contains("3:00"));
        assert!(state.scrubber_area.width > 0);
    }

    #[test]
    fn error_popup_is_drawn() {
        let mut state = crate::app_core::test_state();
        state.player.toggle_play();
        state.check_player_error();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, &mut state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Playback failed"));
        assert!(text.contains("<Esc> dismiss"));
    }

    #[test]
    fn survives_tiny_terminal() {
        let mut state = crate::app_core::test_state();
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        terminal.draw(|f| render(f, &mut state)).unwrap();
    }
}
