use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

pub struct KeyHints;
impl StatefulWidget for KeyHints {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let hints = match state.player.is_seeking() {
            true => " <Enter> jump here  <Esc> cancel ",
            false => " <Space> play/pause  <←/→> scrub  <?> help  <q> quit ",
        };

        Line::from(hints)
            .fg(state.theme.text_muted)
            .centered()
            .render(area, buf);
    }
}
