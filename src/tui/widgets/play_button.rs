use super::{PAUSE_ICON, PLAY_ICON};
use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    text::Line,
    widgets::{Block, BorderType, StatefulWidget, Widget},
};

pub struct PlayButton;
impl StatefulWidget for PlayButton {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let icon = match state.player.is_playing() {
            true => PAUSE_ICON,
            false => PLAY_ICON,
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .fg(state.theme.accent);
        let inner = block.inner(area);

        block.render(area, buf);
        Line::from(icon)
            .bold()
            .fg(state.theme.accent)
            .centered()
            .render(inner, buf);
    }
}
