use super::POPUP_PADDING;
use crate::ui_state::UiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};

/// Popup for a track that could not be loaded
pub struct ErrorMsg;
impl StatefulWidget for ErrorMsg {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &state.theme;
        let message = state.get_error().unwrap_or_default();

        let lines = vec![
            Line::from(state.track.title.as_str()).fg(theme.accent).bold(),
            Line::default(),
            Line::from(message).fg(theme.text),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme.accent)
                    .title(" Playback failed ")
                    .title_bottom(" <Esc> dismiss ")
                    .title_alignment(Alignment::Center)
                    .padding(POPUP_PADDING),
            )
            .bg(theme.gradient_bottom)
            .render(area, buf);
    }
}
