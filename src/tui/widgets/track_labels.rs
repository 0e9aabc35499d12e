use crate::{truncate_at_last_space, ui_state::UiState};
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

pub struct TrackLabels;
impl StatefulWidget for TrackLabels {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let [title_area, artist_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let limit = area.width.saturating_sub(4) as usize;
        let title = truncate_at_last_space(&state.track.title, limit);
        let artist = truncate_at_last_space(&state.track.artist, limit);

        Line::from(title)
            .bold()
            .fg(state.theme.text)
            .centered()
            .render(title_area, buf);

        Line::from(artist)
            .fg(state.theme.text_muted)
            .centered()
            .render(artist_area, buf);
    }
}
