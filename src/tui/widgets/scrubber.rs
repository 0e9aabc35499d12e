use crate::ui_state::UiState;
use ratatui::{
    style::Style,
    widgets::{LineGauge, StatefulWidget, Widget},
};

/// Slider over the track. Shows the scrub target while the user is
/// seeking and the playhead otherwise.
pub struct Scrubber;
impl StatefulWidget for Scrubber {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        state.scrubber_area = area;

        let filled = match state.player.is_seeking() {
            true => Style::new().fg(state.theme.accent).bold(),
            false => Style::new().fg(state.theme.text),
        };

        LineGauge::default()
            .filled_style(filled)
            .unfilled_style(Style::new().fg(state.theme.text_muted))
            .filled_symbol("━")
            .unfilled_symbol("─")
            .label("")
            .ratio(state.player.slider_position())
            .render(area, buf);
    }
}
