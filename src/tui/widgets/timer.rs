use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

/// Elapsed time under the left end of the scrubber, total under the right
pub struct Timer;
impl StatefulWidget for Timer {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .horizontal_margin(2)
            .areas(area);

        Line::from(state.elapsed_display())
            .fg(state.theme.text)
            .left_aligned()
            .render(left, buf);

        Line::from(state.duration_display())
            .fg(state.theme.text)
            .right_aligned()
            .render(right, buf);
    }
}
