use crate::ui_state::UiState;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::StatefulWidget,
};

/// Vertical two-color gradient behind the whole screen
pub struct Background;
impl StatefulWidget for Background {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let span = area.height.saturating_sub(1).max(1) as f32;

        for (i, y) in (area.top()..area.bottom()).enumerate() {
            let bg = state.theme.background_at(i as f32 / span);
            buf.set_style(Rect::new(area.x, y, area.width, 1), Style::new().bg(bg));
        }
    }
}
