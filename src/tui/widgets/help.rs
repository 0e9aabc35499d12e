use super::POPUP_PADDING;
use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Space", "play / pause"),
    ("← →  h l", "scrub 1%"),
    ("⇧← ⇧→  H L", "scrub 5%"),
    ("Enter", "jump to scrub position"),
    ("Esc", "cancel scrub"),
    ("Mouse", "drag the bar to seek"),
    ("q  Ctrl-C", "quit"),
];

pub struct HelpMsg;
impl StatefulWidget for HelpMsg {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;

        let lines = BINDINGS
            .iter()
            .map(|(keys, what)| {
                Line::from_iter([
                    Span::from(format!("{keys:>12}  ")).fg(theme.accent).bold(),
                    Span::from(*what).fg(theme.text),
                ])
            })
            .collect::<Vec<_>>();

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" Keys ")
                    .title_bottom(" <Esc> close ")
                    .title_alignment(ratatui::layout::Alignment::Center)
                    .padding(POPUP_PADDING),
            )
            .bg(theme.gradient_bottom)
            .render(area, buf);
    }
}
