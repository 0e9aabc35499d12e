use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Flex, Layout},
    style::{Color, Stylize},
    text::Line,
    widgets::{StatefulWidget, Widget},
};

/// Stand-in album art: a hue gradient seeded by the album (or title)
/// with the title's initials in the middle
pub struct Cover;
impl StatefulWidget for Cover {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        if area.is_empty() {
            return;
        }

        let seed = hue_seed(state.track.album.as_deref().unwrap_or(&state.track.title));
        let diagonal = (area.width + area.height * 2) as f32;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let dx = (x - area.x) as f32;
                let dy = ((y - area.y) * 2) as f32;
                let progress = (dx + dy) / diagonal;

                let hue = (seed + progress * 90.0) % 360.0;
                let value = 0.85 - progress * 0.35;

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(hsv_to_rgb(hue, 0.75, value));
                }
            }
        }

        let [middle] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        Line::from(state.track.initials())
            .bold()
            .fg(Color::White)
            .centered()
            .render(middle, buf);
    }
}

fn hue_seed(name: &str) -> f32 {
    let hash = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    (hash % 360) as f32
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u16 {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::Rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
