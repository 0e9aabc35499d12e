use ratatui::layout::{Constraint, Flex, Layout, Rect};

const MAX_CONTENT_WIDTH: u16 = 64;
const MAX_COVER_HEIGHT: u16 = 14;
/// Rows taken by everything below the cover
const FIXED_ROWS: u16 = 12;

pub struct AppLayout {
    pub cover: Rect,
    pub title: Rect,
    pub artist: Rect,
    pub scrubber: Rect,
    pub timer: Rect,
    pub button: Rect,
    pub hints: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let cover_height = area.height.saturating_sub(FIXED_ROWS).min(MAX_COVER_HEIGHT);

        let [column] = Layout::horizontal([Constraint::Max(MAX_CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(area);

        let [
            _,
            cover_row,
            _,
            title,
            artist,
            _,
            scrubber,
            timer,
            _,
            button_row,
            _,
            hints,
        ] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(cover_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(column);

        // Terminal cells are roughly twice as tall as they are wide
        let [cover] = Layout::horizontal([Constraint::Length(cover_height * 2)])
            .flex(Flex::Center)
            .areas(cover_row);

        let [button] = Layout::horizontal([Constraint::Length(9)])
            .flex(Flex::Center)
            .areas(button_row);

        let [scrubber] = Layout::horizontal([Constraint::Fill(1)])
            .horizontal_margin(2)
            .areas(scrubber);

        AppLayout {
            cover,
            title,
            artist,
            scrubber,
            timer,
            button,
            hints,
        }
    }
}
