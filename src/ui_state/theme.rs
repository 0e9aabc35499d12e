use ratatui::style::Color;

const SPOTIFY_GREEN: Color = Color::Rgb(29, 185, 84);
const NEAR_BLACK: Color = Color::Rgb(10, 10, 10);
const DARK_WHITE: Color = Color::Rgb(235, 235, 235);
const MID_GRAY: Color = Color::Rgb(140, 140, 140);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub gradient_top: Color,
    pub gradient_bottom: Color,
    pub accent: Color,
    pub text: Color,
    pub text_muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            gradient_top: SPOTIFY_GREEN,
            gradient_bottom: NEAR_BLACK,
            accent: Color::White,
            text: DARK_WHITE,
            text_muted: MID_GRAY,
        }
    }
}

impl Theme {
    /// Background color `ratio` of the way down the screen
    pub fn background_at(&self, ratio: f32) -> Color {
        blend(self.gradient_top, self.gradient_bottom, ratio)
    }
}

/// Linear blend between two colors. Named or indexed colors can't be
/// mixed, so those snap to whichever end is closer.
pub fn blend(from: Color, to: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);

    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * ratio).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if ratio < 0.5 => from,
        _ => to,
    }
}
