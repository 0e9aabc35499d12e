use ratatui::style::Color;

pub(super) fn parse_color(s: &str) -> Option<Color> {
    match s.trim() {
        s if s.starts_with('#') => parse_hex(s),
        s if s.starts_with("rgb(") => parse_rgb(s),
        s => try_from_str(s),
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

fn parse_rgb(s: &str) -> Option<Color> {
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let parts = inner.split(',').collect::<Vec<&str>>();

    match parts.as_slice() {
        [r, g, b] => Some(Color::Rgb(
            r.trim().parse().ok()?,
            g.trim().parse().ok()?,
            b.trim().parse().ok()?,
        )),
        _ => None,
    }
}

fn try_from_str(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "" | "none" => Some(Color::default()),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}
