use anyhow::{Result, anyhow};
use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod logging;
pub mod player;
pub mod progress;
pub mod tui;
pub mod ui_state;

pub use config::Config;
pub use progress::PlaybackController;

pub enum DurationStyle {
    /// `3:07`
    Compact,
    /// `3:07.4`
    CompactTenths,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let tenths = duration.subsec_millis() / 100;
    let mins = secs / 60;
    secs %= 60;

    match style {
        DurationStyle::Compact => format!("{mins}:{secs:02}"),
        DurationStyle::CompactTenths => format!("{mins}:{secs:02}.{tenths}"),
    }
}

fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit)
        .unwrap_or(s.len());

    match s[..byte_limit].rfind(' ') {
        Some(last_space) => {
            let mut truncated = s[..last_space].to_string();
            truncated.push('…');
            truncated
        }
        None => {
            let char_boundary = s[..byte_limit]
                .char_indices()
                .map(|(i, _)| i)
                .last()
                .unwrap_or(0);

            let mut truncated = s[..char_boundary].to_string();
            truncated.push('…');
            truncated
        }
    }
}

pub fn overwrite_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout
        .execute(MoveToColumn(0))?
        .execute(Clear(ClearType::CurrentLine))?
        .execute(Print(message))?;
    stdout.flush()
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error expanding tilde (~) in {path_str}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_durations() {
        let d = |ms| Duration::from_millis(ms);
        assert_eq!(get_readable_duration(d(0), DurationStyle::Compact), "0:00");
        assert_eq!(get_readable_duration(d(59_900), DurationStyle::Compact), "0:59");
        assert_eq!(get_readable_duration(d(180_000), DurationStyle::Compact), "3:00");
        assert_eq!(get_readable_duration(d(3_725_000), DurationStyle::Compact), "62:05");
        assert_eq!(get_readable_duration(d(90_450), DurationStyle::CompactTenths), "1:30.4");
    }

    #[test]
    fn truncation_prefers_word_breaks() {
        assert_eq!(truncate_at_last_space("short", 10), "short");
        assert_eq!(truncate_at_last_space("As It Was by Harry", 10), "As It Was…");
        assert_eq!(truncate_at_last_space("Watermelon", 5), "Wate…");
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("/abs/song.mp3").unwrap(), PathBuf::from("/abs/song.mp3"));
        assert_eq!(expand_tilde("rel/song.mp3").unwrap(), PathBuf::from("rel/song.mp3"));
        assert!(expand_tilde("~user/song.mp3").is_err());

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/Music/a.mp3").unwrap(), home.join("Music/a.mp3"));
        }
    }
}
