mod cli;
mod color;
mod config_import;

pub use cli::Args;
pub use config_import::DEFAULT_TICK_MS;

use crate::{
    domain::TrackOverrides,
    expand_tilde,
    ui_state::Theme,
};
use color::parse_color;
use config_import::{ConfigImport, ThemeImport};
use ratatui::style::Color;
use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_DIRECTORY: &str = "scrubline";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid color for theme.{key}: \"{value}\"\nExpected \"#1DB954\", \"rgb(29, 185, 84)\" or a color name")]
    Color { key: &'static str, value: String },

    #[error("Track duration must be a positive number of seconds, got {0}")]
    Duration(f64),

    #[error("Tick interval must be at least 1ms")]
    Tick,

    #[error("No audio file given. Pass a path or set track.path in config.toml")]
    MissingTrack,

    #[error("Invalid track path: {0}")]
    TrackPath(String),
}

/// Everything the app needs at startup, merged from file and command line
#[derive(Debug)]
pub struct Config {
    pub track_path: PathBuf,
    pub overrides: TrackOverrides,
    pub tick: Duration,
    pub theme: Theme,
}

impl Config {
    /// Load the config file (explicit or default location) and layer
    /// command line values on top of it
    pub fn load(args: Args) -> Result<Self, ConfigError> {
        let import = match &args.config {
            Some(path) => read_file(path)?,
            None => match default_path() {
                Some(path) if path.exists() => read_file(&path)?,
                _ => ConfigImport::default(),
            },
        };

        Self::merge(import, args)
    }

    fn merge(import: ConfigImport, args: Args) -> Result<Self, ConfigError> {
        let track = import.track;

        let raw_path = args.path.or(track.path).ok_or(ConfigError::MissingTrack)?;
        let track_path =
            expand_tilde(&raw_path).map_err(|e| ConfigError::TrackPath(e.to_string()))?;

        let duration = args
            .duration
            .or(track.duration_secs)
            .map(|secs| match secs > 0.0 {
                true => Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::Duration(secs)),
                false => Err(ConfigError::Duration(secs)),
            })
            .transpose()?;

        if import.player.tick_ms == 0 {
            return Err(ConfigError::Tick);
        }

        Ok(Config {
            track_path,
            overrides: TrackOverrides {
                title: args.title.or(track.title),
                artist: args.artist.or(track.artist),
                album: track.album,
                duration,
            },
            tick: Duration::from_millis(import.player.tick_ms),
            theme: build_theme(&import.theme)?,
        })
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
}

fn read_file(path: &Path) -> Result<ConfigImport, ConfigError> {
    let file_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded config from {}", path.display());

    toml::from_str::<ConfigImport>(&file_str).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn build_theme(import: &ThemeImport) -> Result<Theme, ConfigError> {
    let defaults = Theme::default();

    let pick = |key: &'static str, value: &Option<String>, fallback: Color| match value {
        Some(v) => parse_color(v).ok_or_else(|| ConfigError::Color {
            key,
            value: v.clone(),
        }),
        None => Ok(fallback),
    };

    Ok(Theme {
        gradient_top: pick("gradient_top", &import.gradient_top, defaults.gradient_top)?,
        gradient_bottom: pick(
            "gradient_bottom",
            &import.gradient_bottom,
            defaults.gradient_bottom,
        )?,
        accent: pick("accent", &import.accent, defaults.accent)?,
        text: pick("text", &import.text, defaults.text)?,
        text_muted: pick("text_muted", &import.text_muted, defaults.text_muted)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args_for(path: &str) -> Args {
        Args {
            path: Some(PathBuf::from(path)),
            ..Default::default()
        }
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = Config::merge(ConfigImport::default(), args_for("/music/harry.mp3")).unwrap();

        assert_eq!(config.track_path, PathBuf::from("/music/harry.mp3"));
        assert_eq!(config.tick, Duration::from_millis(DEFAULT_TICK_MS));
        assert_eq!(config.overrides.duration, None);
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn no_track_anywhere_is_an_error() {
        let err = Config::merge(ConfigImport::default(), Args::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingTrack));
    }

    #[test]
    fn file_values_are_read() {
        let file = write_config(
            r##"
            [track]
            path = "/music/harry.mp3"
            title = "Sign of the Times"
            duration_secs = 341.5

            [player]
            tick_ms = 50

            [theme]
            gradient_top = "#1DB954"
            accent = "rgb(255, 255, 255)"
            "##,
        );

        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = Config::load(args).unwrap();

        assert_eq!(config.track_path, PathBuf::from("/music/harry.mp3"));
        assert_eq!(config.overrides.title.as_deref(), Some("Sign of the Times"));
        assert_eq!(config.overrides.duration, Some(Duration::from_millis(341_500)));
        assert_eq!(config.tick, Duration::from_millis(50));
        assert_eq!(config.theme.gradient_top, Color::Rgb(0x1d, 0xb9, 0x54));
        assert_eq!(config.theme.accent, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn command_line_beats_file() {
        let file = write_config(
            r#"
            [track]
            path = "/music/from_file.mp3"
            artist = "File Artist"
            duration_secs = 100
            "#,
        );

        let args = Args {
            path: Some(PathBuf::from("/music/from_cli.mp3")),
            artist: Some("Cli Artist".into()),
            duration: Some(180.0),
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = Config::load(args).unwrap();

        assert_eq!(config.track_path, PathBuf::from("/music/from_cli.mp3"));
        assert_eq!(config.overrides.artist.as_deref(), Some("Cli Artist"));
        assert_eq!(config.overrides.duration, Some(Duration::from_secs(180)));
    }

    #[test]
    fn rejects_bad_values() {
        let bad_color = write_config("[theme]\naccent = \"plaid\"\n");
        let args = Args {
            config: Some(bad_color.path().to_path_buf()),
            ..args_for("a.mp3")
        };
        assert!(matches!(
            Config::load(args),
            Err(ConfigError::Color { key: "accent", .. })
        ));

        let zero_tick = write_config("[player]\ntick_ms = 0\n");
        let args = Args {
            config: Some(zero_tick.path().to_path_buf()),
            ..args_for("a.mp3")
        };
        assert!(matches!(Config::load(args), Err(ConfigError::Tick)));

        let args = Args {
            duration: Some(-3.0),
            ..args_for("a.mp3")
        };
        assert!(matches!(
            Config::merge(ConfigImport::default(), args),
            Err(ConfigError::Duration(_))
        ));

        let huge = write_config("[track]\nduration_secs = 1e300\n");
        let args = Args {
            config: Some(huge.path().to_path_buf()),
            ..args_for("a.mp3")
        };
        assert!(matches!(Config::load(args), Err(ConfigError::Duration(_))));

        let args = Args {
            duration: Some(f64::INFINITY),
            ..args_for("a.mp3")
        };
        assert!(matches!(
            Config::merge(ConfigImport::default(), args),
            Err(ConfigError::Duration(_))
        ));
    }

    #[test]
    fn unknown_keys_and_missing_files_are_reported() {
        let typo = write_config("[player]\ntick = 10\n");
        let args = Args {
            config: Some(typo.path().to_path_buf()),
            ..args_for("a.mp3")
        };
        assert!(matches!(Config::load(args), Err(ConfigError::Parse { .. })));

        let args = Args {
            config: Some(PathBuf::from("/no/such/scrubline.toml")),
            ..args_for("a.mp3")
        };
        assert!(matches!(Config::load(args), Err(ConfigError::Read { .. })));
    }
}
