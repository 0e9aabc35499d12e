use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TICK_MS: u64 = 100;

/// On-disk shape of `config.toml`. Every table and key is optional.
#[derive(Deserialize, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigImport {
    pub track: TrackImport,
    pub player: PlayerImport,
    pub theme: ThemeImport,
}

#[derive(Deserialize, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct TrackImport {
    pub path: Option<PathBuf>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration_secs: Option<f64>,
}

#[derive(Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerImport {
    pub tick_ms: u64,
}

impl Default for PlayerImport {
    fn default() -> Self {
        PlayerImport {
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

#[derive(Deserialize, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeImport {
    pub gradient_top: Option<String>,
    pub gradient_bottom: Option<String>,
    pub accent: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
}
