use lofty::prelude::*;
use lofty::error::LoftyError;
use lofty::probe::Probe;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, warn};

/// Length assumed for a track whose duration can be neither read nor configured
pub const FALLBACK_DURATION: Duration = Duration::from_secs(180);
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// What the screen shows about the loaded track
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: Duration,
}

/// Values supplied by config or command line. These beat file tags.
#[derive(Debug, Clone, Default)]
pub struct TrackOverrides {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

#[derive(Debug, Default)]
struct Tags {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<Duration>,
}

impl TrackInfo {
    pub fn resolve(path: PathBuf, overrides: TrackOverrides) -> Self {
        let tags = match read_tags(&path) {
            Ok(tags) => tags,
            Err(e) => {
                warn!("Could not read tags from {}: {e}", path.display());
                Tags::default()
            }
        };

        let title = overrides
            .title
            .or(tags.title)
            .unwrap_or_else(|| file_stem(&path));

        TrackInfo {
            title,
            artist: overrides
                .artist
                .or(tags.artist)
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: overrides.album.or(tags.album),
            duration: overrides
                .duration
                .or(tags.duration)
                .unwrap_or(FALLBACK_DURATION),
            path,
        }
    }

    /// Up to two initials from the title, used on the cover
    pub fn initials(&self) -> String {
        self.title
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn read_tags(path: &Path) -> Result<Tags, LoftyError> {
    let tagged_file = Probe::open(path)?.read()?;

    let duration = Some(tagged_file.properties().duration()).filter(|d| !d.is_zero());
    let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());

    let mut tags = Tags {
        duration,
        ..Default::default()
    };

    if let Some(tag) = tag {
        tags.title = tag.title().map(|s| s.to_string());
        tags.artist = tag.artist().map(|s| s.to_string());
        tags.album = tag.album().map(|s| s.to_string());
    }

    debug!(file = %path.display(), ?tags, "Read track tags");

    Ok(tags)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
