mod track_info;

pub use track_info::{FALLBACK_DURATION, TrackInfo, TrackOverrides, UNKNOWN_ARTIST};
