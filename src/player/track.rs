use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Identifies the audio resource loaded for one play session.
///
/// A handle is minted by `AudioSink::load` and dropped when the
/// session stops, so two sessions never share one.
#[derive(Debug, Clone)]
pub struct TrackHandle {
    id: u64,
    path: PathBuf,
}

impl PartialEq for TrackHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl TrackHandle {
    pub fn new(path: PathBuf) -> Self {
        TrackHandle {
            id: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            path,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
