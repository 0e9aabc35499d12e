use clap::Parser;
use std::path::PathBuf;

/// Single-track terminal music player
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Audio file to play
    #[arg(env = "SCRUBLINE_TRACK")]
    pub path: Option<PathBuf>,

    /// Title shown above the scrubber
    #[arg(short, long)]
    pub title: Option<String>,

    /// Artist shown below the title
    #[arg(short, long)]
    pub artist: Option<String>,

    /// Track length in seconds, when tags are missing or wrong
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Config file to use instead of the default location
    #[arg(short, long, env = "SCRUBLINE_CONFIG")]
    pub config: Option<PathBuf>,
}
