mod controller;
mod state;
mod ticker;

pub use controller::PlaybackController;
pub use state::{ProgressState, SinkCommand, Transition};
pub use ticker::{MAX_CATCH_UP, Ticker};
