mod layout;
mod renderer;
mod widgets;

pub use layout::AppLayout;
pub use renderer::render;
pub use widgets::{
    Background, Cover, ErrorMsg, HelpMsg, KeyHints, PlayButton, Scrubber, Timer, TrackLabels,
};
