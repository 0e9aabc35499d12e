mod mode;
mod popup;
mod theme;
mod ui_state;

pub use mode::Mode;
pub use popup::PopupType;
pub use theme::{Theme, blend};
pub use ui_state::UiState;
