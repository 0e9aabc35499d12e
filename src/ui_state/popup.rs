use crate::ui_state::UiState;

#[derive(PartialEq, Debug, Clone)]
pub enum PopupType {
    None,
    Error(String),
    Help,
}

impl UiState {
    pub fn show_popup(&mut self, popup: PopupType) {
        self.popup = popup;
    }

    pub fn close_popup(&mut self) {
        self.popup = PopupType::None;
    }

    pub fn popup_is_open(&self) -> bool {
        self.popup != PopupType::None
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.popup {
            PopupType::Error(e) => Some(e.as_str()),
            _ => None,
        }
    }
}
