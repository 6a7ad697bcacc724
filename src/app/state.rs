//! Application State: zentrale Datenhaltung.

mod app_state;
mod capture;
mod ui;
mod view;

pub use app_state::AppState;
pub use capture::CaptureState;
pub use ui::{StatusMessage, StatusSeverity, UiState};
pub use view::ViewState;
