//! Application-Layer: Controller, State, Events, Zeichen-Session und Werkzeuge.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Zeichen-Session (Modus-Zustandsautomat, Lasso-Erfassung)
pub mod session;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Session, Erfassung, View, Dialoge).
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use session::{DrawingMode, DrawingObserver, DrawingSession};
pub use state::{AppState, CaptureState, StatusMessage, StatusSeverity, UiState, ViewState};
pub use tools::{ShapeTool, ToolAction, ToolManager, ToolPreview};
