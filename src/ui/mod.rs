//! UI-Komponenten: Menü, Toolbar, Properties, Karten-Viewport, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// Karten-Viewport (Painter-basiertes Rendering)
pub mod map_view;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Keyboard-Shortcuts und Viewport-Input sind in eigene Dateien extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use map_view::render_map;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
