//! Geofence Draw Editor.
//!
//! Interaktive Erfassung von Geofence-Geometrien (Lasso, Polygon, Rechteck, Kreis)
//! auf einer Kartenansicht mit egui.

use eframe::egui;
use geofence_draw_editor::app::StatusMessage;
use geofence_draw_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Geofence Draw Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionaler Startparameter: Geofence-Datei (JSON)
        let initial_file = std::env::args().nth(1);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Geofence Draw Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Geofence Draw Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(initial_file)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(initial_file: Option<String>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        };

        if let Some(path) = initial_file {
            app.process_events(vec![AppIntent::GeofencesFileSelected { path }]);
        }

        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::ViewportResized { .. } | AppIntent::CursorMoved { .. }
            )
        });

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                ui::render_map(&ui.painter_at(rect), rect, &self.state);

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    &self.state.view,
                    self.state.session.mode(),
                    self.state.session.captures_drag(),
                    &self.state.options,
                ));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(StatusMessage::error(format!("{:#}", e)));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.session.is_capturing()
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
