//! Properties-Panel (rechte Seitenleiste): Geofence-Formular und bestehende Geofences.

use crate::app::{AppIntent, AppState};
use crate::core::{CanonicalGeometry, GeofenceDraft, GeofenceStatus};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Neuer Geofence");
            ui.separator();

            render_geometry_info(ui, state, &mut events);
            ui.separator();

            render_draft_form(ui, &state.capture.draft, &mut events);
            ui.separator();

            render_payload_actions(ui, state, &mut events);
            ui.separator();

            render_geofence_list(ui, state, &mut events);
        });

    events
}

fn render_geometry_info(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    match &state.capture.geometry {
        None => {
            ui.label("Keine Form gezeichnet");
        }
        Some(CanonicalGeometry::Polygon { ring }) => {
            ui.label(format!("Polygon: {} Punkte", ring.len()));
        }
        Some(CanonicalGeometry::Circle { radius_meters, .. }) => {
            ui.label(format!("Kreis: Radius {:.1} m", radius_meters));
        }
    }

    if state.capture.has_geometry() {
        let center = state.capture.reference_point;
        ui.label(format!(
            "Mittelpunkt: {:.6}, {:.6}",
            center.latitude, center.longitude
        ));
        if ui.small_button("Auf Form zentrieren").clicked() {
            events.push(AppIntent::FocusCaptureRequested);
        }
    }
}

/// Formularfelder; Änderungen werden als vollständiger Entwurf gemeldet.
fn render_draft_form(ui: &mut egui::Ui, draft: &GeofenceDraft, events: &mut Vec<AppIntent>) {
    let mut edited = draft.clone();

    egui::Grid::new("draft_form")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut edited.name);
            ui.end_row();

            ui.label("Beschreibung");
            ui.text_edit_multiline(&mut edited.description);
            ui.end_row();

            ui.label("Höhe min (m)");
            ui.add(
                egui::DragValue::new(&mut edited.altitude_min_meters)
                    .range(0.0..=10_000.0)
                    .speed(1.0),
            );
            ui.end_row();

            ui.label("Höhe max (m)");
            ui.add(
                egui::DragValue::new(&mut edited.altitude_max_meters)
                    .range(0.0..=10_000.0)
                    .speed(1.0),
            );
            ui.end_row();

            ui.label("Status");
            egui::ComboBox::from_id_salt("draft_status")
                .selected_text(edited.status.label())
                .show_ui(ui, |ui| {
                    for status in GeofenceStatus::ALL {
                        ui.selectable_value(&mut edited.status, status, status.label());
                    }
                });
            ui.end_row();

            ui.label("Priorität");
            ui.add(egui::Slider::new(&mut edited.priority, 1..=5));
            ui.end_row();
        });

    if edited != *draft {
        events.push(AppIntent::DraftEdited { draft: edited });
    }
}

fn render_payload_actions(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        if ui.button("Prüfen").clicked() {
            events.push(AppIntent::SubmitDraftRequested);
        }
        if ui
            .add_enabled(
                state.capture.has_geometry(),
                egui::Button::new("Payload speichern..."),
            )
            .clicked()
        {
            events.push(AppIntent::ExportPayloadRequested);
        }
    });

    if let Some(json) = &state.ui.payload_json {
        ui.collapsing("Payload (JSON)", |ui| {
            if ui.small_button("In Zwischenablage kopieren").clicked() {
                ui.ctx().copy_text(json.clone());
            }
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    ui.monospace(json.as_str());
                });
        });
    }
}

fn render_geofence_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label(format!("Bestehende Geofences: {}", state.geofence_count()));
    if state.geofences.is_empty() {
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("geofence_list")
        .show(ui, |ui| {
            for record in &state.geofences {
                ui.horizontal(|ui| {
                    let marker = if record.is_active() { "●" } else { "○" };
                    ui.label(format!("{} {}", marker, record.name))
                        .on_hover_text(record.description.as_deref().unwrap_or(""));
                    if ui.small_button("⌖").on_hover_text("Zentrieren").clicked() {
                        events.push(AppIntent::FocusGeofenceRequested {
                            id: record.id.clone(),
                        });
                    }
                });
            }
        });
}
