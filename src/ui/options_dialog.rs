//! Optionen-Dialog für Startansicht, Erfassung und Farben.

use super::map_view::color32;
use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Erfassung ───────────────────────────────────
                    ui.collapsing("Erfassung", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Lasso-Toleranz (°):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.lasso_tolerance_deg)
                                        .range(0.000_001..=0.01)
                                        .speed(0.000_01)
                                        .max_decimals(6),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Polygon-Schließradius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.polygon_close_radius_px)
                                        .range(2.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Ersatzradius Geofence (m):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.fallback_geofence_radius_m)
                                        .range(1.0..=100_000.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Start-Breite:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.home_latitude)
                                        .range(-85.0..=85.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Start-Länge:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.home_longitude)
                                        .range(-180.0..=180.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Start-Zoom:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.home_zoom)
                                        .range(1.0..=19.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_step)
                                        .range(0.1..=3.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Mausrad):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(0.05..=1.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Farben", |ui| {
                        changed |= color_edit(ui, "Form-Kontur:", &mut opts.shape_stroke_color);
                        changed |= color_edit(ui, "Form-Füllung:", &mut opts.shape_fill_color);
                        changed |= color_edit(ui, "Vorschau:", &mut opts.preview_color);
                        changed |=
                            color_edit(ui, "Geofence aktiv:", &mut opts.geofence_active_color);
                        changed |=
                            color_edit(ui, "Geofence inaktiv:", &mut opts.geofence_inactive_color);
                    });
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_srgba_unmultiplied().map(|v| v as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
