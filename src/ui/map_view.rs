//! Karten-Viewport: Gradnetz, bestehende Geofences, erfasste Form und Vorschauen.
//!
//! Reines Zeichnen mit dem egui-Painter; Eingaben laufen über `InputState`.

use crate::app::{AppState, ToolPreview};
use crate::core::{CanonicalGeometry, GeoPoint, MapCamera};
use glam::DVec2;

/// Sinnvolle Gitterabstände in Grad.
const GRID_STEPS_DEG: [f64; 13] = [
    0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0,
];
/// Angestrebter Linienabstand des Gradnetzes in Pixel.
const GRID_TARGET_PX: f64 = 120.0;
const SHAPE_STROKE_WIDTH: f32 = 2.0;
const VERTEX_RADIUS_PX: f32 = 3.0;

/// Wandelt eine RGBA-Farbe (0..1) in `Color32`.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Projektion Geo → Bildschirm für einen Viewport-Bereich.
struct Projector<'a> {
    camera: &'a MapCamera,
    rect: egui::Rect,
}

impl Projector<'_> {
    fn to_screen(&self, point: GeoPoint) -> egui::Pos2 {
        let size = DVec2::new(self.rect.width() as f64, self.rect.height() as f64);
        let local = self.camera.geo_to_screen(point, size);
        self.rect.min + egui::vec2(local.x as f32, local.y as f32)
    }

    fn radius_px(&self, center: GeoPoint, radius_meters: f64) -> f32 {
        let mpp = self.camera.meters_per_pixel(center.latitude);
        if mpp > 0.0 {
            (radius_meters / mpp) as f32
        } else {
            0.0
        }
    }
}

/// Zeichnet den kompletten Karteninhalt in `rect`.
pub fn render_map(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let projector = Projector {
        camera: &state.view.camera,
        rect,
    };
    let options = &state.options;

    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(242));
    paint_graticule(painter, &projector);

    // Bestehende Geofences (nur Anzeige)
    for record in &state.geofences {
        let color = if record.is_active() {
            color32(options.geofence_active_color)
        } else {
            color32(options.geofence_inactive_color)
        };
        let geometry = record.display_geometry(options.fallback_geofence_radius_m);
        paint_geometry(painter, &projector, &geometry, color, color.gamma_multiply(0.2));
    }

    // Zuletzt erfasste Form
    if let Some(geometry) = &state.capture.geometry {
        paint_geometry(
            painter,
            &projector,
            geometry,
            color32(options.shape_stroke_color),
            color32(options.shape_fill_color),
        );
    }

    let preview_color = color32(options.preview_color);

    // Lasso-Spur gestrichelt
    if state.capture.preview.len() >= 2 {
        let points: Vec<egui::Pos2> = state
            .capture
            .preview
            .iter()
            .map(|&p| projector.to_screen(p))
            .collect();
        painter.extend(egui::Shape::dashed_line(
            &points,
            egui::Stroke::new(SHAPE_STROKE_WIDTH, preview_color),
            6.0,
            4.0,
        ));
    }

    let preview = state.session.tool_preview(state.view.cursor_geo);
    paint_tool_preview(painter, &projector, &preview, preview_color);
}

/// Zeichnet eine kanonische Geometrie mit Kontur und Füllung.
fn paint_geometry(
    painter: &egui::Painter,
    projector: &Projector,
    geometry: &CanonicalGeometry,
    stroke_color: egui::Color32,
    fill_color: egui::Color32,
) {
    let stroke = egui::Stroke::new(SHAPE_STROKE_WIDTH, stroke_color);
    match geometry {
        CanonicalGeometry::Polygon { ring } => {
            let points: Vec<egui::Pos2> = ring.iter().map(|&p| projector.to_screen(p)).collect();
            fill_ring(painter, &points, fill_color);
            painter.add(egui::Shape::line(points, stroke));
        }
        CanonicalGeometry::Circle {
            center,
            radius_meters,
        } => {
            let center_px = projector.to_screen(*center);
            let radius_px = projector.radius_px(*center, *radius_meters);
            painter.circle(center_px, radius_px, fill_color, stroke);
        }
    }
}

/// Trianguliert einen (ggf. geschlossenen) Ring per Ear-Clipping.
///
/// Liefert Dreiecks-Indizes in `points`; konkave Ringe (Lasso) werden korrekt
/// zerlegt. Leer bei weniger als drei Punkten oder entartetem Ring.
fn triangulate_ring(points: &[egui::Pos2]) -> Vec<u32> {
    let open = match points {
        [first, .., last] if first == last => &points[..points.len() - 1],
        _ => points,
    };
    if open.len() < 3 {
        return Vec::new();
    }

    let coords: Vec<f64> = open
        .iter()
        .flat_map(|p| [p.x as f64, p.y as f64])
        .collect();
    match earcutr::earcut(&coords, &[], 2) {
        Ok(indices) => indices.into_iter().map(|i| i as u32).collect(),
        Err(e) => {
            log::debug!("Ring nicht triangulierbar: {:?}", e);
            Vec::new()
        }
    }
}

/// Füllt einen Polygon-Ring als Dreiecksnetz.
fn fill_ring(painter: &egui::Painter, points: &[egui::Pos2], color: egui::Color32) {
    let indices = triangulate_ring(points);
    if indices.is_empty() {
        return;
    }
    let mut mesh = egui::Mesh::default();
    for &pos in points {
        mesh.colored_vertex(pos, color);
    }
    for tri in indices.chunks_exact(3) {
        mesh.add_triangle(tri[0], tri[1], tri[2]);
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Zeichnet die Vorschau des aktiven Form-Werkzeugs.
fn paint_tool_preview(
    painter: &egui::Painter,
    projector: &Projector,
    preview: &ToolPreview,
    color: egui::Color32,
) {
    let stroke = egui::Stroke::new(SHAPE_STROKE_WIDTH, color);
    match preview {
        ToolPreview::Empty => {}
        ToolPreview::Path { points, closed } => {
            let screen: Vec<egui::Pos2> = points.iter().map(|&p| projector.to_screen(p)).collect();
            for &pos in &screen {
                painter.circle_filled(pos, VERTEX_RADIUS_PX, color);
            }
            if screen.len() >= 2 {
                let shape = if *closed {
                    egui::Shape::closed_line(screen, stroke)
                } else {
                    egui::Shape::line(screen, stroke)
                };
                painter.add(shape);
            }
        }
        ToolPreview::Circle {
            center,
            radius_meters,
        } => {
            let center_px = projector.to_screen(*center);
            painter.circle_filled(center_px, VERTEX_RADIUS_PX, color);
            let radius_px = projector.radius_px(*center, *radius_meters);
            painter.circle_stroke(center_px, radius_px, stroke);
        }
    }
}

/// Gradnetz mit zoomabhängigem Linienabstand.
fn paint_graticule(painter: &egui::Painter, projector: &Projector) {
    let rect = projector.rect;
    let target_deg = projector.camera.degrees_per_pixel() * GRID_TARGET_PX;
    let step = GRID_STEPS_DEG
        .iter()
        .copied()
        .find(|&s| s >= target_deg)
        .unwrap_or(GRID_STEPS_DEG[GRID_STEPS_DEG.len() - 1]);

    let size = DVec2::new(rect.width() as f64, rect.height() as f64);
    let top_left = projector.camera.screen_to_geo(DVec2::ZERO, size);
    let bottom_right = projector.camera.screen_to_geo(size, size);
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(215));

    let mut lng = (top_left.longitude / step).floor() * step;
    while lng <= bottom_right.longitude {
        let x = projector.to_screen(GeoPoint::new(top_left.latitude, lng)).x;
        painter.vline(x, rect.y_range(), stroke);
        lng += step;
    }

    let mut lat = (bottom_right.latitude / step).floor() * step;
    while lat <= top_left.latitude {
        let y = projector.to_screen(GeoPoint::new(lat, top_left.longitude)).y;
        painter.hline(rect.x_range(), y, stroke);
        lat += step;
    }
}
