//! Zeichen-Session: Modus-Zustandsautomat, Lasso-Erfassung und Delegation
//! an die Form-Werkzeuge.
//!
//! Zustände: `None` (Leerlauf), `Lasso` (optional mit laufender Erfassung),
//! `Polygon`/`Rectangle`/`Circle` (Werkzeug aktiv). Nach jeder abgeschlossenen
//! Form kehrt die Session nach `None` zurück.

mod observer;

pub use observer::DrawingObserver;

use super::tools::{ToolAction, ToolManager, ToolPreview};
use crate::core::{normalize, simplify, CaptureResult, DrawnPrimitive, GeoPoint, ShapeKind};
use crate::shared::LASSO_TOLERANCE_DEG;

/// Zeichenmodus. Genau einer ist aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Leerlauf (Karte verschieben)
    #[default]
    None,
    /// Freihand-Lasso
    Lasso,
    /// Polygon-Werkzeug
    Polygon,
    /// Rechteck-Werkzeug
    Rectangle,
    /// Kreis-Werkzeug
    Circle,
}

impl DrawingMode {
    /// Alle Zeichenmodi in Toolbar-Reihenfolge (ohne `None`).
    pub const DRAWING: [DrawingMode; 4] = [
        DrawingMode::Lasso,
        DrawingMode::Polygon,
        DrawingMode::Rectangle,
        DrawingMode::Circle,
    ];

    /// Zugehörige Primitiv-Art (`None` für den Leerlauf).
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            DrawingMode::None => None,
            DrawingMode::Lasso => Some(ShapeKind::Lasso),
            DrawingMode::Polygon => Some(ShapeKind::Polygon),
            DrawingMode::Rectangle => Some(ShapeKind::Rectangle),
            DrawingMode::Circle => Some(ShapeKind::Circle),
        }
    }

    /// Ob der Modus von einem Form-Werkzeug bedient wird.
    pub fn is_tool(self) -> bool {
        matches!(
            self,
            DrawingMode::Polygon | DrawingMode::Rectangle | DrawingMode::Circle
        )
    }

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            DrawingMode::None => "Navigieren",
            DrawingMode::Lasso => "Lasso (Freihand)",
            DrawingMode::Polygon => "Polygon",
            DrawingMode::Rectangle => "Rechteck",
            DrawingMode::Circle => "Kreis",
        }
    }
}

/// Zeichen-Session einer Kartenansicht.
///
/// Besitzt Modus, Lasso-Puffer und Werkzeuge exklusiv. Ausgaben gehen
/// ausschließlich über den übergebenen [`DrawingObserver`].
pub struct DrawingSession {
    mode: DrawingMode,
    is_capturing: bool,
    lasso_points: Vec<GeoPoint>,
    tools: ToolManager,
    current: Option<CaptureResult>,
    lasso_tolerance: f64,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(LASSO_TOLERANCE_DEG)
    }
}

impl DrawingSession {
    /// Erstellt eine Session im Leerlauf mit der gegebenen Lasso-Toleranz (Grad).
    pub fn new(lasso_tolerance: f64) -> Self {
        Self {
            mode: DrawingMode::None,
            is_capturing: false,
            lasso_points: Vec::new(),
            tools: ToolManager::new(),
            current: None,
            lasso_tolerance: sanitize_tolerance(lasso_tolerance),
        }
    }

    // ── Abfragen ─────────────────────────────────────────────────

    /// Aktiver Modus.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// `true` nur zwischen Lasso-Press und -Release.
    pub fn is_capturing(&self) -> bool {
        self.is_capturing
    }

    /// Bisher erfasste Lasso-Punkte (volle Auflösung).
    pub fn lasso_points(&self) -> &[GeoPoint] {
        &self.lasso_points
    }

    /// Aktuell gültige Erfassung (wird durch Start/Clear ungültig).
    pub fn current(&self) -> Option<&CaptureResult> {
        self.current.as_ref()
    }

    /// Douglas-Peucker-Toleranz für Lasso-Spuren (Grad).
    pub fn lasso_tolerance(&self) -> f64 {
        self.lasso_tolerance
    }

    /// Setzt die Lasso-Toleranz. Werte ≤ 0 werden durch den Standard ersetzt.
    pub fn set_lasso_tolerance(&mut self, tolerance: f64) {
        self.lasso_tolerance = sanitize_tolerance(tolerance);
    }

    /// Werkzeugverwaltung (Freigabe, Snap-Radius).
    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    /// Mutable Werkzeugverwaltung.
    pub fn tools_mut(&mut self) -> &mut ToolManager {
        &mut self.tools
    }

    /// Ob Drag-Gesten gezeichnet statt als Kartenverschiebung behandelt werden.
    pub fn captures_drag(&self) -> bool {
        match self.mode {
            DrawingMode::Lasso => true,
            _ => self
                .tools
                .active_tool()
                .is_some_and(|tool| tool.captures_drag()),
        }
    }

    /// Vorschau des aktiven Werkzeugs.
    pub fn tool_preview(&self, cursor_pos: Option<GeoPoint>) -> ToolPreview {
        self.tools
            .active_tool()
            .map(|tool| tool.preview(cursor_pos))
            .unwrap_or_default()
    }

    /// Statustext für die Statusleiste.
    pub fn status_text(&self) -> &str {
        match self.mode {
            DrawingMode::None => "Karte ziehen zum Verschieben, Mausrad zum Zoomen",
            DrawingMode::Lasso if self.is_capturing => "Loslassen zum Abschließen",
            DrawingMode::Lasso => "Klicken und ziehen zum freien Zeichnen",
            _ => self
                .tools
                .active_tool()
                .map_or("Werkzeug nicht verfügbar", |tool| tool.status_text()),
        }
    }

    // ── Moduswechsel ─────────────────────────────────────────────

    /// Bricht laufende Eingaben ab und wechselt in `mode`.
    ///
    /// Erneuter Start des aktiven Modus setzt ihn zurück. Ein gesperrtes
    /// Werkzeug führt in den Leerlauf.
    pub fn start_drawing(&mut self, mode: DrawingMode, observer: &mut dyn DrawingObserver) {
        self.cancel_in_flight(observer);
        self.current = None;

        self.mode = match mode {
            DrawingMode::Polygon | DrawingMode::Rectangle | DrawingMode::Circle => {
                let activated = mode
                    .shape_kind()
                    .is_some_and(|kind| self.tools.activate(kind));
                if activated {
                    mode
                } else {
                    log::warn!("Werkzeug für {:?} ist gesperrt", mode);
                    DrawingMode::None
                }
            }
            DrawingMode::Lasso | DrawingMode::None => mode,
        };
        log::debug!("Zeichenmodus: {:?}", self.mode);
    }

    /// Entfernt Vorschau und Erfassung, kehrt in den Leerlauf zurück und
    /// meldet `(None, (0, 0))`.
    pub fn clear_drawing(&mut self, observer: &mut dyn DrawingObserver) {
        self.lasso_points.clear();
        self.is_capturing = false;
        observer.clear_preview();
        self.tools.reset();
        self.mode = DrawingMode::None;
        self.current = None;

        let cleared = CaptureResult::cleared();
        observer.geometry_captured(cleared.geometry.as_ref(), cleared.reference_point);
        log::info!("Zeichnung gelöscht");
    }

    // ── Zeiger-Events ────────────────────────────────────────────

    /// Maustaste gedrückt.
    pub fn on_press(&mut self, point: GeoPoint, observer: &mut dyn DrawingObserver) {
        match self.mode {
            DrawingMode::None => {}
            DrawingMode::Lasso => {
                self.is_capturing = true;
                self.lasso_points.clear();
                self.lasso_points.push(point);
                observer.render_preview(&self.lasso_points);
            }
            _ => {
                let action = self
                    .tools
                    .active_tool_mut()
                    .map(|tool| tool.on_press(point));
                self.handle_tool_action(action, observer);
            }
        }
    }

    /// Zeiger bewegt.
    pub fn on_move(&mut self, point: GeoPoint, observer: &mut dyn DrawingObserver) {
        match self.mode {
            DrawingMode::Lasso if self.is_capturing => {
                self.lasso_points.push(point);
                observer.render_preview(&self.lasso_points);
            }
            mode if mode.is_tool() => {
                if let Some(tool) = self.tools.active_tool_mut() {
                    tool.on_move(point);
                }
            }
            _ => {}
        }
    }

    /// Maustaste losgelassen.
    ///
    /// Im Lasso-Modus wird die Spur vereinfacht und als Ring normalisiert;
    /// Spuren mit höchstens zwei Punkten gelten als Fehlklick.
    pub fn on_release(&mut self, point: GeoPoint, observer: &mut dyn DrawingObserver) {
        match self.mode {
            DrawingMode::Lasso if self.is_capturing => {
                self.is_capturing = false;
                let trace = std::mem::take(&mut self.lasso_points);
                observer.clear_preview();

                if trace.len() > 2 {
                    let simplified = simplify(&trace, self.lasso_tolerance);
                    log::debug!(
                        "Lasso vereinfacht: {} → {} Punkte",
                        trace.len(),
                        simplified.len()
                    );
                    self.complete(ShapeKind::Lasso, &DrawnPrimitive::Ring(simplified), observer);
                } else {
                    log::debug!("Lasso mit {} Punkten verworfen", trace.len());
                }
                self.mode = DrawingMode::None;
            }
            mode if mode.is_tool() => {
                let action = self
                    .tools
                    .active_tool_mut()
                    .map(|tool| tool.on_release(point));
                self.handle_tool_action(action, observer);
            }
            _ => {}
        }
    }

    /// Doppelklick (schließt Polygone).
    pub fn on_double_click(&mut self, observer: &mut dyn DrawingObserver) {
        let action = self
            .tools
            .active_tool_mut()
            .map(|tool| tool.on_double_click());
        self.handle_tool_action(action, observer);
    }

    /// Explizite Bestätigung (Enter).
    pub fn confirm(&mut self, observer: &mut dyn DrawingObserver) {
        let action = self.tools.active_tool_mut().map(|tool| tool.confirm());
        self.handle_tool_action(action, observer);
    }

    /// Ein Werkzeug meldet ein fertiges Primitiv.
    ///
    /// Normalisiert, meldet das Ergebnis und kehrt in den Leerlauf zurück.
    pub fn on_tool_completed(
        &mut self,
        kind: ShapeKind,
        primitive: &DrawnPrimitive,
        observer: &mut dyn DrawingObserver,
    ) {
        self.tools.reset();
        self.complete(kind, primitive, observer);
        self.mode = DrawingMode::None;
    }

    // ── Intern ───────────────────────────────────────────────────

    fn handle_tool_action(&mut self, action: Option<ToolAction>, observer: &mut dyn DrawingObserver) {
        if action != Some(ToolAction::ReadyToExecute) {
            return;
        }
        let Some(tool) = self.tools.active_tool() else {
            return;
        };
        let kind = tool.kind();
        match tool.execute() {
            Some(primitive) => self.on_tool_completed(kind, &primitive, observer),
            None => log::warn!("Werkzeug {:?} meldet Bereitschaft ohne Ergebnis", kind),
        }
    }

    fn complete(&mut self, kind: ShapeKind, primitive: &DrawnPrimitive, observer: &mut dyn DrawingObserver) {
        let Some(result) = normalize(primitive, kind) else {
            log::debug!("Erfassung {:?} ohne gültige Geometrie ignoriert", kind);
            return;
        };
        observer.geometry_captured(result.geometry.as_ref(), result.reference_point);
        log::info!(
            "Geometrie erfasst: {:?} (Referenz {:.6}, {:.6})",
            kind,
            result.reference_point.latitude,
            result.reference_point.longitude
        );
        self.current = Some(result);
    }

    fn cancel_in_flight(&mut self, observer: &mut dyn DrawingObserver) {
        if self.is_capturing || !self.lasso_points.is_empty() {
            observer.clear_preview();
        }
        self.is_capturing = false;
        self.lasso_points.clear();
        self.tools.reset();
    }
}

fn sanitize_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        log::warn!(
            "Ungültige Lasso-Toleranz {}, verwende {}",
            tolerance,
            LASSO_TOLERANCE_DEG
        );
        LASSO_TOLERANCE_DEG
    }
}

#[cfg(test)]
mod tests;
