//! Trait-basiertes Werkzeugsystem für klickgesteuerte Formen.
//!
//! Jedes Form-Werkzeug implementiert den `ShapeTool`-Trait und wird beim
//! `ToolManager` registriert. Tools erzeugen reine Daten (`DrawnPrimitive`),
//! die Normalisierung erfolgt zentral in der `DrawingSession`.

/// Kreis-Tool: Mittelpunkt drücken, Radius aufziehen.
pub mod circle;
/// Polygon-Tool: Eckpunkte per Klick setzen.
pub mod polygon;
/// Rechteck-Tool: Ecke drücken, Gegenecke aufziehen.
pub mod rectangle;
/// ShapeTool-Trait, Schnittstelle für alle Form-Werkzeuge.
mod shape_tool;

pub use shape_tool::ShapeTool;

use crate::core::{GeoPoint, ShapeKind};

// ── Typen ────────────────────────────────────────────────────────

/// Rückgabe der Eingabe-Callbacks, steuert den Tool-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Eingabe registriert, weitere Eingabe nötig
    Continue,
    /// Form vollständig, bereit zur Ausführung
    ReadyToExecute,
}

/// Preview-Geometrie für das Rendering (halbtransparent im Viewport).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ToolPreview {
    /// Nichts anzuzeigen
    #[default]
    Empty,
    /// Linienzug (optional geschlossen)
    Path {
        /// Punkte des Linienzugs
        points: Vec<GeoPoint>,
        /// Letzten mit erstem Punkt verbinden
        closed: bool,
    },
    /// Kreis
    Circle {
        /// Mittelpunkt
        center: GeoPoint,
        /// Radius in Metern
        radius_meters: f64,
    },
}

// ── ToolManager ──────────────────────────────────────────────────

struct RegisteredTool {
    tool: Box<dyn ShapeTool>,
    enabled: bool,
}

/// Verwaltet registrierte Form-Werkzeuge, deren Freigabe und das aktive Tool.
pub struct ToolManager {
    tools: Vec<RegisteredTool>,
    active_index: Option<usize>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen neuen ToolManager mit vorregistrierten Standard-Tools.
    pub fn new() -> Self {
        let mut manager = Self {
            tools: Vec::new(),
            active_index: None,
        };
        manager.register(Box::new(polygon::PolygonTool::new()));
        manager.register(Box::new(rectangle::RectangleTool::new()));
        manager.register(Box::new(circle::CircleTool::new()));
        manager
    }

    /// Registriert ein Werkzeug (freigegeben). Ein bereits registriertes
    /// Werkzeug derselben Art wird ersetzt.
    pub fn register(&mut self, tool: Box<dyn ShapeTool>) {
        let entry = RegisteredTool {
            tool,
            enabled: true,
        };
        match self.index_of(entry.tool.kind()) {
            Some(i) => {
                if self.active_index == Some(i) {
                    self.active_index = None;
                }
                self.tools[i] = entry;
            }
            None => self.tools.push(entry),
        }
    }

    /// Gibt die Anzahl registrierter Tools zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Art, Name, Icon und Freigabe aller registrierten Tools zurück.
    pub fn tool_entries(&self) -> Vec<(ShapeKind, &str, &str, bool)> {
        self.tools
            .iter()
            .map(|t| (t.tool.kind(), t.tool.name(), t.tool.icon(), t.enabled))
            .collect()
    }

    /// Bedienhinweis des Werkzeugs für `kind`.
    pub fn description(&self, kind: ShapeKind) -> Option<&str> {
        self.index_of(kind).map(|i| self.tools[i].tool.description())
    }

    fn index_of(&self, kind: ShapeKind) -> Option<usize> {
        self.tools.iter().position(|t| t.tool.kind() == kind)
    }

    /// Gibt ein Werkzeug frei bzw. sperrt es. Ein gesperrtes aktives Tool wird beendet.
    pub fn set_enabled(&mut self, kind: ShapeKind, enabled: bool) {
        let Some(i) = self.index_of(kind) else {
            log::warn!("Kein Werkzeug für {:?} registriert", kind);
            return;
        };
        self.tools[i].enabled = enabled;
        if !enabled && self.active_index == Some(i) {
            self.reset();
        }
    }

    /// Ob ein Werkzeug registriert und freigegeben ist.
    pub fn is_enabled(&self, kind: ShapeKind) -> bool {
        self.index_of(kind)
            .is_some_and(|i| self.tools[i].enabled)
    }

    /// Aktiviert das Werkzeug für `kind` mit frischem Zustand.
    ///
    /// Erneutes Aktivieren des bereits aktiven Tools setzt es zurück.
    /// Gibt `false` zurück, wenn kein freigegebenes Tool existiert.
    pub fn activate(&mut self, kind: ShapeKind) -> bool {
        self.reset();
        match self.index_of(kind) {
            Some(i) if self.tools[i].enabled => {
                self.active_index = Some(i);
                true
            }
            _ => false,
        }
    }

    /// Gibt eine Referenz auf das aktive Tool zurück.
    pub fn active_tool(&self) -> Option<&dyn ShapeTool> {
        self.active_index.map(|i| self.tools[i].tool.as_ref())
    }

    /// Gibt eine mutable Referenz auf das aktive Tool zurück.
    pub fn active_tool_mut(&mut self) -> Option<&mut dyn ShapeTool> {
        let i = self.active_index?;
        Some(self.tools[i].tool.as_mut())
    }

    /// Überträgt den Snap-Radius (Grad) an alle Tools.
    pub fn set_snap_radius(&mut self, radius_deg: f64) {
        for entry in &mut self.tools {
            entry.tool.set_snap_radius(radius_deg);
        }
    }

    /// Setzt das aktive Tool zurück und deaktiviert es.
    pub fn reset(&mut self) {
        if let Some(i) = self.active_index {
            self.tools[i].tool.reset();
        }
        self.active_index = None;
    }
}
