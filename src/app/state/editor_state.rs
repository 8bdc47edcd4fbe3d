use super::{GestureState, SelectionSet};
use crate::app::CommandLog;
use crate::core::SplineGraph;
use crate::shared::TransformOptions;
use glam::{Quat, Vec3};

/// Hauptzustand der Engine
pub struct EditorState {
    /// Kurvendaten inklusive Knoten-Links
    pub graph: SplineGraph,
    /// Selektion, Pivot und Handle-Rotation
    pub selection: SelectionSet,
    /// Schritt- und Gesten-Caches
    pub gesture: GestureState,
    /// Laufzeit-Optionen (Toleranzen, Standard-Modi)
    pub options: TransformOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SplineGraph::new(), TransformOptions::default())
    }

    /// Erstellt einen Zustand für einen vorhandenen Graphen.
    pub fn with_graph(graph: SplineGraph) -> Self {
        Self::with_options(graph, TransformOptions::default())
    }

    /// Erstellt einen Zustand mit expliziten Optionen.
    pub fn with_options(graph: SplineGraph, options: TransformOptions) -> Self {
        Self {
            graph,
            selection: SelectionSet::from_options(&options),
            gesture: GestureState::new(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Aktuelle Pivot-Position der Selektion.
    pub fn pivot_position(&self) -> Vec3 {
        self.selection.pivot_position()
    }

    /// Aktuelle Handle-Rotation der Selektion.
    pub fn handle_rotation(&self) -> Quat {
        self.selection.handle_rotation()
    }

    /// Ob eine Transformation möglich ist.
    pub fn can_manipulate(&self) -> bool {
        self.selection.can_manipulate()
    }

    /// Berechnet Pivot und Handle-Rotation neu (eingefrorene Werte bleiben).
    pub fn refresh_handles(&mut self) {
        self.selection
            .update_pivot(&self.graph, self.options.use_knot_position_for_tangents);
        self.selection.update_handle_rotation(&self.graph);
    }

    /// Seit dem letzten Abholen veränderte Kurven.
    pub fn dirty_curves(&self) -> Vec<usize> {
        self.graph.dirty_curves().collect()
    }

    /// Gibt die veränderten Kurven zurück und leert die Menge.
    pub fn take_dirty_curves(&mut self) -> Vec<usize> {
        self.graph.take_dirty_curves()
    }
}
