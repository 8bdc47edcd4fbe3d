//! Unveränderliche Sicht auf Selektion und Optionen für einen Transformationsschritt.

use crate::app::EditorState;
use crate::core::{KnotRef, SelectionElement, TangentRef};
use crate::shared::{HandleOrientation, PivotMode, TransformOptions};
use glam::Quat;
use std::collections::HashSet;

/// Wird zu Beginn jedes `apply_*` aus dem State materialisiert, damit der
/// Graph während des Schritts frei mutiert werden kann.
#[derive(Debug, Clone)]
pub(crate) struct StepContext {
    /// Zu transformierende Elemente in Selektionsreihenfolge
    pub elements: Vec<SelectionElement>,
    selected: HashSet<SelectionElement>,
    moved_knots: HashSet<KnotRef>,
    pub primary: Option<SelectionElement>,
    pub pivot_mode: PivotMode,
    pub orientation: HandleOrientation,
    pub handle_rotation: Quat,
    pub handle_rotation_inverse: Quat,
    pub options: TransformOptions,
}

impl StepContext {
    pub fn capture(state: &EditorState) -> Self {
        let selection = &state.selection;
        let elements: Vec<SelectionElement> = selection.elements().collect();
        let selected: HashSet<SelectionElement> = elements.iter().copied().collect();

        let mut moved_knots = HashSet::new();
        for knot in selection.elements().filter_map(|e| e.as_knot()) {
            moved_knots.insert(knot);
            moved_knots.extend(state.graph.linked_knots(knot));
        }

        Self {
            elements,
            selected,
            moved_knots,
            primary: selection.primary(),
            pivot_mode: selection.pivot_mode,
            orientation: selection.handle_orientation,
            handle_rotation: selection.handle_rotation(),
            handle_rotation_inverse: selection.handle_rotation_inverse(),
            options: state.options.clone(),
        }
    }

    /// Prüft ob ein Element selektiert ist.
    pub fn is_selected(&self, element: SelectionElement) -> bool {
        self.selected.contains(&element)
    }

    /// Prüft ob die Gegenseite einer Tangente ebenfalls selektiert ist.
    pub fn is_opposite_selected(&self, tangent: TangentRef) -> bool {
        self.is_selected(tangent.opposite().into())
    }

    /// Ob der Knoten in diesem Schritt selbst transformiert wird
    /// (selektiert oder mit einem selektierten Knoten gekoppelt).
    ///
    /// Tangenten solcher Knoten bewegen sich mit ihm und werden übersprungen.
    pub fn owner_moves(&self, knot: KnotRef) -> bool {
        self.moved_knots.contains(&knot)
    }

    /// Ob die Tangente das primäre Element ist.
    pub fn is_primary(&self, tangent: TangentRef) -> bool {
        self.primary == Some(SelectionElement::Tangent(tangent))
    }

    /// Überführt ein Dreh-Delta aus dem Handle-Rahmen in Weltkoordinaten (`H * d * H⁻¹`).
    pub fn world_delta(&self, delta: Quat) -> Quat {
        (self.handle_rotation * delta * self.handle_rotation_inverse).normalize()
    }
}
