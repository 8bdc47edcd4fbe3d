//! Gesten-Lebenszyklus: Mouse-Down-Snapshot aufnehmen und verwerfen.

use crate::app::{EditorState, MouseDownState};

/// Speichert den Zustand aller betroffenen Knoten sowie Pivot und Handle-Rotation.
///
/// Für Tangenten wird der besitzende Knoten gesichert. Ein bereits
/// vorhandener Snapshot wird ersetzt.
pub fn record_mouse_down_state(state: &mut EditorState) {
    let mut snapshot = MouseDownState::new(state.pivot_position(), state.handle_rotation());

    for element in state.selection.elements() {
        let owner = element.owner();
        if let Some(knot) = state.graph.knot(owner) {
            snapshot.record_knot(owner, *knot);
        }
    }

    log::debug!(
        "Geste begonnen: {} Knoten gesichert, Pivot {:?}",
        snapshot.knot_count(),
        snapshot.pivot_position
    );
    state.gesture.set_mouse_down(snapshot);
}

/// Verwirft den Snapshot. Bereits angewendete Schritte bleiben bestehen.
pub fn clear_mouse_down_state(state: &mut EditorState) {
    if state.gesture.is_gesture_active() {
        log::debug!("Geste beendet, Snapshot verworfen");
    }
    state.gesture.clear_mouse_down();
}
