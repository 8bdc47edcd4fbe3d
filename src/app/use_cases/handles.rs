//! Use-Case-Funktionen für Pivot-Modus, Handle-Orientierung und Freeze.

use crate::app::{EditorState, PivotFreeze};
use crate::shared::{HandleOrientation, PivotMode};

/// Wechselt den Pivot-Modus und berechnet den Pivot neu.
pub fn set_pivot_mode(state: &mut EditorState, mode: PivotMode) {
    state.selection.pivot_mode = mode;
    state.refresh_handles();
}

/// Wechselt die Handle-Orientierung und berechnet die Handle-Rotation neu.
pub fn set_handle_orientation(state: &mut EditorState, orientation: HandleOrientation) {
    state.selection.handle_orientation = orientation;
    state.refresh_handles();
}

/// Setzt die Freeze-Maske. Aufgehobene Sperren werden sofort nachgeführt.
pub fn set_pivot_freeze(state: &mut EditorState, freeze: PivotFreeze) {
    state.selection.pivot_freeze = freeze;
    state.refresh_handles();
}
