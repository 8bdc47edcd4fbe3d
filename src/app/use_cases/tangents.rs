//! Use-Case-Funktionen für Tangenten-Modi und Knoten-Links.

use super::selection::prune_selection;
use crate::app::EditorState;
use crate::core::{KnotRef, TangentMode};
use anyhow::{Context, Result};

/// Setzt den Tangenten-Modus eines Knotens.
///
/// Ein Wechsel nach `Mirrored`/`Continuous` richtet die Tangenten nicht aus;
/// das geschieht beim nächsten Transformationsschritt einer der Tangenten.
/// Abgeleitete Modi entfernen die Tangenten des Knotens aus der Selektion.
pub fn set_tangent_mode(state: &mut EditorState, knot: KnotRef, mode: TangentMode) -> Result<()> {
    state
        .graph
        .set_tangent_mode(knot, mode)
        .context("Tangenten-Modus konnte nicht gesetzt werden")?;

    if mode.is_derived() {
        state
            .graph
            .refresh_derived_tangents(knot.curve, state.options.auto_smooth_tension);
        prune_selection(state);
    }
    state.refresh_handles();
    Ok(())
}

/// Koppelt zwei Knoten; `b` springt auf die Position von `a`.
pub fn link_knots(state: &mut EditorState, a: KnotRef, b: KnotRef) -> Result<()> {
    state
        .graph
        .link_knots(a, b)
        .with_context(|| format!("Knoten {:?} und {:?} konnten nicht gekoppelt werden", a, b))?;
    state
        .graph
        .refresh_dirty_derived_tangents(state.options.auto_smooth_tension);
    state.refresh_handles();
    Ok(())
}

/// Löst einen Knoten aus seiner Link-Gruppe. Gibt `false` zurück, wenn er nicht gekoppelt war.
pub fn unlink_knot(state: &mut EditorState, knot: KnotRef) -> bool {
    let unlinked = state.graph.unlink_knot(knot);
    if !unlinked {
        log::debug!("Knoten {:?} war nicht gekoppelt", knot);
    }
    unlinked
}
