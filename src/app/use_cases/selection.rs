//! Use-Case-Funktionen für die Selektion von Knoten und Tangenten.

use crate::app::EditorState;
use crate::core::SelectionElement;
use anyhow::{bail, Result};

fn ensure_selectable(state: &EditorState, element: SelectionElement) -> Result<()> {
    let Some(knot) = state.graph.knot(element.owner()) else {
        bail!("Element {:?} verweist auf keinen existierenden Knoten", element);
    };
    if let SelectionElement::Tangent(tangent) = element {
        if !knot.mode.can_edit_tangents() {
            bail!(
                "Tangente {:?} ist im Modus {:?} nicht selektierbar",
                tangent,
                knot.mode
            );
        }
    }
    Ok(())
}

/// Selektiert ein Element. Ohne `additive` wird die bisherige Selektion ersetzt.
pub fn select_element(
    state: &mut EditorState,
    element: SelectionElement,
    additive: bool,
) -> Result<()> {
    ensure_selectable(state, element)?;
    if additive {
        state.selection.select(element);
    } else {
        state.selection.select_exclusive(element);
    }
    state.refresh_handles();
    Ok(())
}

/// Entfernt ein Element aus der Selektion.
pub fn deselect_element(state: &mut EditorState, element: SelectionElement) {
    if state.selection.deselect(element) {
        state.refresh_handles();
    }
}

/// Schaltet die Selektion eines Elements um.
pub fn toggle_element(state: &mut EditorState, element: SelectionElement) -> Result<()> {
    if !state.selection.contains(element) {
        ensure_selectable(state, element)?;
    }
    state.selection.toggle(element);
    state.refresh_handles();
    Ok(())
}

/// Macht ein selektiertes Element zum primären Element.
pub fn set_primary(state: &mut EditorState, element: SelectionElement) -> Result<()> {
    if !state.selection.set_primary(element) {
        bail!("Element {:?} ist nicht selektiert", element);
    }
    state.refresh_handles();
    Ok(())
}

/// Löscht die aktuelle Selektion.
pub fn clear_selection(state: &mut EditorState) {
    state.selection.clear();
    state.refresh_handles();
}

/// Entfernt ungültig gewordene Elemente (z. B. nach Löschen oder Moduswechsel).
pub fn prune_selection(state: &mut EditorState) -> usize {
    let removed = state.selection.prune(&state.graph);
    if removed > 0 {
        log::info!("{} ungültige Elemente aus der Selektion entfernt", removed);
        state.refresh_handles();
    }
    removed
}
