//! Use-Case: Verschieben der Selektion.

use super::context::StepContext;
use super::sync::apply_tangent_rotation_sync;
use crate::app::{EditorState, GestureState, SyncDelta, SyncOrigin};
use crate::core::{SelectionElement, SplineGraph, TangentRef};
use crate::shared::spline_geometry::shortest_arc;
use glam::Vec3;

/// Verschiebt alle selektierten Elemente um den Welt-Offset `delta`.
///
/// Knoten bewegen sich samt Tangenten (gekoppelte Knoten folgen über den
/// Graphen). Tangenten verschieben ihre Spitze; bei `Mirrored`/`Continuous`
/// wird die Änderung als Drehung + Längenänderung auf den Knoten übertragen.
pub fn apply_translation(state: &mut EditorState, delta: Vec3) {
    if delta == Vec3::ZERO || !state.can_manipulate() {
        return;
    }

    let ctx = StepContext::capture(state);
    let EditorState { graph, gesture, .. } = state;
    gesture.begin_step();

    for element in ctx.elements.iter().copied() {
        match element {
            SelectionElement::Knot(knot) => {
                let Some(position) = graph.knot(knot).map(|k| k.position) else {
                    continue;
                };
                if gesture.claim_position(knot, graph.linked_knots(knot)) {
                    graph.set_knot_position(knot, position + delta);
                }
                gesture.record_step_delta(SyncDelta::IDENTITY, SyncOrigin::Knot);
            }
            SelectionElement::Tangent(tangent) => {
                translate_tangent(graph, gesture, &ctx, tangent, delta);
            }
        }
    }

    graph.refresh_dirty_derived_tangents(ctx.options.auto_smooth_tension);
}

fn translate_tangent(
    graph: &mut SplineGraph,
    gesture: &mut GestureState,
    ctx: &StepContext,
    tangent: TangentRef,
    delta: Vec3,
) {
    if ctx.owner_moves(tangent.knot) {
        return;
    }
    let Some(knot) = graph.knot(tangent.knot).copied() else {
        return;
    };

    let old_direction = knot.tangent_direction(tangent.index);
    let new_direction = old_direction + delta;

    if knot.mode.is_derived() {
        return;
    }
    if !knot.mode.is_synchronized() {
        graph.set_tangent_direction_raw(tangent, new_direction);
        return;
    }
    if ctx.is_opposite_selected(tangent) {
        graph.force_broken(tangent.knot);
        graph.set_tangent_direction_raw(tangent, new_direction);
        return;
    }

    let sync = match (gesture.knot_delta(tangent.knot), gesture.step_origin()) {
        (Some(cached), _) => cached,
        // Ein selektierter Knoten hat das Schritt-Delta vorgegeben
        (None, Some(SyncOrigin::Knot)) => gesture.step_delta().unwrap_or(SyncDelta::IDENTITY),
        (None, _) => SyncDelta {
            rotation: shortest_arc(old_direction, new_direction, knot.up()),
            magnitude: new_direction.length() - old_direction.length(),
            scale: 1.0,
        },
    };
    gesture.record_knot_delta(tangent.knot, sync);
    gesture.record_step_delta(sync, SyncOrigin::Tangent);
    apply_tangent_rotation_sync(graph, gesture, ctx, tangent, sync, false);
}
