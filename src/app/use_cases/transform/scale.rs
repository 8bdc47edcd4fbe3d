//! Use-Case: Skalieren der Selektion relativ zum Gestenbeginn.
//!
//! Jeder Schritt rekonstruiert aus dem Mouse-Down-Snapshot mit dem
//! kumulativen Faktor, statt inkrementell zu skalieren. Damit summieren
//! sich keine Rundungsfehler über eine lange Geste.

use super::context::StepContext;
use super::lifecycle::record_mouse_down_state;
use super::sync::apply_tangent_rotation_sync;
use crate::app::{EditorState, GestureState, MouseDownState, SyncDelta, SyncOrigin};
use crate::core::{KnotRef, SelectionElement, SplineGraph, TangentRef};
use crate::shared::spline_geometry::{distance_to_line, rotation_angle, scale_around, shortest_arc};
use crate::shared::PivotMode;
use glam::Vec3;

/// Skaliert alle selektierten Elemente mit dem kumulativen Faktor `scale`.
///
/// Ohne vorherigen `record_mouse_down_state` wird der Snapshot implizit
/// aus dem aktuellen Zustand aufgenommen und nach diesem Schritt wieder
/// verworfen. Der Faktor gilt dann relativ zum aktuellen Zustand.
pub fn apply_scale(state: &mut EditorState, scale: Vec3) {
    if !state.can_manipulate() {
        return;
    }
    let implicit_snapshot = !state.gesture.is_gesture_active();
    if implicit_snapshot {
        log::debug!("apply_scale ohne Mouse-Down-Snapshot, Schritt-Snapshot wird aufgenommen");
        record_mouse_down_state(state);
    }

    let ctx = StepContext::capture(state);
    let EditorState { graph, gesture, .. } = state;
    let Some(snapshot) = gesture.take_mouse_down() else {
        return;
    };
    gesture.begin_step();

    for element in ctx.elements.iter().copied() {
        match element {
            SelectionElement::Knot(knot) => {
                scale_knot(graph, gesture, &ctx, &snapshot, knot, scale);
            }
            SelectionElement::Tangent(tangent) => {
                scale_tangent(graph, gesture, &ctx, &snapshot, tangent, scale);
            }
        }
    }

    if !implicit_snapshot {
        gesture.set_mouse_down(snapshot);
    }
    graph.refresh_dirty_derived_tangents(ctx.options.auto_smooth_tension);
}

fn scale_knot(
    graph: &mut SplineGraph,
    gesture: &mut GestureState,
    ctx: &StepContext,
    snapshot: &MouseDownState,
    knot_ref: KnotRef,
    scale: Vec3,
) {
    let Some(original) = snapshot.knot(knot_ref).copied() else {
        return;
    };
    if !gesture.mark_scaled(knot_ref.into()) {
        return;
    }

    let position = match ctx.pivot_mode {
        PivotMode::Center => scale_around(
            original.position,
            snapshot.pivot_position,
            scale,
            snapshot.handle_rotation,
        ),
        PivotMode::Pivot => original.position,
    };
    if gesture.claim_position(knot_ref, graph.linked_knots(knot_ref)) {
        graph.set_knot_position(knot_ref, position);
    }

    if let Some(knot) = graph.knot_mut(knot_ref) {
        knot.rotation = original.rotation;
        knot.mode = original.mode;
        knot.tangent_in = original.tangent_in * scale;
        knot.tangent_out = original.tangent_out * scale;
    }
}

fn scale_tangent(
    graph: &mut SplineGraph,
    gesture: &mut GestureState,
    ctx: &StepContext,
    snapshot: &MouseDownState,
    tangent: TangentRef,
    scale: Vec3,
) {
    if ctx.owner_moves(tangent.knot) {
        return;
    }
    let Some(original) = snapshot.knot(tangent.knot).copied() else {
        return;
    };

    if gesture.mark_restored(tangent.knot) {
        if let Some(knot) = graph.knot_mut(tangent.knot) {
            knot.rotation = original.rotation;
            knot.mode = original.mode;
            knot.tangent_in = original.tangent_in;
            knot.tangent_out = original.tangent_out;
        }
    }

    let Some(knot) = graph.knot(tangent.knot).copied() else {
        return;
    };
    if knot.mode.is_derived() || scale.abs_diff_eq(Vec3::ONE, ctx.options.length_epsilon) {
        return;
    }

    let original_direction = original.tangent_direction(tangent.index);
    let target_tip = scale_around(
        knot.position + original_direction,
        snapshot.pivot_position,
        scale,
        snapshot.handle_rotation,
    );
    let target_direction = target_tip - knot.position;

    if !knot.mode.is_synchronized() {
        graph.set_tangent_direction_raw(tangent, target_direction);
        return;
    }

    let sync = match gesture.knot_delta(tangent.knot) {
        Some(cached) => cached,
        None => {
            let original_length = original_direction.length();
            let ratio = if original_length > ctx.options.length_epsilon {
                target_direction.length() / original_length
            } else {
                1.0
            };
            let rotation = shortest_arc(original_direction, target_direction, knot.up());
            if (ratio - 1.0).abs() <= ctx.options.length_epsilon
                && rotation_angle(rotation) <= ctx.options.angle_epsilon
            {
                return;
            }

            let center_off_line =
                distance_to_line(snapshot.pivot_position, knot.position, original_direction)
                    > ctx.options.length_epsilon;
            if ctx.pivot_mode == PivotMode::Center
                && ctx.is_opposite_selected(tangent)
                && center_off_line
            {
                graph.force_broken(tangent.knot);
                graph.set_tangent_direction_raw(tangent, target_direction);
                return;
            }

            SyncDelta {
                rotation,
                magnitude: target_direction.length() - original_length,
                scale: ratio,
            }
        }
    };
    gesture.record_knot_delta(tangent.knot, sync);
    gesture.record_step_delta(sync, SyncOrigin::Tangent);
    apply_tangent_rotation_sync(graph, gesture, ctx, tangent, sync, true);
}
