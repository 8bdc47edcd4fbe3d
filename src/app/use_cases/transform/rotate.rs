//! Use-Case: Drehen der Selektion.

use super::context::StepContext;
use super::knot_ops::rotate_knot;
use super::sync::apply_tangent_rotation_sync;
use crate::app::{EditorState, GestureState, SyncDelta, SyncOrigin};
use crate::core::{SelectionElement, SplineGraph, TangentRef};
use crate::shared::spline_geometry::{is_parallel, rotate_around, rotation_angle, shortest_arc};
use crate::shared::PivotMode;
use glam::{Quat, Vec3};

/// Dreht alle selektierten Elemente um `delta` (im Handle-Rahmen) um `center`.
///
/// Ein Delta mit Winkel ≈ 0 ist ein No-Op.
pub fn apply_rotation(state: &mut EditorState, delta: Quat, center: Vec3) {
    if !state.can_manipulate() || rotation_angle(delta) <= state.options.angle_epsilon {
        return;
    }

    let ctx = StepContext::capture(state);
    let world = ctx.world_delta(delta);
    let EditorState { graph, gesture, .. } = state;
    gesture.begin_step();

    for element in ctx.elements.iter().copied() {
        match element {
            SelectionElement::Knot(knot) => {
                rotate_knot(graph, gesture, &ctx, knot, delta, center, true);
                gesture.record_step_delta(SyncDelta::from_rotation(world), SyncOrigin::Knot);
            }
            SelectionElement::Tangent(tangent) => {
                rotate_tangent(graph, gesture, &ctx, tangent, world, center);
            }
        }
    }

    graph.refresh_dirty_derived_tangents(ctx.options.auto_smooth_tension);
}

fn rotate_tangent(
    graph: &mut SplineGraph,
    gesture: &mut GestureState,
    ctx: &StepContext,
    tangent: TangentRef,
    world: Quat,
    center: Vec3,
) {
    if ctx.owner_moves(tangent.knot) {
        return;
    }
    let Some(knot) = graph.knot(tangent.knot).copied() else {
        return;
    };

    let old_direction = knot.tangent_direction(tangent.index);
    let rotated_direction =
        rotate_around(knot.tangent_position(tangent.index), center, world) - knot.position;

    if knot.mode.is_derived() {
        return;
    }
    if !knot.mode.is_synchronized() {
        graph.set_tangent_direction_raw(tangent, rotated_direction);
        return;
    }

    let sync = match gesture.knot_delta(tangent.knot) {
        Some(cached) => cached,
        None => {
            let to_center = center - knot.position;
            let (axis, _) = world.to_axis_angle();
            let breaks_coupling = ctx.pivot_mode == PivotMode::Center
                && ctx.is_opposite_selected(tangent)
                && to_center.length() > ctx.options.length_epsilon
                && !is_parallel(axis, to_center, ctx.options.parallel_tolerance);
            if breaks_coupling {
                graph.force_broken(tangent.knot);
                graph.set_tangent_direction_raw(tangent, rotated_direction);
                return;
            }

            let rotation = match ctx.pivot_mode {
                PivotMode::Pivot => world,
                PivotMode::Center => shortest_arc(old_direction, rotated_direction, knot.up()),
            };
            if rotation_angle(rotation) <= ctx.options.angle_epsilon {
                return;
            }
            SyncDelta::from_rotation(rotation)
        }
    };
    gesture.record_knot_delta(tangent.knot, sync);
    gesture.record_step_delta(sync, SyncOrigin::Tangent);
    apply_tangent_rotation_sync(graph, gesture, ctx, tangent, sync, false);
}
