//! Drehung eines einzelnen Knotens.

use super::context::StepContext;
use crate::app::GestureState;
use crate::core::{KnotRef, SplineGraph};
use crate::shared::spline_geometry::rotate_around;
use crate::shared::PivotMode;
use glam::{Quat, Vec3};

/// Dreht einen Knoten um `delta` (im Handle-Rahmen).
///
/// Im Pivot-Modus `Center` wandert die Position mit `allow_translation` um
/// `center`. `Element`/`Parent` setzen das Delta lokal an die Knoten-Rotation,
/// `Global`/`Local` komponieren es als `H * d * H⁻¹` im Weltrahmen.
/// Jeder Knoten wird pro Schritt höchstens einmal gedreht; die Position einer
/// Link-Gruppe wandert nur einmal, die Orientierung jedes Knotens dagegen immer.
pub(crate) fn rotate_knot(
    graph: &mut SplineGraph,
    gesture: &mut GestureState,
    ctx: &StepContext,
    knot: KnotRef,
    delta: Quat,
    center: Vec3,
    allow_translation: bool,
) {
    let Some(current) = graph.knot(knot).copied() else {
        return;
    };
    if !gesture.mark_rotated(knot) {
        return;
    }

    let world = ctx.world_delta(delta);
    if allow_translation
        && ctx.pivot_mode == PivotMode::Center
        && gesture.claim_position(knot, graph.linked_knots(knot))
    {
        graph.set_knot_position(knot, rotate_around(current.position, center, world));
    }

    let rotation = if ctx.orientation.is_element_space() {
        current.rotation * delta
    } else {
        world * current.rotation
    };
    graph.set_knot_rotation(knot, rotation);
}

/// Dreht einen Knoten um seine eigene Position (Rotation-Sync einer Tangente).
pub(crate) fn rotate_knot_in_place(graph: &mut SplineGraph, knot: KnotRef, world_rotation: Quat) {
    if let Some(rotation) = graph.knot(knot).map(|k| k.rotation) {
        graph.set_knot_rotation(knot, world_rotation * rotation);
    }
}
