//! Rotation-Sync: eine synchronisierte Tangente überträgt ihre Änderung
//! als Drehung auf den besitzenden Knoten.
//!
//! Da die Tangenten im lokalen Rahmen des Knotens liegen, dreht eine
//! Knoten-Drehung beide Tangenten gemeinsam. `Mirrored`/`Continuous` bleiben
//! so kollinear, ohne die Gegenseite separat nachzurechnen.

use super::context::StepContext;
use super::knot_ops::rotate_knot_in_place;
use crate::app::{GestureState, SyncDelta};
use crate::core::{SplineGraph, TangentMode, TangentRef};
use crate::shared::spline_geometry::with_length;

/// Wendet ein Sync-Delta auf eine Tangente und ihren Knoten an.
///
/// Länge: nur für die primäre Tangente, für `Mirrored` (beide Seiten) und bei
/// relativer Anwendung für `Continuous`. Mit `absolute_scale` wird die Länge
/// mit `sync.scale` multipliziert, sonst um `sync.magnitude` verändert.
///
/// Drehung: der Knoten dreht um seine eigene Position, pro Schritt einmal.
pub(crate) fn apply_tangent_rotation_sync(
    graph: &mut SplineGraph,
    gesture: &mut GestureState,
    ctx: &StepContext,
    tangent: TangentRef,
    sync: SyncDelta,
    absolute_scale: bool,
) {
    let Some(knot) = graph.knot(tangent.knot).copied() else {
        return;
    };
    let mode = knot.mode;

    let drives_length = ctx.is_primary(tangent)
        || mode == TangentMode::Mirrored
        || (!absolute_scale && mode == TangentMode::Continuous);

    if drives_length && gesture.mark_scaled(tangent.into()) {
        let current = knot.tangent_direction(tangent.index);
        let length = if absolute_scale {
            current.length() * sync.scale
        } else {
            current.length() + sync.magnitude
        };
        graph.set_tangent_direction_raw(tangent, with_length(current, length, knot.up()));

        if mode == TangentMode::Mirrored {
            graph.notify_tangent_changed(tangent, mode);
            gesture.mark_scaled(tangent.opposite().into());
        }
    }

    if gesture.mark_rotated(tangent.knot) {
        rotate_knot_in_place(graph, tangent.knot, sync.rotation);
    }

    // Zieht eine noch nicht ausgerichtete Gegenseite nach (Moduswechsel ohne Realignment)
    graph.notify_tangent_changed(tangent, mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EditorState;
    use crate::core::{Curve, Knot, KnotRef, TangentIndex};
    use approx::assert_relative_eq;
    use glam::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_2;

    fn state(mode: TangentMode) -> EditorState {
        let mut graph = SplineGraph::new();
        graph.add_curve(Curve::from_knots(
            vec![Knot::with_tangents(
                Vec3::ZERO,
                Vec3::new(-2.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                mode,
            )],
            false,
        ));
        EditorState::with_graph(graph)
    }

    fn out() -> TangentRef {
        TangentRef::new(KnotRef::new(0, 0), TangentIndex::Out)
    }

    #[test]
    fn mirrored_uebernimmt_laenge_auf_beiden_seiten() {
        let mut state = state(TangentMode::Mirrored);
        state.selection.select(out().into());
        let ctx = StepContext::capture(&state);
        let sync = SyncDelta {
            rotation: Quat::from_rotation_y(FRAC_PI_2),
            magnitude: 1.0,
            scale: 1.0,
        };

        apply_tangent_rotation_sync(&mut state.graph, &mut state.gesture, &ctx, out(), sync, false);

        let knot = state.graph.knot(KnotRef::new(0, 0)).expect("Knoten vorhanden");
        let tangent_out = knot.tangent_direction(TangentIndex::Out);
        let tangent_in = knot.tangent_direction(TangentIndex::In);
        assert!(tangent_out.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-5));
        assert!(tangent_in.abs_diff_eq(-tangent_out, 1e-5));
    }

    #[test]
    fn continuous_behaelt_gegenlaenge() {
        let mut state = state(TangentMode::Continuous);
        state.selection.select(out().into());
        let ctx = StepContext::capture(&state);
        let sync = SyncDelta {
            rotation: Quat::from_rotation_z(FRAC_PI_2),
            magnitude: 2.0,
            scale: 1.0,
        };

        apply_tangent_rotation_sync(&mut state.graph, &mut state.gesture, &ctx, out(), sync, false);

        let knot = state.graph.knot(KnotRef::new(0, 0)).expect("Knoten vorhanden");
        assert_relative_eq!(knot.tangent_direction(TangentIndex::Out).length(), 3.0, epsilon = 1e-5);
        assert_relative_eq!(knot.tangent_direction(TangentIndex::In).length(), 2.0, epsilon = 1e-5);
        assert!(knot
            .tangent_direction(TangentIndex::Out)
            .abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), 1e-5));
    }

    #[test]
    fn absolute_skalierung_multipliziert() {
        let mut state = state(TangentMode::Mirrored);
        state.selection.select(out().into());
        let ctx = StepContext::capture(&state);
        let sync = SyncDelta {
            scale: 3.0,
            ..SyncDelta::IDENTITY
        };

        apply_tangent_rotation_sync(&mut state.graph, &mut state.gesture, &ctx, out(), sync, true);

        let knot = state.graph.knot(KnotRef::new(0, 0)).expect("Knoten vorhanden");
        assert!(knot
            .tangent_direction(TangentIndex::Out)
            .abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));
        assert!(knot
            .tangent_direction(TangentIndex::In)
            .abs_diff_eq(Vec3::new(-3.0, 0.0, 0.0), 1e-5));
    }
}
