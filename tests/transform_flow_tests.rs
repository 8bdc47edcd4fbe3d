use approx::assert_relative_eq;
use glam::{Quat, Vec3};
use spline_knot_editor::app::use_cases::transform::{
    apply_rotation, apply_scale, apply_translation, clear_mouse_down_state,
    record_mouse_down_state,
};
use spline_knot_editor::{
    Curve, EditorState, Knot, KnotRef, PivotMode, SplineGraph, TangentIndex, TangentMode,
    TangentRef,
};
use std::f32::consts::FRAC_PI_2;

const A: KnotRef = KnotRef::new(0, 0);
const B: KnotRef = KnotRef::new(0, 1);
const C: KnotRef = KnotRef::new(0, 2);

/// Geschlossene Kurve A-B-C, B mit Tangenten entlang X im gewünschten Modus.
fn make_closed_curve(b_mode: TangentMode, b_in_length: f32) -> EditorState {
    let mut graph = SplineGraph::new();
    graph.add_curve(Curve::from_knots(
        vec![
            Knot::with_tangents(
                Vec3::ZERO,
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(0.0, 0.0, 1.0),
                TangentMode::Broken,
            ),
            Knot::with_tangents(
                Vec3::new(5.0, 0.0, 0.0),
                Vec3::new(-b_in_length, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                b_mode,
            ),
            Knot::with_tangents(
                Vec3::new(5.0, 0.0, 5.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                TangentMode::Broken,
            ),
        ],
        true,
    ));
    EditorState::with_graph(graph)
}

fn b_tangent(index: TangentIndex) -> TangentRef {
    TangentRef::new(B, index)
}

fn knot(state: &EditorState, knot: KnotRef) -> Knot {
    *state.graph.knot(knot).expect("Knoten vorhanden")
}

fn assert_knots_eq(a: &Knot, b: &Knot) {
    assert!(a.position.abs_diff_eq(b.position, 1e-4), "{a:?} != {b:?}");
    for index in [TangentIndex::In, TangentIndex::Out] {
        assert!(
            a.tangent_direction(index)
                .abs_diff_eq(b.tangent_direction(index), 1e-4),
            "{a:?} != {b:?}"
        );
    }
    assert_eq!(a.mode, b.mode);
}

fn assert_mirrored(knot: &Knot) {
    let tangent_out = knot.tangent_direction(TangentIndex::Out);
    let tangent_in = knot.tangent_direction(TangentIndex::In);
    assert_eq!(knot.mode, TangentMode::Mirrored);
    assert!(
        tangent_in.abs_diff_eq(-tangent_out, 1e-4),
        "in {tangent_in:?} ist nicht -out {tangent_out:?}"
    );
}

fn assert_continuous(knot: &Knot, in_length: f32) {
    let tangent_out = knot.tangent_direction(TangentIndex::Out);
    let tangent_in = knot.tangent_direction(TangentIndex::In);
    assert_eq!(knot.mode, TangentMode::Continuous);
    assert_relative_eq!(tangent_in.length(), in_length, epsilon = 1e-4);
    assert_relative_eq!(
        tangent_in.normalize().dot(tangent_out.normalize()),
        -1.0,
        epsilon = 1e-4
    );
}

#[test]
fn test_identity_deltas_leave_graph_unchanged() {
    let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
    state.selection.select(A.into());
    state.selection.select(b_tangent(TangentIndex::Out).into());
    state.refresh_handles();
    let before: Vec<Knot> = [A, B, C].iter().map(|k| knot(&state, *k)).collect();

    let pivot = state.pivot_position();
    apply_translation(&mut state, Vec3::ZERO);
    apply_rotation(&mut state, Quat::IDENTITY, pivot);
    record_mouse_down_state(&mut state);
    apply_scale(&mut state, Vec3::ONE);
    clear_mouse_down_state(&mut state);

    for (knot_ref, expected) in [A, B, C].iter().zip(&before) {
        assert_knots_eq(&knot(&state, *knot_ref), expected);
    }
}

#[test]
fn test_mirrored_invariant_survives_all_transforms() {
    let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
    state.selection.select(b_tangent(TangentIndex::Out).into());
    state.refresh_handles();

    apply_translation(&mut state, Vec3::new(0.5, 1.0, 0.3));
    assert_mirrored(&knot(&state, B));

    apply_rotation(
        &mut state,
        Quat::from_rotation_x(0.7),
        Vec3::new(1.0, 2.0, 3.0),
    );
    assert_mirrored(&knot(&state, B));

    state.refresh_handles();
    record_mouse_down_state(&mut state);
    apply_scale(&mut state, Vec3::new(1.5, 0.5, 2.0));
    apply_scale(&mut state, Vec3::new(0.7, 1.2, 1.1));
    clear_mouse_down_state(&mut state);
    assert_mirrored(&knot(&state, B));
    assert_eq!(knot(&state, B).position, Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_continuous_invariant_keeps_opposite_length() {
    let mut state = make_closed_curve(TangentMode::Continuous, 2.0);
    state.selection.select(b_tangent(TangentIndex::Out).into());
    state.refresh_handles();

    apply_translation(&mut state, Vec3::new(0.0, 1.0, 1.0));
    assert_continuous(&knot(&state, B), 2.0);

    apply_rotation(&mut state, Quat::from_rotation_y(0.4), Vec3::new(5.0, 0.0, 0.0));
    assert_continuous(&knot(&state, B), 2.0);

    record_mouse_down_state(&mut state);
    apply_scale(&mut state, Vec3::new(2.0, 1.0, 1.0));
    clear_mouse_down_state(&mut state);
    assert_continuous(&knot(&state, B), 2.0);
}

#[test]
fn test_knot_and_own_tangent_are_transformed_once() {
    let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
    state.selection.select(B.into());
    state.selection.select(b_tangent(TangentIndex::Out).into());
    state.refresh_handles();

    apply_translation(&mut state, Vec3::new(1.0, 0.0, 0.0));
    let moved = knot(&state, B);
    assert_eq!(moved.position, Vec3::new(6.0, 0.0, 0.0));
    assert_eq!(moved.tangent_direction(TangentIndex::Out), Vec3::new(1.0, 0.0, 0.0));

    apply_rotation(
        &mut state,
        Quat::from_rotation_y(FRAC_PI_2),
        Vec3::new(6.0, 0.0, 0.0),
    );
    let rotated = knot(&state, B);
    assert!(rotated
        .tangent_direction(TangentIndex::Out)
        .abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
    assert!(rotated.position.abs_diff_eq(Vec3::new(6.0, 0.0, 0.0), 1e-5));
}

#[test]
fn test_scale_reconstructs_from_snapshot() {
    let setup = || {
        let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
        state.selection.select(A.into());
        state.selection.select(B.into());
        state.selection.select(C.into());
        state.refresh_handles();
        record_mouse_down_state(&mut state);
        state
    };

    let mut stepped = setup();
    apply_scale(&mut stepped, Vec3::new(2.0, 1.0, 0.5));
    apply_scale(&mut stepped, Vec3::new(0.3, 4.0, 1.5));
    apply_scale(&mut stepped, Vec3::new(3.0, 2.0, 1.0));

    let mut direct = setup();
    apply_scale(&mut direct, Vec3::new(3.0, 2.0, 1.0));

    for knot_ref in [A, B, C] {
        assert_knots_eq(&knot(&stepped, knot_ref), &knot(&direct, knot_ref));
    }
    assert_mirrored(&knot(&direct, B));
}

#[test]
fn test_pivot_modes_agree_for_single_knot_translation() {
    let delta = Vec3::new(0.25, -3.0, 1.5);
    let mut results = Vec::new();

    for mode in [PivotMode::Pivot, PivotMode::Center] {
        let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
        state.selection.pivot_mode = mode;
        state.selection.select(B.into());
        state.refresh_handles();
        apply_translation(&mut state, delta);
        results.push(knot(&state, B));
    }

    assert_knots_eq(&results[0], &results[1]);
    assert_eq!(results[0].position, Vec3::new(5.0, 0.0, 0.0) + delta);
}

#[test]
fn test_rotate_mirrored_tangent_about_its_knot() {
    let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
    state.selection.select(b_tangent(TangentIndex::Out).into());
    state.refresh_handles();

    apply_rotation(
        &mut state,
        Quat::from_rotation_y(FRAC_PI_2),
        Vec3::new(5.0, 0.0, 0.0),
    );

    let b = knot(&state, B);
    assert!(b
        .tangent_direction(TangentIndex::Out)
        .abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
    assert!(b
        .tangent_direction(TangentIndex::In)
        .abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-5));
    assert_eq!(b.position, Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(b.mode, TangentMode::Mirrored);
}

#[test]
fn test_translate_both_mirrored_tangents_breaks_coupling() {
    let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
    state.selection.select(b_tangent(TangentIndex::Out).into());
    state.selection.select(b_tangent(TangentIndex::In).into());
    state.refresh_handles();
    let before = knot(&state, B);

    apply_translation(&mut state, Vec3::new(1.0, 0.0, 0.0));

    let after = knot(&state, B);
    assert_eq!(after.mode, TangentMode::Broken);
    for index in [TangentIndex::In, TangentIndex::Out] {
        assert_eq!(
            after.tangent_position(index) - before.tangent_position(index),
            Vec3::new(1.0, 0.0, 0.0)
        );
    }
}

#[test]
fn test_linked_knots_move_once() {
    let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
    let partner = KnotRef::new(1, 0);
    state.graph.add_curve(Curve::from_knots(
        vec![Knot::with_tangents(
            Vec3::ZERO,
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            TangentMode::Broken,
        )],
        false,
    ));
    state.graph.link_knots(B, partner).expect("Link gültig");

    state.selection.select(B.into());
    state.selection.select(partner.into());
    state
        .selection
        .select(TangentRef::new(partner, TangentIndex::Out).into());
    state.refresh_handles();

    apply_translation(&mut state, Vec3::new(0.0, 0.0, 2.0));

    assert_eq!(knot(&state, B).position, Vec3::new(5.0, 0.0, 2.0));
    let moved_partner = knot(&state, partner);
    assert_eq!(moved_partner.position, Vec3::new(5.0, 0.0, 2.0));
    assert_eq!(
        moved_partner.tangent_direction(TangentIndex::Out),
        Vec3::new(0.0, 1.0, 0.0)
    );
}

/// Zwei gekoppelte Broken-Knoten bei (2,0,0) auf getrennten Kurven, beide selektiert.
fn make_linked_pair() -> (EditorState, KnotRef, KnotRef) {
    let first = KnotRef::new(0, 0);
    let second = KnotRef::new(1, 0);
    let mut graph = SplineGraph::new();
    for _ in 0..2 {
        graph.add_curve(Curve::from_knots(
            vec![Knot::with_tangents(
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                TangentMode::Broken,
            )],
            false,
        ));
    }
    graph.link_knots(first, second).expect("Link gültig");

    let mut state = EditorState::with_graph(graph);
    state.selection.pivot_mode = PivotMode::Center;
    state.selection.select(first.into());
    state.selection.select(second.into());
    state.refresh_handles();
    (state, first, second)
}

#[test]
fn test_linked_knots_rotate_together() {
    let (mut state, first, second) = make_linked_pair();

    apply_rotation(&mut state, Quat::from_rotation_y(FRAC_PI_2), Vec3::ZERO);

    for knot_ref in [first, second] {
        let rotated = knot(&state, knot_ref);
        assert!(rotated.position.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-5));
        assert!(rotated
            .tangent_direction(TangentIndex::Out)
            .abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
    }
}

#[test]
fn test_linked_knots_scale_together() {
    let (mut state, first, second) = make_linked_pair();

    record_mouse_down_state(&mut state);
    apply_scale(&mut state, Vec3::splat(3.0));
    clear_mouse_down_state(&mut state);

    for knot_ref in [first, second] {
        let scaled = knot(&state, knot_ref);
        assert!(scaled.position.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));
        assert!(scaled
            .tangent_direction(TangentIndex::Out)
            .abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));
    }
}

#[test]
fn test_pivot_rotation_keeps_both_selected_tangents_synchronized() {
    let mut state = make_closed_curve(TangentMode::Mirrored, 1.0);
    state.selection.pivot_mode = PivotMode::Pivot;
    state.selection.select(b_tangent(TangentIndex::Out).into());
    state.selection.select(b_tangent(TangentIndex::In).into());
    state.refresh_handles();

    let pivot = state.pivot_position();
    apply_rotation(&mut state, Quat::from_rotation_z(0.5), pivot);

    let b = knot(&state, B);
    assert_mirrored(&b);
    assert!(b
        .tangent_direction(TangentIndex::Out)
        .abs_diff_eq(Quat::from_rotation_z(0.5) * Vec3::X, 1e-5));
}
