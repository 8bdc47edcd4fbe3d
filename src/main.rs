//! Spline Knot Editor — Headless-Demo.
//!
//! Baut eine geschlossene Beispielkurve auf, spielt eine Dreh- und eine
//! Skaliergeste über den Controller ab und loggt das Ergebnis. Optionen
//! werden aus `spline_knot_editor.toml` neben der Binary geladen.

use glam::{Quat, Vec3};
use spline_knot_editor::{
    Curve, EditorState, Knot, KnotRef, SplineGraph, TangentIndex, TangentMode, TangentRef,
    TransformCommand, TransformController, TransformOptions,
};

fn main() -> anyhow::Result<()> {
    DemoRunner::run()
}

struct DemoRunner;

impl DemoRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Spline Knot Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = TransformOptions::config_path();
        let options = TransformOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht geschrieben werden: {}", e);
            }
        }

        let mut state = EditorState::with_options(Self::demo_graph(), options);
        let mut controller = TransformController::new();
        let tangent = TangentRef::new(KnotRef::new(0, 1), TangentIndex::Out);

        controller.handle_commands(
            &mut state,
            [
                TransformCommand::Select {
                    element: tangent.into(),
                    additive: false,
                },
                TransformCommand::BeginGesture,
                TransformCommand::Rotate {
                    delta: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
                    center: Vec3::new(5.0, 0.0, 0.0),
                },
                TransformCommand::EndGesture,
                TransformCommand::BeginGesture,
                TransformCommand::Scale {
                    scale: Vec3::splat(2.0),
                },
                TransformCommand::EndGesture,
            ],
        )?;

        for (curve_index, curve) in state.graph.curves().iter().enumerate() {
            for (knot_index, knot) in curve.knots().iter().enumerate() {
                log::info!(
                    "Knoten {}/{}: Position {:?}, In {:?}, Out {:?}, Modus {:?}",
                    curve_index,
                    knot_index,
                    knot.position,
                    knot.tangent_direction(TangentIndex::In),
                    knot.tangent_direction(TangentIndex::Out),
                    knot.mode
                );
            }
        }
        log::info!(
            "{} Commands ausgeführt, veränderte Kurven: {:?}",
            state.command_log.len(),
            state.take_dirty_curves()
        );
        Ok(())
    }

    fn demo_graph() -> SplineGraph {
        let mut graph = SplineGraph::new();
        graph.add_curve(Curve::from_knots(
            vec![
                Knot::new(Vec3::ZERO),
                Knot::with_tangents(
                    Vec3::new(5.0, 0.0, 0.0),
                    Vec3::new(-1.0, 0.0, 0.0),
                    Vec3::new(1.0, 0.0, 0.0),
                    TangentMode::Mirrored,
                ),
                Knot::new(Vec3::new(5.0, 0.0, 5.0)),
            ],
            true,
        ));
        graph.refresh_derived_tangents(0, TransformOptions::default().auto_smooth_tension);
        graph
    }
}
