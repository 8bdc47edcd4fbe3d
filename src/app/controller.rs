//! Application Controller für zentrale Command-Verarbeitung.

use super::use_cases;
use super::{EditorState, TransformCommand};

/// Orchestriert Commands und Use-Cases auf dem EditorState.
#[derive(Default)]
pub struct TransformController;

impl TransformController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt mehrere Commands nacheinander aus; bricht beim ersten Fehler ab.
    pub fn handle_commands(
        &mut self,
        state: &mut EditorState,
        commands: impl IntoIterator<Item = TransformCommand>,
    ) -> anyhow::Result<()> {
        for command in commands {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: TransformCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Selektion ===
            TransformCommand::Select { element, additive } => {
                use_cases::selection::select_element(state, element, additive)?
            }
            TransformCommand::Deselect { element } => {
                use_cases::selection::deselect_element(state, element)
            }
            TransformCommand::ToggleSelection { element } => {
                use_cases::selection::toggle_element(state, element)?
            }
            TransformCommand::SetPrimary { element } => {
                use_cases::selection::set_primary(state, element)?
            }
            TransformCommand::ClearSelection => use_cases::selection::clear_selection(state),
            TransformCommand::PruneSelection => {
                use_cases::selection::prune_selection(state);
            }

            // === Handles ===
            TransformCommand::SetPivotMode { mode } => {
                use_cases::handles::set_pivot_mode(state, mode)
            }
            TransformCommand::SetHandleOrientation { orientation } => {
                use_cases::handles::set_handle_orientation(state, orientation)
            }
            TransformCommand::SetPivotFreeze { freeze } => {
                use_cases::handles::set_pivot_freeze(state, freeze)
            }
            TransformCommand::RefreshHandles => state.refresh_handles(),

            // === Gesten ===
            TransformCommand::BeginGesture => {
                use_cases::transform::record_mouse_down_state(state)
            }
            TransformCommand::Translate { delta } => {
                use_cases::transform::apply_translation(state, delta);
                state.refresh_handles();
            }
            TransformCommand::Rotate { delta, center } => {
                use_cases::transform::apply_rotation(state, delta, center);
                state.refresh_handles();
            }
            TransformCommand::Scale { scale } => use_cases::transform::apply_scale(state, scale),
            TransformCommand::EndGesture => {
                use_cases::transform::clear_mouse_down_state(state);
                state.refresh_handles();
            }
            TransformCommand::CancelGesture => {
                log::debug!("Geste abgebrochen");
                use_cases::transform::clear_mouse_down_state(state);
                state.refresh_handles();
            }

            // === Tangenten & Links ===
            TransformCommand::SetTangentMode { knot, mode } => {
                use_cases::tangents::set_tangent_mode(state, knot, mode)?
            }
            TransformCommand::LinkKnots { a, b } => use_cases::tangents::link_knots(state, a, b)?,
            TransformCommand::UnlinkKnot { knot } => {
                use_cases::tangents::unlink_knot(state, knot);
            }
        }

        Ok(())
    }
}
