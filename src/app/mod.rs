//! Application-Layer: Controller, State, Commands und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
/// Zustand der Engine
///
/// Selektion, Gesten-Caches und der Graph als gemeinsamer EditorState.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::TransformController;
pub use events::TransformCommand;
pub use state::{
    EditorState, GestureState, MouseDownState, PivotFreeze, SelectionSet, SyncDelta, SyncOrigin,
};
