//! Application State — zentrale Datenhaltung der Transformations-Engine.

mod editor_state;
mod gesture;
mod selection;

pub use editor_state::EditorState;
pub use gesture::{GestureState, MouseDownState, SyncDelta, SyncOrigin};
pub use selection::{PivotFreeze, SelectionSet};
