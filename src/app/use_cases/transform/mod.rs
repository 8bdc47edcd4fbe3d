//! Use-Case-Funktionen für die Transformation der Selektion.
//!
//! - `translate` — Verschieben
//! - `rotate` — Drehen um ein Zentrum
//! - `scale` — Skalieren relativ zum Gestenbeginn
//! - `lifecycle` — Mouse-Down-Snapshot einer Geste
//! - `sync` — Übertragung von Tangenten-Änderungen auf den Knoten
//! - `knot_ops` — Drehung einzelner Knoten
//! - `context` — Schritt-Kontext (materialisierte Selektion)

mod context;
mod knot_ops;
mod lifecycle;
mod rotate;
mod scale;
mod sync;
mod translate;

pub use lifecycle::{clear_mouse_down_state, record_mouse_down_state};
pub use rotate::apply_rotation;
pub use scale::apply_scale;
pub use translate::apply_translation;
