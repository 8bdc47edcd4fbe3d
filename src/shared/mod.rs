//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und reine Geometrie, die zwischen `core` und `app`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
pub mod spline_geometry;

pub use options::{HandleOrientation, PivotMode, TransformOptions};
