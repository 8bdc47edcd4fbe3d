//! Spline Knot Editor Library.
//! Transformations-Engine für Bézier-Knoten und -Tangenten als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    CommandLog, EditorState, PivotFreeze, SelectionSet, TransformCommand, TransformController,
};
pub use core::{
    Curve, Knot, KnotLinkCollection, KnotRef, SelectionElement, SplineGraph, TangentIndex,
    TangentMode, TangentRef,
};
pub use shared::{HandleOrientation, PivotMode, TransformOptions};
