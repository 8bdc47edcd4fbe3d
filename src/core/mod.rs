//! Core-Domänentypen: Kurven, Knoten, Tangenten-Modi, Knoten-Links.

pub mod curve;
/// Referenzen auf Knoten, Tangenten und selektierbare Elemente
pub mod element;
pub mod knot;
pub mod knot_link;
/// Der Spline-Graph als Container aller Kurven
///
/// - SplineGraph: Kurven + Link-Tabelle + Dirty-Tracking
/// - Curve: geordnete Knotenfolge
/// - Knot: Position, Rotation, zwei lokale Tangenten, Modus
pub mod spline_graph;
pub mod tangent_mode;

pub use curve::Curve;
pub use element::{KnotRef, SelectionElement, TangentIndex, TangentRef};
pub use knot::Knot;
pub use knot_link::KnotLinkCollection;
pub use spline_graph::SplineGraph;
pub use tangent_mode::{notify_tangent_changed, TangentMode};
