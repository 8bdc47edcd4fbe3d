//! Tangenten-Modus eines Knotens und die zugehörigen Zustandsregeln.

use super::{Knot, TangentIndex};
use serde::{Deserialize, Serialize};

/// Beziehung der beiden Tangenten eines Knotens zueinander.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TangentMode {
    /// Tangenten sind vollständig abgeleitet (Länge 0), nicht selektierbar
    Linear,
    /// Tangenten werden aus den Nachbarknoten berechnet, nicht selektierbar
    #[default]
    AutoSmooth,
    /// Beide Tangenten sind unabhängig
    Broken,
    /// Kollinear, entgegengesetzt und gleich lang
    Mirrored,
    /// Kollinear und entgegengesetzt, Längen unabhängig
    Continuous,
}

impl TangentMode {
    /// Ob die Tangenten direkt bearbeitet werden dürfen.
    pub fn can_edit_tangents(self) -> bool {
        match self {
            Self::Linear | Self::AutoSmooth => false,
            Self::Broken | Self::Mirrored | Self::Continuous => true,
        }
    }

    /// Ob die beiden Tangenten aneinander gekoppelt sind (Mirrored/Continuous).
    pub fn is_synchronized(self) -> bool {
        matches!(self, Self::Mirrored | Self::Continuous)
    }

    /// Ob die Tangenten aus der Geometrie abgeleitet werden.
    pub fn is_derived(self) -> bool {
        !self.can_edit_tangents()
    }
}

/// Stellt nach einer direkten Tangenten-Änderung die Modus-Invariante
/// auf der Gegenseite wieder her.
///
/// - `Mirrored`: Gegenseite = -bearbeitete Tangente
/// - `Continuous`: Gegenseite übernimmt die Richtung, behält aber ihre Länge
/// - Alle anderen Modi: keine Kopplung
///
/// Eine bearbeitete Tangente der Länge 0 gibt bei `Continuous` keine Richtung
/// vor, die Gegenseite bleibt dann unverändert.
pub fn notify_tangent_changed(knot: &mut Knot, index: TangentIndex, mode_at_edit: TangentMode) {
    let edited = knot.local_tangent(index);
    let opposite = index.opposite();

    match mode_at_edit {
        TangentMode::Mirrored => {
            *knot.local_tangent_mut(opposite) = -edited;
        }
        TangentMode::Continuous => {
            if let Some(direction) = edited.try_normalize() {
                let length = knot.local_tangent(opposite).length();
                *knot.local_tangent_mut(opposite) = -direction * length;
            }
        }
        TangentMode::Broken | TangentMode::Linear | TangentMode::AutoSmooth => {}
    }
}
