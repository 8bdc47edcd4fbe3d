//! Referenzen auf Knoten und Tangenten im Spline-Graphen.
//!
//! Alle Referenzen sind reine Index-Adressen (Kurve + Knoten [+ Tangente]).
//! Gleichheit ist strukturell: eine Referenz bleibt gültig, wenn sich die
//! Position des Knotens ändert, wird aber ungültig sobald der Knoten entfernt wird.

/// Adresse eines Knotens: Kurven-Index + Knoten-Index innerhalb der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KnotRef {
    /// Index der besitzenden Kurve
    pub curve: usize,
    /// Index des Knotens innerhalb der Kurve
    pub knot: usize,
}

impl KnotRef {
    /// Erstellt eine neue Knoten-Referenz.
    pub const fn new(curve: usize, knot: usize) -> Self {
        Self { curve, knot }
    }
}

/// Seite einer Tangente am Knoten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TangentIndex {
    /// Eingehende Tangente (Richtung vorheriger Knoten)
    In,
    /// Ausgehende Tangente (Richtung nächster Knoten)
    Out,
}

impl TangentIndex {
    /// Liefert die gegenüberliegende Seite.
    pub fn opposite(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// Adresse einer Tangente: besitzender Knoten + Seite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TangentRef {
    /// Besitzender Knoten
    pub knot: KnotRef,
    /// Seite der Tangente
    pub index: TangentIndex,
}

impl TangentRef {
    /// Erstellt eine neue Tangenten-Referenz.
    pub const fn new(knot: KnotRef, index: TangentIndex) -> Self {
        Self { knot, index }
    }

    /// Tangente auf der anderen Seite desselben Knotens.
    pub fn opposite(self) -> Self {
        Self {
            knot: self.knot,
            index: self.index.opposite(),
        }
    }
}

/// Selektierbares Element: Knoten oder Tangente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionElement {
    /// Ein Knoten
    Knot(KnotRef),
    /// Eine Tangente eines Knotens
    Tangent(TangentRef),
}

impl SelectionElement {
    /// Knoten, dem das Element gehört (bei Knoten: der Knoten selbst).
    pub fn owner(&self) -> KnotRef {
        match self {
            Self::Knot(knot) => *knot,
            Self::Tangent(tangent) => tangent.knot,
        }
    }

    /// Gibt die Knoten-Referenz zurück, falls das Element ein Knoten ist.
    pub fn as_knot(&self) -> Option<KnotRef> {
        match self {
            Self::Knot(knot) => Some(*knot),
            Self::Tangent(_) => None,
        }
    }
}

impl From<KnotRef> for SelectionElement {
    fn from(knot: KnotRef) -> Self {
        Self::Knot(knot)
    }
}

impl From<TangentRef> for SelectionElement {
    fn from(tangent: TangentRef) -> Self {
        Self::Tangent(tangent)
    }
}
