use crate::core::{SelectionElement, SplineGraph};
use crate::shared::spline_geometry::{bounds, tangent_basis};
use crate::shared::{HandleOrientation, PivotMode, TransformOptions};
use glam::{Quat, Vec3};
use indexmap::IndexSet;
use std::ops::{BitOr, BitOrAssign};

/// Bitmaske zum Einfrieren von Pivot-Position und Handle-Rotation während einer Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PivotFreeze(u8);

impl PivotFreeze {
    /// Nichts eingefroren
    pub const NONE: Self = Self(0);
    /// Pivot-Position eingefroren
    pub const POSITION: Self = Self(1);
    /// Handle-Rotation eingefroren
    pub const ROTATION: Self = Self(1 << 1);
    /// Beides eingefroren
    pub const ALL: Self = Self(Self::POSITION.0 | Self::ROTATION.0);

    /// Prüft ob alle Bits von `other` gesetzt sind.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Gibt `true` zurück, wenn kein Bit gesetzt ist.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Setzt die Bits von `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Löscht die Bits von `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for PivotFreeze {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PivotFreeze {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Geordnete Selektion aus Knoten und Tangenten.
///
/// Die Einfügereihenfolge ist relevant: Element 0 ist das primäre Element
/// und bestimmt Pivot (im Modus `Pivot`) und Handle-Rotation
/// (Orientierung `Element`/`Parent`).
#[derive(Debug, Clone)]
pub struct SelectionSet {
    elements: IndexSet<SelectionElement>,
    /// Bezugspunkt für Drehung/Skalierung
    pub pivot_mode: PivotMode,
    /// Achsensystem der Handles
    pub handle_orientation: HandleOrientation,
    /// Eingefrorene Größen (von Tool-Frontends während einer Geste gesetzt)
    pub pivot_freeze: PivotFreeze,
    pivot_position: Vec3,
    handle_rotation: Quat,
    handle_rotation_inverse: Quat,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSet {
    /// Erstellt eine leere Selektion mit Standard-Pivot und globaler Orientierung.
    pub fn new() -> Self {
        Self::from_options(&TransformOptions::default())
    }

    /// Erstellt eine leere Selektion mit Pivot-Modus und Orientierung aus den Optionen.
    pub fn from_options(options: &TransformOptions) -> Self {
        Self {
            elements: IndexSet::new(),
            pivot_mode: options.pivot_mode,
            handle_orientation: options.handle_orientation,
            pivot_freeze: PivotFreeze::NONE,
            pivot_position: Vec3::ZERO,
            handle_rotation: Quat::IDENTITY,
            handle_rotation_inverse: Quat::IDENTITY,
        }
    }

    /// Fügt ein Element hinten an. Gibt `false` zurück, wenn es schon selektiert war.
    pub fn select(&mut self, element: SelectionElement) -> bool {
        self.elements.insert(element)
    }

    /// Ersetzt die Selektion durch ein einzelnes Element.
    pub fn select_exclusive(&mut self, element: SelectionElement) {
        self.elements.clear();
        self.elements.insert(element);
    }

    /// Entfernt ein Element, die Reihenfolge der übrigen bleibt erhalten.
    pub fn deselect(&mut self, element: SelectionElement) -> bool {
        self.elements.shift_remove(&element)
    }

    /// Schaltet die Selektion eines Elements um; gibt den neuen Zustand zurück.
    pub fn toggle(&mut self, element: SelectionElement) -> bool {
        if self.deselect(element) {
            false
        } else {
            self.select(element)
        }
    }

    /// Leert die Selektion.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Macht ein bereits selektiertes Element zum primären Element.
    pub fn set_primary(&mut self, element: SelectionElement) -> bool {
        let Some(index) = self.elements.get_index_of(&element) else {
            return false;
        };
        self.elements.move_index(index, 0);
        true
    }

    /// Prüft ob ein Element selektiert ist.
    pub fn contains(&self, element: SelectionElement) -> bool {
        self.elements.contains(&element)
    }

    /// Primäres Element (zuerst selektiert).
    pub fn primary(&self) -> Option<SelectionElement> {
        self.elements.first().copied()
    }

    /// Iterator über alle Elemente in Selektionsreihenfolge.
    pub fn elements(&self) -> impl Iterator<Item = SelectionElement> + '_ {
        self.elements.iter().copied()
    }

    /// Anzahl selektierter Elemente.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Ob eine Transformation möglich ist (Selektion nicht leer).
    pub fn can_manipulate(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Entfernt Elemente, deren Knoten nicht mehr existiert oder deren
    /// Tangenten im aktuellen Modus nicht selektierbar sind.
    ///
    /// Gibt die Anzahl entfernter Elemente zurück.
    pub fn prune(&mut self, graph: &SplineGraph) -> usize {
        let before = self.elements.len();
        self.elements.retain(|element| match element {
            SelectionElement::Knot(knot) => graph.contains_knot(*knot),
            SelectionElement::Tangent(tangent) => graph
                .knot(tangent.knot)
                .is_some_and(|k| k.mode.can_edit_tangents()),
        });
        before - self.elements.len()
    }

    /// Aktuelle Pivot-Position.
    pub fn pivot_position(&self) -> Vec3 {
        self.pivot_position
    }

    /// Aktuelle Handle-Rotation.
    pub fn handle_rotation(&self) -> Quat {
        self.handle_rotation
    }

    /// Inverse der Handle-Rotation (gecacht).
    pub fn handle_rotation_inverse(&self) -> Quat {
        self.handle_rotation_inverse
    }

    fn pivot_source(
        graph: &SplineGraph,
        element: SelectionElement,
        use_knot_position_for_tangents: bool,
    ) -> Option<Vec3> {
        match element {
            SelectionElement::Tangent(tangent) if use_knot_position_for_tangents => {
                graph.knot(tangent.knot).map(|k| k.position)
            }
            _ => graph.element_position(element),
        }
    }

    /// Bounding-Box aller Elemente (Tangenten optional über ihren Knoten).
    pub fn bounds(
        &self,
        graph: &SplineGraph,
        use_knot_position_for_tangents: bool,
    ) -> Option<(Vec3, Vec3)> {
        bounds(
            self.elements
                .iter()
                .filter_map(|e| Self::pivot_source(graph, *e, use_knot_position_for_tangents)),
        )
    }

    /// Berechnet die Pivot-Position neu (außer bei eingefrorener Position).
    pub fn update_pivot(&mut self, graph: &SplineGraph, use_knot_position_for_tangents: bool) {
        if self.pivot_freeze.contains(PivotFreeze::POSITION) {
            return;
        }

        let pivot = match self.pivot_mode {
            PivotMode::Center => self
                .bounds(graph, use_knot_position_for_tangents)
                .map(|(min, max)| (min + max) * 0.5),
            PivotMode::Pivot => self.primary().and_then(|primary| {
                Self::pivot_source(graph, primary, use_knot_position_for_tangents)
            }),
        };

        if let Some(pivot) = pivot {
            self.pivot_position = pivot;
        }
    }

    /// Berechnet die Handle-Rotation aus Orientierung und primärem Element neu
    /// (außer bei eingefrorener Rotation).
    ///
    /// `Element` und `Parent` leiten die Basis gleich ab: Tangente über
    /// Richtung und Up-Vektor des Knotens, Knoten über seine Rotation.
    pub fn update_handle_rotation(&mut self, graph: &SplineGraph) {
        if self.pivot_freeze.contains(PivotFreeze::ROTATION) {
            return;
        }

        let rotation = match (self.handle_orientation, self.primary()) {
            (HandleOrientation::Global, _) => Quat::IDENTITY,
            (HandleOrientation::Local, _) => graph.container_rotation,
            (_, None) => graph.container_rotation,
            (_, Some(SelectionElement::Tangent(tangent))) => graph
                .knot(tangent.knot)
                .map(|knot| {
                    tangent_basis(
                        knot.tangent_direction(tangent.index),
                        knot.up(),
                        knot.right(),
                    )
                })
                .unwrap_or(graph.container_rotation),
            (_, Some(SelectionElement::Knot(knot))) => graph
                .knot(knot)
                .map(|k| k.rotation)
                .unwrap_or(graph.container_rotation),
        };

        self.handle_rotation = rotation.normalize();
        self.handle_rotation_inverse = self.handle_rotation.inverse();
    }
}
