//! Eine einzelne Kurve: geordnete Knotenfolge, optional geschlossen.

use super::Knot;
use anyhow::{bail, Result};

/// Geordnete, veränderbare Knotenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    knots: Vec<Knot>,
    /// Letzter Knoten ist implizit mit dem ersten verbunden
    pub closed: bool,
}

impl Curve {
    /// Erstellt eine leere, offene Kurve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Kurve aus vorhandenen Knoten.
    pub fn from_knots(knots: Vec<Knot>, closed: bool) -> Self {
        Self { knots, closed }
    }

    /// Anzahl der Knoten.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Gibt `true` zurück, wenn die Kurve keine Knoten hat.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Read-only Sicht auf alle Knoten.
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Mutable Sicht auf alle Knoten (Topologie bleibt unverändert).
    pub(crate) fn knots_mut(&mut self) -> &mut [Knot] {
        &mut self.knots
    }

    /// Knoten an Index.
    pub fn knot(&self, index: usize) -> Option<&Knot> {
        self.knots.get(index)
    }

    /// Mutable Knoten an Index.
    pub fn knot_mut(&mut self, index: usize) -> Option<&mut Knot> {
        self.knots.get_mut(index)
    }

    /// Hängt einen Knoten an und gibt seinen Index zurück.
    pub fn push_knot(&mut self, knot: Knot) -> usize {
        self.knots.push(knot);
        self.knots.len() - 1
    }

    /// Fügt einen Knoten an `index` ein (`index == len` hängt an).
    pub fn insert_knot(&mut self, index: usize, knot: Knot) -> Result<()> {
        if index > self.knots.len() {
            bail!(
                "Knoten-Index {} außerhalb der Kurve (Länge {})",
                index,
                self.knots.len()
            );
        }
        self.knots.insert(index, knot);
        Ok(())
    }

    /// Entfernt den Knoten an `index`.
    pub fn remove_knot(&mut self, index: usize) -> Result<Knot> {
        if index >= self.knots.len() {
            bail!(
                "Knoten-Index {} außerhalb der Kurve (Länge {})",
                index,
                self.knots.len()
            );
        }
        Ok(self.knots.remove(index))
    }

    /// Index des Vorgängers, bei geschlossenen Kurven zyklisch.
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        let len = self.knots.len();
        if index >= len {
            return None;
        }
        if index > 0 {
            Some(index - 1)
        } else if self.closed && len > 1 {
            Some(len - 1)
        } else {
            None
        }
    }

    /// Index des Nachfolgers, bei geschlossenen Kurven zyklisch.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let len = self.knots.len();
        if index >= len {
            return None;
        }
        if index + 1 < len {
            Some(index + 1)
        } else if self.closed && len > 1 {
            Some(0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn three_knots(closed: bool) -> Curve {
        Curve::from_knots(
            vec![
                Knot::new(Vec3::ZERO),
                Knot::new(Vec3::X),
                Knot::new(Vec3::new(2.0, 0.0, 0.0)),
            ],
            closed,
        )
    }

    #[test]
    fn nachbarn_offene_kurve() {
        let curve = three_knots(false);
        assert_eq!(curve.previous_index(0), None);
        assert_eq!(curve.next_index(2), None);
        assert_eq!(curve.next_index(0), Some(1));
        assert_eq!(curve.previous_index(2), Some(1));
    }

    #[test]
    fn nachbarn_geschlossene_kurve() {
        let curve = three_knots(true);
        assert_eq!(curve.previous_index(0), Some(2));
        assert_eq!(curve.next_index(2), Some(0));
    }

    #[test]
    fn einfuegen_und_entfernen_pruefen_grenzen() {
        let mut curve = three_knots(false);
        assert!(curve.insert_knot(4, Knot::new(Vec3::Y)).is_err());
        curve
            .insert_knot(1, Knot::new(Vec3::Y))
            .expect("Einfügen an gültigem Index");
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.knot(1).map(|k| k.position), Some(Vec3::Y));

        assert!(curve.remove_knot(4).is_err());
        let removed = curve.remove_knot(1).expect("Entfernen an gültigem Index");
        assert_eq!(removed.position, Vec3::Y);
        assert_eq!(curve.len(), 3);
    }
}
