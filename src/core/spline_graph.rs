//! Die zentrale Datenstruktur: alle Kurven, ihre Knoten und die Knoten-Links.

use super::tangent_mode::notify_tangent_changed;
use super::{
    Curve, Knot, KnotLinkCollection, KnotRef, SelectionElement, TangentIndex, TangentMode,
    TangentRef,
};
use crate::shared::spline_geometry::{auto_smooth_tangent, phantom_neighbor};
use anyhow::{anyhow, bail, Context, Result};
use glam::{Quat, Vec3};
use std::collections::BTreeSet;

/// Persistente Kurvendaten eines Spline-Containers.
///
/// Knoten werden pro Kurve als Arena per Index adressiert; Tangenten sind
/// Felder ihres Knotens. Positionsänderungen laufen über
/// [`SplineGraph::set_knot_position`], damit gekoppelte Knoten mitziehen.
#[derive(Debug, Clone, Default)]
pub struct SplineGraph {
    curves: Vec<Curve>,
    links: KnotLinkCollection,
    /// Orientierung des Containers (Basis für `HandleOrientation::Local`)
    pub container_rotation: Quat,
    /// Seit dem letzten `take_dirty_curves()` veränderte Kurven
    dirty_curves: BTreeSet<usize>,
}

impl SplineGraph {
    /// Erstellt einen leeren Graphen.
    pub fn new() -> Self {
        Self {
            curves: Vec::new(),
            links: KnotLinkCollection::new(),
            container_rotation: Quat::IDENTITY,
            dirty_curves: BTreeSet::new(),
        }
    }

    /// Fügt eine Kurve hinzu und gibt ihren Index zurück.
    pub fn add_curve(&mut self, curve: Curve) -> usize {
        self.curves.push(curve);
        let index = self.curves.len() - 1;
        self.dirty_curves.insert(index);
        index
    }

    /// Entfernt eine Kurve inklusive aller Links auf ihre Knoten.
    pub fn remove_curve(&mut self, index: usize) -> Result<Curve> {
        if index >= self.curves.len() {
            bail!("Kurve {} existiert nicht", index);
        }
        let curve = self.curves.remove(index);
        self.links.curve_removed(index);
        self.dirty_curves = self
            .dirty_curves
            .iter()
            .filter(|c| **c != index)
            .map(|c| if *c > index { c - 1 } else { *c })
            .collect();
        Ok(curve)
    }

    /// Anzahl der Kurven.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Kurve an Index.
    pub fn curve(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    /// Read-only Sicht auf alle Kurven.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Setzt das `closed`-Flag einer Kurve.
    pub fn set_curve_closed(&mut self, index: usize, closed: bool) -> Result<()> {
        let curve = self
            .curves
            .get_mut(index)
            .ok_or_else(|| anyhow!("Kurve {} existiert nicht", index))?;
        curve.closed = closed;
        self.dirty_curves.insert(index);
        Ok(())
    }

    /// Knoten an Adresse.
    pub fn knot(&self, knot: KnotRef) -> Option<&Knot> {
        self.curves.get(knot.curve)?.knot(knot.knot)
    }

    /// Mutable Knoten an Adresse; markiert die Kurve als verändert.
    ///
    /// Positionsänderungen sollten über `set_knot_position` laufen,
    /// sonst folgen gekoppelte Knoten nicht.
    pub fn knot_mut(&mut self, knot: KnotRef) -> Option<&mut Knot> {
        let found = self.curves.get_mut(knot.curve)?.knot_mut(knot.knot)?;
        self.dirty_curves.insert(knot.curve);
        Some(found)
    }

    /// Prüft ob der Knoten existiert.
    pub fn contains_knot(&self, knot: KnotRef) -> bool {
        self.knot(knot).is_some()
    }

    /// Prüft ob das Element (Knoten oder Tangente) auf einen existierenden Knoten zeigt.
    pub fn contains_element(&self, element: SelectionElement) -> bool {
        self.contains_knot(element.owner())
    }

    /// Fügt einen Knoten ein und verschiebt die Link-Indizes der Kurve.
    pub fn insert_knot(&mut self, curve: usize, index: usize, knot: Knot) -> Result<KnotRef> {
        let target = self
            .curves
            .get_mut(curve)
            .ok_or_else(|| anyhow!("Kurve {} existiert nicht", curve))?;
        target
            .insert_knot(index, knot)
            .with_context(|| format!("Einfügen in Kurve {} fehlgeschlagen", curve))?;
        self.links.knot_inserted(curve, index);
        self.dirty_curves.insert(curve);
        Ok(KnotRef::new(curve, index))
    }

    /// Entfernt einen Knoten, löst seine Links und verschiebt die übrigen Indizes.
    pub fn remove_knot(&mut self, knot: KnotRef) -> Result<Knot> {
        let target = self
            .curves
            .get_mut(knot.curve)
            .ok_or_else(|| anyhow!("Kurve {} existiert nicht", knot.curve))?;
        let removed = target
            .remove_knot(knot.knot)
            .with_context(|| format!("Entfernen aus Kurve {} fehlgeschlagen", knot.curve))?;
        self.links.knot_removed(knot.curve, knot.knot);
        self.dirty_curves.insert(knot.curve);
        Ok(removed)
    }

    /// Setzt die Position eines Knotens und aller mit ihm gekoppelten Knoten.
    pub fn set_knot_position(&mut self, knot: KnotRef, position: Vec3) -> bool {
        let Some(target) = self.knot_mut(knot) else {
            return false;
        };
        target.position = position;

        for linked in self.links.linked_knots(knot) {
            if let Some(other) = self.knot_mut(linked) {
                other.position = position;
            }
        }
        true
    }

    /// Setzt die Orientierung eines Knotens (normalisiert).
    pub fn set_knot_rotation(&mut self, knot: KnotRef, rotation: Quat) -> bool {
        let Some(target) = self.knot_mut(knot) else {
            return false;
        };
        target.rotation = rotation.normalize();
        true
    }

    /// Welt-Position eines Elements (Knoten: Position, Tangente: Spitze).
    pub fn element_position(&self, element: SelectionElement) -> Option<Vec3> {
        match element {
            SelectionElement::Knot(knot) => self.knot(knot).map(|k| k.position),
            SelectionElement::Tangent(tangent) => self
                .knot(tangent.knot)
                .map(|k| k.tangent_position(tangent.index)),
        }
    }

    /// Tangenten-Richtung in Weltkoordinaten.
    pub fn tangent_direction(&self, tangent: TangentRef) -> Option<Vec3> {
        self.knot(tangent.knot)
            .map(|k| k.tangent_direction(tangent.index))
    }

    /// Setzt eine Tangenten-Richtung unter Beachtung des Tangenten-Modus.
    ///
    /// Bei `Mirrored`/`Continuous` wird die Gegenseite sofort nachgezogen.
    /// Abgeleitete Modi (`Linear`, `AutoSmooth`) lehnen die Änderung ab.
    pub fn set_tangent_direction(&mut self, tangent: TangentRef, direction: Vec3) -> Result<()> {
        let knot = self
            .knot_mut(tangent.knot)
            .ok_or_else(|| anyhow!("Knoten {:?} existiert nicht", tangent.knot))?;
        let mode = knot.mode;
        if !mode.can_edit_tangents() {
            bail!(
                "Tangenten von Knoten {:?} sind im Modus {:?} nicht editierbar",
                tangent.knot,
                mode
            );
        }
        knot.set_tangent_direction(tangent.index, direction);
        notify_tangent_changed(knot, tangent.index, mode);
        Ok(())
    }

    /// Setzt eine Tangenten-Richtung ohne Modus-Regeln.
    pub(crate) fn set_tangent_direction_raw(&mut self, tangent: TangentRef, direction: Vec3) {
        if let Some(knot) = self.knot_mut(tangent.knot) {
            knot.set_tangent_direction(tangent.index, direction);
        }
    }

    /// Stellt die Modus-Invariante auf der Gegenseite von `tangent` wieder her.
    pub fn notify_tangent_changed(&mut self, tangent: TangentRef, mode_at_edit: TangentMode) {
        if let Some(knot) = self.knot_mut(tangent.knot) {
            notify_tangent_changed(knot, tangent.index, mode_at_edit);
        }
    }

    /// Wechselt den Tangenten-Modus eines Knotens.
    pub fn set_tangent_mode(&mut self, knot: KnotRef, mode: TangentMode) -> Result<()> {
        let target = self
            .knot_mut(knot)
            .ok_or_else(|| anyhow!("Knoten {:?} existiert nicht", knot))?;
        target.set_mode(mode);
        Ok(())
    }

    /// Erzwingt `Broken`, wenn eine Transformation die Kopplung nicht einhalten kann.
    pub(crate) fn force_broken(&mut self, knot: KnotRef) {
        if let Some(target) = self.knot_mut(knot) {
            if target.mode != TangentMode::Broken {
                log::debug!(
                    "Knoten {:?}: Tangenten-Modus {:?} -> Broken (Transformation nicht kompatibel)",
                    knot,
                    target.mode
                );
                target.mode = TangentMode::Broken;
            }
        }
    }

    // ── Links ───────────────────────────────────────────────────────

    /// Read-only Sicht auf die Link-Tabelle.
    pub fn links(&self) -> &KnotLinkCollection {
        &self.links
    }

    /// Koppelt zwei Knoten; `b` wird auf die Position von `a` gesetzt.
    pub fn link_knots(&mut self, a: KnotRef, b: KnotRef) -> Result<()> {
        let position = self
            .knot(a)
            .map(|k| k.position)
            .ok_or_else(|| anyhow!("Knoten {:?} existiert nicht", a))?;
        if !self.contains_knot(b) {
            bail!("Knoten {:?} existiert nicht", b);
        }
        if a == b {
            bail!("Knoten {:?} kann nicht mit sich selbst gekoppelt werden", a);
        }
        if self.links.are_linked(a, b) {
            log::debug!("Knoten {:?} und {:?} sind bereits gekoppelt", a, b);
            return Ok(());
        }
        self.links.link(a, b);
        self.set_knot_position(a, position);
        Ok(())
    }

    /// Löst einen Knoten aus seiner Link-Gruppe.
    pub fn unlink_knot(&mut self, knot: KnotRef) -> bool {
        self.links.unlink(knot)
    }

    /// Alle mit `knot` gekoppelten Knoten (ohne `knot` selbst).
    pub fn linked_knots(&self, knot: KnotRef) -> Vec<KnotRef> {
        self.links.linked_knots(knot)
    }

    // ── Abgeleitete Tangenten & Dirty-Tracking ──────────────────────

    /// Berechnet `AutoSmooth`-Tangenten einer Kurve neu und setzt `Linear`-Tangenten auf 0.
    pub fn refresh_derived_tangents(&mut self, curve_index: usize, tension: f32) {
        let Some(curve) = self.curves.get(curve_index) else {
            return;
        };

        let updates: Vec<(usize, Vec3)> = curve
            .knots()
            .iter()
            .enumerate()
            .filter(|(_, knot)| knot.mode == TangentMode::AutoSmooth)
            .map(|(i, knot)| {
                let previous = curve.previous_index(i).and_then(|p| curve.knot(p));
                let next = curve.next_index(i).and_then(|n| curve.knot(n));
                let tangent = match (previous, next) {
                    (Some(p), Some(n)) => {
                        auto_smooth_tangent(p.position, knot.position, n.position, tension)
                    }
                    (None, Some(n)) => auto_smooth_tangent(
                        phantom_neighbor(knot.position, n.position),
                        knot.position,
                        n.position,
                        tension,
                    ),
                    (Some(p), None) => auto_smooth_tangent(
                        p.position,
                        knot.position,
                        phantom_neighbor(knot.position, p.position),
                        tension,
                    ),
                    (None, None) => Vec3::ZERO,
                };
                (i, tangent)
            })
            .collect();

        let Some(curve) = self.curves.get_mut(curve_index) else {
            return;
        };
        for (i, tangent) in updates {
            if let Some(knot) = curve.knot_mut(i) {
                knot.set_tangent_direction(TangentIndex::Out, tangent);
                knot.set_tangent_direction(TangentIndex::In, -tangent);
            }
        }
        for knot in curve.knots_mut() {
            if knot.mode == TangentMode::Linear {
                knot.tangent_in = Vec3::ZERO;
                knot.tangent_out = Vec3::ZERO;
            }
        }
    }

    /// Berechnet abgeleitete Tangenten aller veränderten Kurven neu.
    pub fn refresh_dirty_derived_tangents(&mut self, tension: f32) {
        let dirty: Vec<usize> = self.dirty_curves.iter().copied().collect();
        for curve in dirty {
            self.refresh_derived_tangents(curve, tension);
        }
    }

    /// Seit dem letzten Abholen veränderte Kurven.
    pub fn dirty_curves(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty_curves.iter().copied()
    }

    /// Gibt die veränderten Kurven zurück und leert die Menge.
    pub fn take_dirty_curves(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.dirty_curves).into_iter().collect()
    }
}
