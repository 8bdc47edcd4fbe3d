//! Ein Kontrollpunkt (Knoten) einer Bézier-Kurve mit seinen zwei Tangenten.

use super::{TangentIndex, TangentMode};
use glam::{Quat, Vec3};

/// Knoten einer Kurve.
///
/// Die Tangenten liegen im lokalen Koordinatensystem des Knotens
/// (`Weltrichtung = rotation * lokal`). Eine Drehung des Knotens dreht
/// damit beide Tangenten gemeinsam, was die Kollinearität bei
/// `Mirrored`/`Continuous` erhält.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    /// Position im Kurvenraum
    pub position: Vec3,
    /// Orientierung (bestimmt u. a. den Up-Vektor)
    pub rotation: Quat,
    /// Eingehende Tangente (lokal)
    pub tangent_in: Vec3,
    /// Ausgehende Tangente (lokal)
    pub tangent_out: Vec3,
    /// Tangenten-Modus
    pub mode: TangentMode,
}

impl Knot {
    /// Erstellt einen Knoten ohne Tangenten im Modus `AutoSmooth`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            tangent_in: Vec3::ZERO,
            tangent_out: Vec3::ZERO,
            mode: TangentMode::AutoSmooth,
        }
    }

    /// Erstellt einen Knoten mit Tangenten in Weltrichtung (Rotation = Identität).
    pub fn with_tangents(
        position: Vec3,
        tangent_in: Vec3,
        tangent_out: Vec3,
        mode: TangentMode,
    ) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            tangent_in,
            tangent_out,
            mode,
        }
    }

    /// Setzt eine neue Orientierung, die Welt-Richtungen der Tangenten bleiben erhalten.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        let world_in = self.tangent_direction(TangentIndex::In);
        let world_out = self.tangent_direction(TangentIndex::Out);
        self.rotation = rotation.normalize();
        self.set_tangent_direction(TangentIndex::In, world_in);
        self.set_tangent_direction(TangentIndex::Out, world_out);
        self
    }

    /// Up-Vektor des Knotens (lokale Y-Achse in Welt).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Lokale X-Achse in Welt.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Lokaler Tangenten-Vektor einer Seite.
    pub fn local_tangent(&self, index: TangentIndex) -> Vec3 {
        match index {
            TangentIndex::In => self.tangent_in,
            TangentIndex::Out => self.tangent_out,
        }
    }

    /// Mutable Referenz auf den lokalen Tangenten-Vektor einer Seite.
    pub fn local_tangent_mut(&mut self, index: TangentIndex) -> &mut Vec3 {
        match index {
            TangentIndex::In => &mut self.tangent_in,
            TangentIndex::Out => &mut self.tangent_out,
        }
    }

    /// Tangenten-Richtung in Weltkoordinaten.
    pub fn tangent_direction(&self, index: TangentIndex) -> Vec3 {
        self.rotation * self.local_tangent(index)
    }

    /// Setzt die Tangenten-Richtung in Weltkoordinaten, ohne Modus-Regeln anzuwenden.
    pub fn set_tangent_direction(&mut self, index: TangentIndex, direction: Vec3) {
        *self.local_tangent_mut(index) = self.rotation.inverse() * direction;
    }

    /// Position der Tangentenspitze in Weltkoordinaten.
    pub fn tangent_position(&self, index: TangentIndex) -> Vec3 {
        self.position + self.tangent_direction(index)
    }

    /// Reiner Zustandswechsel des Tangenten-Modus.
    ///
    /// Beim Wechsel nach `Mirrored`/`Continuous` werden die Tangenten nicht
    /// nachträglich ausgerichtet; das passiert erst bei der nächsten
    /// Transformation einer der beiden Tangenten. `Linear` setzt beide
    /// Tangenten auf 0.
    pub fn set_mode(&mut self, mode: TangentMode) {
        self.mode = mode;
        if mode == TangentMode::Linear {
            self.tangent_in = Vec3::ZERO;
            self.tangent_out = Vec3::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangenten_richtung_folgt_rotation() {
        let mut knot = Knot::with_tangents(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
            TangentMode::Mirrored,
        );
        knot.rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);

        let out = knot.tangent_direction(TangentIndex::Out);
        assert!(out.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));
        let tip = knot.tangent_position(TangentIndex::Out);
        assert!(tip.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn with_rotation_behaelt_weltrichtung() {
        let knot = Knot::with_tangents(
            Vec3::ZERO,
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            TangentMode::Mirrored,
        )
        .with_rotation(Quat::from_rotation_z(0.7));

        let out = knot.tangent_direction(TangentIndex::Out);
        assert!(out.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn linear_setzt_tangenten_zurueck() {
        let mut knot = Knot::with_tangents(
            Vec3::ZERO,
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            TangentMode::Broken,
        );
        knot.set_mode(TangentMode::Linear);
        assert_eq!(knot.tangent_in, Vec3::ZERO);
        assert_eq!(knot.tangent_out, Vec3::ZERO);
    }

    #[test]
    fn mirrored_richtet_nicht_sofort_aus() {
        let mut knot = Knot::with_tangents(
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            TangentMode::Broken,
        );
        knot.set_mode(TangentMode::Mirrored);
        assert_eq!(knot.tangent_in, Vec3::new(0.0, 1.0, 0.0));
    }
}
