//! Zustand einer laufenden Transformations-Geste.
//!
//! Zwei Lebensdauern:
//! - Schritt-Caches (Sync-Deltas, Guard-Mengen, bewegte Positionen) gelten für genau einen
//!   `apply_*`-Aufruf und werden mit [`GestureState::begin_step`] geleert.
//! - Der Mouse-Down-Snapshot lebt von `record_mouse_down_state` bis
//!   `clear_mouse_down_state` und dient der Skalierung als Referenz.

use crate::core::{Knot, KnotRef, SelectionElement};
use glam::{Quat, Vec3};
use std::collections::{HashMap, HashSet};

/// Rotations-/Längen-Delta, das eine Tangente auf ihren Knoten überträgt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncDelta {
    /// Drehung des Knotens um seine eigene Position
    pub rotation: Quat,
    /// Längen-Änderung (additiv, bei relativer Anwendung)
    pub magnitude: f32,
    /// Längen-Faktor (bei absoluter Anwendung während der Skalierung)
    pub scale: f32,
}

impl SyncDelta {
    /// Keine Drehung, keine Längenänderung
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        magnitude: 0.0,
        scale: 1.0,
    };

    /// Reine Drehung ohne Längenänderung.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }
}

/// Wer das Schritt-Delta zuerst aufgezeichnet hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOrigin {
    /// Ein selektierter Knoten (Delta ist Identität bzw. die Welt-Drehung)
    Knot,
    /// Eine synchronisierte Tangente
    Tangent,
}

/// Zustand aller selektierten Knoten beim Beginn einer Geste.
#[derive(Debug, Clone)]
pub struct MouseDownState {
    /// Pivot-Position beim Beginn der Geste
    pub pivot_position: Vec3,
    /// Handle-Rotation beim Beginn der Geste
    pub handle_rotation: Quat,
    knots: HashMap<KnotRef, Knot>,
}

impl MouseDownState {
    /// Erstellt einen leeren Snapshot für Pivot und Handle-Rotation.
    pub fn new(pivot_position: Vec3, handle_rotation: Quat) -> Self {
        Self {
            pivot_position,
            handle_rotation,
            knots: HashMap::new(),
        }
    }

    /// Speichert den Zustand eines Knotens; ein bereits erfasster Knoten bleibt unverändert.
    pub fn record_knot(&mut self, knot_ref: KnotRef, knot: Knot) {
        self.knots.entry(knot_ref).or_insert(knot);
    }

    /// Gespeicherter Zustand eines Knotens.
    pub fn knot(&self, knot_ref: KnotRef) -> Option<&Knot> {
        self.knots.get(&knot_ref)
    }

    /// Anzahl erfasster Knoten.
    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }
}

/// Schritt- und gestenbezogener Zustand der Transformations-Engine.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    step_delta: Option<(SyncDelta, SyncOrigin)>,
    knot_deltas: HashMap<KnotRef, SyncDelta>,
    moved_positions: HashSet<KnotRef>,
    rotated_knots: HashSet<KnotRef>,
    restored_knots: HashSet<KnotRef>,
    scaled_elements: HashSet<SelectionElement>,
    mouse_down: Option<MouseDownState>,
}

impl GestureState {
    /// Erstellt einen Zustand ohne aktive Geste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert alle Schritt-Caches. Der Mouse-Down-Snapshot bleibt erhalten.
    pub fn begin_step(&mut self) {
        self.step_delta = None;
        self.knot_deltas.clear();
        self.moved_positions.clear();
        self.rotated_knots.clear();
        self.restored_knots.clear();
        self.scaled_elements.clear();
    }

    /// Erstes in diesem Schritt aufgezeichnetes Delta.
    pub fn step_delta(&self) -> Option<SyncDelta> {
        self.step_delta.map(|(delta, _)| delta)
    }

    /// Herkunft des Schritt-Deltas.
    pub fn step_origin(&self) -> Option<SyncOrigin> {
        self.step_delta.map(|(_, origin)| origin)
    }

    /// Zeichnet das Schritt-Delta auf, sofern noch keines existiert.
    pub fn record_step_delta(&mut self, delta: SyncDelta, origin: SyncOrigin) {
        if self.step_delta.is_none() {
            self.step_delta = Some((delta, origin));
        }
    }

    /// Bereits berechnetes Delta eines Knotens in diesem Schritt.
    pub fn knot_delta(&self, knot: KnotRef) -> Option<SyncDelta> {
        self.knot_deltas.get(&knot).copied()
    }

    /// Merkt sich das Delta eines Knotens für dessen zweite Tangente.
    pub fn record_knot_delta(&mut self, knot: KnotRef, delta: SyncDelta) {
        self.knot_deltas.entry(knot).or_insert(delta);
    }

    /// Reserviert die Positions-Änderung eines Knotens für diesen Schritt.
    ///
    /// Gekoppelte Knoten folgen der Position über den Graphen und werden
    /// mit reserviert. `false`, wenn der Knoten oder ein Link-Partner seine
    /// Position in diesem Schritt bereits geändert hat.
    pub fn claim_position(
        &mut self,
        knot: KnotRef,
        linked: impl IntoIterator<Item = KnotRef>,
    ) -> bool {
        if !self.moved_positions.insert(knot) {
            return false;
        }
        self.moved_positions.extend(linked);
        true
    }

    /// Markiert einen Knoten als gedreht; `false`, wenn er es schon war.
    pub fn mark_rotated(&mut self, knot: KnotRef) -> bool {
        self.rotated_knots.insert(knot)
    }

    /// Markiert einen Knoten als aus dem Snapshot wiederhergestellt.
    pub fn mark_restored(&mut self, knot: KnotRef) -> bool {
        self.restored_knots.insert(knot)
    }

    /// Markiert ein Element als skaliert; `false`, wenn es schon skaliert war.
    pub fn mark_scaled(&mut self, element: SelectionElement) -> bool {
        self.scaled_elements.insert(element)
    }

    /// Aktiver Mouse-Down-Snapshot.
    pub fn mouse_down(&self) -> Option<&MouseDownState> {
        self.mouse_down.as_ref()
    }

    /// Setzt den Mouse-Down-Snapshot (ersetzt einen vorhandenen).
    pub fn set_mouse_down(&mut self, state: MouseDownState) {
        self.mouse_down = Some(state);
    }

    /// Entnimmt den Snapshot, z. B. um ihn während eines Schritts zu lesen.
    pub fn take_mouse_down(&mut self) -> Option<MouseDownState> {
        self.mouse_down.take()
    }

    /// Verwirft den Snapshot (Ende oder Abbruch der Geste).
    pub fn clear_mouse_down(&mut self) {
        self.mouse_down = None;
    }

    /// Gibt `true` zurück, solange ein Snapshot existiert.
    pub fn is_gesture_active(&self) -> bool {
        self.mouse_down.is_some()
    }
}
