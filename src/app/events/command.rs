use crate::app::state::PivotFreeze;
use crate::core::{KnotRef, SelectionElement, TangentMode};
use crate::shared::{HandleOrientation, PivotMode};
use glam::{Quat, Vec3};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformCommand {
    // === Selektion ===
    /// Element selektieren (additiv = an Selektion anhängen)
    Select {
        element: SelectionElement,
        additive: bool,
    },
    /// Element aus der Selektion entfernen
    Deselect { element: SelectionElement },
    /// Selektion umschalten
    ToggleSelection { element: SelectionElement },
    /// Bereits selektiertes Element zum primären Element machen
    SetPrimary { element: SelectionElement },
    /// Selektion aufheben
    ClearSelection,
    /// Ungültige Elemente aus der Selektion entfernen
    PruneSelection,

    // === Handles ===
    /// Pivot-Modus wechseln
    SetPivotMode { mode: PivotMode },
    /// Handle-Orientierung wechseln
    SetHandleOrientation { orientation: HandleOrientation },
    /// Pivot-Position/Handle-Rotation einfrieren
    SetPivotFreeze { freeze: PivotFreeze },
    /// Pivot und Handle-Rotation neu berechnen
    RefreshHandles,

    // === Gesten ===
    /// Geste beginnen (Mouse-Down-Snapshot)
    BeginGesture,
    /// Verschieben um Welt-Delta
    Translate { delta: Vec3 },
    /// Drehen um `center`
    Rotate { delta: Quat, center: Vec3 },
    /// Skalieren mit kumulativem Faktor relativ zum Gestenbeginn
    Scale { scale: Vec3 },
    /// Geste regulär beenden
    EndGesture,
    /// Geste abbrechen (kein Rollback)
    CancelGesture,

    // === Tangenten & Links ===
    /// Tangenten-Modus eines Knotens setzen
    SetTangentMode { knot: KnotRef, mode: TangentMode },
    /// Zwei Knoten koppeln
    LinkKnots { a: KnotRef, b: KnotRef },
    /// Knoten aus seiner Link-Gruppe lösen
    UnlinkKnot { knot: KnotRef },
}
