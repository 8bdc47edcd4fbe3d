//! Zentrale Konfiguration der Transform-Engine.
//!
//! `TransformOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Toleranzen ──────────────────────────────────────────────────────

/// Drehwinkel (Radiant), unterhalb dessen eine Drehung als Identität gilt.
pub const ANGLE_EPSILON: f32 = 1.0e-4;
/// Längen-Toleranz für Null-Tangenten, Zentrum-auf-Knoten und Skalierung ≈ 1.
pub const LENGTH_EPSILON: f32 = 1.0e-5;
/// Toleranz `1 - |cos|` für den Parallel-Test von Drehachse und Knoten-Zentrum-Vektor.
pub const PARALLEL_TOLERANCE: f32 = 1.0e-3;

// ── Abgeleitete Tangenten ───────────────────────────────────────────

/// Gewichtung der Nachbarabstände bei `AutoSmooth`-Tangenten.
pub const AUTO_SMOOTH_TENSION: f32 = 1.0 / 3.0;

// ── Pivot & Orientierung ───────────────────────────────────────────

/// Bezugspunkt für Drehung und Skalierung mehrerer Elemente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotMode {
    /// Position des primären (ersten) Elements
    Pivot,
    /// Mittelpunkt der Bounding-Box aller Elemente
    #[default]
    Center,
}

/// Achsensystem, in dem Dreh- und Skalier-Deltas interpretiert werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleOrientation {
    /// Weltachsen
    #[default]
    Global,
    /// Achsen des Spline-Containers
    Local,
    /// Wie `Element`: Basis aus dem primären Element
    Parent,
    /// Achsen des primären Elements selbst
    Element,
}

impl HandleOrientation {
    /// Ob Deltas im lokalen Rahmen des Elements angewendet werden (Element/Parent).
    pub fn is_element_space(self) -> bool {
        matches!(self, Self::Element | Self::Parent)
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen der Transform-Engine.
/// Wird als `spline_knot_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformOptions {
    // ── Pivot ───────────────────────────────────────────────────
    /// Start-Pivot-Modus einer neuen Selektion
    pub pivot_mode: PivotMode,
    /// Start-Orientierung einer neuen Selektion
    pub handle_orientation: HandleOrientation,
    /// Für Tangenten die Position des besitzenden Knotens als Pivot verwenden
    #[serde(default = "default_use_knot_position_for_tangents")]
    pub use_knot_position_for_tangents: bool,

    // ── Toleranzen ──────────────────────────────────────────────
    /// Winkel-Toleranz in Radiant
    pub angle_epsilon: f32,
    /// Längen-Toleranz in Welteinheiten
    pub length_epsilon: f32,
    /// Toleranz für den Parallel-Test (1 - |cos|)
    #[serde(default = "default_parallel_tolerance")]
    pub parallel_tolerance: f32,

    // ── Abgeleitete Tangenten ───────────────────────────────────
    /// Gewichtung für `AutoSmooth`-Tangenten
    #[serde(default = "default_auto_smooth_tension")]
    pub auto_smooth_tension: f32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            pivot_mode: PivotMode::default(),
            handle_orientation: HandleOrientation::default(),
            use_knot_position_for_tangents: true,

            angle_epsilon: ANGLE_EPSILON,
            length_epsilon: LENGTH_EPSILON,
            parallel_tolerance: PARALLEL_TOLERANCE,

            auto_smooth_tension: AUTO_SMOOTH_TENSION,
        }
    }
}

/// Serde-Default für `use_knot_position_for_tangents` (Abwärtskompatibilität).
fn default_use_knot_position_for_tangents() -> bool {
    true
}

/// Serde-Default für `parallel_tolerance` (Abwärtskompatibilität).
fn default_parallel_tolerance() -> f32 {
    PARALLEL_TOLERANCE
}

/// Serde-Default für `auto_smooth_tension` (Abwärtskompatibilität).
fn default_auto_smooth_tension() -> f32 {
    AUTO_SMOOTH_TENSION
}

impl TransformOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_knot_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_knot_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_behaelt_werte() {
        let options = TransformOptions {
            pivot_mode: PivotMode::Pivot,
            handle_orientation: HandleOrientation::Element,
            angle_epsilon: 0.01,
            ..TransformOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        let parsed: TransformOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(parsed, options);
    }

    #[test]
    fn fehlende_felder_nutzen_defaults() {
        let text = r#"
pivot_mode = "Pivot"
handle_orientation = "Global"
angle_epsilon = 0.001
length_epsilon = 0.0001
"#;
        let parsed: TransformOptions = toml::from_str(text).expect("Deserialisierung");
        assert_eq!(parsed.pivot_mode, PivotMode::Pivot);
        assert!(parsed.use_knot_position_for_tangents);
        assert_eq!(parsed.parallel_tolerance, PARALLEL_TOLERANCE);
        assert_eq!(parsed.auto_smooth_tension, AUTO_SMOOTH_TENSION);
    }

    #[test]
    fn load_from_file_faellt_auf_defaults_zurueck() {
        let path = std::env::temp_dir().join("spline_knot_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(
            TransformOptions::load_from_file(&path),
            TransformOptions::default()
        );
    }

    #[test]
    fn save_und_load_ueber_datei() {
        let path = std::env::temp_dir().join(format!(
            "spline_knot_editor_options_{}.toml",
            std::process::id()
        ));
        let options = TransformOptions {
            handle_orientation: HandleOrientation::Parent,
            ..TransformOptions::default()
        };
        options.save_to_file(&path).expect("Speichern");
        let loaded = TransformOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, options);
    }
}
