//! Reine Geometrie-Funktionen für Knoten- und Tangenten-Transformationen.
//!
//! Layer-neutral: kann von `core` und `app` importiert werden, ohne
//! Zirkel-Abhängigkeiten zu erzeugen. Alle Funktionen sind degenerationsfest
//! (Null-Vektoren, Null-Winkel) und liefern nie Fehler.

use glam::{Mat3, Quat, Vec3};

/// Dreht `point` um `center` mit `rotation`.
pub fn rotate_around(point: Vec3, center: Vec3, rotation: Quat) -> Vec3 {
    center + rotation * (point - center)
}

/// Skaliert `point` um `center` im Achsensystem `frame` (komponentenweise).
pub fn scale_around(point: Vec3, center: Vec3, scale: Vec3, frame: Quat) -> Vec3 {
    let local = frame.inverse() * (point - center);
    center + frame * (local * scale)
}

/// Kürzeste Drehung von `from` nach `to`.
///
/// Ein Null-`from` wird durch `fallback` (typisch: Up-Vektor des Knotens)
/// ersetzt, ein Null-`to` liefert die Identität.
pub fn shortest_arc(from: Vec3, to: Vec3, fallback: Vec3) -> Quat {
    let Some(to) = to.try_normalize() else {
        return Quat::IDENTITY;
    };
    let from = from
        .try_normalize()
        .or_else(|| fallback.try_normalize())
        .unwrap_or(Vec3::Y);
    Quat::from_rotation_arc(from, to)
}

/// Drehwinkel einer Quaternion in Radiant, im Bereich [0, π].
pub fn rotation_angle(rotation: Quat) -> f32 {
    let w = rotation.normalize().w.abs().min(1.0);
    2.0 * w.acos()
}

/// Prüft ob zwei Vektoren (anti-)parallel sind. Null-Vektoren gelten als parallel.
pub fn is_parallel(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    match (a.try_normalize(), b.try_normalize()) {
        (Some(a), Some(b)) => 1.0 - a.dot(b).abs() <= tolerance,
        _ => true,
    }
}

/// Abstand von `point` zur Geraden durch `origin` mit Richtung `direction`.
///
/// Ohne Richtung wird der Abstand zu `origin` geliefert.
pub fn distance_to_line(point: Vec3, origin: Vec3, direction: Vec3) -> f32 {
    let offset = point - origin;
    match direction.try_normalize() {
        Some(direction) => offset.cross(direction).length(),
        None => offset.length(),
    }
}

/// Setzt die Länge eines Vektors. Null-Vektoren übernehmen die Richtung von `fallback`.
pub fn with_length(vector: Vec3, length: f32, fallback: Vec3) -> Vec3 {
    let direction = vector
        .try_normalize()
        .or_else(|| fallback.try_normalize())
        .unwrap_or(Vec3::Y);
    direction * length.max(0.0)
}

/// Orientierung einer Tangente als Handle-Basis.
///
/// Vorwärts = Tangentenrichtung (bei Länge 0 der Up-Vektor), Rechts = Up × Vorwärts.
/// Sind Vorwärts und Up parallel, wird die lokale X-Achse des Knotens
/// (orthogonalisiert) als Rechts-Achse verwendet.
pub fn tangent_basis(direction: Vec3, up: Vec3, knot_right: Vec3) -> Quat {
    let up = up.try_normalize().unwrap_or(Vec3::Y);
    let forward = direction.try_normalize().unwrap_or(up);

    let right = up
        .cross(forward)
        .try_normalize()
        .or_else(|| (knot_right - forward * forward.dot(knot_right)).try_normalize())
        .unwrap_or_else(|| forward.any_orthonormal_vector());
    let basis_up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, basis_up, forward)).normalize()
}

/// Achsen-alignierte Bounding-Box einer Punktmenge.
pub fn bounds(points: impl IntoIterator<Item = Vec3>) -> Option<(Vec3, Vec3)> {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
}

/// Geglättete Tangente eines Knotens aus seinen Nachbarn (Catmull-Rom-Schätzung).
///
/// Die Nachbarabstände werden mit `tension` gewichtet; ein zusammenfallender
/// Nachbar liefert eine kurze Tangente Richtung des anderen Nachbarn.
pub fn auto_smooth_tangent(previous: Vec3, current: Vec3, next: Vec3, tension: f32) -> Vec3 {
    let d1 = current.distance(previous);
    let d2 = next.distance(current);

    if d1 <= f32::EPSILON && d2 <= f32::EPSILON {
        return Vec3::ZERO;
    }
    if d1 <= f32::EPSILON {
        return (next - current) * 0.1;
    }
    if d2 <= f32::EPSILON {
        return (current - previous) * 0.1;
    }

    let d1_a = d1.powf(tension);
    let d1_2a = d1.powf(2.0 * tension);
    let d2_a = d2.powf(tension);
    let d2_2a = d2.powf(2.0 * tension);

    (next * d1_2a - previous * d2_2a + current * (d2_2a - d1_2a)) / (3.0 * d1_a * (d1_a + d2_a))
}

/// Phantom-Nachbar am Kurvenende (Spiegelung des vorhandenen Nachbarn).
pub fn phantom_neighbor(current: Vec3, neighbor: Vec3) -> Vec3 {
    2.0 * current - neighbor
}
