//! Douglas-Peucker-Vereinfachung für Freihand-Spuren.
//!
//! Arbeitet planar auf (lng, lat)-Grad. Die Toleranz ist damit ebenfalls in
//! Grad angegeben; eine Näherung, die mit der Breite variiert.

use super::GeoPoint;

/// Reduziert eine Punktfolge auf eine Teilfolge innerhalb von `tolerance`.
///
/// - Erster und letzter Punkt bleiben immer erhalten.
/// - Die Reihenfolge bleibt erhalten, es entstehen keine neuen Punkte.
/// - Folgen mit höchstens 2 Punkten werden unverändert zurückgegeben.
///
/// Der Aufrufer garantiert `tolerance > 0`.
pub fn simplify(points: &[GeoPoint], tolerance: f64) -> Vec<GeoPoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[last] = true;

    // Index-Bereiche statt Teil-Slices; expliziter Stack statt Rekursion
    let mut ranges = vec![(0usize, last)];
    while let Some((start, end)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }

        let (max_index, max_distance) = farthest_point(points, start, end);
        if max_distance > tolerance {
            kept[max_index] = true;
            ranges.push((max_index, end));
            ranges.push((start, max_index));
        }
    }

    points
        .iter()
        .zip(&kept)
        .filter_map(|(&point, &keep)| keep.then_some(point))
        .collect()
}

/// Sucht den inneren Punkt mit maximalem Abstand zur Sehne `start → end`.
///
/// Bei Gleichstand gewinnt der erste Index.
fn farthest_point(points: &[GeoPoint], start: usize, end: usize) -> (usize, f64) {
    let chord_start = points[start];
    let chord_end = points[end];

    let mut max_distance = 0.0;
    let mut max_index = start;
    for (offset, &point) in points[start + 1..end].iter().enumerate() {
        let distance = perpendicular_distance(point, chord_start, chord_end);
        if distance > max_distance {
            max_distance = distance;
            max_index = start + 1 + offset;
        }
    }
    (max_index, max_distance)
}

/// Senkrechter Abstand von `point` zur Geraden durch `line_start` und `line_end`.
///
/// `|Kreuzprodukt| / |Sehne|`; bei Sehnenlänge 0 ist der Abstand als 0 definiert.
pub fn perpendicular_distance(point: GeoPoint, line_start: GeoPoint, line_end: GeoPoint) -> f64 {
    let a = line_start.as_planar();
    let chord = line_end.as_planar() - a;
    let length = chord.length();
    if length == 0.0 {
        return 0.0;
    }
    chord.perp_dot(point.as_planar() - a).abs() / length
}
