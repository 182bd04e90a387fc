use geo::{Coord, LineString, MultiPolygon, Polygon};

/// Ray-casting test of `point` against a closed ring.
///
/// A horizontal ray is cast from the point towards +x and every edge it
/// crosses toggles the result; an odd number of crossings means inside.
/// Edges are half-open in y (an edge counts when exactly one endpoint lies
/// strictly above the point), so points on the lower or left boundary of a
/// shape count as inside and points on the upper or right boundary do not.
pub fn ring_contains(ring: &LineString<f64>, point: Coord<f64>) -> bool {
    let coords = &ring.0;
    if coords.len() < 3 { return false }

    let mut inside = false;
    let mut j = coords.len() - 1;
    for i in 0..coords.len() {
        let (a, b) = (coords[i], coords[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether `point` is inside the exterior ring and outside every hole.
pub fn polygon_contains(polygon: &Polygon<f64>, point: Coord<f64>) -> bool {
    ring_contains(polygon.exterior(), point)
        && !polygon.interiors().iter().any(|hole| ring_contains(hole, point))
}

/// Whether any member polygon contains `point`.
pub fn multipolygon_contains(mp: &MultiPolygon<f64>, point: Coord<f64>) -> bool {
    mp.0.iter().any(|polygon| polygon_contains(polygon, point))
}
