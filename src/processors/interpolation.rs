use crate::data_types::geo::GeoPoint;

pub struct RouteInterpolator;

impl RouteInterpolator {
    // Planar interpolation over raw degrees, no geodesic correction. Index 0
    // lands on the start, index total - 1 on the end. The caller keeps the
    // index inside [0, total); this does not re-check it.
    pub fn point_at(index: u32, total: u32, start: GeoPoint, end: GeoPoint) -> GeoPoint {
        if total <= 1 {
            return start;
        }

        let frac = index as f64 / (total - 1) as f64;

        GeoPoint {
            lat: start.lat + frac * (end.lat - start.lat),
            lon: start.lon + frac * (end.lon - start.lon),
        }
    }
}
