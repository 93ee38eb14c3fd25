use geo_types::Coord;
use std::f32::consts::PI;

pub struct GeoUtils;

impl GeoUtils {
    // Spherical law of cosines distance in km. Plenty for route lengths of a
    // few km; the capture pipeline itself never needs geodesic math.
    pub fn distance(p1: Coord, p2: Coord) -> f64 {
        let lat1 = p1.x;
        let lat2 = p2.x;
        let long1 = p1.y;
        let long2 = p2.y;

        let theta = long2 - long1;

        let mut dist = GeoUtils::deg2rad(lat1).sin() * GeoUtils::deg2rad(lat2).sin()
            + GeoUtils::deg2rad(lat1).cos()
                * GeoUtils::deg2rad(lat2).cos()
                * GeoUtils::deg2rad(theta).cos();

        // acos is touchy about rounding creep on identical points
        dist = dist.clamp(-1.0, 1.0).acos();
        dist = GeoUtils::rad2deg(dist);
        dist = dist * 60.0 * 1.1515;
        dist = dist * 1.609344;

        dist
    }

    pub fn deg2rad(deg: f64) -> f64 {
        deg * PI as f64 / 180.0
    }

    pub fn rad2deg(rad: f64) -> f64 {
        rad * 180.0 / PI as f64
    }

    pub fn get_bounding_box(coords: &[Coord]) -> Option<(Coord, Coord)> {
        let first = coords.first()?;

        let mut min_lat: f64 = first.x;
        let mut min_long: f64 = first.y;
        let mut max_lat: f64 = first.x;
        let mut max_long: f64 = first.y;

        coords.iter().for_each(|coord| {
            min_lat = coord.x.min(min_lat);
            min_long = coord.y.min(min_long);

            max_lat = coord.x.max(max_lat);
            max_long = coord.y.max(max_long);
        });

        Some((
            Coord::from((min_lat, min_long)),
            Coord::from((max_lat, max_long)),
        ))
    }

    pub fn get_center_of_bbox(left_b: Coord, right_top: Coord) -> Coord {
        Coord::from(((left_b.x + right_top.x) / 2., (left_b.y + right_top.y) / 2.))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_a_point_to_itself_is_zero() {
        let p = Coord::from((-6.5539, 107.7597));
        assert!(GeoUtils::distance(p, p).abs() < 1e-9);
    }

    #[test]
    fn distance_matches_a_known_half_km_route() {
        // Reference route endpoints sit roughly 500 m apart
        let start = Coord::from((-6.553863223990267, 107.75965109951137));
        let end = Coord::from((-6.55838447945851, 107.75965109951137));
        let km = GeoUtils::distance(start, end);
        assert!(km > 0.4 && km < 0.6, "got {} km", km);
    }

    #[test]
    fn bounding_box_handles_southern_hemisphere_coordinates() {
        let coords = vec![
            Coord::from((-6.5539, 107.7597)),
            Coord::from((-6.5584, 107.7601)),
            Coord::from((-6.5550, 107.7590)),
        ];

        let (bottom_left, top_right) = GeoUtils::get_bounding_box(&coords).unwrap();
        assert_eq!(bottom_left, Coord::from((-6.5584, 107.7590)));
        assert_eq!(top_right, Coord::from((-6.5539, 107.7601)));
    }

    #[test]
    fn bounding_box_of_nothing_is_none() {
        assert!(GeoUtils::get_bounding_box(&[]).is_none());
    }

    #[test]
    fn center_splits_the_bbox_diagonal() {
        let center = GeoUtils::get_center_of_bbox(
            Coord::from((-2.0, 10.0)),
            Coord::from((4.0, 20.0)),
        );
        assert_eq!(center, Coord::from((1.0, 15.0)));
    }
}
