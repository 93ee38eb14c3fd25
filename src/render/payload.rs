use geo_types::Coord;
use serde_derive::{Deserialize, Serialize};

use crate::data_types::rating::BucketColor;
use crate::processors::buckets::ColorBucketer;
use crate::store::path_store::PathStore;
use crate::util::geo::GeoUtils;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RatedPoint {
    pub lat: f64,
    pub lon: f64,
    pub rating: f64,
    pub color: BucketColor,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct PlainPoint {
    pub lat: f64,
    pub lon: f64,
}

// Everything the map widget needs for one repaint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MapPayload {
    pub path: Vec<RatedPoint>,
    pub segment_colors: Vec<BucketColor>,
    pub route: [PlainPoint; 2],
    pub center: PlainPoint,
}

impl MapPayload {
    pub fn from_store(store: &PathStore) -> Self {
        let route = store.current_route();

        let path: Vec<RatedPoint> = store
            .current_path()
            .iter()
            .map(|sample| RatedPoint {
                lat: sample.point.lat,
                lon: sample.point.lon,
                rating: sample.rating,
                color: ColorBucketer::bucket(sample.rating),
            })
            .collect();

        // One color per consecutive sample pair, so always len - 1 entries
        let segment_colors: Vec<BucketColor> = store
            .current_path()
            .windows(2)
            .map(|pair| ColorBucketer::segment_bucket(pair[0].rating, pair[1].rating))
            .collect();

        let mut coords: Vec<Coord> = vec![route.start.to_coord(), route.end.to_coord()];
        coords.extend(store.current_path().iter().map(|s| s.point.to_coord()));

        let center = GeoUtils::get_bounding_box(&coords)
            .map(|(bottom_left, top_right)| GeoUtils::get_center_of_bbox(bottom_left, top_right))
            .unwrap_or_else(|| route.start.to_coord());

        Self {
            path,
            segment_colors,
            route: [
                PlainPoint {
                    lat: route.start.lat,
                    lon: route.start.lon,
                },
                PlainPoint {
                    lat: route.end.lat,
                    lon: route.end.lon,
                },
            ],
            center: PlainPoint {
                lat: center.x,
                lon: center.y,
            },
        }
    }
}
