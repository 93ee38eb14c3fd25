use serde_derive::{Deserialize, Serialize};

use crate::data_types::geo::GeoPoint;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Route {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub segment_count: u32,
}

impl Route {
    // A zero segment count degenerates to a single segment at the start point
    pub fn new(start: GeoPoint, end: GeoPoint, segment_count: u32) -> Self {
        Self {
            start,
            end,
            segment_count: segment_count.max(1),
        }
    }
}

// One captured measurement, pinned to its position along the route
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Sample {
    pub point: GeoPoint,
    pub rating: f64,
}
