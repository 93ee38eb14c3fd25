use crate::data_types::geo::GeoPoint;
use crate::data_types::route::{Route, Sample};
use crate::logln;
use crate::processors::interpolation::RouteInterpolator;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("invalid coordinate: lat {}, lon {}", .0.lat, .0.lon)]
    InvalidCoordinate(GeoPoint),

    #[error("route exhausted, every segment already has a sample")]
    RouteExhausted,
}

// Captured path of the active route. Samples only ever accumulate; the one
// way to forget them is declaring a new route.
pub struct PathStore {
    route: Route,
    samples: Vec<Sample>,
    cursor: u32,
}

impl PathStore {
    const CC: &'static str = "PathStore";

    pub fn new(route: Route) -> Self {
        Self {
            route,
            samples: Vec::new(),
            cursor: 0,
        }
    }

    // Replaces the active route. Old samples were taken against the old
    // route's geometry, so they are dropped and the cursor rewinds.
    pub fn declare_route(
        &mut self,
        start: GeoPoint,
        end: GeoPoint,
        segment_count: u32,
    ) -> Result<(), StoreError> {
        if !start.is_valid() {
            return Err(StoreError::InvalidCoordinate(start));
        }
        if !end.is_valid() {
            return Err(StoreError::InvalidCoordinate(end));
        }

        self.route = Route::new(start, end, segment_count);
        self.samples.clear();
        self.cursor = 0;

        logln!(
            "Declared route ({:.5}, {:.5}) -> ({:.5}, {:.5}) with {} segments",
            start.lat,
            start.lon,
            end.lat,
            end.lon,
            self.route.segment_count
        );

        Ok(())
    }

    // Pins the rating to the next untraveled segment. Ratings are stored as
    // given, even outside [0, 10]; bucketing clamps at render time.
    pub fn capture_next(&mut self, rating: f64) -> Result<Sample, StoreError> {
        if self.cursor >= self.route.segment_count {
            return Err(StoreError::RouteExhausted);
        }

        let point = RouteInterpolator::point_at(
            self.cursor,
            self.route.segment_count,
            self.route.start,
            self.route.end,
        );
        let sample = Sample { point, rating };

        self.samples.push(sample);
        self.cursor += 1;

        logln!(
            "Captured segment {}/{} at ({:.5}, {:.5}) rated {:.2}",
            self.cursor,
            self.route.segment_count,
            point.lat,
            point.lon,
            rating
        );

        Ok(sample)
    }

    pub fn current_path(&self) -> &[Sample] {
        &self.samples
    }

    pub fn current_route(&self) -> &Route {
        &self.route
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn remaining_segments(&self) -> u32 {
        self.route.segment_count - self.cursor
    }
}
