use chrono::Utc;

use config::DashboardConfig;
use data_types::geo::GeoPoint;
use data_types::route::{Route, Sample};
use processors::synthetic::SyntheticScorer;
use processors::{ScoreError, ScoreSource};
use render::payload::MapPayload;
use store::path_store::{PathStore, StoreError};

pub mod camera;
pub mod config;
pub mod data_types;
pub mod processors;
pub mod render;
pub mod store;
pub mod util;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One dashboard session: the declared route, the path captured so far and
/// the rating strategy feeding it. Sessions share nothing; run one per user.
pub struct Session {
    store: PathStore,
    score_source: Box<dyn ScoreSource + Send + Sync>,
    camera_active: bool,
    started_at: i64,
}

impl Session {
    const CC: &'static str = "Session";

    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_score_source(config, Box::new(SyntheticScorer::new()))
    }

    pub fn with_score_source(
        config: &DashboardConfig,
        score_source: Box<dyn ScoreSource + Send + Sync>,
    ) -> Self {
        if config.verbose_logging {
            util::logging::set_global_level(util::logging::LogLevel::VERBOSE);
        }

        Self {
            store: PathStore::new(config.default_route()),
            score_source,
            camera_active: false,
            started_at: Utc::now().timestamp(),
        }
    }

    pub fn declare_route(
        &mut self,
        start: GeoPoint,
        end: GeoPoint,
        segment_count: u32,
    ) -> Result<(), StoreError> {
        self.store.declare_route(start, end, segment_count)
    }

    // One capture tick: ask the strategy for a rating, pin it to the next
    // segment. The strategy is not polled when the route is already done.
    pub fn capture_next(&mut self) -> Result<Sample, CaptureError> {
        if self.store.remaining_segments() == 0 {
            return Err(CaptureError::Store(StoreError::RouteExhausted));
        }

        let score = self.score_source.next_score()?;

        Ok(self.store.capture_next(score)?)
    }

    // Capture with a caller-provided rating, bypassing the strategy
    pub fn capture_with_score(&mut self, rating: f64) -> Result<Sample, StoreError> {
        self.store.capture_next(rating)
    }

    pub fn start_camera(&mut self) {
        logln!("Camera feed on");
        self.camera_active = true;
    }

    pub fn stop_camera(&mut self) {
        logln!("Camera feed off");
        self.camera_active = false;
    }

    pub fn camera_active(&self) -> bool {
        self.camera_active
    }

    pub fn current_path(&self) -> &[Sample] {
        self.store.current_path()
    }

    pub fn current_route(&self) -> &Route {
        self.store.current_route()
    }

    pub fn captured_count(&self) -> u32 {
        self.store.cursor()
    }

    pub fn remaining_segments(&self) -> u32 {
        self.store.remaining_segments()
    }

    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    pub fn map_payload(&self) -> MapPayload {
        MapPayload::from_store(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::rating::BucketColor;

    fn sample_session() -> Session {
        Session::with_score_source(
            &DashboardConfig::default(),
            Box::new(SyntheticScorer::seeded(11)),
        )
    }

    #[test]
    fn fresh_session_starts_on_the_default_route() {
        let session = sample_session();
        assert_eq!(session.current_route().segment_count, 10);
        assert!(session.current_path().is_empty());
        assert!(!session.camera_active());
        assert_eq!(session.remaining_segments(), 10);
    }

    #[test]
    fn captures_fill_the_route_then_stop() {
        let mut session = sample_session();

        for expected in 1..=10 {
            let sample = session.capture_next().unwrap();
            assert!((0.0..=10.0).contains(&sample.rating));
            assert_eq!(session.captured_count(), expected);
        }

        assert!(matches!(
            session.capture_next(),
            Err(CaptureError::Store(StoreError::RouteExhausted))
        ));
        assert_eq!(session.current_path().len(), 10);
    }

    #[test]
    fn redeclaring_the_route_restarts_the_session_path() {
        let mut session = sample_session();
        session.capture_next().unwrap();
        session.capture_next().unwrap();

        session
            .declare_route(GeoPoint::new(-6.1754, 106.8272), GeoPoint::new(-6.18, 106.83), 4)
            .unwrap();

        assert!(session.current_path().is_empty());
        assert_eq!(session.remaining_segments(), 4);

        let first = session.capture_next().unwrap();
        assert_eq!(first.point, GeoPoint::new(-6.1754, 106.8272));
    }

    #[test]
    fn manual_scores_flow_into_the_payload() {
        let mut session = sample_session();
        session.capture_with_score(1.0).unwrap();
        session.capture_with_score(9.5).unwrap();

        let payload = session.map_payload();
        assert_eq!(payload.path.len(), 2);
        assert_eq!(payload.path[0].color, BucketColor::Black);
        assert_eq!(payload.path[1].color, BucketColor::Green);
        // (1.0 + 9.5) / 2 = 5.25 -> yellow
        assert_eq!(payload.segment_colors, vec![BucketColor::Yellow]);
    }

    #[test]
    fn camera_toggle_is_plain_state() {
        let mut session = sample_session();
        session.start_camera();
        assert!(session.camera_active());
        session.stop_camera();
        assert!(!session.camera_active());
    }

    #[test]
    fn failing_score_source_surfaces_and_leaves_the_path_intact() {
        struct BrokenSource;
        impl ScoreSource for BrokenSource {
            fn next_score(&mut self) -> Result<f64, ScoreError> {
                Err(ScoreError::Unavailable("lens cap on".to_string()))
            }
        }

        let mut session =
            Session::with_score_source(&DashboardConfig::default(), Box::new(BrokenSource));

        assert!(matches!(
            session.capture_next(),
            Err(CaptureError::Score(ScoreError::Unavailable(_)))
        ));
        assert!(session.current_path().is_empty());
        assert_eq!(session.remaining_segments(), 10);
    }
}
