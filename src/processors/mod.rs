use crate::data_types::frame::FrameError;

pub mod brightness;
pub mod buckets;
pub mod interpolation;
pub mod synthetic;

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("invalid frame: {0}")]
    InvalidFrame(#[from] FrameError),

    #[error("score source unavailable: {0}")]
    Unavailable(String),
}

// Where the rating for the next capture comes from. The path store never
// learns whether a score was measured or synthesized.
pub trait ScoreSource {
    fn next_score(&mut self) -> Result<f64, ScoreError>;
}
