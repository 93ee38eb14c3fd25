use crate::data_types::frame::{Frame, FrameError};
use crate::data_types::rating::RoadGrade;

// BT.601 luma weights, matching the grayscale conversion the IP webcam
// pipeline applies before scoring
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

pub struct BrightnessScorer;

impl BrightnessScorer {
    // Grade thresholds over the mean luminance, strictly greater wins
    const GOOD_ABOVE: f64 = 180.0;
    const SATISFACTORY_ABOVE: f64 = 120.0;
    const POOR_ABOVE: f64 = 60.0;

    // Mean grayscale luminance over the whole frame, in [0, 255]
    pub fn mean_luminance(frame: &Frame) -> Result<f64, FrameError> {
        frame.validate()?;

        let sum = if frame.channels == 1 {
            frame.data.iter().map(|&v| v as u64).sum::<u64>() as f64
        } else {
            frame
                .data
                .chunks_exact(3)
                .map(|px| LUMA_R * px[0] as f64 + LUMA_G * px[1] as f64 + LUMA_B * px[2] as f64)
                .sum()
        };

        Ok(sum / frame.pixel_count() as f64)
    }

    pub fn score(frame: &Frame) -> Result<f64, FrameError> {
        Ok(Self::score_of_mean(Self::mean_luminance(frame)?))
    }

    pub fn grade(frame: &Frame) -> Result<RoadGrade, FrameError> {
        Ok(Self::grade_of_mean(Self::mean_luminance(frame)?))
    }

    // Linear rescale of the pixel range [0, 255] onto the rating range [0, 10]
    pub fn score_of_mean(mean: f64) -> f64 {
        mean / 255.0 * 10.0
    }

    pub fn grade_of_mean(mean: f64) -> RoadGrade {
        if mean > Self::GOOD_ABOVE {
            RoadGrade::Good
        } else if mean > Self::SATISFACTORY_ABOVE {
            RoadGrade::Satisfactory
        } else if mean > Self::POOR_ABOVE {
            RoadGrade::Poor
        } else {
            RoadGrade::VeryPoor
        }
    }
}
