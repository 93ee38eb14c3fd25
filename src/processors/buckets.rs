use crate::data_types::rating::BucketColor;

pub struct ColorBucketer;

impl ColorBucketer {
    // Ascending bucket bounds over the [0, 10] rating range, first match
    // wins. Out of range ratings fall into the nearest outer bucket.
    const BLACK_BELOW: f64 = 2.0;
    const RED_BELOW: f64 = 5.0;
    const YELLOW_BELOW: f64 = 8.0;

    pub fn bucket(score: f64) -> BucketColor {
        if score < Self::BLACK_BELOW {
            BucketColor::Black
        } else if score < Self::RED_BELOW {
            BucketColor::Red
        } else if score < Self::YELLOW_BELOW {
            BucketColor::Yellow
        } else {
            BucketColor::Green
        }
    }

    // A segment between two samples is judged by the mean of its endpoint
    // ratings, never by one endpoint alone
    pub fn segment_bucket(first: f64, second: f64) -> BucketColor {
        Self::bucket((first + second) / 2.0)
    }
}
