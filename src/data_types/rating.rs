use std::fmt;

use serde_derive::{Deserialize, Serialize};

// Coarse surface quality label, ordered worst to best
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RoadGrade {
    #[serde(rename = "very poor")]
    VeryPoor,
    Poor,
    Satisfactory,
    Good,
}

// Marker color the map widget paints samples and segments with
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BucketColor {
    Black,
    Red,
    Yellow,
    Green,
}

impl BucketColor {
    // CSS color name, understood as-is by the maps polyline API
    pub fn css_name(&self) -> &'static str {
        match self {
            BucketColor::Black => "black",
            BucketColor::Red => "red",
            BucketColor::Yellow => "yellow",
            BucketColor::Green => "green",
        }
    }
}

impl fmt::Display for BucketColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_name())
    }
}
