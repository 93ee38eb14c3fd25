use std::time::Duration;

use curl::easy::Easy;

use crate::data_types::frame::Frame;
use crate::logvbln;
use crate::processors::brightness::BrightnessScorer;
use crate::processors::{ScoreError, ScoreSource};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot request failed: {0}")]
    Transport(#[from] curl::Error),

    #[error("snapshot decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

// Pulls single JPEG stills from an IP webcam over plain HTTP. One GET per
// poll, no connection state kept in between.
pub struct SnapshotClient {
    url: String,
}

impl SnapshotClient {
    const CC: &'static str = "SnapshotClient";

    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn fetch(&self) -> Result<Frame, SnapshotError> {
        let bytes = self.fetch_bytes()?;
        logvbln!("Snapshot: {} bytes from {}", bytes.len(), self.url);

        Self::decode(&bytes)
    }

    fn fetch_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        let mut handle = Easy::new();

        handle.url(&self.url)?;
        handle.get(true)?;

        // A turned-off phone camera should fail the poll, not stall it
        handle.connect_timeout(Duration::from_secs(5))?;
        handle.timeout(Duration::from_secs(15))?;

        let mut buffer_response = Vec::new();
        let mut transfer = handle.transfer();

        transfer.write_function(|data| {
            buffer_response.extend_from_slice(data);
            Ok(data.len())
        })?;

        transfer.perform()?;
        drop(transfer);

        Ok(buffer_response)
    }

    fn decode(bytes: &[u8]) -> Result<Frame, SnapshotError> {
        let decoded = image::load_from_memory(bytes)?;
        let rgb = decoded.to_rgb8();

        Ok(Frame::rgb(rgb.width(), rgb.height(), rgb.into_raw()))
    }
}

// Rating strategy backed by the webcam: one snapshot per capture, scored by
// mean brightness
pub struct CameraScorer {
    client: SnapshotClient,
}

impl CameraScorer {
    pub fn new(client: SnapshotClient) -> Self {
        Self { client }
    }
}

impl ScoreSource for CameraScorer {
    fn next_score(&mut self) -> Result<f64, ScoreError> {
        let frame = self
            .client
            .fetch()
            .map_err(|e| ScoreError::Unavailable(e.to_string()))?;

        Ok(BrightnessScorer::score(&frame)?)
    }
}
