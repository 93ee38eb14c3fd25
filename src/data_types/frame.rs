#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameError {
    #[error("frame has no pixels")]
    Empty,

    #[error("frame buffer holds {actual} bytes, layout needs {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u8),
}

// Raw image data, row major with interleaved channels. Grayscale frames
// carry 1 channel, RGB frames carry 3.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn gray(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels: 1,
            data,
        }
    }

    pub fn rgb(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels: 3,
            data,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 || self.data.is_empty() {
            return Err(FrameError::Empty);
        }

        if self.channels != 1 && self.channels != 3 {
            return Err(FrameError::UnsupportedChannels(self.channels));
        }

        let expected = self.pixel_count() * self.channels as usize;
        if self.data.len() != expected {
            return Err(FrameError::DimensionMismatch {
                expected,
                actual: self.data.len(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_frames_validate() {
        assert_eq!(Frame::gray(2, 2, vec![0; 4]).validate(), Ok(()));
        assert_eq!(Frame::rgb(2, 2, vec![0; 12]).validate(), Ok(()));
    }

    #[test]
    fn empty_frames_are_rejected() {
        assert_eq!(Frame::gray(0, 4, vec![]).validate(), Err(FrameError::Empty));
        assert_eq!(Frame::gray(4, 0, vec![]).validate(), Err(FrameError::Empty));
        assert_eq!(Frame::rgb(4, 4, vec![]).validate(), Err(FrameError::Empty));
    }

    #[test]
    fn short_buffers_are_rejected() {
        let frame = Frame::rgb(2, 2, vec![0; 11]);
        assert_eq!(
            frame.validate(),
            Err(FrameError::DimensionMismatch {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn odd_channel_counts_are_rejected() {
        let frame = Frame {
            width: 2,
            height: 2,
            channels: 2,
            data: vec![0; 8],
        };
        assert_eq!(frame.validate(), Err(FrameError::UnsupportedChannels(2)));
    }
}
