//! Frame ranges and their zero-padded filename token.

use serde::Serialize;
use thiserror::Error;

/// Width used when the host numbers a file the user did not ask to number.
pub const DEFAULT_FRAME_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frame range end {end} is before start {start}")]
pub struct FrameRangeError {
    pub start: u32,
    pub end: u32,
}

/// Inclusive `[start, end]` span of frames rendered by one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameRange {
    start: u32,
    end: u32,
}

impl FrameRange {
    pub fn new(start: u32, end: u32) -> Result<Self, FrameRangeError> {
        if end < start {
            return Err(FrameRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Renders `start-end`, each side zero-padded to `width` digits.
    ///
    /// A single frame still renders as a range (`0001-0001`). Numbers wider
    /// than `width` are never truncated.
    pub fn token(&self, width: usize) -> String {
        format!("{:0w$}-{:0w$}", self.start, self.end, w = width)
    }
}
