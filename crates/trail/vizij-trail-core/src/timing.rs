//! Frame index to curve time mapping.

use serde::{Deserialize, Serialize};

const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Upper bound on frames sampled for one clip (about 18 minutes at 60 Hz).
pub const MAX_TRAIL_FRAMES: usize = 1 << 16;

/// Uniform frame clock over a clip.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameTiming {
    /// Frames per second; non-finite or non-positive values fall back to 60.
    pub frame_rate: f32,
    /// Curve time of frame 0.
    #[serde(default)]
    pub start_time: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            start_time: 0.0,
        }
    }
}

impl FrameTiming {
    pub fn new(frame_rate: f32) -> Self {
        Self {
            frame_rate,
            start_time: 0.0,
        }
    }

    #[inline]
    pub fn rate(&self) -> f32 {
        if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            self.frame_rate
        } else {
            DEFAULT_FRAME_RATE
        }
    }

    /// Curve time of `frame`. Monotonically non-decreasing in `frame`.
    #[inline]
    pub fn frame_time(&self, frame: usize) -> f32 {
        self.start_time + frame as f32 / self.rate()
    }

    /// Index of the last frame of a clip `clip_length` seconds long, clamped
    /// so that at most [`MAX_TRAIL_FRAMES`] frames are sampled.
    pub fn last_frame(&self, clip_length: f32) -> usize {
        if !clip_length.is_finite() || clip_length <= 0.0 {
            return 0;
        }
        let frames = (clip_length * self.rate()).round();
        if frames >= (MAX_TRAIL_FRAMES - 1) as f32 {
            MAX_TRAIL_FRAMES - 1
        } else {
            frames as usize
        }
    }

    /// Number of frames sampled for a clip, inclusive of the last frame.
    pub fn frame_count(&self, clip_length: f32) -> usize {
        self.last_frame(clip_length).saturating_add(1)
    }
}
