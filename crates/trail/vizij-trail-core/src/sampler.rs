//! Curve trail sampler: keyframed root curve -> screen-adaptive polyline.
//!
//! For each frame the three axis curves are evaluated at `frame_time(frame)`,
//! scaled, and mapped through `transform`. Between consecutive frame points the
//! projected screen distance decides how many extra points are inserted:
//!
//!   count = min(round(distance * granularity), max_subdivisions)
//!
//! Inserted points interpolate *time* between the two frames and re-evaluate the
//! curves, so a non-linear curve bends between keys instead of being chorded.

use log::trace;

use crate::config::TrailConfig;
use crate::curve::{ScalarCurve, VectorCurve};
use crate::error::TrailError;
use crate::math::{distance_vec2, lerp_f32, scale_vec3, ScreenPoint, WorldPoint};

/// Per-call inputs supplied by the host.
pub struct TrailInputs<'a> {
    pub curves: VectorCurve<'a>,
    /// Number of frames to sample (`last_frame + 1`).
    pub frame_count: usize,
    /// Applied to the raw curve value before `transform`.
    pub scale: f32,
    pub frame_time: &'a dyn Fn(usize) -> f32,
    pub transform: &'a dyn Fn(WorldPoint) -> WorldPoint,
    /// Viewport projection, used only to measure segment length.
    pub project: &'a dyn Fn(WorldPoint) -> ScreenPoint,
}

impl<'a> TrailInputs<'a> {
    #[inline]
    fn point_at(&self, axes: &[&'a dyn ScalarCurve; 3], time: f32) -> WorldPoint {
        let raw = [
            axes[0].evaluate(time),
            axes[1].evaluate(time),
            axes[2].evaluate(time),
        ];
        (self.transform)(scale_vec3(raw, self.scale))
    }
}

/// Number of points to insert for a segment `screen_distance` pixels long.
/// Zero, negative, and NaN (unprojectable) distances insert nothing; an
/// infinite distance hits the cap.
pub fn subdivision_count(screen_distance: f32, config: &TrailConfig) -> usize {
    if screen_distance.is_nan() || screen_distance <= 0.0 {
        return 0;
    }
    // f32::round is half-away-from-zero
    let wanted = (screen_distance * config.granularity).round();
    if wanted >= config.max_subdivisions as f32 {
        config.max_subdivisions
    } else {
        wanted as usize
    }
}

/// Reusable sampler that keeps its buffers between draws.
///
/// `frame_points` holds exactly one point per frame after a successful build and
/// is only reallocated when the frame count changes.
#[derive(Clone, Debug, Default)]
pub struct TrailSampler {
    config: TrailConfig,
    frames: Vec<WorldPoint>,
    line: Vec<WorldPoint>,
}

impl TrailSampler {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            frames: Vec::new(),
            line: Vec::new(),
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TrailConfig) {
        self.config = config;
    }

    /// Per-frame points of the last successful build.
    pub fn frame_points(&self) -> &[WorldPoint] {
        &self.frames
    }

    /// Polyline of the last successful build; empty after a failed one.
    pub fn line(&self) -> &[WorldPoint] {
        &self.line
    }

    pub fn into_line(self) -> Vec<WorldPoint> {
        self.line
    }

    /// Drop both buffers (e.g. when the overlay is switched off).
    pub fn clear(&mut self) {
        self.frames = Vec::new();
        self.line = Vec::new();
    }

    /// Sample `inputs` into a connected line strip, first frame to last.
    pub fn build(&mut self, inputs: &TrailInputs<'_>) -> Result<&[WorldPoint], TrailError> {
        let axes = match inputs.curves.require_all() {
            Ok(axes) => axes,
            Err(err) => {
                self.line.clear();
                return Err(err);
            }
        };
        let config = self.config.sanitized();
        let frame_count = inputs.frame_count;

        if self.frames.len() != frame_count {
            trace!(
                "trail buffer resized {} -> {} frames",
                self.frames.len(),
                frame_count
            );
            self.frames = vec![[0.0; 3]; frame_count];
        }
        self.line.clear();
        self.line.reserve(frame_count);

        // (time, projected point) of the previous frame
        let mut prev: Option<(f32, ScreenPoint)> = None;
        for frame in 0..frame_count {
            let time = (inputs.frame_time)(frame);
            let point = inputs.point_at(&axes, time);
            let screen = (inputs.project)(point);
            self.frames[frame] = point;

            if let Some((prev_time, prev_screen)) = prev {
                let count = subdivision_count(distance_vec2(prev_screen, screen), &config);
                for i in 0..count {
                    let rate = (i + 1) as f32 / (count + 1) as f32;
                    let t = lerp_f32(prev_time, time, rate);
                    self.line.push(inputs.point_at(&axes, t));
                }
            }
            self.line.push(point);
            prev = Some((time, screen));
        }

        Ok(self.line.as_slice())
    }
}

/// One-shot variant of [`TrailSampler::build`] returning an owned polyline.
pub fn build_trail(
    inputs: &TrailInputs<'_>,
    config: &TrailConfig,
) -> Result<Vec<WorldPoint>, TrailError> {
    let mut sampler = TrailSampler::new(config.clone());
    sampler.build(inputs)?;
    Ok(sampler.into_line())
}
