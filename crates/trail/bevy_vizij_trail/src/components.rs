use bevy::prelude::*;
use vizij_trail_core::{FrameTiming, RootCurves, TrailSampler, WorldPoint};

/// Root-motion curves to visualise as a trail under this entity's transform.
///
/// The entity's `GlobalTransform` is the rigid transform applied to every
/// sampled point; `scale` is applied to the raw curve value first.
#[derive(Component, Debug, Clone)]
pub struct RootTrail {
    pub curves: RootCurves,
    pub timing: FrameTiming,
    pub scale: f32,
    pub color: Color,
    pub(crate) sampler: TrailSampler,
}

impl RootTrail {
    pub fn new(curves: RootCurves, timing: FrameTiming) -> Self {
        Self {
            curves,
            timing,
            scale: 1.0,
            color: Color::srgb(0.2, 0.9, 0.3),
            sampler: TrailSampler::default(),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Polyline from the last draw, empty if it was skipped.
    pub fn line(&self) -> &[WorldPoint] {
        self.sampler.line()
    }

    pub fn clear_cache(&mut self) {
        self.sampler.clear();
    }
}
