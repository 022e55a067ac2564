use bevy::prelude::*;
use vizij_trail_core::{ExtraOptions, RepaintFlag, TrailConfig};

/// Subdivision knobs shared by all trails.
#[derive(Resource, Debug, Clone, Default)]
pub struct TrailSettings(pub TrailConfig);

/// Editor extra options. Write through [`crate::set_option`] so changes
/// request a repaint.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TrailOptions(pub ExtraOptions);

/// Pending repaint recorded by option changes, drained each `Update`.
#[derive(Resource, Debug, Default)]
pub struct TrailRepaint(pub RepaintFlag);
