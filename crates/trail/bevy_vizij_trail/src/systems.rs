use bevy::prelude::*;
use bevy::window::RequestRedraw;
use vizij_trail_core::{ExtraOption, TrailConfig, TrailInputs, WorldPoint};

use crate::components::RootTrail;
use crate::resources::{TrailOptions, TrailRepaint, TrailSettings};

/// Run condition: the `RootTrail` extra option is on.
pub fn root_trail_enabled(options: Res<TrailOptions>) -> bool {
    options.0.root_trail
}

/// Write an extra option, recording a repaint when it changes. Switching the
/// root trail off also drops every cached trail.
pub fn set_option(world: &mut World, option: ExtraOption, value: bool) -> bool {
    let changed = world.resource_scope(|world, mut options: Mut<TrailOptions>| {
        let mut repaint = world.resource_mut::<TrailRepaint>();
        options.0.set(option, value, &mut repaint.0)
    });
    if changed && option == ExtraOption::RootTrail && !value {
        let mut trails = world.query::<&mut RootTrail>();
        for mut trail in trails.iter_mut(world) {
            trail.clear_cache();
        }
    }
    changed
}

/// Turn a recorded option change into a window redraw request.
pub fn forward_repaint_system(
    mut repaint: ResMut<TrailRepaint>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    if let Some(changed) = repaint.0.take() {
        debug!("extra options changed: {:?}", changed);
        redraw.send(RequestRedraw);
    }
}

/// Re-sample `trail` under `root`, measuring segments with `viewport`.
/// Returns true when there is a line to draw; a trail with a missing axis
/// curve is skipped silently.
pub fn rebuild_trail(
    trail: &mut RootTrail,
    root: &GlobalTransform,
    config: &TrailConfig,
    viewport: impl Fn(Vec3) -> Option<Vec2>,
) -> bool {
    let RootTrail {
        curves,
        timing,
        scale,
        sampler,
        ..
    } = trail;
    if sampler.config() != config {
        sampler.set_config(config.clone());
    }

    let frame_time = |frame: usize| timing.frame_time(frame);
    let transform = |p: WorldPoint| root.transform_point(Vec3::from_array(p)).to_array();
    // Points that cannot be projected measure as NaN and are never subdivided.
    let project = |p: WorldPoint| {
        viewport(Vec3::from_array(p))
            .map(|v| v.to_array())
            .unwrap_or([f32::NAN; 2])
    };
    let inputs = TrailInputs {
        curves: curves.as_vector_curve(),
        frame_count: timing.frame_count(curves.length),
        scale: *scale,
        frame_time: &frame_time,
        transform: &transform,
        project: &project,
    };

    match sampler.build(&inputs) {
        Ok(line) => line.len() > 1,
        Err(err) => {
            trace!("root trail skipped: {err}");
            false
        }
    }
}

/// Sample every `RootTrail` against the first active camera and draw it as a
/// line strip.
pub fn draw_root_trails_system(
    settings: Res<TrailSettings>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut trails: Query<(&mut RootTrail, &GlobalTransform)>,
    mut gizmos: Gizmos,
) {
    let Some((camera, camera_tf)) = cameras.iter().find(|(camera, _)| camera.is_active) else {
        return;
    };
    for (mut trail, root) in trails.iter_mut() {
        let trail = &mut *trail;
        let visible = rebuild_trail(trail, root, &settings.0, |p| {
            camera.world_to_viewport(camera_tf, p)
        });
        if visible {
            gizmos.linestrip(trail.line().iter().map(|p| Vec3::from_array(*p)), trail.color);
        }
    }
}
