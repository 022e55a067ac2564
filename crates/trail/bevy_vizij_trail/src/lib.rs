use bevy::prelude::*;
use bevy::window::RequestRedraw;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::RootTrail;
pub use resources::{TrailOptions, TrailRepaint, TrailSettings};
pub use systems::{
    draw_root_trails_system, forward_repaint_system, rebuild_trail, root_trail_enabled,
    set_option,
};
pub use vizij_trail_core::{ExtraOption, ExtraOptions, TrailConfig};

/// Draws a root-motion trail for every `RootTrail` entity while the
/// `RootTrail` extra option is switched on.
#[derive(Default)]
pub struct VizijTrailPlugin {
    pub config: TrailConfig,
    pub options: ExtraOptions,
}

impl Plugin for VizijTrailPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TrailSettings(self.config.clone()))
            .insert_resource(TrailOptions(self.options))
            .init_resource::<TrailRepaint>()
            .add_event::<RequestRedraw>()
            .add_systems(
                Update,
                (
                    forward_repaint_system,
                    draw_root_trails_system.run_if(root_trail_enabled),
                )
                    .chain(),
            );
    }
}
