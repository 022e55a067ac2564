//! Vizij Trail Core (engine-agnostic)
//!
//! Samples a character's root-motion curves into a screen-adaptive polyline
//! for debug overlays, and holds the editor's extra-option switches that gate
//! such overlays. Rendering is left to adapters (see `bevy_vizij_trail`).

pub mod config;
pub mod curve;
pub mod error;
pub mod math;
pub mod options;
pub mod root_curves;
pub mod sampler;
pub mod timing;

// Re-exports for consumers (adapters)
pub use config::TrailConfig;
pub use curve::{Axis, KeyedCurve, Keyframe, ScalarCurve, SegmentInterp, VectorCurve};
pub use error::TrailError;
pub use math::{ScreenPoint, WorldPoint};
pub use options::{ExtraOption, ExtraOptions, OptionsObserver, RepaintFlag};
pub use root_curves::{parse_root_curves_json, RootCurves};
pub use sampler::{build_trail, subdivision_count, TrailInputs, TrailSampler};
pub use timing::{FrameTiming, MAX_TRAIL_FRAMES};
