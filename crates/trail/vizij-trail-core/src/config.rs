//! Trail rendering-quality configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GRANULARITY: f32 = 0.2;
pub const DEFAULT_MAX_SUBDIVISIONS: usize = 32;

/// Knobs for screen-adaptive subdivision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Extra points per screen pixel of segment length (0.2 = one per ~5 px).
    pub granularity: f32,
    /// Hard cap on points inserted between two consecutive frames.
    pub max_subdivisions: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            granularity: DEFAULT_GRANULARITY,
            max_subdivisions: DEFAULT_MAX_SUBDIVISIONS,
        }
    }
}

impl TrailConfig {
    pub fn new(granularity: f32, max_subdivisions: usize) -> Self {
        Self {
            granularity,
            max_subdivisions,
        }
    }

    /// Copy with out-of-domain values replaced: granularity must be finite and
    /// positive, and at least one subdivision must be allowed.
    pub fn sanitized(&self) -> Self {
        let granularity = if self.granularity.is_finite() && self.granularity > 0.0 {
            self.granularity
        } else {
            DEFAULT_GRANULARITY
        };
        Self {
            granularity,
            max_subdivisions: self.max_subdivisions.max(1),
        }
    }
}
