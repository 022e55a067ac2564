//! Root-motion position curves as stored alongside a clip, and their JSON loader.

use serde::{Deserialize, Serialize};

use crate::curve::{KeyedCurve, ScalarCurve, VectorCurve};
use crate::error::TrailError;

/// Three optional axis channels of a character's root position.
///
/// An axis is `None` when the clip carries no root motion on it; such a bundle
/// still loads, but sampling it fails with `CurveUnavailable`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RootCurves {
    #[serde(default)]
    pub name: String,
    /// Clip length in seconds.
    #[serde(default)]
    pub length: f32,
    #[serde(default)]
    pub x: Option<KeyedCurve>,
    #[serde(default)]
    pub y: Option<KeyedCurve>,
    #[serde(default)]
    pub z: Option<KeyedCurve>,
}

impl RootCurves {
    pub fn new(x: KeyedCurve, y: KeyedCurve, z: KeyedCurve) -> Self {
        let length = x.end_time().max(y.end_time()).max(z.end_time());
        Self {
            name: String::new(),
            length,
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    pub fn as_vector_curve(&self) -> VectorCurve<'_> {
        fn borrow(c: &Option<KeyedCurve>) -> Option<&dyn ScalarCurve> {
            c.as_ref().map(|c| c as &dyn ScalarCurve)
        }
        VectorCurve::new(borrow(&self.x), borrow(&self.y), borrow(&self.z))
    }

    pub fn validate(&self) -> Result<(), TrailError> {
        if !self.length.is_finite() || self.length < 0.0 {
            return Err(TrailError::InvalidCurve(format!(
                "root curves '{}' must have a finite, non-negative length",
                self.name
            )));
        }
        for curve in [&self.x, &self.y, &self.z].into_iter().flatten() {
            curve.validate()?;
        }
        Ok(())
    }
}

/// Parse and validate a `RootCurves` JSON document.
pub fn parse_root_curves_json(json: &str) -> Result<RootCurves, TrailError> {
    let curves: RootCurves =
        serde_json::from_str(json).map_err(|e| TrailError::Parse(e.to_string()))?;
    curves.validate()?;
    Ok(curves)
}
