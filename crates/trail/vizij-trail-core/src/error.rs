//! Error types for trail sampling and curve loading.

use thiserror::Error;

use crate::curve::Axis;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrailError {
    /// An axis curve could not be acquired; the whole trail must be skipped.
    #[error("root curve for axis {axis} is unavailable")]
    CurveUnavailable { axis: Axis },
    #[error("invalid curve: {0}")]
    InvalidCurve(String),
    #[error("root curves json parse error: {0}")]
    Parse(String),
}
