//! Scalar and vector curve contracts plus a keyframed scalar curve.
//!
//! Model:
//! - A `ScalarCurve` maps curve time (seconds) to a single channel value.
//! - A `VectorCurve` borrows three optional axis curves; an absent axis means the
//!   root motion data is not ready and the trail must not be drawn at all.
//! - `KeyedCurve` is the concrete channel used by loaded clips: ordered keys with
//!   per-segment linear or step behaviour, clamped outside the key range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TrailError;
use crate::math::{lerp_f32, WorldPoint};

/// A single animation channel sampled by time.
pub trait ScalarCurve {
    fn evaluate(&self, time: f32) -> f32;
}

impl<F> ScalarCurve for F
where
    F: Fn(f32) -> f32,
{
    #[inline]
    fn evaluate(&self, time: f32) -> f32 {
        self(time)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Three borrowed axis curves composing a 3D position channel.
#[derive(Clone, Copy, Default)]
pub struct VectorCurve<'a> {
    axes: [Option<&'a dyn ScalarCurve>; 3],
}

impl<'a> VectorCurve<'a> {
    pub fn new(
        x: Option<&'a dyn ScalarCurve>,
        y: Option<&'a dyn ScalarCurve>,
        z: Option<&'a dyn ScalarCurve>,
    ) -> Self {
        Self { axes: [x, y, z] }
    }

    /// All three axes present.
    pub fn from_axes(
        x: &'a dyn ScalarCurve,
        y: &'a dyn ScalarCurve,
        z: &'a dyn ScalarCurve,
    ) -> Self {
        Self::new(Some(x), Some(y), Some(z))
    }

    pub fn axis(&self, axis: Axis) -> Option<&'a dyn ScalarCurve> {
        self.axes[axis.index()]
    }

    /// Resolve all three axes, failing on the first missing one.
    pub fn require_all(&self) -> Result<[&'a dyn ScalarCurve; 3], TrailError> {
        let get = |axis: Axis| {
            self.axis(axis)
                .ok_or(TrailError::CurveUnavailable { axis })
        };
        Ok([get(Axis::X)?, get(Axis::Y)?, get(Axis::Z)?])
    }

    /// Evaluate the raw (unscaled, untransformed) position at `time`.
    pub fn evaluate(&self, time: f32) -> Result<WorldPoint, TrailError> {
        let [x, y, z] = self.require_all()?;
        Ok([x.evaluate(time), y.evaluate(time), z.evaluate(time)])
    }
}

impl fmt::Debug for VectorCurve<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorCurve")
            .field("x", &self.axes[0].is_some())
            .field("y", &self.axes[1].is_some())
            .field("z", &self.axes[2].is_some())
            .finish()
    }
}

/// Segment behaviour between a key and the one after it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentInterp {
    #[default]
    Linear,
    /// Hold the left key's value until the next key.
    Step,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Curve time in seconds.
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub interp: SegmentInterp,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            interp: SegmentInterp::Linear,
        }
    }

    pub fn step(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            interp: SegmentInterp::Step,
        }
    }
}

/// Keyframed scalar curve with keys ordered by time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyedCurve {
    pub keys: Vec<Keyframe>,
}

impl KeyedCurve {
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    /// Curve with a single key, i.e. a constant value.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value)])
    }

    /// Check that key times are finite and non-decreasing and values are finite.
    pub fn validate(&self) -> Result<(), TrailError> {
        let mut last = -f32::INFINITY;
        for (i, key) in self.keys.iter().enumerate() {
            if !key.time.is_finite() || !key.value.is_finite() {
                return Err(TrailError::InvalidCurve(format!(
                    "key {i} must have a finite time and value"
                )));
            }
            if key.time < last {
                return Err(TrailError::InvalidCurve(format!(
                    "key {i} time {} is before the previous key",
                    key.time
                )));
            }
            last = key.time;
        }
        Ok(())
    }

    /// Time of the last key, or 0 for an empty curve.
    pub fn end_time(&self) -> f32 {
        self.keys.last().map(|k| k.time).unwrap_or(0.0)
    }

    pub fn sample(&self, time: f32) -> f32 {
        match self.keys.len() {
            // Fail-soft neutral value.
            0 => 0.0,
            1 => self.keys[0].value,
            _ => {
                let (i0, i1, lt) = find_segment(&self.keys, time);
                let left = &self.keys[i0];
                if i0 == i1 {
                    return left.value;
                }
                match left.interp {
                    SegmentInterp::Step => left.value,
                    SegmentInterp::Linear => lerp_f32(left.value, self.keys[i1].value, lt),
                }
            }
        }
    }
}

impl ScalarCurve for KeyedCurve {
    #[inline]
    fn evaluate(&self, time: f32) -> f32 {
        self.sample(time)
    }
}

/// Find the segment [i, i+1] containing `time` and the local parameter in [0, 1].
/// Before the first key (or NaN) returns (0, 0, 0); after the last key returns (last, last, 0).
fn find_segment(keys: &[Keyframe], time: f32) -> (usize, usize, f32) {
    let n = keys.len();
    if n <= 1 || time.is_nan() || time <= keys[0].time {
        return (0, 0, 0.0);
    }
    if time >= keys[n - 1].time {
        return (n - 1, n - 1, 0.0);
    }
    // keys[0].time < time < keys[n-1].time, so hi is in 1..n
    let hi = keys.partition_point(|k| k.time <= time);
    let t0 = keys[hi - 1].time;
    let t1 = keys[hi].time;
    let denom = (t1 - t0).max(f32::EPSILON);
    (hi - 1, hi, ((time - t0) / denom).clamp(0.0, 1.0))
}
