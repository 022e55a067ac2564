//! Extra editor options: independent boolean switches with a change hook.
//!
//! Hosts route every write through [`ExtraOptions::set`] so that dependent
//! state (viewport repaint, cached trails) is refreshed exactly when a value
//! actually changes.

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtraOption {
    RootTrail,
    OnionSkin,
    RotationCurveInterpolation,
    MirrorPreview,
    AutoKeyframe,
}

impl ExtraOption {
    pub const ALL: [ExtraOption; 5] = [
        ExtraOption::RootTrail,
        ExtraOption::OnionSkin,
        ExtraOption::RotationCurveInterpolation,
        ExtraOption::MirrorPreview,
        ExtraOption::AutoKeyframe,
    ];

    /// Stable name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            ExtraOption::RootTrail => "rootTrail",
            ExtraOption::OnionSkin => "onionSkin",
            ExtraOption::RotationCurveInterpolation => "rotationCurveInterpolation",
            ExtraOption::MirrorPreview => "mirrorPreview",
            ExtraOption::AutoKeyframe => "autoKeyframe",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.name() == name)
    }
}

/// Receives option changes. `()` ignores them.
pub trait OptionsObserver {
    fn on_change(&mut self, option: ExtraOption, value: bool);
}

impl OptionsObserver for () {
    fn on_change(&mut self, _option: ExtraOption, _value: bool) {}
}

/// Observer that records a pending repaint and which options changed.
#[derive(Clone, Debug, Default)]
pub struct RepaintFlag {
    requested: bool,
    changed: Vec<ExtraOption>,
}

impl RepaintFlag {
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Consume the pending request, returning the options changed since the last take.
    pub fn take(&mut self) -> Option<Vec<ExtraOption>> {
        if !self.requested {
            return None;
        }
        self.requested = false;
        Some(std::mem::take(&mut self.changed))
    }
}

impl OptionsObserver for RepaintFlag {
    fn on_change(&mut self, option: ExtraOption, _value: bool) {
        self.requested = true;
        if !self.changed.contains(&option) {
            self.changed.push(option);
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtraOptions {
    pub root_trail: bool,
    pub onion_skin: bool,
    pub rotation_curve_interpolation: bool,
    pub mirror_preview: bool,
    pub auto_keyframe: bool,
}

impl ExtraOptions {
    pub fn get(&self, option: ExtraOption) -> bool {
        match option {
            ExtraOption::RootTrail => self.root_trail,
            ExtraOption::OnionSkin => self.onion_skin,
            ExtraOption::RotationCurveInterpolation => self.rotation_curve_interpolation,
            ExtraOption::MirrorPreview => self.mirror_preview,
            ExtraOption::AutoKeyframe => self.auto_keyframe,
        }
    }

    fn slot(&mut self, option: ExtraOption) -> &mut bool {
        match option {
            ExtraOption::RootTrail => &mut self.root_trail,
            ExtraOption::OnionSkin => &mut self.onion_skin,
            ExtraOption::RotationCurveInterpolation => &mut self.rotation_curve_interpolation,
            ExtraOption::MirrorPreview => &mut self.mirror_preview,
            ExtraOption::AutoKeyframe => &mut self.auto_keyframe,
        }
    }

    /// Write `value`; notifies `observer` and returns true only if it changed.
    pub fn set(
        &mut self,
        option: ExtraOption,
        value: bool,
        observer: &mut dyn OptionsObserver,
    ) -> bool {
        let slot = self.slot(option);
        if *slot == value {
            return false;
        }
        *slot = value;
        debug!("extra option {} set to {}", option.name(), value);
        observer.on_change(option, value);
        true
    }

    /// Flip `option` and return its new value.
    pub fn toggle(&mut self, option: ExtraOption, observer: &mut dyn OptionsObserver) -> bool {
        let value = !self.get(option);
        self.set(option, value, observer);
        value
    }

    /// Options currently switched on, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = ExtraOption> + '_ {
        ExtraOption::ALL
            .into_iter()
            .filter(move |o| self.get(*o))
    }
}
