//! Control groups
//!
//! Each variant clusters the controls and settings of one semantic unit (a
//! button cluster, an analog stick, a trigger pair, ...) and owns its
//! state-extraction math. Controls and settings are accessed positionally:
//! construction order is a documented invariant of every variant, encoded
//! in the index constants at the top of each module.

pub mod buttons;
pub mod cursor;
pub mod extension;
pub mod force;
pub mod slider;
pub mod stick;
pub mod tilt;
pub mod triggers;

pub use buttons::Buttons;
pub use cursor::{Cursor, CursorState};
pub use extension::Extension;
pub use force::Force;
pub use slider::Slider;
pub use stick::AnalogStick;
pub use tilt::Tilt;
pub use triggers::{MixedTriggers, Triggers};

use op_ciface::{ControlState, DeviceQualifier, DeviceRegistry};
use op_core::ProfileSection;

use crate::control::Control;
use crate::setting::NumericSetting;

/// Directional control names shared by stick-like groups
pub const NAMED_DIRECTIONS: [&str; 4] = ["Up", "Down", "Left", "Right"];

/// Zero-aware sign: -1, 0, or 1
pub(crate) fn sign(x: ControlState) -> ControlState {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Per-call smoothing increment for tilt and cursor depth. Empirically
/// tuned; twice-per-frame callers will step twice as fast.
pub(crate) const SMOOTH_STEP: ControlState = 0.1;

/// Move `current` toward `target` by at most [`SMOOTH_STEP`], never
/// overshooting
pub(crate) fn step_toward(current: &mut ControlState, target: ControlState) {
    if target > *current {
        *current = (*current + SMOOTH_STEP).min(target);
    } else if target < *current {
        *current = (*current - SMOOTH_STEP).max(target);
    }
}

/// Name, controls, and settings common to every group variant
pub struct ControlGroup {
    pub name: String,
    pub controls: Vec<Control>,
    pub settings: Vec<NumericSetting>,
}

impl ControlGroup {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            controls: Vec::new(),
            settings: Vec::new(),
        }
    }

    /// Load settings, expressions, and ranges from `<base><name>/` keys
    pub fn load(&mut self, sec: &ProfileSection, base: &str) {
        let group = format!("{base}{}/", self.name);

        for setting in &mut self.settings {
            let key = format!("{group}{}", setting.name());
            setting.load(sec, &key);
        }

        for control in &mut self.controls {
            control.reference.expression = sec.get_string(&format!("{group}{}", control.name), "");
            control.reference.range =
                sec.get_or(&format!("{group}{}/Range", control.name), 100.0) / 100.0;
        }
    }

    /// Mirror of [`load`](Self::load); values at their defaults are dropped
    pub fn save(&self, sec: &mut ProfileSection, base: &str) {
        let group = format!("{base}{}/", self.name);

        for setting in &self.settings {
            let key = format!("{group}{}", setting.name());
            setting.save(sec, &key);
        }

        for control in &self.controls {
            sec.set_string(
                &format!("{group}{}", control.name),
                &control.reference.expression,
                "",
            );
            sec.set_f64(
                &format!("{group}{}/Range", control.name),
                control.reference.range * 100.0,
                100.0,
            );
        }
    }

    /// Re-resolve every control reference against the registry
    pub fn update_references(
        &mut self,
        registry: &DeviceRegistry,
        default_device: &DeviceQualifier,
    ) {
        for control in &mut self.controls {
            control.reference.update(registry, default_device);
        }
    }
}

/// The sealed set of group variants.
///
/// Variant payloads are only reachable through their arm; extension
/// attachments in particular cannot be reached from a mistyped group.
pub enum Group {
    Buttons(Buttons),
    AnalogStick(AnalogStick),
    MixedTriggers(MixedTriggers),
    Triggers(Triggers),
    Slider(Slider),
    Force(Force),
    Tilt(Tilt),
    Cursor(Cursor),
    Extension(Extension),
}

impl Group {
    pub fn base(&self) -> &ControlGroup {
        match self {
            Group::Buttons(g) => &g.base,
            Group::AnalogStick(g) => &g.base,
            Group::MixedTriggers(g) => &g.base,
            Group::Triggers(g) => &g.base,
            Group::Slider(g) => &g.base,
            Group::Force(g) => &g.base,
            Group::Tilt(g) => &g.base,
            Group::Cursor(g) => &g.base,
            Group::Extension(g) => &g.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ControlGroup {
        match self {
            Group::Buttons(g) => &mut g.base,
            Group::AnalogStick(g) => &mut g.base,
            Group::MixedTriggers(g) => &mut g.base,
            Group::Triggers(g) => &mut g.base,
            Group::Slider(g) => &mut g.base,
            Group::Force(g) => &mut g.base,
            Group::Tilt(g) => &mut g.base,
            Group::Cursor(g) => &mut g.base,
            Group::Extension(g) => &mut g.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// Load this group's persisted state. `default_device` seeds the
    /// default device of extension attachments.
    pub fn load(&mut self, sec: &ProfileSection, default_device: &DeviceQualifier, base: &str) {
        match self {
            Group::Extension(ext) => ext.load(sec, default_device, base),
            group => group.base_mut().load(sec, base),
        }
    }

    pub fn save(&self, sec: &mut ProfileSection, base: &str) {
        match self {
            Group::Extension(ext) => ext.save(sec, base),
            group => group.base().save(sec, base),
        }
    }
}
