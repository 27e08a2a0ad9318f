//! Threshold-digitized button cluster

use std::ops::BitOrAssign;

use crate::control::Control;
use crate::setting::NumericSetting;

use super::ControlGroup;

// setting positions
const THRESHOLD: usize = 0;

/// Button group: every control shares one threshold setting and maps to a
/// caller-supplied bitmask in positional correspondence
pub struct Buttons {
    pub base: ControlGroup,
}

impl Buttons {
    pub fn new(name: &str) -> Self {
        let mut base = ControlGroup::new(name);
        base.settings.push(NumericSetting::percent("Threshold", 0.5));
        Self { base }
    }

    /// Append a named input control
    pub fn add_input(&mut self, name: &str) {
        self.base.controls.push(Control::input(name));
    }

    /// Append a named output control (rumble motors live in button-style
    /// groups)
    pub fn add_output(&mut self, name: &str) {
        self.base.controls.push(Control::output(name));
    }

    /// OR together the bitmasks of every control strictly above the
    /// threshold
    pub fn state<M>(&self, bitmasks: &[M]) -> M
    where
        M: Copy + Default + BitOrAssign,
    {
        let threshold = self.base.settings[THRESHOLD].clamped();
        let mut out = M::default();

        for (control, mask) in self.base.controls.iter().zip(bitmasks) {
            if control.state() > threshold {
                out |= *mask;
            }
        }

        out
    }
}
