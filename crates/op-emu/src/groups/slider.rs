//! Bidirectional slider

use op_ciface::ControlState;

use crate::control::Control;
use crate::setting::NumericSetting;

use super::{sign, ControlGroup};

// control positions
const LEFT: usize = 0;
const RIGHT: usize = 1;

// setting positions
const DEADZONE: usize = 0;

/// Slider group: a left/right pair with a sign-preserving deadzone.
/// Inside the deadzone the output is 0, not `base`.
pub struct Slider {
    pub base: ControlGroup,
}

impl Slider {
    pub fn new(name: &str) -> Self {
        let mut base = ControlGroup::new(name);

        base.controls.push(Control::input("Left"));
        base.controls.push(Control::input("Right"));

        base.settings.push(NumericSetting::new("Dead Zone", 0.0, 0, 50));

        Self { base }
    }

    pub fn state(&self, base: ControlState, range: ControlState) -> ControlState {
        let deadzone = self.base.settings[DEADZONE].clamped();
        let state = self.base.controls[RIGHT].state() - self.base.controls[LEFT].state();

        if state.abs() > deadzone {
            (state - deadzone * sign(state)) / (1.0 - deadzone) * range + base
        } else {
            0.0
        }
    }
}
