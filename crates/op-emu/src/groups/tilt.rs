//! Motion-gesture stick with angle limiting and temporal smoothing

use op_ciface::ControlState;

use crate::control::Control;
use crate::setting::NumericSetting;

use super::{step_toward, ControlGroup};

// control positions
const FORWARD: usize = 0;
const BACKWARD: usize = 1;
const LEFT: usize = 2;
const RIGHT: usize = 3;
const MODIFIER: usize = 4;

// setting positions
const DEADZONE: usize = 0;
const CIRCLE: usize = 1;
const ANGLE: usize = 2;

/// Tilt group: the analog-stick correction with a circle-stick blend, an
/// angle limit, and per-call stepping toward the instantaneous target
pub struct Tilt {
    pub base: ControlGroup,
    tilt: [ControlState; 2],
}

impl Tilt {
    pub fn new(name: &str) -> Self {
        let mut base = ControlGroup::new(name);

        base.controls.push(Control::input("Forward"));
        base.controls.push(Control::input("Backward"));
        base.controls.push(Control::input("Left"));
        base.controls.push(Control::input("Right"));
        base.controls.push(Control::input("Modifier"));

        base.settings.push(NumericSetting::new("Dead Zone", 0.0, 0, 50));
        base.settings.push(NumericSetting::percent("Circle Stick", 0.0));
        base.settings.push(NumericSetting::new("Angle", 0.9, 0, 180));

        Self {
            base,
            tilt: [0.0; 2],
        }
    }

    /// Smoothed tilt position, each axis scaled by `range` around `base`.
    ///
    /// With `step` the stored state advances toward the computed target and
    /// is returned; without it the raw target is returned and the stored
    /// state is left untouched (display queries must not consume steps).
    pub fn state(
        &mut self,
        base: ControlState,
        range: ControlState,
        step: bool,
    ) -> (ControlState, ControlState) {
        let controls = &self.base.controls;
        let mut yy = controls[FORWARD].state() - controls[BACKWARD].state();
        let mut xx = controls[RIGHT].state() - controls[LEFT].state();

        let deadzone = self.base.settings[DEADZONE].clamped();
        let circle = self.base.settings[CIRCLE].clamped();
        let angle = self.base.settings[ANGLE].clamped() / 1.8;
        let modifier = controls[MODIFIER].state();

        if modifier != 0.0 {
            yy = if yy.abs() > deadzone {
                super::sign(yy) * (modifier + deadzone / 2.0)
            } else {
                0.0
            };
            xx = if xx.abs() > deadzone {
                super::sign(xx) * (modifier + deadzone / 2.0)
            } else {
                0.0
            };
        }

        if deadzone > 0.0 || circle > 0.0 {
            let ang = yy.atan2(xx);
            let ang_sin = ang.sin();
            let ang_cos = ang.cos();

            let square_full = f64::min(
                if ang_sin != 0.0 { 1.0 / ang_sin.abs() } else { 2.0 },
                if ang_cos != 0.0 { 1.0 / ang_cos.abs() } else { 2.0 },
            );

            // blend from square extent toward circular as the setting rises
            let stick_full = square_full * (1.0 - circle) + circle;

            let mut dist = (xx * xx + yy * yy).sqrt();

            dist = (dist - deadzone * stick_full).max(0.0);
            dist /= 1.0 - deadzone;

            let amt = dist / stick_full;
            dist += (square_full - 1.0) * amt * circle;

            yy = (ang_sin * dist).clamp(-1.0, 1.0);
            xx = (ang_cos * dist).clamp(-1.0, 1.0);
        }

        if !step {
            return (xx * angle * range + base, yy * angle * range + base);
        }

        step_toward(&mut self.tilt[0], xx);
        step_toward(&mut self.tilt[1], yy);

        (
            self.tilt[0] * angle * range + base,
            self.tilt[1] * angle * range + base,
        )
    }
}
