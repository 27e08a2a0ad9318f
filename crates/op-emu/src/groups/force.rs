//! 3-axis swing/acceleration proxy

use op_ciface::ControlState;

use crate::control::Control;
use crate::setting::NumericSetting;

use super::{sign, ControlGroup};

// setting positions
const DEADZONE: usize = 0;

/// Force group: three opposed control pairs emitting per-frame swing
/// deltas rather than absolute positions.
///
/// Each call reports `(current - previous) * range + base` per axis and
/// stores the current position, so the output models an acceleration
/// impulse. State lives for the life of the group instance.
pub struct Force {
    pub base: ControlGroup,
    swing: [ControlState; 3],
}

impl Force {
    pub fn new(name: &str) -> Self {
        let mut base = ControlGroup::new(name);

        base.controls.push(Control::input("Up"));
        base.controls.push(Control::input("Down"));
        base.controls.push(Control::input("Left"));
        base.controls.push(Control::input("Right"));
        base.controls.push(Control::input("Forward"));
        base.controls.push(Control::input("Backward"));

        base.settings.push(NumericSetting::new("Dead Zone", 0.0, 0, 50));

        Self {
            base,
            swing: [0.0; 3],
        }
    }

    /// Swing deltas for the three axis pairs, scaled by `range` around
    /// `base`
    pub fn state(&mut self, base: ControlState, range: ControlState) -> [ControlState; 3] {
        let deadzone = self.base.settings[DEADZONE].clamped();
        let mut out = [0.0; 3];

        for axis in 0..3 {
            let state = self.base.controls[axis * 2 + 1].state()
                - self.base.controls[axis * 2].state();

            let mut position = 0.0;
            if state.abs() > deadzone {
                position = (state - deadzone * sign(state)) / (1.0 - deadzone);
            }

            out[axis] = (position - self.swing[axis]) * range + base;
            self.swing[axis] = position;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use op_ciface::{Device, DeviceRegistry, SynthDevice};

    use super::*;

    fn bound_force() -> (Force, Arc<SynthDevice>) {
        let device = Arc::new(SynthDevice::new("Synth", 0, "Pad").with_inputs(&[
            "Up", "Down", "Left", "Right", "Fwd", "Back",
        ]));
        let registry = DeviceRegistry::new();
        registry.add(device.clone());

        let mut force = Force::new("Swing");
        let sources = ["Up", "Down", "Left", "Right", "Fwd", "Back"];
        for (control, source) in force.base.controls.iter_mut().zip(sources) {
            control.reference.expression = source.to_string();
        }
        force.base.update_references(&registry, &device.qualifier());
        (force, device)
    }

    #[test]
    fn emits_delta_not_position() {
        let (mut force, device) = bound_force();

        device.set("Down", 1.0);
        let first = force.state(0.0, 1.0);
        assert_eq!(first[0], 1.0);

        // held position produces no further impulse
        let second = force.state(0.0, 1.0);
        assert_eq!(second[0], 0.0);

        // release swings back
        device.set("Down", 0.0);
        let third = force.state(0.0, 1.0);
        assert_eq!(third[0], -1.0);
    }

    #[test]
    fn state_persists_across_calls() {
        let (mut force, device) = bound_force();

        device.set("Right", 0.5);
        force.state(0.0, 1.0);
        device.set("Right", 0.75);
        let delta = force.state(0.0, 1.0);
        assert!((delta[1] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn deadzone_rescales_with_sign() {
        let (mut force, device) = bound_force();
        force.base.settings[DEADZONE].value = 0.2;

        device.set("Fwd", 0.1);
        let out = force.state(0.0, 1.0);
        // backward - forward inside the deadzone reads as no position
        assert_eq!(out[2], 0.0);

        device.set("Back", 1.0);
        device.set("Fwd", 0.0);
        let out = force.state(0.0, 1.0);
        assert_eq!(out[2], 1.0);
    }

    #[test]
    fn scales_by_range_and_base() {
        let (mut force, device) = bound_force();

        device.set("Down", 1.0);
        let out = force.state(128.0, 127.0);
        assert_eq!(out[0], 255.0);
        assert_eq!(out[1], 128.0);
        assert_eq!(out[2], 128.0);
    }
}
