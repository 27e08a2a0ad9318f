//! Trigger digitizers

use std::ops::BitOrAssign;

use op_ciface::ControlState;

use crate::control::Control;
use crate::setting::NumericSetting;

use super::ControlGroup;

// setting positions
const DEADZONE: usize = 0;
const THRESHOLD: usize = 0;

/// Pure analog triggers: one linearly digitized output per control
pub struct Triggers {
    pub base: ControlGroup,
}

impl Triggers {
    pub fn new(name: &str) -> Self {
        let mut base = ControlGroup::new(name);
        base.settings.push(NumericSetting::new("Dead Zone", 0.0, 0, 50));
        Self { base }
    }

    pub fn add_input(&mut self, name: &str) {
        self.base.controls.push(Control::input(name));
    }

    /// Deadzone-rescaled analog value per control, written positionally
    /// into `analog`
    pub fn state(&self, range: ControlState, analog: &mut [ControlState]) {
        let deadzone = self.base.settings[DEADZONE].clamped();

        for (control, out) in self.base.controls.iter().zip(analog) {
            *out = (control.state() - deadzone).max(0.0) / (1.0 - deadzone) * range;
        }
    }
}

/// Digital+analog trigger pairs: the first half of the controls are
/// digital full-pulls, the second half their analog counterparts, paired
/// by position
pub struct MixedTriggers {
    pub base: ControlGroup,
}

impl MixedTriggers {
    pub fn new(name: &str) -> Self {
        let mut base = ControlGroup::new(name);
        base.settings.push(NumericSetting::percent("Threshold", 0.9));
        Self { base }
    }

    pub fn add_input(&mut self, name: &str) {
        self.base.controls.push(Control::input(name));
    }

    /// Digital bitmask plus per-pair analog values.
    ///
    /// A digital control above the threshold forces its analog output to
    /// full `range` and sets the positional bit; otherwise the paired
    /// analog control's state is scaled by `range`.
    pub fn state<M>(&self, bitmasks: &[M], range: ControlState, analog: &mut [ControlState]) -> M
    where
        M: Copy + Default + BitOrAssign,
    {
        let threshold = self.base.settings[THRESHOLD].clamped();
        let trig_count = self.base.controls.len() / 2;
        let mut digital = M::default();

        for i in 0..trig_count {
            if self.base.controls[i].state() > threshold {
                analog[i] = range;
                digital |= bitmasks[i];
            } else {
                analog[i] = self.base.controls[i + trig_count].state() * range;
            }
        }

        digital
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use op_ciface::{Device, DeviceRegistry, SynthDevice};

    use super::*;

    fn bound_triggers() -> (Triggers, Arc<SynthDevice>) {
        let device = Arc::new(SynthDevice::new("Synth", 0, "Pad").with_inputs(&["L", "R"]));
        let registry = DeviceRegistry::new();
        registry.add(device.clone());

        let mut triggers = Triggers::new("Triggers");
        triggers.add_input("L");
        triggers.add_input("R");
        for (control, source) in triggers.base.controls.iter_mut().zip(["L", "R"]) {
            control.reference.expression = source.to_string();
        }
        triggers.base.update_references(&registry, &device.qualifier());
        (triggers, device)
    }

    fn bound_mixed() -> (MixedTriggers, Arc<SynthDevice>) {
        let device = Arc::new(
            SynthDevice::new("Synth", 0, "Pad")
                .with_inputs(&["L", "R", "L-Analog", "R-Analog"]),
        );
        let registry = DeviceRegistry::new();
        registry.add(device.clone());

        let mut mixed = MixedTriggers::new("Triggers");
        for source in ["L", "R", "L-Analog", "R-Analog"] {
            mixed.add_input(source);
        }
        for (control, source) in mixed
            .base
            .controls
            .iter_mut()
            .zip(["L", "R", "L-Analog", "R-Analog"])
        {
            control.reference.expression = source.to_string();
        }
        mixed.base.update_references(&registry, &device.qualifier());
        (mixed, device)
    }

    #[test]
    fn state_inside_deadzone_is_exactly_zero() {
        let (mut triggers, device) = bound_triggers();
        triggers.base.settings[DEADZONE].value = 0.25;

        device.set("L", 0.25);
        device.set("R", 0.1);
        let mut analog = [99.0; 2];
        triggers.state(1.0, &mut analog);
        assert_eq!(analog, [0.0, 0.0]);
    }

    #[test]
    fn deadzone_rescales_remaining_travel() {
        let (mut triggers, device) = bound_triggers();
        triggers.base.settings[DEADZONE].value = 0.5;

        device.set("L", 1.0);
        device.set("R", 0.75);
        let mut analog = [0.0; 2];
        triggers.state(255.0, &mut analog);
        assert_eq!(analog[0], 255.0);
        assert!((analog[1] - 127.5).abs() < 1e-9);
    }

    #[test]
    fn mixed_digital_forces_full_range() {
        let (mixed, device) = bound_mixed();
        device.set("L", 1.0);
        device.set("L-Analog", 0.2);

        let mut analog = [0.0; 2];
        let digital: u16 = mixed.state(&[0x40, 0x20], 255.0, &mut analog);
        assert_eq!(digital, 0x40);
        assert_eq!(analog[0], 255.0);
        assert_eq!(analog[1], 0.0);
    }

    #[test]
    fn mixed_analog_passes_through_below_threshold() {
        let (mixed, device) = bound_mixed();
        device.set("R", 0.5); // below the 0.9 threshold
        device.set("R-Analog", 0.5);

        let mut analog = [0.0; 2];
        let digital: u16 = mixed.state(&[0x40, 0x20], 255.0, &mut analog);
        assert_eq!(digital, 0);
        assert!((analog[1] - 127.5).abs() < 1e-9);
    }
}
