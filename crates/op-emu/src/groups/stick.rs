//! 2-axis analog stick with deadzone, radius, and squareness correction

use op_ciface::ControlState;

use crate::control::Control;
use crate::setting::NumericSetting;

use super::{ControlGroup, NAMED_DIRECTIONS};

// control positions
const UP: usize = 0;
const DOWN: usize = 1;
const LEFT: usize = 2;
const RIGHT: usize = 3;
const MODIFIER: usize = 4;

// setting positions
const RADIUS: usize = 0;
const DEADZONE: usize = 1;
const SQUARE: usize = 2;

/// Analog stick group: four directional inputs plus a modifier, with
/// radius, deadzone, and square-stick settings
pub struct AnalogStick {
    pub base: ControlGroup,
}

impl AnalogStick {
    pub fn new(name: &str) -> Self {
        let mut base = ControlGroup::new(name);

        for direction in NAMED_DIRECTIONS {
            base.controls.push(Control::input(direction));
        }
        base.controls.push(Control::input("Modifier"));

        base.settings.push(NumericSetting::percent("Radius", 0.7));
        base.settings.push(NumericSetting::new("Dead Zone", 0.0, 0, 50));
        base.settings.push(NumericSetting::percent("Square Stick", 0.0));

        Self { base }
    }

    /// Corrected stick position, each axis scaled by `range` around `base`.
    ///
    /// With radius 1, deadzone 0, and squareness 0 this is the identity
    /// path: raw `(right-left, up-down)` differentials pass through
    /// untouched.
    pub fn state(&self, base: ControlState, range: ControlState) -> (ControlState, ControlState) {
        let controls = &self.base.controls;
        let mut yy = controls[UP].state() - controls[DOWN].state();
        let mut xx = controls[RIGHT].state() - controls[LEFT].state();

        let radius = self.base.settings[RADIUS].clamped();
        let deadzone = self.base.settings[DEADZONE].clamped();
        let square = self.base.settings[SQUARE].clamped();
        let modifier = controls[MODIFIER].state();

        // modifier pins each live axis to a fixed magnitude
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

        if radius != 1.0 || deadzone > 0.0 || square > 0.0 {
            let ang = yy.atan2(xx);
            let ang_sin = ang.sin();
            let ang_cos = ang.cos();

            // the amount a full square stick would have at this angle
            let square_full = f64::min(
                if ang_sin != 0.0 { 1.0 / ang_sin.abs() } else { 2.0 },
                if ang_cos != 0.0 { 1.0 / ang_cos.abs() } else { 2.0 },
            );

            // the amount a stick of the configured squareness would have;
            // closer to a pointed circle than a rounded square, kept as-is
            let stick_full = 1.0 + (square_full - 1.0) * square;

            let mut dist = (xx * xx + yy * yy).sqrt();

            // dead zone, scaled to the blended extent
            dist = (dist - deadzone * stick_full).max(0.0);
            dist /= 1.0 - deadzone;

            // redistribute the square/circle blend by current magnitude
            let amt = dist / stick_full;
            dist -= (square_full - 1.0) * amt * square;

            dist *= radius;

            yy = (ang_sin * dist).clamp(-1.0, 1.0);
            xx = (ang_cos * dist).clamp(-1.0, 1.0);
        }

        (xx * range + base, yy * range + base)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use op_ciface::{Device, DeviceRegistry, SynthDevice};

    use super::*;

    fn bound_stick() -> (AnalogStick, Arc<SynthDevice>) {
        let device = Arc::new(
            SynthDevice::new("Synth", 0, "Pad")
                .with_inputs(&["Up", "Down", "Left", "Right", "Mod"]),
        );
        let registry = DeviceRegistry::new();
        registry.add(device.clone());

        let mut stick = AnalogStick::new("Main Stick");
        let sources = ["Up", "Down", "Left", "Right", "Mod"];
        for (control, source) in stick.base.controls.iter_mut().zip(sources) {
            control.reference.expression = source.to_string();
        }
        stick.base.update_references(&registry, &device.qualifier());
        (stick, device)
    }

    fn identity(stick: &mut AnalogStick) {
        stick.base.settings[RADIUS].value = 1.0;
        stick.base.settings[DEADZONE].value = 0.0;
        stick.base.settings[SQUARE].value = 0.0;
    }

    #[test]
    fn identity_path_passes_raw_values() {
        let (mut stick, device) = bound_stick();
        identity(&mut stick);

        device.set("Up", 0.8);
        device.set("Left", 0.3);
        let (x, y) = stick.state(0.0, 1.0);
        assert!((y - 0.8).abs() < 1e-12);
        assert!((x + 0.3).abs() < 1e-12);
    }

    #[test]
    fn output_scales_by_range_and_base() {
        let (mut stick, device) = bound_stick();
        identity(&mut stick);

        device.set("Up", 0.8);
        let (x, y) = stick.state(128.0, 127.0);
        assert!((y - (0.8 * 127.0 + 128.0)).abs() < 1e-9);
        assert!((x - 128.0).abs() < 1e-9);
    }

    #[test]
    fn neutral_stick_rests_at_base() {
        let (stick, _device) = bound_stick();
        // default radius 0.7 takes the correction path; zero input stays put
        let (x, y) = stick.state(128.0, 127.0);
        assert_eq!((x, y), (128.0, 128.0));
    }

    #[test]
    fn deadzone_swallows_small_input() {
        let (mut stick, device) = bound_stick();
        identity(&mut stick);
        stick.base.settings[DEADZONE].value = 0.2;

        device.set("Right", 0.1);
        let (x, _y) = stick.state(0.0, 1.0);
        assert_eq!(x, 0.0);
    }

    #[test]
    fn radius_scales_travel() {
        let (mut stick, device) = bound_stick();
        identity(&mut stick);
        stick.base.settings[RADIUS].value = 0.5;

        device.set("Right", 1.0);
        let (x, y) = stick.state(0.0, 1.0);
        assert!((x - 0.5).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn modifier_pins_magnitude() {
        let (mut stick, device) = bound_stick();
        identity(&mut stick);

        device.set("Right", 1.0);
        device.set("Mod", 0.5);
        let (x, _y) = stick.state(0.0, 1.0);
        assert!((x - 0.5).abs() < 1e-9);

        // axes inside the deadzone stay at rest even with the modifier held
        stick.base.settings[DEADZONE].value = 0.2;
        device.set("Right", 0.1);
        let (x, _y) = stick.state(0.0, 1.0);
        assert_eq!(x, 0.0);
    }

    #[test]
    fn corrected_output_clamps_to_unit() {
        let (mut stick, device) = bound_stick();
        identity(&mut stick);
        stick.base.settings[SQUARE].value = 1.0;

        // full diagonal on a square stick stretches past the unit circle
        device.set("Up", 1.0);
        device.set("Right", 1.0);
        let (x, y) = stick.state(0.0, 1.0);
        assert!(x <= 1.0 && y <= 1.0);
    }
}
