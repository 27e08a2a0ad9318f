//! Pointer cursor with hide and screen adjustment

use op_ciface::ControlState;

use crate::control::Control;
use crate::setting::NumericSetting;

use super::{step_toward, ControlGroup, NAMED_DIRECTIONS};

// control positions
const UP: usize = 0;
const DOWN: usize = 1;
const LEFT: usize = 2;
const RIGHT: usize = 3;
const FORWARD: usize = 4;
const BACKWARD: usize = 5;
const HIDE: usize = 6;

// setting positions
const CENTER: usize = 0;
const WIDTH: usize = 1;
const HEIGHT: usize = 2;

/// X position reported while the pointer is hidden, far outside any
/// visible frame
pub const HIDDEN_X: ControlState = 10000.0;

/// Cursor sample: screen-plane position plus smoothed depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub x: ControlState,
    pub y: ControlState,
    pub z: ControlState,
}

/// Cursor group: four directional controls, a smoothed depth pair, and a
/// hide toggle
pub struct Cursor {
    pub base: ControlGroup,
    z: ControlState,
}

impl Cursor {
    pub fn new(name: &str) -> Self {
        let mut base = ControlGroup::new(name);

        for direction in NAMED_DIRECTIONS {
            base.controls.push(Control::input(direction));
        }
        base.controls.push(Control::input("Forward"));
        base.controls.push(Control::input("Backward"));
        base.controls.push(Control::input("Hide"));

        base.settings.push(NumericSetting::percent("Center", 0.5));
        base.settings.push(NumericSetting::percent("Width", 0.5));
        base.settings.push(NumericSetting::percent("Height", 0.5));

        Self { base, z: 0.0 }
    }

    /// Current cursor sample. Depth always steps toward its target; the
    /// hide toggle overrides the screen position with the out-of-frame
    /// sentinel. `adjusted` applies the center/width/height settings for
    /// screen-space consumers.
    pub fn state(&mut self, adjusted: bool) -> CursorState {
        let controls = &self.base.controls;

        let zz = controls[FORWARD].state() - controls[BACKWARD].state();
        step_toward(&mut self.z, zz);
        let z = self.z;

        if controls[HIDE].state() > 0.5 {
            return CursorState {
                x: HIDDEN_X,
                y: 0.0,
                z,
            };
        }

        let mut yy = controls[UP].state() - controls[DOWN].state();
        let mut xx = controls[RIGHT].state() - controls[LEFT].state();

        if adjusted {
            xx *= self.base.settings[WIDTH].clamped() * 2.0;
            yy *= self.base.settings[HEIGHT].clamped() * 2.0;
            yy += self.base.settings[CENTER].clamped() - 0.5;
        }

        CursorState { x: xx, y: yy, z }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use op_ciface::{Device, DeviceRegistry, SynthDevice};

    use super::*;

    fn bound_cursor() -> (Cursor, Arc<SynthDevice>) {
        let device = Arc::new(SynthDevice::new("Synth", 0, "Pad").with_inputs(&[
            "Up", "Down", "Left", "Right", "Fwd", "Back", "Hide",
        ]));
        let registry = DeviceRegistry::new();
        registry.add(device.clone());

        let mut cursor = Cursor::new("IR");
        let sources = ["Up", "Down", "Left", "Right", "Fwd", "Back", "Hide"];
        for (control, source) in cursor.base.controls.iter_mut().zip(sources) {
            control.reference.expression = source.to_string();
        }
        cursor.base.update_references(&registry, &device.qualifier());
        (cursor, device)
    }

    #[test]
    fn unadjusted_passes_raw_differentials() {
        let (mut cursor, device) = bound_cursor();
        device.set("Up", 0.4);
        device.set("Right", 0.6);

        let state = cursor.state(false);
        assert!((state.y - 0.4).abs() < 1e-12);
        assert!((state.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn adjusted_applies_scale_and_center() {
        let (mut cursor, device) = bound_cursor();
        cursor.base.settings[WIDTH].value = 1.0;
        cursor.base.settings[HEIGHT].value = 0.25;
        cursor.base.settings[CENTER].value = 0.75;

        device.set("Right", 0.5);
        device.set("Up", 1.0);

        let state = cursor.state(true);
        assert!((state.x - 1.0).abs() < 1e-12);
        assert!((state.y - (1.0 * 0.5 + 0.25)).abs() < 1e-12);
    }

    #[test]
    fn hide_forces_out_of_frame_sentinel() {
        let (mut cursor, device) = bound_cursor();
        device.set("Hide", 1.0);
        device.set("Up", 1.0);
        device.set("Left", 1.0);

        let state = cursor.state(true);
        assert_eq!(state.x, 10000.0);
        assert_eq!(state.y, 0.0);
    }

    #[test]
    fn hide_at_threshold_stays_visible() {
        let (mut cursor, device) = bound_cursor();
        device.set("Hide", 0.5);

        let state = cursor.state(false);
        assert_ne!(state.x, 10000.0);
    }

    #[test]
    fn depth_steps_even_while_hidden() {
        let (mut cursor, device) = bound_cursor();
        device.set("Hide", 1.0);
        device.set("Fwd", 1.0);

        let first = cursor.state(false);
        assert_eq!(first.z, 0.1);
        let second = cursor.state(false);
        assert!((second.z - 0.2).abs() < 1e-12);
    }
}
