//! Standard GameCube-style pad profile

use op_ciface::{ControlState, DeviceRegistry};
use op_core::ProfileSection;
use op_emu::groups::NAMED_DIRECTIONS;
use op_emu::{AnalogStick, Buttons, EmulatedController, Group, MixedTriggers};

use crate::status::{PadButtons, PadStatus};

// status() destructures the group list in construction order:
// Buttons, Main Stick, C-Stick, Triggers, D-Pad, Rumble
const RUMBLE: usize = 5;

const BUTTON_BITS: [u16; 6] = [
    PadButtons::A.bits(),
    PadButtons::B.bits(),
    PadButtons::X.bits(),
    PadButtons::Y.bits(),
    PadButtons::TRIGGER_Z.bits(),
    PadButtons::START.bits(),
];

const DPAD_BITS: [u16; 4] = [
    PadButtons::UP.bits(),
    PadButtons::DOWN.bits(),
    PadButtons::LEFT.bits(),
    PadButtons::RIGHT.bits(),
];

const TRIGGER_BITS: [u16; 2] = [PadButtons::TRIGGER_L.bits(), PadButtons::TRIGGER_R.bits()];

const STICK_RANGE: ControlState = 127.0;
const TRIGGER_RANGE: ControlState = 255.0;

/// The standard pad: button cluster, two analog sticks, digital+analog
/// trigger pairs, d-pad, and a rumble motor output
pub struct GcPad {
    controller: EmulatedController,
}

impl GcPad {
    pub fn new(name: &str) -> Self {
        let mut controller = EmulatedController::new(name);

        let mut buttons = Buttons::new("Buttons");
        for button in ["A", "B", "X", "Y", "Z", "Start"] {
            buttons.add_input(button);
        }
        controller.groups.push(Group::Buttons(buttons));

        controller
            .groups
            .push(Group::AnalogStick(AnalogStick::new("Main Stick")));
        controller
            .groups
            .push(Group::AnalogStick(AnalogStick::new("C-Stick")));

        let mut triggers = MixedTriggers::new("Triggers");
        for trigger in ["L", "R", "L-Analog", "R-Analog"] {
            triggers.add_input(trigger);
        }
        controller.groups.push(Group::MixedTriggers(triggers));

        let mut dpad = Buttons::new("D-Pad");
        for direction in NAMED_DIRECTIONS {
            dpad.add_input(direction);
        }
        controller.groups.push(Group::Buttons(dpad));

        let mut rumble = Buttons::new("Rumble");
        rumble.add_output("Motor");
        controller.groups.push(Group::Buttons(rumble));

        Self { controller }
    }

    pub fn controller(&self) -> &EmulatedController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EmulatedController {
        &mut self.controller
    }

    pub fn name(&self) -> &str {
        self.controller.name()
    }

    pub fn load(&mut self, sec: &ProfileSection) {
        self.controller.load(sec);
    }

    pub fn save(&self, sec: &mut ProfileSection) {
        self.controller.save(sec);
    }

    pub fn update_references(&mut self, registry: &DeviceRegistry) {
        self.controller.update_references(registry);
    }

    /// Extract the quantized console-facing state for this frame
    pub fn status(&mut self) -> PadStatus {
        let [Group::Buttons(buttons), Group::AnalogStick(main_stick), Group::AnalogStick(c_stick), Group::MixedTriggers(triggers), Group::Buttons(dpad), Group::Buttons(_rumble)] =
            &mut self.controller.groups[..]
        else {
            // a foreign group layout yields neutral input rather than a fault
            return PadStatus::neutral();
        };

        let mut status = PadStatus::neutral();

        let mut button: u16 = buttons.state(&BUTTON_BITS);
        button |= dpad.state::<u16>(&DPAD_BITS);

        let mut analog = [0.0; 2];
        button |= triggers.state::<u16>(&TRIGGER_BITS, TRIGGER_RANGE, &mut analog);
        status.trigger_left = analog[0] as u8;
        status.trigger_right = analog[1] as u8;

        let center = ControlState::from(PadStatus::STICK_CENTER);
        let (x, y) = main_stick.state(center, STICK_RANGE);
        status.stick_x = x as u8;
        status.stick_y = y as u8;

        let (x, y) = c_stick.state(center, STICK_RANGE);
        status.substick_x = x as u8;
        status.substick_y = y as u8;

        status.button = button;
        status
    }

    /// Drive the rumble motor with a normalized strength
    pub fn set_rumble(&self, strength: ControlState) {
        if let Some(Group::Buttons(rumble)) = self.controller.groups.get(RUMBLE) {
            if let Some(motor) = rumble.base.controls.first() {
                motor.reference.set_state(strength);
            }
        }
    }
}

impl Default for GcPad {
    fn default() -> Self {
        Self::new("GCPad")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_order_is_stable() {
        let pad = GcPad::new("GCPad1");
        let names: Vec<&str> = pad.controller.groups.iter().map(Group::name).collect();
        assert_eq!(
            names,
            ["Buttons", "Main Stick", "C-Stick", "Triggers", "D-Pad", "Rumble"]
        );
        assert_eq!(names[RUMBLE], "Rumble");
    }

    #[test]
    fn unbound_pad_reads_neutral() {
        let mut pad = GcPad::new("GCPad1");
        let status = pad.status();
        assert_eq!(status, PadStatus::neutral());
    }
}
