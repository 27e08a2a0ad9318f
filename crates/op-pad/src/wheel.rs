//! Steering wheel profile
//!
//! Wheels speak the standard pad protocol: steering lands on the main
//! stick's X axis, the pedals on the analog triggers, and the wheel's
//! force-feedback motor is driven through an output control bound to a
//! backend effect (constant force on most hardware).

use op_ciface::{ControlState, DeviceRegistry};
use op_core::ProfileSection;
use op_emu::groups::NAMED_DIRECTIONS;
use op_emu::{Buttons, EmulatedController, Group, Slider, Triggers};

use crate::status::{PadButtons, PadStatus};

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

const STICK_RANGE: ControlState = 127.0;
const TRIGGER_RANGE: ControlState = 255.0;

/// Steering wheel: slider-steered stick X, pedal triggers, and a
/// force-strength output
pub struct SteeringWheel {
    controller: EmulatedController,
}

impl SteeringWheel {
    pub fn new(name: &str) -> Self {
        let mut controller = EmulatedController::new(name);

        let mut buttons = Buttons::new("Buttons");
        for button in ["A", "B", "X", "Y", "Z", "Start"] {
            buttons.add_input(button);
        }
        controller.groups.push(Group::Buttons(buttons));

        controller
            .groups
            .push(Group::Slider(Slider::new("Steering")));

        let mut pedals = Triggers::new("Pedals");
        pedals.add_input("Brake");
        pedals.add_input("Accelerate");
        controller.groups.push(Group::Triggers(pedals));

        let mut dpad = Buttons::new("D-Pad");
        for direction in NAMED_DIRECTIONS {
            dpad.add_input(direction);
        }
        controller.groups.push(Group::Buttons(dpad));

        let mut force = Buttons::new("Force");
        force.add_output("Motor");
        controller.groups.push(Group::Buttons(force));

        Self { controller }
    }

    pub fn controller(&self) -> &EmulatedController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EmulatedController {
        &mut self.controller
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

    /// Extract the wheel's pad-protocol state for this frame
    pub fn status(&mut self) -> PadStatus {
        let [Group::Buttons(buttons), Group::Slider(steering), Group::Triggers(pedals), Group::Buttons(dpad), Group::Buttons(_force)] =
            &self.controller.groups[..]
        else {
            return PadStatus::neutral();
        };

        let mut status = PadStatus::neutral();

        let mut button: u16 = buttons.state(&BUTTON_BITS);
        button |= dpad.state::<u16>(&DPAD_BITS);
        status.button = button;

        let center = ControlState::from(PadStatus::STICK_CENTER);
        let steer = steering.state(center, STICK_RANGE);
        // centered steering reads 0 from the slider; snap it to the origin
        status.stick_x = if steer == 0.0 {
            PadStatus::STICK_CENTER
        } else {
            steer as u8
        };

        let mut analog = [0.0; 2];
        pedals.state(TRIGGER_RANGE, &mut analog);
        status.trigger_left = analog[0] as u8;
        status.trigger_right = analog[1] as u8;

        status
    }

    /// Drive the wheel's force-feedback motor with a normalized strength
    pub fn set_force(&self, strength: ControlState) {
        if let Some(Group::Buttons(force)) = self.controller.groups.last() {
            if let Some(motor) = force.base.controls.first() {
                motor.reference.set_state(strength);
            }
        }
    }
}

impl Default for SteeringWheel {
    fn default() -> Self {
        Self::new("Wheel")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use op_ciface::{Device, DeviceRegistry, SynthDevice};

    use super::*;

    fn bound_wheel() -> (SteeringWheel, Arc<SynthDevice>) {
        let device = Arc::new(
            SynthDevice::new("Synth", 0, "Wheel")
                .with_inputs(&["Axis 0-", "Axis 0+", "Pedal 0", "Pedal 1"])
                .with_outputs(&["Constant"]),
        );
        let registry = DeviceRegistry::new();
        registry.add(device.clone());

        let mut wheel = SteeringWheel::new("Wheel1");
        wheel.controller.default_device = device.qualifier();
        {
            let steering = wheel.controller.groups[1].base_mut();
            steering.controls[0].reference.expression = "Axis 0-".to_string();
            steering.controls[1].reference.expression = "Axis 0+".to_string();
        }
        {
            let pedals = wheel.controller.groups[2].base_mut();
            pedals.controls[0].reference.expression = "Pedal 0".to_string();
            pedals.controls[1].reference.expression = "Pedal 1".to_string();
        }
        {
            let force = wheel.controller.groups[4].base_mut();
            force.controls[0].reference.expression = "Constant".to_string();
        }
        wheel.update_references(&registry);
        (wheel, device)
    }

    #[test]
    fn centered_wheel_reports_stick_origin() {
        let (mut wheel, _device) = bound_wheel();
        let status = wheel.status();
        assert_eq!(status.stick_x, PadStatus::STICK_CENTER);
    }

    #[test]
    fn steering_deflects_stick_x() {
        let (mut wheel, device) = bound_wheel();

        device.set("Axis 0+", 1.0);
        let status = wheel.status();
        assert_eq!(status.stick_x, 255);

        device.set("Axis 0+", 0.0);
        device.set("Axis 0-", 1.0);
        let status = wheel.status();
        assert_eq!(status.stick_x, 1);
    }

    #[test]
    fn pedals_land_on_triggers() {
        let (mut wheel, device) = bound_wheel();

        device.set("Pedal 0", 0.5);
        device.set("Pedal 1", 1.0);
        let status = wheel.status();
        assert_eq!(status.trigger_left, 127);
        assert_eq!(status.trigger_right, 255);
    }

    #[test]
    fn force_command_reaches_the_backend() {
        let (wheel, device) = bound_wheel();
        wheel.set_force(0.8);
        assert_eq!(device.last_output("Constant"), Some(0.8));
    }
}
