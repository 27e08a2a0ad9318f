//! Motion controller profile
//!
//! A pointer-and-gesture controller: tilt and swing gestures, an IR-style
//! cursor, and an attachment port for sub-controllers. Extraction recurses
//! into the active attachment's own group tree, so a plugged-in extension
//! contributes its stick and buttons to the same frame.

use op_ciface::{ControlState, DeviceRegistry};
use op_core::ProfileSection;
use op_emu::{
    AnalogStick, Buttons, Cursor, CursorState, EmulatedController, Extension, Force, Group, Tilt,
};

// core button bits
pub const BUTTON_A: u16 = 0x0008;
pub const BUTTON_B: u16 = 0x0004;
pub const BUTTON_MINUS: u16 = 0x0010;
pub const BUTTON_PLUS: u16 = 0x1000;
pub const BUTTON_HOME: u16 = 0x0080;

// attachment button bits
pub const EXT_BUTTON_C: u8 = 0x02;
pub const EXT_BUTTON_Z: u8 = 0x01;

const BUTTON_BITS: [u16; 5] = [BUTTON_A, BUTTON_B, BUTTON_MINUS, BUTTON_PLUS, BUTTON_HOME];
const EXT_BUTTON_BITS: [u8; 2] = [EXT_BUTTON_C, EXT_BUTTON_Z];

const STICK_CENTER: ControlState = 128.0;
const STICK_RANGE: ControlState = 127.0;

/// State contributed by the active attachment, if one is plugged in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentState {
    pub stick_x: u8,
    pub stick_y: u8,
    pub buttons: u8,
}

/// One frame of motion-controller state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub buttons: u16,
    pub tilt_x: u8,
    pub tilt_y: u8,
    pub swing: [u8; 3],
    pub cursor: CursorState,
    pub attachment: Option<AttachmentState>,
}

/// Motion controller: buttons, tilt, swing, cursor, and an attachment port
pub struct MotionController {
    controller: EmulatedController,
}

impl MotionController {
    pub fn new(name: &str) -> Self {
        let mut controller = EmulatedController::new(name);

        let mut buttons = Buttons::new("Buttons");
        for button in ["A", "B", "-", "+", "Home"] {
            buttons.add_input(button);
        }
        controller.groups.push(Group::Buttons(buttons));

        controller.groups.push(Group::Tilt(Tilt::new("Tilt")));
        controller.groups.push(Group::Force(Force::new("Swing")));
        controller.groups.push(Group::Cursor(Cursor::new("IR")));

        let mut attachment = Extension::new("Attachment");
        attachment.add_attachment(EmulatedController::new("None"));
        attachment.add_attachment(Self::nunchuk());
        controller.groups.push(Group::Extension(attachment));

        Self { controller }
    }

    fn nunchuk() -> EmulatedController {
        let mut nunchuk = EmulatedController::new("Nunchuk");
        nunchuk
            .groups
            .push(Group::AnalogStick(AnalogStick::new("Stick")));

        let mut buttons = Buttons::new("Buttons");
        buttons.add_input("C");
        buttons.add_input("Z");
        nunchuk.groups.push(Group::Buttons(buttons));
        nunchuk
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

    /// Apply the staged attachment selection; the caller decides the frame
    /// boundary this happens on
    pub fn apply_attachment_switch(&mut self) {
        if let Some(Group::Extension(ext)) = self.controller.groups.last_mut() {
            ext.set_active_to_switch();
        }
    }

    /// Extract one frame of state, stepping the tilt and cursor smoothing
    pub fn state(&mut self) -> MotionState {
        let [Group::Buttons(buttons), Group::Tilt(tilt), Group::Force(swing), Group::Cursor(cursor), Group::Extension(attachment)] =
            &mut self.controller.groups[..]
        else {
            return MotionState {
                buttons: 0,
                tilt_x: STICK_CENTER as u8,
                tilt_y: STICK_CENTER as u8,
                swing: [STICK_CENTER as u8; 3],
                cursor: CursorState {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0,
                },
                attachment: None,
            };
        };

        let button_word: u16 = buttons.state(&BUTTON_BITS);

        let (tilt_x, tilt_y) = tilt.state(STICK_CENTER, STICK_RANGE, true);
        let swing_axes = swing.state(STICK_CENTER, STICK_RANGE);
        let cursor_state = cursor.state(true);

        MotionState {
            buttons: button_word,
            tilt_x: tilt_x as u8,
            tilt_y: tilt_y as u8,
            swing: [
                swing_axes[0] as u8,
                swing_axes[1] as u8,
                swing_axes[2] as u8,
            ],
            cursor: cursor_state,
            attachment: Self::attachment_state(attachment),
        }
    }

    // recurse into the live attachment's group tree
    fn attachment_state(attachment: &Extension) -> Option<AttachmentState> {
        let active = attachment.active()?;
        let [Group::AnalogStick(stick), Group::Buttons(buttons)] = &active.groups[..] else {
            return None;
        };

        let (x, y) = stick.state(STICK_CENTER, STICK_RANGE);
        Some(AttachmentState {
            stick_x: x as u8,
            stick_y: y as u8,
            buttons: buttons.state(&EXT_BUTTON_BITS),
        })
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new("Motion1")
    }
}
