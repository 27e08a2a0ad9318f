//! Console-facing pad status

use bitflags::bitflags;

bitflags! {
    /// GameCube pad button bits as they appear on the wire
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PadButtons: u16 {
        const LEFT      = 0x0001;
        const RIGHT     = 0x0002;
        const DOWN      = 0x0004;
        const UP        = 0x0008;
        const TRIGGER_Z = 0x0010;
        const TRIGGER_R = 0x0020;
        const TRIGGER_L = 0x0040;
        const A         = 0x0100;
        const B         = 0x0200;
        const X         = 0x0400;
        const Y         = 0x0800;
        const START     = 0x1000;
    }
}

/// Snapshot of an emulated pad, quantized to the console's ranges:
/// a button mask, 0x80-centered stick bytes, and trigger bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadStatus {
    pub button: u16,
    pub stick_x: u8,
    pub stick_y: u8,
    pub substick_x: u8,
    pub substick_y: u8,
    pub trigger_left: u8,
    pub trigger_right: u8,
}

impl PadStatus {
    /// Resting position of an analog stick
    pub const STICK_CENTER: u8 = 0x80;

    pub fn neutral() -> Self {
        Self {
            button: 0,
            stick_x: Self::STICK_CENTER,
            stick_y: Self::STICK_CENTER,
            substick_x: Self::STICK_CENTER,
            substick_y: Self::STICK_CENTER,
            trigger_left: 0,
            trigger_right: 0,
        }
    }

    pub fn is_pressed(&self, button: PadButtons) -> bool {
        self.button & button.bits() != 0
    }
}

impl Default for PadStatus {
    fn default() -> Self {
        Self::neutral()
    }
}
