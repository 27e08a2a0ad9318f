//! Dance mat remap
//!
//! A dance mat presents itself as a standard pad; the console sees its
//! arrow panels through a remapped button word. The d-pad maps to the blue
//! arrows, the face buttons to the orange arrows, Z to the plus button and
//! Start to the minus button.

use op_core::ProfileSection;
use op_ciface::DeviceRegistry;

use crate::gc_pad::GcPad;
use crate::status::{PadButtons, PadStatus};

/// Remap a standard pad status into the mat's button word. The low half
/// carries the centered-stick origin the mat always reports.
pub fn map_pad_status(status: &PadStatus) -> u32 {
    let pad = PadButtons::from_bits_truncate(status.button);
    let mut map: u16 = 0;

    if pad.contains(PadButtons::UP) {
        map |= 0x1000;
    }
    if pad.contains(PadButtons::DOWN) {
        map |= 0x2;
    }
    if pad.contains(PadButtons::LEFT) {
        map |= 0x8;
    }
    if pad.contains(PadButtons::RIGHT) {
        map |= 0x4;
    }
    if pad.contains(PadButtons::Y) {
        map |= 0x200;
    }
    if pad.contains(PadButtons::A) {
        map |= 0x10;
    }
    if pad.contains(PadButtons::B) {
        map |= 0x100;
    }
    if pad.contains(PadButtons::X) {
        map |= 0x800;
    }
    if pad.contains(PadButtons::TRIGGER_Z) {
        map |= 0x400;
    }
    if pad.contains(PadButtons::START) {
        map |= 0x1;
    }

    (u32::from(map) << 16) | 0x8080
}

/// A dance mat: a standard pad profile whose extracted state is reported
/// through the arrow-panel word
pub struct DanceMat {
    pad: GcPad,
}

impl DanceMat {
    pub fn new(name: &str) -> Self {
        Self {
            pad: GcPad::new(name),
        }
    }

    pub fn pad(&self) -> &GcPad {
        &self.pad
    }

    pub fn pad_mut(&mut self) -> &mut GcPad {
        &mut self.pad
    }

    pub fn load(&mut self, sec: &ProfileSection) {
        self.pad.load(sec);
    }

    pub fn update_references(&mut self, registry: &DeviceRegistry) {
        self.pad.update_references(registry);
    }

    /// This frame's arrow-panel word
    pub fn status_word(&mut self) -> u32 {
        map_pad_status(&self.pad.status())
    }
}
