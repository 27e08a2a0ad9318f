//! Frame-thread pad service

use parking_lot::Mutex;

use op_ciface::{ControlState, DeviceRegistry};
use op_core::{pad_debug, ProfileSection};

use crate::gc_pad::GcPad;
use crate::status::PadStatus;

/// A set of pad profiles shared between the frame thread and a
/// configuration thread.
///
/// The engine itself carries no internal synchronization; this lock is the
/// sequencing point the concurrency contract asks for. Per-frame polling,
/// profile reloads, and reference updates all pass through it, so
/// extraction can never observe a half-applied configuration.
pub struct PadService {
    pads: Mutex<Vec<GcPad>>,
}

impl PadService {
    pub fn new(count: usize) -> Self {
        let pads = (0..count)
            .map(|port| GcPad::new(&format!("GCPad{}", port + 1)))
            .collect();
        Self {
            pads: Mutex::new(pads),
        }
    }

    pub fn pad_count(&self) -> usize {
        self.pads.lock().len()
    }

    /// This frame's status for `port`; an unknown port reads neutral
    pub fn poll(&self, port: usize) -> PadStatus {
        let mut pads = self.pads.lock();
        match pads.get_mut(port) {
            Some(pad) => pad.status(),
            None => PadStatus::neutral(),
        }
    }

    /// Drive a pad's rumble motor
    pub fn set_rumble(&self, port: usize, strength: ControlState) {
        if let Some(pad) = self.pads.lock().get(port) {
            pad.set_rumble(strength);
        }
    }

    /// Apply a profile section to a pad and re-resolve its bindings
    pub fn load_profile(&self, port: usize, sec: &ProfileSection, registry: &DeviceRegistry) {
        let mut pads = self.pads.lock();
        if let Some(pad) = pads.get_mut(port) {
            pad.load(sec);
            pad.update_references(registry);
            pad_debug!("port {port} loaded profile");
        }
    }

    /// Reset a pad to defaults against the attached devices
    pub fn load_defaults(&self, port: usize, registry: &DeviceRegistry) {
        let mut pads = self.pads.lock();
        if let Some(pad) = pads.get_mut(port) {
            pad.controller_mut().load_defaults(registry);
            pad.update_references(registry);
        }
    }

    /// Run `f` against a pad while holding the service lock
    pub fn with_pad<R>(&self, port: usize, f: impl FnOnce(&mut GcPad) -> R) -> Option<R> {
        self.pads.lock().get_mut(port).map(f)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use op_ciface::{Device, SynthDevice};

    use super::*;

    #[test]
    fn unknown_port_polls_neutral() {
        let service = PadService::new(2);
        assert_eq!(service.poll(7), PadStatus::neutral());
    }

    #[test]
    fn profile_load_binds_and_polls() {
        let device = Arc::new(SynthDevice::new("Synth", 0, "Pad").with_inputs(&["Button 0"]));
        let registry = DeviceRegistry::new();
        registry.add(device.clone());

        let mut sec = ProfileSection::new();
        sec.set_string("Device", &device.qualifier().to_string(), "");
        sec.set_string("Buttons/A", "Button 0", "");

        let service = PadService::new(1);
        service.load_profile(0, &sec, &registry);

        device.set("Button 0", 1.0);
        let status = service.poll(0);
        assert!(status.is_pressed(crate::PadButtons::A));
    }

    #[test]
    fn rumble_reaches_the_backend() {
        let device = Arc::new(SynthDevice::new("Synth", 0, "Pad").with_outputs(&["Motor"]));
        let registry = DeviceRegistry::new();
        registry.add(device.clone());

        let mut sec = ProfileSection::new();
        sec.set_string("Device", &device.qualifier().to_string(), "");
        sec.set_string("Rumble/Motor", "Motor", "");

        let service = PadService::new(1);
        service.load_profile(0, &sec, &registry);
        service.set_rumble(0, 1.0);
        assert_eq!(device.last_output("Motor"), Some(1.0));
    }
}
