//! Emulated controller root

use op_ciface::{DeviceQualifier, DeviceRegistry};
use op_core::{emu_debug, ProfileSection};

use crate::groups::Group;

/// An emulated controller: an ordered collection of control groups plus
/// the default backend device its unqualified expressions resolve against.
///
/// The root also appears nested inside extension groups, where each
/// attachment is a full controller of its own; load, save, and reference
/// updates recurse through those trees.
pub struct EmulatedController {
    name: String,
    pub groups: Vec<Group>,
    pub default_device: DeviceQualifier,
}

impl EmulatedController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            groups: Vec::new(),
            default_device: DeviceQualifier::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Load this controller as the profile root: the `Device` key selects
    /// the default device, then every group loads its own keys. Absent
    /// keys fall back to declared defaults throughout.
    pub fn load(&mut self, sec: &ProfileSection) {
        self.default_device = sec.get_string("Device", "").parse().unwrap_or_default();
        emu_debug!(
            "loading {:?} with default device {:?}",
            self.name,
            self.default_device.to_string()
        );
        self.load_with_base(sec, "");
    }

    pub(crate) fn load_with_base(&mut self, sec: &ProfileSection, base: &str) {
        let default_device = self.default_device.clone();
        for group in &mut self.groups {
            group.load(sec, &default_device, base);
        }
    }

    /// Save this controller as the profile root
    pub fn save(&self, sec: &mut ProfileSection) {
        sec.set_string("Device", &self.default_device.to_string(), "");
        self.save_with_base(sec, "");
    }

    pub(crate) fn save_with_base(&self, sec: &mut ProfileSection, base: &str) {
        for group in &self.groups {
            group.save(sec, base);
        }
    }

    /// Re-resolve every control reference in this tree, recursing into
    /// extension attachments
    pub fn update_references(&mut self, registry: &DeviceRegistry) {
        let default_device = self.default_device.clone();
        for group in &mut self.groups {
            group
                .base_mut()
                .update_references(registry, &default_device);

            if let Group::Extension(ext) = group {
                for attachment in &mut ext.attachments {
                    attachment.update_references(registry);
                }
            }
        }
    }

    /// Propagate the root default device into all extension attachments
    pub fn update_default_device(&mut self) {
        let default_device = self.default_device.clone();
        for group in &mut self.groups {
            if let Group::Extension(ext) = group {
                for attachment in &mut ext.attachments {
                    attachment.default_device = default_device.clone();
                    attachment.update_default_device();
                }
            }
        }
    }

    /// Reset everything to declared defaults and adopt the first attached
    /// device as the default
    pub fn load_defaults(&mut self, registry: &DeviceRegistry) {
        // loading an empty section clears every key to its default
        let empty = ProfileSection::new();
        self.load(&empty);

        if let Some(device) = registry.first() {
            self.default_device = device.qualifier();
            self.update_default_device();
        }
    }
}
