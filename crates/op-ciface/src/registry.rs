//! Device registry

use std::sync::Arc;

use parking_lot::RwLock;

use op_core::ciface_debug;

use crate::device::Device;
use crate::qualifier::DeviceQualifier;

/// The set of currently attached backend devices.
///
/// Interior locking lets resolution run from a configuration thread while
/// the frame thread reads capability states through already-resolved
/// references.
pub struct DeviceRegistry {
    devices: RwLock<Vec<Arc<dyn Device>>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(Vec::new()),
        }
    }

    pub fn add(&self, device: Arc<dyn Device>) {
        ciface_debug!(
            "device attached: {}",
            device.qualifier()
        );
        self.devices.write().push(device);
    }

    pub fn remove(&self, qualifier: &DeviceQualifier) {
        let mut devices = self.devices.write();
        let before = devices.len();
        devices.retain(|device| !qualifier.matches(device.as_ref()));
        if devices.len() != before {
            ciface_debug!("device detached: {}", qualifier);
        }
    }

    pub fn devices(&self) -> Vec<Arc<dyn Device>> {
        self.devices.read().clone()
    }

    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    pub fn find(&self, qualifier: &DeviceQualifier) -> Option<Arc<dyn Device>> {
        self.devices
            .read()
            .iter()
            .find(|device| qualifier.matches(device.as_ref()))
            .cloned()
    }

    /// First attached device, used when adopting a default
    pub fn first(&self) -> Option<Arc<dyn Device>> {
        self.devices.read().first().cloned()
    }

    /// Run every device's poll hook
    pub fn update_all(&self) {
        for device in self.devices.read().iter() {
            device.update();
        }
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
