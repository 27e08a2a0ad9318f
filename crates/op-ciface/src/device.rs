//! Backend device contract

use std::sync::Arc;

use crate::qualifier::DeviceQualifier;

/// Normalized control sample, typically in [0, 1] or [-1, 1]
pub type ControlState = f64;

/// A readable capability of a backend device (button, half-axis, hat
/// direction, ...)
pub trait InputCapability: Send + Sync {
    fn name(&self) -> &str;

    /// Current normalized sample
    fn state(&self) -> ControlState;
}

/// A drivable capability of a backend device (rumble motor, constant-force
/// effect, ...)
pub trait OutputCapability: Send + Sync {
    fn name(&self) -> &str;

    /// Apply a normalized command
    fn set_state(&self, state: ControlState);
}

/// A physical (or synthetic) input device exposed by a backend.
///
/// The capability lists are stable for the lifetime of the device; bindings
/// resolved against them stay valid until the device is detached.
pub trait Device: Send + Sync {
    /// Backend name, e.g. `SDL`
    fn source(&self) -> &str;

    /// Index of this device within its backend
    fn id(&self) -> u32;

    /// Human-readable device name
    fn name(&self) -> &str;

    fn inputs(&self) -> Vec<Arc<dyn InputCapability>>;

    fn outputs(&self) -> Vec<Arc<dyn OutputCapability>>;

    fn find_input(&self, name: &str) -> Option<Arc<dyn InputCapability>> {
        self.inputs().into_iter().find(|input| input.name() == name)
    }

    fn find_output(&self, name: &str) -> Option<Arc<dyn OutputCapability>> {
        self.outputs().into_iter().find(|output| output.name() == name)
    }

    /// Poll hook; backends that buffer state refresh it here once per frame
    fn update(&self) {}

    fn qualifier(&self) -> DeviceQualifier {
        DeviceQualifier::new(self.source(), self.id(), self.name())
    }
}
