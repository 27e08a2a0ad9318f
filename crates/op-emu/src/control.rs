//! Logical controls

use op_ciface::{ControlReference, ControlState};

/// A named logical control owning exactly one reference.
///
/// Input controls read from the backend; output controls drive a backend
/// actuator (force feedback).
pub struct Control {
    pub name: String,
    pub reference: ControlReference,
}

impl Control {
    pub fn input(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reference: ControlReference::input(),
        }
    }

    pub fn output(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reference: ControlReference::output(),
        }
    }

    /// Sampled state of the bound input; 0 when unbound
    pub fn state(&self) -> ControlState {
        self.reference.state()
    }
}
