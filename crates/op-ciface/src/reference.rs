//! Live control references

use std::sync::Arc;

use op_core::ciface_trace;

use crate::device::{ControlState, InputCapability, OutputCapability};
use crate::expression::{self, Binding};
use crate::qualifier::DeviceQualifier;
use crate::registry::DeviceRegistry;

/// Whether a reference reads from or writes to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Input,
    Output,
}

enum Bound {
    None,
    Input(Arc<dyn InputCapability>),
    Output(Arc<dyn OutputCapability>),
}

/// The live link between a logical control and a backend capability.
///
/// `expression` and `range` are user-tunable (range persists x100 and is
/// held as a fraction). [`update`](Self::update) re-resolves the binding;
/// until it succeeds the reference reads 0 and drops output commands.
///
/// The reference is plain data: the owner serializes configuration writes
/// against frame-thread reads, and a binding swap under `&mut` is a single
/// store that can never be observed half-updated.
pub struct ControlReference {
    pub expression: String,
    pub range: ControlState,
    kind: RefKind,
    bound: Bound,
}

impl ControlReference {
    pub fn input() -> Self {
        Self::new(RefKind::Input)
    }

    pub fn output() -> Self {
        Self::new(RefKind::Output)
    }

    fn new(kind: RefKind) -> Self {
        Self {
            expression: String::new(),
            range: 1.0,
            kind,
            bound: Bound::None,
        }
    }

    pub fn kind(&self) -> RefKind {
        self.kind
    }

    pub fn is_bound(&self) -> bool {
        !matches!(self.bound, Bound::None)
    }

    /// Sampled state of the bound input, scaled by `range` and capped at 1.
    /// Unbound (or output-kind) references read 0.
    pub fn state(&self) -> ControlState {
        match &self.bound {
            Bound::Input(input) => (input.state() * self.range).min(1.0),
            _ => 0.0,
        }
    }

    /// Drive the bound actuator with `state * range`; no-op when unbound
    pub fn set_state(&self, state: ControlState) {
        if let Bound::Output(output) = &self.bound {
            output.set_state(state * self.range);
        }
    }

    /// Re-resolve the expression, preferring `default_device` for
    /// unqualified control names. A binding that cannot be established
    /// leaves the reference reading neutral.
    pub fn update(&mut self, registry: &DeviceRegistry, default_device: &DeviceQualifier) {
        self.bound = Bound::None;

        let (device, control) = match expression::parse(&self.expression) {
            Binding::Empty => return,
            Binding::Control { name } => (registry.find(default_device), name),
            Binding::Qualified { device, name } => (registry.find(&device), name),
        };

        let Some(device) = device else {
            ciface_trace!("no device for expression {:?}", self.expression);
            return;
        };

        self.bound = match self.kind {
            RefKind::Input => match device.find_input(&control) {
                Some(input) => Bound::Input(input),
                None => Bound::None,
            },
            RefKind::Output => match device.find_output(&control) {
                Some(output) => Bound::Output(output),
                None => Bound::None,
            },
        };

        if !self.is_bound() {
            ciface_trace!(
                "control {:?} not found on {}",
                control,
                device.qualifier()
            );
        }
    }
}
