//! Synthetic device backend
//!
//! A settable in-memory device satisfying the [`Device`] contract, used by
//! tests and headless runs in place of a physical backend.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::device::{ControlState, Device, InputCapability, OutputCapability};

struct SynthInput {
    name: String,
    value: Mutex<ControlState>,
}

impl InputCapability for SynthInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> ControlState {
        *self.value.lock()
    }
}

struct SynthOutput {
    name: String,
    value: Mutex<ControlState>,
}

impl OutputCapability for SynthOutput {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_state(&self, state: ControlState) {
        *self.value.lock() = state;
    }
}

/// In-memory device with settable inputs and recording outputs
pub struct SynthDevice {
    source: String,
    id: u32,
    name: String,
    inputs: Vec<Arc<SynthInput>>,
    outputs: Vec<Arc<SynthOutput>>,
}

impl SynthDevice {
    pub fn new(source: &str, id: u32, name: &str) -> Self {
        Self {
            source: source.to_string(),
            id,
            name: name.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Add named input capabilities, each starting at 0
    pub fn with_inputs(mut self, names: &[&str]) -> Self {
        for name in names {
            self.inputs.push(Arc::new(SynthInput {
                name: (*name).to_string(),
                value: Mutex::new(0.0),
            }));
        }
        self
    }

    /// Add named output capabilities, each starting at 0
    pub fn with_outputs(mut self, names: &[&str]) -> Self {
        for name in names {
            self.outputs.push(Arc::new(SynthOutput {
                name: (*name).to_string(),
                value: Mutex::new(0.0),
            }));
        }
        self
    }

    /// Set an input's sample; unknown names are ignored
    pub fn set(&self, name: &str, value: ControlState) {
        if let Some(input) = self.inputs.iter().find(|input| input.name == name) {
            *input.value.lock() = value;
        }
    }

    /// Last command written to an output, if the output exists
    pub fn last_output(&self, name: &str) -> Option<ControlState> {
        self.outputs
            .iter()
            .find(|output| output.name == name)
            .map(|output| *output.value.lock())
    }
}

impl Device for SynthDevice {
    fn source(&self) -> &str {
        &self.source
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn inputs(&self) -> Vec<Arc<dyn InputCapability>> {
        self.inputs
            .iter()
            .map(|input| input.clone() as Arc<dyn InputCapability>)
            .collect()
    }

    fn outputs(&self) -> Vec<Arc<dyn OutputCapability>> {
        self.outputs
            .iter()
            .map(|output| output.clone() as Arc<dyn OutputCapability>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_read_back_set_values() {
        let device = SynthDevice::new("Synth", 0, "Pad").with_inputs(&["Button 0"]);
        assert_eq!(device.find_input("Button 0").unwrap().state(), 0.0);

        device.set("Button 0", 1.0);
        assert_eq!(device.find_input("Button 0").unwrap().state(), 1.0);

        // unknown names are ignored
        device.set("Button 9", 1.0);
    }

    #[test]
    fn outputs_record_last_command() {
        let device = SynthDevice::new("Synth", 0, "Pad").with_outputs(&["Motor"]);
        device.find_output("Motor").unwrap().set_state(0.75);
        assert_eq!(device.last_output("Motor"), Some(0.75));
        assert_eq!(device.last_output("Nope"), None);
    }

    #[test]
    fn qualifier_reflects_identity() {
        let device = SynthDevice::new("Synth", 3, "Wheel");
        assert_eq!(device.qualifier().to_string(), "Synth/3/Wheel");
    }
}
