//! Backend device interface for oxidized-pad
//!
//! This crate defines the contract the rest of the workspace consumes:
//! devices expose named input capabilities (readable as normalized scalars)
//! and named output capabilities (settable with normalized commands).
//! Physical backends (SDL, evdev, XInput, ...) live behind the [`Device`]
//! trait and are not part of this crate; [`SynthDevice`] is the in-memory
//! implementation used by tests and headless runs.
//!
//! On top of the device contract sit binding expressions and
//! [`ControlReference`], the live link between a logical control and a
//! backend capability.

pub mod device;
pub mod expression;
pub mod qualifier;
pub mod reference;
pub mod registry;
pub mod synth;

pub use device::{ControlState, Device, InputCapability, OutputCapability};
pub use expression::Binding;
pub use qualifier::DeviceQualifier;
pub use reference::{ControlReference, RefKind};
pub use registry::DeviceRegistry;
pub use synth::SynthDevice;
