//! Emulated pad profiles
//!
//! Concrete controller profiles built on the `op-emu` engine: the standard
//! GameCube-style pad, the dance-mat remap over it, the steering wheel,
//! and the motion controller with its attachment port. [`PadService`] owns
//! a set of pads behind one lock, the pattern the console-facing frame
//! loop polls through.

pub mod dance_mat;
pub mod gc_pad;
pub mod motion;
pub mod service;
pub mod status;
pub mod wheel;

pub use dance_mat::DanceMat;
pub use gc_pad::GcPad;
pub use motion::{MotionController, MotionState};
pub use service::PadService;
pub use status::{PadButtons, PadStatus};
pub use wheel::SteeringWheel;
