//! Control-expression evaluation and calibration engine
//!
//! An [`EmulatedController`] owns an ordered set of control groups, each a
//! cluster of logical controls and tunable settings with its own
//! state-extraction math: threshold digitizers for buttons and triggers,
//! deadzone/radius/squareness correction for analog sticks, frame-stepped
//! smoothing for tilt and cursor gestures, per-frame swing deltas for
//! force, and nested sub-controller profiles behind an extension group.
//!
//! All failure modes degrade to neutral input; nothing in the evaluation
//! path returns an error.

pub mod control;
pub mod controller;
pub mod groups;
pub mod setting;

pub use control::Control;
pub use controller::EmulatedController;
pub use groups::{
    AnalogStick, Buttons, ControlGroup, Cursor, CursorState, Extension, Force, Group,
    MixedTriggers, Slider, Tilt, Triggers,
};
pub use setting::NumericSetting;
