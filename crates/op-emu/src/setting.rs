//! User-tunable numeric parameters

use op_ciface::ControlState;
use op_core::ProfileSection;

/// A named, bounded, user-tunable parameter.
///
/// Values persist as percentages (x100) and are held as normalized
/// fractions. Assignment is unchecked; consumers read through
/// [`clamped`](Self::clamped), which bounds the value to
/// `[low, high] / 100`, so a hand-edited profile cannot push a setting past
/// its range while the stored value still round-trips unchanged.
#[derive(Debug, Clone)]
pub struct NumericSetting {
    name: String,
    pub value: ControlState,
    default_value: ControlState,
    low: u32,
    high: u32,
}

impl NumericSetting {
    pub fn new(name: &str, default_value: ControlState, low: u32, high: u32) -> Self {
        Self {
            name: name.to_string(),
            value: default_value,
            default_value,
            low,
            high,
        }
    }

    /// A setting bounded to the usual 0..100 percent range
    pub fn percent(name: &str, default_value: ControlState) -> Self {
        Self::new(name, default_value, 0, 100)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> ControlState {
        self.default_value
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.low, self.high)
    }

    /// Current value bounded to the declared range
    pub fn clamped(&self) -> ControlState {
        self.value
            .clamp(f64::from(self.low) / 100.0, f64::from(self.high) / 100.0)
    }

    /// Read the x100 persisted form of `key`, falling back to the default
    pub fn load(&mut self, sec: &ProfileSection, key: &str) {
        self.value = sec.get_or(key, self.default_value * 100.0) / 100.0;
    }

    /// Write the x100 persisted form of `key`, dropping it at the default
    pub fn save(&self, sec: &mut ProfileSection, key: &str) {
        sec.set_f64(key, self.value * 100.0, self.default_value * 100.0);
    }
}
