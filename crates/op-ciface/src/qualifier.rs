//! Device qualifiers

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::device::Device;

/// Identifies a backend+device pair by string form.
///
/// The string shape is `source/id/name` (e.g. `SDL/0/Gamepad`); the name is
/// the final segment and may itself contain `/`. An empty string parses to
/// nothing and the default (empty) qualifier renders as an empty string, so
/// the form round-trips through profile storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceQualifier {
    pub source: String,
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed device qualifier: {0:?}")]
pub struct ParseQualifierError(pub String);

impl DeviceQualifier {
    pub fn new(source: &str, id: u32, name: &str) -> Self {
        Self {
            source: source.to_string(),
            id,
            name: name.to_string(),
        }
    }

    pub fn from_device(device: &dyn Device) -> Self {
        device.qualifier()
    }

    /// True for the default qualifier, which matches no device
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.name.is_empty()
    }

    pub fn matches(&self, device: &dyn Device) -> bool {
        self.source == device.source() && self.id == device.id() && self.name == device.name()
    }
}

impl fmt::Display for DeviceQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}/{}/{}", self.source, self.id, self.name)
    }
}

impl FromStr for DeviceQualifier {
    type Err = ParseQualifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '/');
        let (Some(source), Some(id), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseQualifierError(s.to_string()));
        };
        if source.is_empty() || name.is_empty() {
            return Err(ParseQualifierError(s.to_string()));
        }
        let id = id
            .parse()
            .map_err(|_| ParseQualifierError(s.to_string()))?;
        Ok(Self::new(source, id, name))
    }
}
