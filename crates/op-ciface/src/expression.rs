//! Control binding expressions
//!
//! An expression binds a logical control to at most one backend capability.
//! The grammar is a control name, optionally preceded by a backtick-quoted
//! device qualifier:
//!
//! ```text
//! Button 1
//! Axis X-
//! `SDL/0/Gamepad`Axis 2+
//! ```
//!
//! Parsing never fails hard: malformed text (unterminated backtick, empty
//! name, unparsable qualifier) yields [`Binding::Empty`], which reads as
//! neutral and drops output commands.

use crate::qualifier::DeviceQualifier;

/// Parsed form of a binding expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Binding {
    /// Nothing bound; the reference reads 0
    #[default]
    Empty,
    /// A control on the default device
    Control { name: String },
    /// A control on an explicitly qualified device
    Qualified {
        device: DeviceQualifier,
        name: String,
    },
}

/// Parse an expression, degrading to [`Binding::Empty`] on malformed input
pub fn parse(expression: &str) -> Binding {
    let text = expression.trim();
    if text.is_empty() {
        return Binding::Empty;
    }

    if let Some(rest) = text.strip_prefix('`') {
        let Some((qualifier, name)) = rest.split_once('`') else {
            return Binding::Empty;
        };
        let Ok(device) = qualifier.parse::<DeviceQualifier>() else {
            return Binding::Empty;
        };
        let name = name.trim();
        if name.is_empty() {
            return Binding::Empty;
        }
        return Binding::Qualified {
            device,
            name: name.to_string(),
        };
    }

    Binding::Control {
        name: text.to_string(),
    }
}
