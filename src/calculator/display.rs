//! The value handed back to the shell after every event.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Text shown while the calculator is in the error state.
pub const ERROR_TEXT: &str = "Error";

/// What the display shows after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Display {
    /// The expression being typed or an evaluated result.
    Text(String),
    /// An evaluation failed and the calculator was reset.
    Error,
}

impl Display {
    /// The text to render verbatim.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }

    /// Check if this is the error display.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Display for a (possibly empty) buffer; empty shows "0".
    pub(crate) fn from_buffer(buffer: &str) -> Self {
        if buffer.is_empty() {
            Self::zero()
        } else {
            Self::Text(buffer.to_string())
        }
    }

    pub(crate) fn zero() -> Self {
        Self::Text("0".to_string())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Display {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Display", 2)?;
        state.serialize_field("display", self.as_str())?;
        state.serialize_field("error", &self.is_error())?;
        state.end()
    }
}
