//! Keypad calculator core.
//!
//! This module provides:
//! - The [`Calculator`] state machine driven by keypad [`Event`]s
//! - Fallible four-function arithmetic
//! - Result formatting for the display

mod display;
mod error;
mod event;
mod format;
mod operation;
mod state;

pub use display::Display;
pub use error::CalcError;
pub use event::{Event, KeyError, parse_keys};
pub use operation::Operator;
pub use state::Calculator;
