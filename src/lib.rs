//! Four-function keypad calculator.
//!
//! The [`calculator`] module holds the input and operator-chaining state
//! machine; [`shell`] drives it from a terminal.

pub mod calculator;
pub mod config;
pub mod shell;
