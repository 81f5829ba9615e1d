//! Errors raised while evaluating a pending operation.

use std::num::ParseFloatError;

use thiserror::Error;

/// Failure while turning typed input into a running result.
///
/// Every variant is handled the same way by the state machine: the display
/// shows "Error" and the internal state is reset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The second operand of a division was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The result does not fit in a finite `f64`.
    #[error("result out of range")]
    Overflow,
    /// The input buffer did not form a valid number.
    #[error("invalid number {input:?}")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

impl CalcError {
    pub(crate) fn parse(input: &str, source: ParseFloatError) -> Self {
        Self::Parse {
            input: input.to_string(),
            source,
        }
    }
}
