//! The calculator state machine.
//!
//! Converts a sequence of keypad events into a running result. Evaluation
//! is strictly left-to-right with a single pending operation; the visible
//! expression is never re-parsed.

use tracing::{debug, trace};

use super::display::Display;
use super::error::CalcError;
use super::event::Event;
use super::format::format_result;
use super::operation::Operator;

/// Keypad calculator state.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    /// The number currently being typed.
    input: String,
    /// Everything typed since the last clear or evaluation.
    expression: String,
    /// Running result, absent until an operator has been applied.
    first_operand: Option<f64>,
    /// Operator waiting for its second operand.
    pending: Option<Operator>,
    /// The next entry starts a fresh input buffer.
    reset_input: bool,
    /// Last display emitted.
    display: Display,
    /// "C" on an empty input also drops the operator chain.
    clear_resets_pending: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make "C" on an empty input behave like "AC".
    pub fn with_clear_resets_pending(mut self, enabled: bool) -> Self {
        self.clear_resets_pending = enabled;
        self
    }

    /// The current display.
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Check if the last evaluation failed.
    pub fn is_error(&self) -> bool {
        self.display.is_error()
    }

    /// The running result, if any.
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// The operator waiting for a second operand, if any.
    pub fn pending_operation(&self) -> Option<Operator> {
        self.pending
    }

    /// The number currently being typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Dispatch a keypad event.
    pub fn handle(&mut self, event: Event) -> &Display {
        trace!(?event, "calculator event");
        match event {
            Event::Digit(d) => self.digit(d),
            Event::Decimal => self.decimal(),
            Event::Operator(op) => self.operator(op),
            Event::Equals => self.equals(),
            Event::AllClear => self.all_clear(),
            Event::Clear => self.clear(),
            Event::Parenthesis(c) => self.parenthesis(c),
        }
    }

    /// Type a digit.
    pub fn digit(&mut self, d: char) -> &Display {
        if !d.is_ascii_digit() {
            return &self.display;
        }

        self.start_entry();

        // Only a redundant zero is rejected. Rejecting every leading zero
        // would make a zero second operand impossible to type.
        if self.input == "0" {
            if d == '0' {
                return &self.display;
            }
            // Replace the lone zero instead of producing "05"
            self.input.pop();
            self.expression.pop();
        }

        self.push(d);
        self.show_expression()
    }

    /// Type the decimal point.
    pub fn decimal(&mut self) -> &Display {
        self.start_entry();

        if self.input.contains('.') {
            return &self.display;
        }
        if self.input.is_empty() {
            self.push('0');
        }
        self.push('.');
        self.show_expression()
    }

    /// Insert `(` or `)`. The text is shown but never evaluated.
    pub fn parenthesis(&mut self, c: char) -> &Display {
        if c != '(' && c != ')' {
            return &self.display;
        }

        self.start_entry();
        self.push(c);
        self.show_expression()
    }

    /// Press an arithmetic operator.
    pub fn operator(&mut self, op: Operator) -> &Display {
        self.press(Some(op))
    }

    /// Press `=`.
    pub fn equals(&mut self) -> &Display {
        self.press(None)
    }

    /// "AC": return to the initial state.
    pub fn all_clear(&mut self) -> &Display {
        self.reset();
        self.display = Display::zero();
        &self.display
    }

    /// "C": delete the last typed character.
    ///
    /// On an empty input this only shows "0" and leaves the running result
    /// and pending operator in place, unless `clear_resets_pending` is set.
    pub fn clear(&mut self) -> &Display {
        if self.input.pop().is_some() {
            self.expression.pop();
            return self.show_expression();
        }

        if self.clear_resets_pending {
            return self.all_clear();
        }
        self.display = Display::zero();
        &self.display
    }

    fn press(&mut self, op: Option<Operator>) -> &Display {
        match self.evaluate(op) {
            Ok(()) => &self.display,
            Err(err) => {
                debug!(error = %err, "evaluation failed, resetting");
                self.reset();
                self.display = Display::Error;
                &self.display
            }
        }
    }

    /// Apply an operator (`Some`) or `=` (`None`) to the current state.
    fn evaluate(&mut self, op: Option<Operator>) -> Result<(), CalcError> {
        if !self.input.is_empty() {
            let value: f64 = self
                .input
                .parse()
                .map_err(|e| CalcError::parse(&self.input, e))?;
            if !value.is_finite() {
                return Err(CalcError::Overflow);
            }

            match (self.first_operand, self.pending) {
                (None, _) => self.first_operand = Some(value),
                (Some(first), Some(pending)) => {
                    self.first_operand = Some(pending.apply(first, value)?);
                }
                (Some(_), None) => {}
            }

            match op {
                Some(op) => {
                    self.pending = Some(op);
                    self.expression.push(op.symbol());
                    self.show_expression();
                }
                None => {
                    if self.pending.take().is_some() {
                        self.show_result();
                    }
                }
            }
            self.reset_input = true;
        } else if op.is_none()
            && let (Some(first), Some(pending)) = (self.first_operand, self.pending)
        {
            // "5 + =" reuses the first operand: 5 + 5
            self.first_operand = Some(pending.apply(first, first)?);
            self.pending = None;
            self.show_result();
            self.reset_input = true;
        }

        Ok(())
    }

    fn start_entry(&mut self) {
        if self.reset_input {
            self.input.clear();
            self.reset_input = false;
        }
    }

    fn push(&mut self, c: char) {
        self.input.push(c);
        self.expression.push(c);
    }

    fn show_expression(&mut self) -> &Display {
        self.display = Display::from_buffer(&self.expression);
        &self.display
    }

    fn show_result(&mut self) {
        self.expression.clear();
        if let Some(result) = self.first_operand {
            self.display = Display::Text(format_result(result));
        }
    }

    /// Reset every evaluation field. The display is left to the caller.
    fn reset(&mut self) {
        self.input.clear();
        self.expression.clear();
        self.first_operand = None;
        self.pending = None;
        self.reset_input = false;
    }
}
