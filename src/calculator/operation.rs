//! Binary operators and their arithmetic.

use super::error::CalcError;

/// One of the four arithmetic keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol appended to the expression when this operator is pressed.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Map a key character to an operator.
    ///
    /// Accepts both the keypad symbols and their ASCII stand-ins
    /// (`-`, `*`, `x`, `/`).
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division by exactly zero fails, and so does any result that is
    /// infinite or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), Ok(15.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        // Negative zero is still zero
        assert_eq!(
            Operator::Divide.apply(5.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operator::Add.apply(f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operator::Divide.apply(f64::MAX, 0.5),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operator::Subtract.apply(f64::INFINITY, f64::INFINITY),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Operator::from_key('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_key('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_key('='), None);
    }
}
