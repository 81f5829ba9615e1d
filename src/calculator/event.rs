//! Keypad events and the mapping from key characters.
//!
//! The shell never talks to the state machine with raw characters; it
//! turns each key into one of the fixed [`Event`] variants first.

use thiserror::Error;

use super::operation::Operator;

/// A single keypad press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A digit key, `'0'..='9'`.
    Digit(char),
    /// The decimal point key.
    Decimal,
    /// One of the four arithmetic keys.
    Operator(Operator),
    /// The `=` key.
    Equals,
    /// "AC": reset everything.
    AllClear,
    /// "C": delete the last typed character.
    Clear,
    /// `(` or `)`, inserted as text only.
    Parenthesis(char),
}

impl Event {
    /// Map a key character to an event.
    ///
    /// Returns `None` for characters that have no key on the keypad.
    pub fn from_key(key: char) -> Option<Self> {
        if let Some(op) = Operator::from_key(key) {
            return Some(Self::Operator(op));
        }

        match key {
            '0'..='9' => Some(Self::Digit(key)),
            '.' | ',' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '(' | ')' => Some(Self::Parenthesis(key)),
            'c' | 'C' => Some(Self::Clear),
            'a' | 'A' => Some(Self::AllClear),
            _ => None,
        }
    }
}

/// A key sequence contained a character with no keypad mapping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key {key:?} at position {position}")]
    UnknownKey { key: char, position: usize },
}

/// Map a whole key sequence to events.
///
/// Whitespace is skipped. `position` in the error counts characters, not
/// bytes.
pub fn parse_keys(input: &str) -> Result<Vec<Event>, KeyError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, key)| {
            Event::from_key(key).ok_or(KeyError::UnknownKey { key, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        assert_eq!(Event::from_key('0'), Some(Event::Digit('0')));
        assert_eq!(Event::from_key('9'), Some(Event::Digit('9')));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(Event::from_key('.'), Some(Event::Decimal));
        assert_eq!(Event::from_key('='), Some(Event::Equals));
        assert_eq!(Event::from_key('c'), Some(Event::Clear));
        assert_eq!(Event::from_key('A'), Some(Event::AllClear));
        assert_eq!(Event::from_key(')'), Some(Event::Parenthesis(')')));
        assert_eq!(Event::from_key('q'), None);
    }

    #[test]
    fn test_parse_sequence() {
        let events = parse_keys("5 + 3 =").unwrap();
        assert_eq!(
            events,
            vec![
                Event::Digit('5'),
                Event::Operator(Operator::Add),
                Event::Digit('3'),
                Event::Equals,
            ]
        );
    }

    #[test]
    fn test_unknown_key_position() {
        let err = parse_keys("12?3").unwrap_err();
        assert_eq!(
            err,
            KeyError::UnknownKey {
                key: '?',
                position: 2
            }
        );
    }
}
