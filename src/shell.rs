//! Terminal keypad shell.
//!
//! Maps typed key characters to calculator events and prints the display
//! the calculator hands back. Stdout only ever carries display text.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::calculator::{Calculator, Event, KeyError, parse_keys};
use crate::config::Config;

/// How batch mode reports displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Only the display after the last key.
    #[default]
    Final,
    /// The display after every key, one per line.
    Trace,
    /// One JSON object per key.
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Owns the calculator for one session.
pub struct Shell {
    calculator: Calculator,
    prompt: String,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            calculator: Calculator::new().with_clear_resets_pending(config.clear_resets_pending),
            prompt: config.prompt.clone(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Run a whole key sequence and write the displays to `out`.
    ///
    /// The sequence is validated before any key is applied.
    pub fn run_batch<W: Write>(
        &mut self,
        keys: &str,
        mode: OutputMode,
        out: &mut W,
    ) -> Result<(), ShellError> {
        let events = parse_keys(keys)?;

        for event in events {
            let display = self.calculator.handle(event);
            match mode {
                OutputMode::Final => {}
                OutputMode::Trace => writeln!(out, "{}", display)?,
                OutputMode::Json => {
                    serde_json::to_writer(&mut *out, display)?;
                    writeln!(out)?;
                }
            }
        }

        if mode == OutputMode::Final {
            writeln!(out, "{}", self.calculator.display())?;
        }
        Ok(())
    }

    /// Read key sequences line by line until `q`, `quit` or end of input.
    ///
    /// An unknown key is reported on `err` with its character position in
    /// the raw line, and the rest of the line is skipped; keys before it
    /// still apply.
    pub fn run_interactive<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        info!("interactive session started");
        writeln!(out, "{}{}", self.prompt, self.calculator.display())?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed == "q" || trimmed == "quit" {
                break;
            }

            for (position, key) in line.chars().enumerate() {
                if key.is_whitespace() {
                    continue;
                }
                match Event::from_key(key) {
                    Some(event) => {
                        self.calculator.handle(event);
                    }
                    None => {
                        let error = KeyError::UnknownKey { key, position };
                        warn!(%error, "skipping rest of line");
                        writeln!(err, "{}", error)?;
                        break;
                    }
                }
            }

            writeln!(out, "{}{}", self.prompt, self.calculator.display())?;
            out.flush()?;
        }

        info!("interactive session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(keys: &str, mode: OutputMode) -> String {
        let mut shell = Shell::new(&Config::default());
        let mut out = Vec::new();
        shell.run_batch(keys, mode, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_batch_final() {
        assert_eq!(batch("5+3=", OutputMode::Final), "8\n");
        assert_eq!(batch("5/0=", OutputMode::Final), "Error\n");
    }

    #[test]
    fn test_batch_trace() {
        assert_eq!(batch("5+3=", OutputMode::Trace), "5\n5+\n5+3\n8\n");
    }

    #[test]
    fn test_batch_json() {
        let output = batch("1/0=", OutputMode::Json);
        let last = output.lines().last().unwrap();
        assert_eq!(last, r#"{"display":"Error","error":true}"#);
    }

    #[test]
    fn test_batch_rejects_unknown_key() {
        let mut shell = Shell::new(&Config::default());
        let mut out = Vec::new();
        let result = shell.run_batch("5+q", OutputMode::Final, &mut out);
        assert!(matches!(result, Err(ShellError::Key(_))));
        assert!(out.is_empty());
        assert_eq!(shell.calculator().display().as_str(), "0");
    }

    #[test]
    fn test_interactive_session() {
        let mut shell = Shell::new(&Config::default());
        let input = "12\n+3\n=\nq\n99\n";
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell
            .run_interactive(input.as_bytes(), &mut out, &mut err)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "> 0\n> 12\n> 12+3\n> 15\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_interactive_unknown_key() {
        let config = Config {
            prompt: String::new(),
            ..Config::default()
        };
        let mut shell = Shell::new(&config);
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell
            .run_interactive("4?5\n".as_bytes(), &mut out, &mut err)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0\n4\n");
        assert!(String::from_utf8(err).unwrap().contains("unknown key '?'"));
    }

    #[test]
    fn test_interactive_position_counts_indent() {
        let mut shell = Shell::new(&Config::default());
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell
            .run_interactive("  1?\n".as_bytes(), &mut out, &mut err)
            .unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("at position 3"), "{err}");
    }
}
