//! Validated console input.
//!
//! [`Console`] wraps any line source and any sink, so the same prompting code
//! runs against a terminal or against a scripted buffer in tests.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::InputError;
use crate::model::MarkRange;

pub const INVALID_WHOLE_NUMBER: &str = "Invalid input. Please enter a whole number.";
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";

/// Operator-facing line I/O.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of text.
    pub fn say(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so malformed
    /// input is treated as ordinary text. Returns [`InputError::Closed`] once
    /// the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        trace!(prompt, line = %line, "read line");
        Ok(line)
    }

    /// Prompt until the operator types a whole number.
    pub fn read_int(&mut self, prompt: &str) -> Result<i64, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say(INVALID_WHOLE_NUMBER)?,
            }
        }
    }

    /// Prompt until the operator types a number inside `range`.
    pub fn read_mark(&mut self, prompt: &str, range: MarkRange) -> Result<f64, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<f64>() {
                Ok(value) if range.contains(value) => return Ok(value),
                Ok(_) => self.say(&format!(
                    "Mark must be between {} and {}.",
                    range.min, range.max
                ))?,
                Err(_) => self.say(INVALID_NUMBER)?,
            }
        }
    }
}
