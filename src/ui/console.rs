use crate::error::{EcoRoutesError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{trace, warn};

/// Line-oriented prompt/response channel.
///
/// Numbers are read as whitespace-delimited tokens that may share a line;
/// `read_line` returns whatever is left of the current line, or the next
/// whole line when nothing is pending.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: Option<PendingLine>,
    reprompt_on_invalid: bool,
}

struct PendingLine {
    text: String,
    pos: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: None,
            reprompt_on_invalid: false,
        }
    }

    pub fn with_reprompt(mut self, reprompt_on_invalid: bool) -> Self {
        self.reprompt_on_invalid = reprompt_on_invalid;
        self
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn read_line(&mut self, what: &'static str) -> Result<String> {
        if self.pending.is_none() {
            self.fill(what)?;
        }
        let line = self
            .pending
            .take()
            .map(|p| p.text[p.pos..].to_string())
            .unwrap_or_default();
        trace!(what, line = %line, "read line");
        Ok(line)
    }

    /// Drop the rest of the current line.
    pub fn skip_line(&mut self) {
        self.pending = None;
    }

    pub fn read_int(&mut self, what: &'static str) -> Result<i32> {
        self.read_number(what, "an integer")
    }

    /// Parsed in single precision, then widened for comparison.
    pub fn read_float(&mut self, what: &'static str) -> Result<f64> {
        self.read_number::<f32>(what, "a decimal number").map(f64::from)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_number<T: FromStr>(&mut self, what: &'static str, expected: &'static str) -> Result<T> {
        loop {
            let token = self.next_token(what)?;
            match token.parse::<T>() {
                Ok(value) => {
                    trace!(what, token = %token, "read number");
                    return Ok(value);
                }
                Err(_) if self.reprompt_on_invalid => {
                    warn!(what, token = %token, "discarding invalid number");
                    self.skip_line();
                    self.say("# Valor no válido, intenta de nuevo:")?;
                }
                Err(_) => return Err(EcoRoutesError::InvalidNumber { token, expected }),
            }
        }
    }

    fn next_token(&mut self, what: &'static str) -> Result<String> {
        loop {
            if let Some(pending) = self.pending.as_mut() {
                let rest = &pending.text[pending.pos..];
                let skipped = rest.len() - rest.trim_start().len();
                let start = pending.pos + skipped;
                if start < pending.text.len() {
                    let end = pending.text[start..]
                        .find(char::is_whitespace)
                        .map_or(pending.text.len(), |i| start + i);
                    pending.pos = end;
                    return Ok(pending.text[start..end].to_string());
                }
            }
            self.fill(what)?;
        }
    }

    fn fill(&mut self, what: &'static str) -> Result<()> {
        let mut text = String::new();
        if self.input.read_line(&mut text)? == 0 {
            return Err(EcoRoutesError::UnexpectedEof(what));
        }
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        self.pending = Some(PendingLine { text, pos: 0 });
        Ok(())
    }
}
