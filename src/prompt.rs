//! Line-based prompt I/O
//!
//! Generic over any reader and writer so the interactive session can be
//! driven from stdin/stdout or from a scripted buffer in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::validate::ValidationError;

/// Input that abandons the current multi-step operation
pub const CANCEL_TOKEN: &str = "0";

pub struct Prompter<R, W> {
    input: R,
    output: W,
    pause: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pause: true,
        }
    }

    /// Enable or disable the "press Enter" step after each operation
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line; `None` at end of input
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer is `y` or `n`
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "y" => return Ok(Some(true)),
                "n" => return Ok(Some(false)),
                _ => self.say("Invalid answer. Please type 'y' or 'n'.")?,
            }
        }
    }

    /// Ask until `validate` accepts the input.
    ///
    /// Returns `None` when the user enters [`CANCEL_TOKEN`] or input ends.
    pub fn ask_field<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> std::result::Result<T, ValidationError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if answer == CANCEL_TOKEN {
                return Ok(None);
            }
            match validate(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.say(format!("Invalid input: {err}."))?,
            }
        }
    }

    /// Wait for Enter before going back to the menu
    pub fn pause(&mut self) -> Result<()> {
        if self.pause {
            self.ask("\nPress Enter to return to the main menu...")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_phone;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_field_reprompts_until_valid() {
        let mut p = prompter("1234\nabcdefgh\n12345678\n");
        let phone = p.ask_field("Phone: ", validate_phone).expect("ask");
        assert_eq!(phone.as_deref(), Some("12345678"));

        let out = String::from_utf8(p.into_output()).expect("utf8");
        assert!(out.contains("exactly 8 digits"));
        assert!(out.contains("only digits"));
    }

    #[test]
    fn ask_field_cancels_on_sentinel_and_eof() {
        let mut p = prompter("0\n");
        assert_eq!(p.ask_field("Phone: ", validate_phone).expect("ask"), None);
        assert_eq!(p.ask_field("Phone: ", validate_phone).expect("ask"), None);
    }

    #[test]
    fn ask_yes_no_loops_on_other_answers() {
        let mut p = prompter("maybe\nY\n");
        assert_eq!(p.ask_yes_no("Continue? ").expect("ask"), Some(true));
    }
}
