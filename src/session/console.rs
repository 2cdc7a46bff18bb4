//! Line-oriented terminal input/output.
//!
//! Generic over `BufRead`/`Write` so sessions run against stdin/stdout in the
//! binary and against in-memory buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::TrainerError;
use crate::training_engine::models::Difficulty;

const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), TrainerError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, TrainerError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(TrainerError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    /// Re-prompt until the reply matches one of `valid` (case-insensitively).
    ///
    /// Returns the lower-cased reply.
    pub fn get_choice(&mut self, prompt: &str, valid: &[&str]) -> Result<String, TrainerError> {
        loop {
            let reply = self.read_line(prompt)?.to_lowercase();
            if valid.iter().any(|v| v.eq_ignore_ascii_case(&reply)) {
                return Ok(reply);
            }
            self.say(format!("Please choose from [{}].", valid.join(", ")))?;
        }
    }

    pub fn get_difficulty(&mut self) -> Result<Difficulty, TrainerError> {
        let choice = self.get_choice("Difficulty (easy/medium/hard): ", &DIFFICULTIES)?;
        // get_choice only returns one of DIFFICULTIES
        Ok(choice.parse().unwrap_or(Difficulty::Easy))
    }

    /// Re-prompt until a non-negative whole number is entered.
    pub fn get_count(&mut self, prompt: &str) -> Result<usize, TrainerError> {
        loop {
            match self.read_line(prompt)?.parse::<usize>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }
}
