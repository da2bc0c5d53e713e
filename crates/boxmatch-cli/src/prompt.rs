use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Write};
use std::str::FromStr;

use anyhow::{bail, Result};
use console::Term;

/// Line-oriented terminal questions that repeat until the answer parses and
/// passes its check.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Term> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), Term::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line. `None` once input is closed.
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn answer(&mut self, prompt: &str) -> Result<String> {
        match self.read_answer(prompt)? {
            Some(text) => Ok(text),
            None => bail!("Input closed while waiting for: {}", prompt.trim()),
        }
    }

    /// Ask until the answer parses as `T`.
    pub fn parse<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let text = self.answer(prompt)?;
            match text.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid input. Please enter a valid number.")?,
            }
        }
    }

    /// Ask until the answer parses and `check` accepts it. Rejections are
    /// printed before asking again.
    pub fn parse_valid<T, E, F>(&mut self, prompt: &str, check: F) -> Result<T>
    where
        T: FromStr,
        E: Display,
        F: Fn(T) -> std::result::Result<T, E>,
    {
        loop {
            let value = self.parse(prompt)?;
            match check(value) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Use `preset` when it passes `check`, otherwise report why and ask.
    pub fn value_or_ask<T, E, F>(&mut self, preset: Option<T>, prompt: &str, check: F) -> Result<T>
    where
        T: FromStr,
        E: Display,
        F: Fn(T) -> std::result::Result<T, E>,
    {
        if let Some(value) = preset {
            match check(value) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(err)?,
            }
        }
        self.parse_valid(prompt, check)
    }

    /// Ask until the answer is yes/y or no/n, case-insensitive.
    pub fn yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let text = self.answer(prompt)?.to_lowercase();
            match text.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => self.say("Invalid input. Please enter 'yes' or 'no'.")?,
            }
        }
    }

    /// Hold until Enter (or end of input).
    pub fn pause(&mut self, prompt: &str) -> Result<()> {
        self.read_answer(prompt)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
