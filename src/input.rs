use anyhow::Context;
use chrono::NaiveDate;
#[cfg(test)]
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers for the menu and for operation prompts.
pub trait Prompt {
    /// Shows `message` and returns the next line without its terminator,
    /// or `None` once the input is exhausted.
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;

    fn read_line(&mut self, message: &str) -> anyhow::Result<String> {
        match self.ask(message).context("Input error")? {
            Some(line) => Ok(line),
            None => anyhow::bail!("Unexpected end of input"),
        }
    }

    fn read_int(&mut self, message: &str) -> anyhow::Result<i32> {
        let line = self.read_line(message)?;
        crate::utils::parse_int_str(line)
    }

    fn read_date(&mut self, message: &str) -> anyhow::Result<NaiveDate> {
        let line = self.read_line(message)?;
        crate::utils::parse_date_str(line)
    }
}

pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for ConsoleInput<R, W> {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Canned answers, consumed front to back. Prompts are recorded so callers
/// can check what was asked.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Prompt for ScriptedInput {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.asked.push(message.to_string());
        Ok(self.answers.pop_front())
    }
}
