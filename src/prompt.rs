//! Console prompts with validation and the `end` abort keyword.
//!
//! Every prompt returns a [`Reply`]. Typing `end` at any prompt yields
//! [`Reply::Abort`], which callers hand straight back up with the
//! [`given!`](crate::given) macro until the session stops.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::filters::{Choice, Selection};

/// Typing this at any prompt ends the program.
pub const ABORT_KEYWORD: &str = "end";

const INVALID_PROMPT: &str = "\nInvalid input. Please enter a valid option:\n>";

/// ANSI "erase display" followed by "cursor home".
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Answer to a prompt, or a request to stop the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Given(T),
    Abort,
}

/// Unwraps a `Reply::Given`, or returns `Ok(Reply::Abort)` from the enclosing
/// function.
#[macro_export]
macro_rules! given {
    ($reply:expr) => {
        match $reply {
            $crate::prompt::Reply::Given(value) => value,
            $crate::prompt::Reply::Abort => return Ok($crate::prompt::Reply::Abort),
        }
    };
}

/// Yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Yes,
    No,
}

impl Choice for Confirm {
    const ALL: &'static [Self] = &[Confirm::Yes, Confirm::No];

    fn key(self) -> &'static str {
        match self {
            Confirm::Yes => "y",
            Confirm::No => "n",
        }
    }
}

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks until `parse` accepts the trimmed, lower-cased answer.
    ///
    /// Closed input counts as an abort.
    pub fn ask_with<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Reply<T>> {
        let mut prompt = prompt;
        loop {
            let Some(line) = self.read_answer(prompt)? else {
                debug!("Input closed");
                return Ok(Reply::Abort);
            };

            let answer = line.trim().to_lowercase();
            if answer == ABORT_KEYWORD {
                debug!("Abort requested");
                return Ok(Reply::Abort);
            }

            if let Some(value) = parse(&answer) {
                return Ok(Reply::Given(value));
            }

            debug!(answer = %answer, "Rejected input");
            prompt = INVALID_PROMPT;
        }
    }

    /// Asks for one value or a comma-separated set of values of `T`.
    pub fn ask_selection<T: Choice>(&mut self, prompt: &str) -> Result<Reply<Selection<T>>> {
        self.ask_with(prompt, Selection::parse)
    }

    /// Asks for exactly one value of `T`; a comma-separated list is invalid.
    pub fn ask_choice<T: Choice>(&mut self, prompt: &str) -> Result<Reply<T>> {
        self.ask_with(prompt, |answer| match Selection::parse(answer)? {
            Selection::Single(value) => Some(value),
            Selection::Multiple(_) => None,
        })
    }

    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read console input")?;

        Ok((read > 0).then_some(line))
    }
}
