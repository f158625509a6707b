use std::io;
use std::io::BufRead;
use std::io::StdinLock;
use std::io::Write;
use std::path::PathBuf;

use crate::error::FinderError;
use crate::error::Result;
use crate::query::Query;

const PROMPT: &str = "Please choose a file: ";

/// Source of interactive answers, one line at a time.
pub trait LineSource {
    /// Returns the next line, or `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader.
pub struct BufReadLines<R> {
    reader: R,
}

impl<R: BufRead> BufReadLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadLines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

pub fn stdin_lines() -> BufReadLines<StdinLock<'static>> {
    BufReadLines::new(io::stdin().lock())
}

/// Resolves a ranked list down to one path, asking the user when there is
/// more than one candidate.
///
/// There is no timeout: the prompt waits until a valid index, end of input
/// or an interrupt.
pub struct Selector<I, W> {
    input: I,
    output: W,
}

impl<I: LineSource, W: Write> Selector<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    pub fn select(&mut self, query: &Query, candidates: &[PathBuf]) -> Result<PathBuf> {
        match candidates {
            [] => Err(FinderError::NoMatch {
                query: query.to_string(),
            }),
            [only] => Ok(only.clone()),
            _ => self.prompt(candidates),
        }
    }

    fn prompt(&mut self, candidates: &[PathBuf]) -> Result<PathBuf> {
        for (index, path) in candidates.iter().enumerate() {
            writeln!(self.output, "[{index}] {}", path.display())?;
        }

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let line = match self.input.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Err(FinderError::Interrupted),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                    return Err(FinderError::Interrupted);
                }
                Err(err) => return Err(err.into()),
            };

            let choice = line.trim();
            match choice.parse::<usize>() {
                Ok(index) if index < candidates.len() => return Ok(candidates[index].clone()),
                _ => writeln!(self.output, "Invalid choice {choice}")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
