//! Input collaborators for the interactive agents.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::config::ship_class_name;

/// Reasons an answer from the input collaborator was refused.
///
/// Everything except [`InputError::Closed`] is re-promptable and never changes
/// board state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("enter two numbers: row and column")]
    Malformed,
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },
    #[error("cell ({row}, {col}) is occupied or touches another ship")]
    CellOccupiedOrBordered { row: usize, col: usize },
    #[error("cell ({row}, {col}) cannot hold this ship in a straight line")]
    NotInRegion { row: usize, col: usize },
    #[error("cell ({row}, {col}) was already targeted")]
    AlreadyTargeted { row: usize, col: usize },
    #[error("input closed")]
    Closed,
}

/// What the core is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Deck number `index` (0-based) of a ship with `decks` decks.
    Deck { decks: usize, index: usize },
    /// A cell on the opponent's board.
    Target,
}

/// Source of coordinate answers.
pub trait InputSource {
    /// Answer `request` with a raw (row, col) pair. Range checks belong to the caller.
    fn next_coord(&mut self, request: Request) -> Result<(i64, i64), InputError>;

    /// Told about an answer the core refused; the next call re-prompts.
    fn rejected(&mut self, _err: &InputError) {}
}

/// Parse a "row col" answer.
pub fn parse_coords(line: &str) -> Result<(i64, i64), InputError> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed);
    };
    let row = row.parse().map_err(|_| InputError::Malformed)?;
    let col = col.parse().map_err(|_| InputError::Malformed)?;
    Ok((row, col))
}

fn ordinal(index: usize) -> &'static str {
    match index {
        0 => "first",
        1 => "second",
        2 => "third",
        _ => "next",
    }
}

/// Prompts on a writer and reads answers line by line from a reader.
///
/// Bytes that are not valid UTF-8 come through lossily and fail to parse, so a
/// garbled line is re-prompted like any other malformed answer.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    out: W,
}

/// Console input: stdin answers, stdout prompts.
pub type StdinInput = LineInput<io::StdinLock<'static>, io::Stdout>;

impl StdinInput {
    pub fn new() -> Self {
        LineInput::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn with_io(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) if buf.is_empty() => return Err(InputError::Closed),
                Ok(_) => return Ok(String::from_utf8_lossy(&buf).into_owned()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => return Err(InputError::Closed),
            }
        }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn next_coord(&mut self, request: Request) -> Result<(i64, i64), InputError> {
        let prompt = match request {
            Request::Deck { decks, index } => write!(
                self.out,
                "Coordinates of the {} deck of your {} (row col): ",
                ordinal(index),
                ship_class_name(decks)
            ),
            Request::Target => write!(self.out, "Your shot (row col): "),
        };
        prompt
            .and_then(|()| self.out.flush())
            .map_err(|_| InputError::Closed)?;
        let line = self.read_line()?;
        parse_coords(line.trim())
    }

    fn rejected(&mut self, err: &InputError) {
        let _ = writeln!(self.out, "  {}", err);
    }
}

/// Replays a fixed list of answers, then reports [`InputError::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<Result<(i64, i64), InputError>>,
    rejections: Vec<InputError>,
    requests: Vec<Request>,
}

impl ScriptedInput {
    /// Script of well-formed answers.
    pub fn new<I: IntoIterator<Item = (i64, i64)>>(answers: I) -> Self {
        Self::from_results(answers.into_iter().map(Ok))
    }

    /// Script that may include malformed answers.
    pub fn from_results<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = Result<(i64, i64), InputError>>,
    {
        Self {
            answers: answers.into_iter().collect(),
            rejections: Vec::new(),
            requests: Vec::new(),
        }
    }

    /// Parse each line as an answer, the way [`StdinInput`] would.
    pub fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        Self::from_results(lines.into_iter().map(parse_coords))
    }

    /// Every refusal reported so far, oldest first.
    pub fn rejections(&self) -> &[InputError] {
        &self.rejections
    }

    /// Every request received so far.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_coord(&mut self, request: Request) -> Result<(i64, i64), InputError> {
        self.requests.push(request);
        self.answers.pop_front().unwrap_or(Err(InputError::Closed))
    }

    fn rejected(&mut self, err: &InputError) {
        self.rejections.push(*err);
    }
}
