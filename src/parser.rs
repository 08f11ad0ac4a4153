//! A reader for the plain-text puzzle format used by
//! <https://github.com/mikix/nonogram-db/>.
//!
//! Kept from the teacher's `parser.rs` almost entirely. The
//! CLI-argument-parsing Non-goal in `spec.md` §1 is about *argument*
//! parsing (flags/options), not puzzle-file parsing, and this format is
//! a convenient way to load the example puzzles used in tests/benches.
//! Adapted to build this crate's `Puzzle` instead of the teacher's
//! `Nonogram`/`NonogramBuilder`, and to use `thiserror` instead of a
//! hand-rolled `Display` impl.

use std::io::{self, Read};
use std::num::ParseIntError;

use thiserror::Error;

use crate::clue::{Clue, Puzzle};
use crate::error::DomainError;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("line {line}: expected a header line ('width N', 'height N', 'rows', 'columns')")]
    UnexpectedHeaderLine { line: usize },
    #[error("line {line}: could not parse an integer")]
    InvalidInteger { line: usize, source: ParseIntError },
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("puzzle did not validate: {0}")]
    Invalid(#[from] DomainError),
    #[error("width and height must each be specified exactly once")]
    DimensionAlreadySet,
    #[error("width, height, and the row/column clue counts must all be specified and agree")]
    IncompletePuzzle,
}

#[derive(Default)]
enum Mode {
    #[default]
    Header,
    Columns,
    Rows,
}

/// Parses a nonogram-db-formatted puzzle description.
#[derive(Default)]
pub struct Parser {
    width: Option<usize>,
    height: Option<usize>,
    rows: Vec<Clue>,
    cols: Vec<Clue>,
    mode: Mode,
    line_no: usize,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Parses a nonogram using the format of
    /// <https://github.com/mikix/nonogram-db/>.
    pub fn parse(mut self, source: &mut impl Read) -> Result<Puzzle, ParserError> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;

        for line in text.lines() {
            self.line_no += 1;
            match self.mode {
                Mode::Header => self.parse_header_line(line)?,
                Mode::Columns | Mode::Rows => self.parse_clue_line(line)?,
            }
        }

        let (Some(width), Some(height)) = (self.width, self.height) else {
            return Err(ParserError::IncompletePuzzle);
        };
        if self.rows.len() != height || self.cols.len() != width {
            return Err(ParserError::IncompletePuzzle);
        }

        Ok(Puzzle::new(self.rows, self.cols)?)
    }

    fn parse_header_line(&mut self, line: &str) -> Result<(), ParserError> {
        let (command, args) = line.split_at(line.find(' ').unwrap_or(line.len()));
        let args = args.trim();
        match command {
            "columns" => self.mode = Mode::Columns,
            "rows" => self.mode = Mode::Rows,
            "width" => {
                if self.width.is_some() {
                    return Err(ParserError::DimensionAlreadySet);
                }
                self.width = Some(self.parse_usize(args)?);
            }
            "height" => {
                if self.height.is_some() {
                    return Err(ParserError::DimensionAlreadySet);
                }
                self.height = Some(self.parse_usize(args)?);
            }
            // The expected-solution rendering is a nonogram-db convenience
            // for the tools that draw the puzzle; the solver doesn't need it.
            "goal" | "" => {}
            _ => return Err(ParserError::UnexpectedHeaderLine { line: self.line_no }),
        }
        Ok(())
    }

    fn parse_clue_line(&mut self, line: &str) -> Result<(), ParserError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.mode = Mode::Header;
            return Ok(());
        }

        let parsed: Result<Vec<u32>, _> = trimmed
            .split(',')
            .map(str::trim)
            .map(str::parse::<u32>)
            .collect();

        match parsed {
            Ok(clue) => {
                match self.mode {
                    Mode::Rows => self.rows.push(clue),
                    Mode::Columns => self.cols.push(clue),
                    Mode::Header => unreachable!("parse_clue_line only runs in Rows/Columns mode"),
                }
                Ok(())
            }
            Err(_) => {
                // There may not be a blank line after the last row or column.
                self.mode = Mode::Header;
                self.parse_header_line(trimmed)
            }
        }
    }

    fn parse_usize(&self, s: &str) -> Result<usize, ParserError> {
        s.parse::<usize>()
            .map_err(|source| ParserError::InvalidInteger {
                line: self.line_no,
                source,
            })
    }
}
