//! Boundary error type (`spec.md` §7, kind "programmer error").
//!
//! Generalizes the split the teacher's `ParserError`/`BuilderError` made
//! by hand into a single `thiserror`-derived enum. Contradiction and
//! infeasible-input, the other two failure kinds from §7, are *not*
//! represented here: they surface as branch failure and an empty
//! solution list respectively, never as a `Result::Err`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("clue sequence must contain at least one element")]
    EmptyClueSequence,

    #[error("clue sequence element must be nonzero except for the singleton [0]")]
    ZeroInClueSequence,

    #[error("grid shape ({actual_rows}x{actual_cols}) does not match puzzle shape ({expected_rows}x{expected_cols})")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

/// Internal-only signal: a line's mask admits no consistent fill.
/// Never crosses the public API boundary (see `spec.md` §7 kind 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction;
