//! Clue sequences, puzzles, the clue extractor (C1), the validator (C5),
//! and the trim preprocessor (C7).
//!
//! Extraction and trim follow `original_source/nonogram_clues.py`
//! (`rle_line`, `extract_clues`, `trim_grid`) exactly; the teacher's
//! `Constraint = Vec<usize>` supplies the Rust-side clue representation.

use crate::error::DomainError;
use crate::grid::{Cell, Grid};

/// An ordered sequence of run lengths for one line. The singleton `[0]`
/// denotes an empty line; every other element must be nonzero.
pub type Clue = Vec<u32>;

/// `true` iff `clue` is the distinguished empty-line marker `[0]`.
pub fn is_empty_clue(clue: &[u32]) -> bool {
    clue == [0]
}

/// Rejects the two contract violations named in `spec.md` §7 for a
/// single clue sequence: an empty sequence, or a zero element anywhere
/// but the `[0]` singleton.
pub fn validate_clue(clue: &[u32]) -> Result<(), DomainError> {
    if clue.is_empty() {
        return Err(DomainError::EmptyClueSequence);
    }
    if is_empty_clue(clue) {
        return Ok(());
    }
    if clue.iter().any(|&n| n == 0) {
        return Err(DomainError::ZeroInClueSequence);
    }
    Ok(())
}

/// `Σaᵢ + (n−1) ≤ L` (`spec.md` §3). The `[0]` clue is feasible for any
/// length, including zero.
pub fn is_feasible(clue: &[u32], line_len: usize) -> bool {
    if is_empty_clue(clue) {
        return true;
    }
    let occupied: u64 = clue.iter().map(|&n| n as u64).sum();
    let gaps = clue.len() as u64 - 1;
    occupied + gaps <= line_len as u64
}

/// A pair of row/column clue-sequence lists, with the grid shape they
/// imply (`rows.len()` rows, `cols.len()` columns).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub rows: Vec<Clue>,
    pub cols: Vec<Clue>,
}

impl Puzzle {
    pub fn new(rows: Vec<Clue>, cols: Vec<Clue>) -> Result<Puzzle, DomainError> {
        for clue in rows.iter().chain(cols.iter()) {
            validate_clue(clue)?;
        }
        Ok(Puzzle { rows, cols })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.cols.len()
    }
}

fn rle_line(cells: impl Iterator<Item = bool>) -> Clue {
    let mut clue = Vec::new();
    let mut run = 0u32;
    for filled in cells {
        if filled {
            run += 1;
        } else if run > 0 {
            clue.push(run);
            run = 0;
        }
    }
    if run > 0 {
        clue.push(run);
    }
    if clue.is_empty() {
        clue.push(0);
    }
    clue
}

/// Run-length encodes every row and column of `grid` into its induced
/// clue sequences (`spec.md` §4.1). Total, `O(H*W)`.
pub fn extract(grid: &Grid) -> (Vec<Clue>, Vec<Clue>) {
    let rows: Vec<Clue> = (0..grid.height())
        .map(|y| rle_line(grid.row(y).iter().map(|c| *c == Cell::Filled)))
        .collect();
    let cols: Vec<Clue> = (0..grid.width())
        .map(|x| rle_line(grid.column(x).into_iter().map(|c| c == Cell::Filled)))
        .collect();
    tracing::trace!(rows = rows.len(), cols = cols.len(), "extracted clues");
    (rows, cols)
}

/// Re-encodes a fully-filled grid and compares pointwise to `puzzle`'s
/// clues (`spec.md` §4.6). A shape disagreement between `grid` and
/// `puzzle` is a boundary contract violation (`spec.md` §7) and is
/// rejected with `DomainError::ShapeMismatch` rather than folded into
/// the ordinary `false` result; `grid` simply not matching `puzzle`'s
/// clues (or not being fully known yet) still returns `Ok(false)`.
pub fn validate(grid: &Grid, puzzle: &Puzzle) -> Result<bool, DomainError> {
    if grid.width() != puzzle.width() || grid.height() != puzzle.height() {
        return Err(DomainError::ShapeMismatch {
            expected_rows: puzzle.height(),
            expected_cols: puzzle.width(),
            actual_rows: grid.height(),
            actual_cols: grid.width(),
        });
    }
    Ok(validate_same_shape(grid, puzzle))
}

/// The same check as `validate`, for callers (the search leaf in
/// `solve.rs`) that already know `grid` and `puzzle` agree in shape by
/// construction and don't need the `Result` wrapper.
pub(crate) fn validate_same_shape(grid: &Grid, puzzle: &Puzzle) -> bool {
    if !grid.is_fully_known() {
        return false;
    }
    let (rows, cols) = extract(grid);
    rows == puzzle.rows && cols == puzzle.cols
}

/// How many leading rows/columns `trim` stripped, so a caller can map a
/// trimmed solution back onto the original canvas (see `SPEC_FULL.md`,
/// "Supplemented Features").
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub top: usize,
    pub left: usize,
}

/// Strips leading/trailing all-`Empty` rows and columns. A grid with no
/// filled cells at all is returned unchanged (`spec.md` §4.2).
pub fn trim(grid: &Grid) -> (Grid, Offset) {
    let (w, h) = (grid.width(), grid.height());
    let row_has_fill: Vec<bool> = (0..h)
        .map(|y| grid.row(y).iter().any(|c| *c == Cell::Filled))
        .collect();
    let col_has_fill: Vec<bool> = (0..w)
        .map(|x| grid.column(x).iter().any(|c| *c == Cell::Filled))
        .collect();

    if !row_has_fill.iter().any(|&b| b) || !col_has_fill.iter().any(|&b| b) {
        return (grid.clone(), Offset::default());
    }

    let top = row_has_fill.iter().position(|&b| b).unwrap();
    let bottom = h - row_has_fill.iter().rev().position(|&b| b).unwrap();
    let left = col_has_fill.iter().position(|&b| b).unwrap();
    let right = w - col_has_fill.iter().rev().position(|&b| b).unwrap();

    let new_w = right - left;
    let new_h = bottom - top;
    let mut bits = Vec::with_capacity(new_w * new_h);
    for y in top..bottom {
        for x in left..right {
            bits.push(grid[(x, y)] == Cell::Filled);
        }
    }
    (Grid::from_bits(new_w, new_h, bits), Offset { top, left })
}
