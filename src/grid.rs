//! The grid and mask types every other module is built on.
//!
//! Generalizes `thblt-nonograms.rs`'s `Nonogram`/`CellState` to a
//! standalone, puzzle-agnostic grid plus a compact bitset `Mask` for
//! partial line knowledge (see `SPEC_FULL.md` §3).

use std::ops::{Index, IndexMut};

use bitvec::prelude::*;

/// The state of a single cell during search. Input and output grids use
/// only `Empty`/`Filled`; `Unknown` only appears mid-search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Unknown,
    Empty,
    Filled,
}

impl From<bool> for Cell {
    fn from(filled: bool) -> Self {
        if filled {
            Cell::Filled
        } else {
            Cell::Empty
        }
    }
}

impl Cell {
    pub fn is_known(self) -> bool {
        self != Cell::Unknown
    }
}

/// A rectangular grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new_unknown(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![Cell::Unknown; width * height],
        }
    }

    /// Builds a grid from a row-major iterator of booleans (`true` = filled).
    pub fn from_bits(width: usize, height: usize, bits: impl IntoIterator<Item = bool>) -> Grid {
        let cells: Vec<Cell> = bits.into_iter().map(Cell::from).collect();
        assert_eq!(cells.len(), width * height);
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_fully_known(&self) -> bool {
        self.cells.iter().all(|c| c.is_known())
    }

    #[inline]
    fn xy_to_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// A contiguous view of row `y`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.xy_to_index(0, y);
        &self.cells[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = self.xy_to_index(0, y);
        &mut self.cells[start..start + self.width]
    }

    /// Columns aren't contiguous, so this allocates.
    pub fn column(&self, x: usize) -> Vec<Cell> {
        (0..self.height).map(|y| self[(x, y)]).collect()
    }

    pub fn set_row(&mut self, y: usize, cells: &[Cell]) {
        self.row_mut(y).copy_from_slice(cells);
    }

    pub fn set_column(&mut self, x: usize, cells: &[Cell]) {
        for (y, c) in cells.iter().enumerate() {
            self[(x, y)] = *c;
        }
    }

    /// A simple box-drawing rendering, useful for examples and debugging.
    pub fn as_text(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(match self[(x, y)] {
                    Cell::Unknown => '?',
                    Cell::Empty => ' ',
                    Cell::Filled => '█',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        &self.cells[self.xy_to_index(x, y)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Cell {
        let idx = self.xy_to_index(x, y);
        &mut self.cells[idx]
    }
}

/// A concrete 0/1 realization of a clue: a bit set to `1` means filled.
pub type Fill = BitVec<u64, Lsb0>;

/// Partial knowledge about a single line: `known[i]` says whether cell `i`
/// is pinned; `value[i]` is meaningful only when `known[i]` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    known: BitVec<u64, Lsb0>,
    value: BitVec<u64, Lsb0>,
}

impl Mask {
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    pub fn all_unknown(len: usize) -> Mask {
        Mask {
            known: bitvec![u64, Lsb0; 0; len],
            value: bitvec![u64, Lsb0; 0; len],
        }
    }

    pub fn from_cells(cells: &[Cell]) -> Mask {
        let mut known = bitvec![u64, Lsb0; 0; cells.len()];
        let mut value = bitvec![u64, Lsb0; 0; cells.len()];
        for (i, c) in cells.iter().enumerate() {
            match c {
                Cell::Unknown => {}
                Cell::Empty => known.set(i, true),
                Cell::Filled => {
                    known.set(i, true);
                    value.set(i, true);
                }
            }
        }
        Mask { known, value }
    }

    pub fn to_cells(&self) -> Vec<Cell> {
        (0..self.len())
            .map(|i| {
                if !self.known[i] {
                    Cell::Unknown
                } else {
                    Cell::from(self.value[i])
                }
            })
            .collect()
    }

    pub fn is_known(&self, i: usize) -> bool {
        self.known[i]
    }

    pub fn value(&self, i: usize) -> bool {
        self.value[i]
    }

    /// `true` iff `fill` agrees with every pinned cell of this mask.
    pub fn accepts(&self, fill: &Fill) -> bool {
        (0..self.len()).all(|i| !self.known[i] || self.value[i] == fill[i])
    }

    /// Pins cell `i` to `filled`. Returns whether this newly pinned a
    /// cell that was previously unknown (a "changed" signal for the
    /// propagator's fixpoint check).
    pub fn pin(&mut self, i: usize, filled: bool) -> bool {
        let was_unknown = !self.known[i];
        self.known.set(i, true);
        self.value.set(i, filled);
        was_unknown
    }
}
