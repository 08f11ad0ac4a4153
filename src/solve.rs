//! The backtracking search (C4, `spec.md` §4.5) and the public `solve`
//! entry point (§6).
//!
//! The teacher has no backtracking search at all: `Solver::solve` in
//! `thblt-nonograms.rs/src/solver.rs` runs propagation to a fixpoint and
//! stops, so it can never resolve an ambiguous puzzle. This module is
//! new code written in the teacher's idiom (a `Solver`-shaped struct
//! driving the same `Mask`/`Grid` vocabulary) rather than a
//! generalization of an existing teacher algorithm; see `DESIGN.md`.

use std::num::NonZeroUsize;

use crate::clue::{validate_clue, Puzzle};
use crate::error::DomainError;
use crate::grid::{Cell, Grid, Mask};
use crate::line::{self, LineCache};
use crate::propagate::propagate;

/// Tunable parameters for a `solve` call. A struct (rather than a bare
/// parameter) so future tunables have a stable place to land; see
/// `SPEC_FULL.md` "Configuration".
#[derive(Copy, Clone, Debug)]
pub struct SolveOptions {
    pub k: NonZeroUsize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            k: NonZeroUsize::new(2).unwrap(),
        }
    }
}

/// Enumerates up to `options.k` distinct solutions for `rows`/`cols`
/// (`spec.md` §6). An infeasible or contradictory puzzle yields an
/// empty list, not an error: only contract violations (malformed clue
/// sequences) are `Err`.
pub fn solve(
    rows: &[Vec<u32>],
    cols: &[Vec<u32>],
    options: SolveOptions,
) -> Result<Vec<Grid>, DomainError> {
    for clue in rows.iter().chain(cols.iter()) {
        validate_clue(clue)?;
    }

    let puzzle = Puzzle {
        rows: rows.to_vec(),
        cols: cols.to_vec(),
    };
    let mut cache = LineCache::new();
    let mut results = Vec::new();
    let grid = Grid::new_unknown(puzzle.width(), puzzle.height());
    search(&puzzle, grid, options.k.get(), &mut cache, &mut results);
    Ok(results)
}

/// Depth-first search: propagate to fixpoint, branch on the
/// most-constrained row if cells remain unknown, collect solutions that
/// pass the validator.
fn search(
    puzzle: &Puzzle,
    mut grid: Grid,
    k: usize,
    cache: &mut LineCache,
    results: &mut Vec<Grid>,
) {
    if results.len() >= k {
        return;
    }

    if propagate(&mut grid, &puzzle.rows, &puzzle.cols, cache).is_err() {
        tracing::debug!("branch contradicted during propagation");
        return;
    }

    if grid.is_fully_known() {
        if crate::clue::validate_same_shape(&grid, puzzle) {
            results.push(grid);
        }
        return;
    }

    let Some((row_idx, branch_fills)) = choose_branch_row(puzzle, &grid, cache) else {
        // No row has any unknown cell left to branch on, yet the grid
        // isn't fully known: every remaining unknown cell belongs to a
        // line whose candidate set is already a singleton, which
        // `propagate` would have pinned. This is unreachable in
        // practice but we decline to branch rather than loop forever.
        return;
    };

    tracing::debug!(row_idx, candidates = branch_fills.len(), "branching");

    for fill in branch_fills {
        if results.len() >= k {
            return;
        }
        let mut next = grid.clone();
        let cells: Vec<Cell> = fill.iter().map(|b| Cell::from(*b)).collect();
        next.set_row(row_idx, &cells);
        search(puzzle, next, k, cache, results);
    }
}

/// Among rows that still contain an unknown cell, picks the one with
/// the fewest mask-consistent fills, breaking ties by ascending row
/// index (`spec.md` §4.5).
fn choose_branch_row(
    puzzle: &Puzzle,
    grid: &Grid,
    cache: &mut LineCache,
) -> Option<(usize, Vec<crate::grid::Fill>)> {
    let mut best: Option<(usize, Vec<crate::grid::Fill>)> = None;
    for y in 0..grid.height() {
        let row = grid.row(y);
        if row.iter().all(Cell::is_known) {
            continue;
        }
        let mask = Mask::from_cells(row);
        let fills = line::enumerate(cache, &puzzle.rows[y], grid.width(), &mask);
        let is_better = match &best {
            None => true,
            Some((_, best_fills)) => fills.len() < best_fills.len(),
        };
        if is_better {
            best = Some((y, fills));
        }
    }
    best
}
