//! The propagator (C3, `spec.md` §4.4).
//!
//! Generalizes `thblt-nonograms.rs/src/solver.rs`'s
//! `Solver::consensus_step`/`filter_step`/`find_consensus`, which is
//! already almost exactly C3, to operate on `Mask`s instead of
//! `Vec<CellState>`, to use the cached `line::enumerate`, and to report
//! `Contradiction` instead of silently leaving a line's candidate set
//! empty (the teacher's `filter_step` has no failure path at all).

use crate::clue::Clue;
use crate::error::Contradiction;
use crate::grid::{Cell, Grid, Mask};
use crate::line::{self, LineCache};

/// Runs alternating row/column passes (rows first, ascending index,
/// then columns, ascending index, per `spec.md` §5) until no pass pins
/// a new cell, or a line's mask admits no consistent fill.
pub fn propagate(
    grid: &mut Grid,
    rows: &[Clue],
    cols: &[Clue],
    cache: &mut LineCache,
) -> Result<(), Contradiction> {
    loop {
        let mut changed = false;

        for y in 0..grid.height() {
            changed |= propagate_line(grid.row(y), &rows[y], grid.width(), cache)
                .map(|refined| {
                    let did_change = refined != grid.row(y);
                    if did_change {
                        grid.set_row(y, &refined);
                    }
                    did_change
                })?;
        }

        for x in 0..grid.width() {
            let col = grid.column(x);
            changed |= propagate_line(&col, &cols[x], grid.height(), cache)
                .map(|refined| {
                    let did_change = refined != col;
                    if did_change {
                        grid.set_column(x, &refined);
                    }
                    did_change
                })?;
        }

        tracing::debug!(changed, "propagation pass complete");
        if !changed {
            return Ok(());
        }
    }
}

/// Refines a single line's cells by intersecting every candidate fill
/// consistent with its current mask. Returns the refined cell sequence,
/// or `Contradiction` if no candidate fill survives.
fn propagate_line(
    cells: &[Cell],
    clue: &Clue,
    len: usize,
    cache: &mut LineCache,
) -> Result<Vec<Cell>, Contradiction> {
    let mask = Mask::from_cells(cells);
    let fills = line::enumerate(cache, clue, len, &mask);
    if fills.is_empty() {
        return Err(Contradiction);
    }

    let mut refined = mask;
    let undecided: Vec<usize> = (0..len).filter(|&i| !refined.is_known(i)).collect();

    // `agreement[slot]` holds the value every fill seen so far agrees on
    // for `undecided[slot]`, or `None` if no fill has been seen yet.
    // `settled[slot]` goes true the moment a fill disagrees, and stays
    // true forever after (a slot that has disagreed once can never
    // agree again). Once every slot is settled, no later fill can pin
    // anything new, so we stop scanning fills (spec.md 4.4: short-circuit
    // once the intersection mask is fully unknown).
    let mut agreement: Vec<Option<bool>> = vec![None; undecided.len()];
    let mut settled = vec![false; undecided.len()];
    let mut unsettled = undecided.len();

    for fill in &fills {
        if unsettled == 0 {
            break;
        }
        for (slot, &i) in undecided.iter().enumerate() {
            if settled[slot] {
                continue;
            }
            match agreement[slot] {
                None => agreement[slot] = Some(fill[i]),
                Some(v) if v != fill[i] => {
                    settled[slot] = true;
                    unsettled -= 1;
                }
                Some(_) => {}
            }
        }
    }

    for (slot, &i) in undecided.iter().enumerate() {
        if !settled[slot] {
            if let Some(v) = agreement[slot] {
                refined.pin(i, v);
            }
        }
    }
    Ok(refined.to_cells())
}
