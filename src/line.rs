//! The line enumerator (C2, `spec.md` §4.3).
//!
//! Generalizes `thblt-nonograms.rs/src/solver.rs`'s
//! `candidates`/`make_candidates`/`into_mask` (a blanks-distribution
//! recursion producing every fill for a clue) to `bitvec`-backed
//! `Fill`s, and adds the `(len, clue)`-keyed cache the Design Notes
//! (`spec.md` §9) call for: candidates are computed mask-free and
//! cached, then filtered against whatever `Mask` the caller supplies
//! (the "cached-unfiltered-then-filter" strategy §4.3 explicitly
//! sanctions as conforming).

use std::collections::HashMap;

use bitvec::prelude::*;

use crate::clue::{is_empty_clue, is_feasible, Clue};
use crate::grid::{Fill, Mask};

/// Cache of mask-free fill sets, keyed by `(line length, clue)`. Owned
/// by a single top-level `solve` call and dropped with it (the
/// "arena-reset per top-level solve" strategy from `spec.md` §9).
pub type LineCache = HashMap<(usize, Clue), Vec<Fill>>;

/// Every length-`len` fill realizing `clue`, regardless of `Mask`. Empty
/// if `clue` is infeasible for `len`.
pub fn candidates(clue: &Clue, len: usize) -> Vec<Fill> {
    if is_empty_clue(clue) {
        return vec![bitvec![u64, Lsb0; 0; len]];
    }
    if !is_feasible(clue, len) {
        return vec![];
    }

    let occupied: usize = clue.iter().map(|&n| n as usize).sum();
    let blanks = len - occupied;
    let gap_count = clue.len() + 1;

    let mut gap_distributions = Vec::new();
    let mut base = Vec::with_capacity(gap_count);
    distribute_blanks(blanks, 1, gap_count, &mut base, &mut gap_distributions);

    gap_distributions
        .into_iter()
        .map(|gaps| build_fill(&gaps, clue, len))
        .collect()
}

/// Candidates consistent with `mask`, using the `(len, clue)` cache.
pub fn enumerate(cache: &mut LineCache, clue: &Clue, len: usize, mask: &Mask) -> Vec<Fill> {
    let key = (len, clue.clone());
    let all = cache
        .entry(key)
        .or_insert_with(|| candidates(clue, len))
        .clone();
    all.into_iter().filter(|f| mask.accepts(f)).collect()
}

/// Recursively distributes `blanks` blank cells across `gap_count`
/// regions before/between/after the runs of a clue. The first and last
/// region may be empty; every region between two runs needs at least
/// one blank to separate them.
fn distribute_blanks(
    blanks: usize,
    nth_gap: usize,
    gap_count: usize,
    base: &mut Vec<usize>,
    results: &mut Vec<Vec<usize>>,
) {
    if nth_gap > gap_count {
        if blanks == 0 {
            results.push(base.clone());
        }
        return;
    }

    let min = if nth_gap == 1 || nth_gap == gap_count {
        0
    } else {
        1
    };

    for i in min..=blanks {
        base.push(i);
        distribute_blanks(blanks - i, nth_gap + 1, gap_count, base, results);
        base.pop();
    }
}

fn build_fill(gaps: &[usize], clue: &[u32], len: usize) -> Fill {
    let mut fill: Fill = bitvec![u64, Lsb0; 0; len];
    let mut pos = 0usize;
    for (i, &gap) in gaps.iter().enumerate() {
        pos += gap;
        if i < clue.len() {
            let run = clue[i] as usize;
            fill[pos..pos + run].fill(true);
            pos += run;
        }
    }
    fill
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fills_to_strings(fills: &[Fill]) -> Vec<String> {
        fills
            .iter()
            .map(|f| f.iter().map(|b| if *b { '1' } else { '0' }).collect())
            .collect()
    }

    #[test]
    fn single_run_enumerates_all_positions() {
        let fills = candidates(&vec![2], 4);
        assert_eq!(fills_to_strings(&fills), vec!["1100", "0110", "0011"]);
    }

    #[test]
    fn empty_clue_yields_all_zero_fill() {
        let fills = candidates(&vec![0], 5);
        assert_eq!(fills_to_strings(&fills), vec!["00000"]);
    }

    #[test]
    fn infeasible_clue_yields_nothing() {
        assert!(candidates(&vec![6], 5).is_empty());
    }

    #[test]
    fn two_runs_require_a_separating_gap() {
        let fills = candidates(&vec![1, 2], 5);
        assert_eq!(fills_to_strings(&fills), vec!["10110", "10011", "01011"]);
    }
}
