//! The adapter (C6, `spec.md` §4.7): mutates a grid toward a
//! unique-solution puzzle.
//!
//! Follows `original_source/adapt_puzzle.py`
//! (`adapt_grid_for_unique_solution`) almost verbatim for control flow;
//! the uniform random pick over differing cells is adapted from the
//! `rand`-based nonogram generator in
//! `examples/other_examples/34cfa7cf_artik02-ngram__src-nonogram-genetic.rs.rs`.

use rand::Rng;

use crate::clue::extract;
use crate::grid::Grid;
use crate::solve::{solve, SolveOptions};

/// Attempts, within `max_attempts` iterations, to mutate `grid` until
/// its induced clues admit exactly one solution. Returns the
/// (possibly-mutated) grid and whether uniqueness was achieved.
///
/// `rng` must be seedable for reproducible tests (`spec.md` §5/§9); use
/// `rand::rngs::StdRng::seed_from_u64` in tests and a fresh
/// `rand::thread_rng()` otherwise.
pub fn adapt(mut grid: Grid, max_attempts: usize, rng: &mut impl Rng) -> (Grid, bool) {
    for attempt in 0..max_attempts {
        let (rows, cols) = extract(&grid);
        let solutions = match solve(&rows, &cols, SolveOptions { k: two() }) {
            Ok(s) => s,
            Err(_) => unreachable!("clues extracted from a grid are always well-formed"),
        };

        match solutions.len() {
            0 => {
                tracing::debug!(attempt, "adapter found zero solutions, degenerate input");
                return (grid, false);
            }
            1 => {
                tracing::debug!(attempt, "adapter converged to a unique solution");
                return (grid, true);
            }
            _ => {}
        }

        let a = &solutions[0];
        let b = &solutions[1];
        let target = pick_target(&grid, a, b);

        let diff_cells: Vec<(usize, usize)> = (0..grid.width())
            .flat_map(|x| (0..grid.height()).map(move |y| (x, y)))
            .filter(|&(x, y)| grid[(x, y)] != target[(x, y)])
            .collect();

        if diff_cells.is_empty() {
            tracing::debug!(attempt, "no differing cell to flip, stopping");
            return (grid, false);
        }

        let (x, y) = diff_cells[rng.gen_range(0..diff_cells.len())];
        grid[(x, y)] = target[(x, y)];
        tracing::debug!(attempt, x, y, "adapter flipped a cell");
    }

    (grid, false)
}

/// Convenience wrapper for callers that don't need reproducibility.
pub fn adapt_with_entropy(grid: Grid, max_attempts: usize) -> (Grid, bool) {
    let mut rng = rand::thread_rng();
    adapt(grid, max_attempts, &mut rng)
}

fn two() -> std::num::NonZeroUsize {
    std::num::NonZeroUsize::new(2).unwrap()
}

/// Chooses which of the two current solutions to flip toward
/// (`spec.md` §4.7 step 5): whichever differs from `grid`, or whichever
/// differs *more* if both do, ties toward `a`.
fn pick_target<'a>(grid: &Grid, a: &'a Grid, b: &'a Grid) -> &'a Grid {
    let a_matches = a == grid;
    let b_matches = b == grid;
    if a_matches {
        return b;
    }
    if b_matches {
        return a;
    }
    if hamming_distance(grid, a) >= hamming_distance(grid, b) {
        a
    } else {
        b
    }
}

fn hamming_distance(g: &Grid, other: &Grid) -> usize {
    (0..g.width())
        .flat_map(|x| (0..g.height()).map(move |y| (x, y)))
        .filter(|&(x, y)| g[(x, y)] != other[(x, y)])
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Main-diagonal 2x2: induces `rows = cols = [[1], [1]]`, which has
    /// two solutions (main and anti diagonal), the minimal ambiguous
    /// puzzle of `spec.md` §8, expressed as a grid that is itself one
    /// of the two solutions.
    fn ambiguous_diagonal() -> Grid {
        Grid::from_bits(2, 2, [true, false, false, true])
    }

    #[test]
    fn adapter_converges_on_ambiguous_2x2() {
        let grid = ambiguous_diagonal();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let (result, unique) = adapt(grid, 200, &mut rng);
        assert!(unique);
        let (rows, cols) = extract(&result);
        let solutions = solve(&rows, &cols, SolveOptions { k: two() }).unwrap();
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn adapter_is_a_no_op_on_already_unique_grid() {
        let grid = Grid::from_bits(3, 3, [true; 9]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let (result, unique) = adapt(grid.clone(), 10, &mut rng);
        assert!(unique);
        assert_eq!(result, grid);
    }

    #[test]
    fn adapter_makes_progress_each_non_terminal_iteration() {
        // The grid is ambiguous and is itself one of the two solutions:
        // the adapter must flip at least one cell on its first attempt.
        let grid = ambiguous_diagonal();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let (result, _unique) = adapt(grid.clone(), 1, &mut rng);
        assert_ne!(result, grid);
    }

    #[test]
    fn pick_target_prefers_farther_solution_when_neither_matches() {
        let grid = Grid::from_bits(2, 2, [false, false, false, false]);
        let a = Grid::from_bits(2, 2, [true, false, false, false]);
        let b = Grid::from_bits(2, 2, [true, true, false, false]);
        let target = pick_target(&grid, &a, &b);
        assert_eq!(target, &b);
    }
}
