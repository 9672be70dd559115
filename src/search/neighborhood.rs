//! Pairwise-swap neighborhood enumeration and best-neighbor selection.
//!
//! The neighborhood of a tour is every tour reachable by exchanging the
//! cities at exactly two positions: C(n,2) = n(n-1)/2 candidates. Enumeration
//! order is fixed (outer position ascending, inner position ascending) because
//! the selector's tie-break depends on it.

use crate::error::TspError;
use crate::matrix::DistanceMatrix;
use crate::tour::Tour;

/// Lazy iterator over all single-transposition neighbors of a tour.
///
/// Yields `tour.swapped(i, j)` for every pair of positions `i < j`, with `i`
/// ascending in the outer loop and `j` ascending in the inner loop. Empty for
/// tours of length <= 1. The input tour is never mutated.
pub struct SwapNeighborhood<'a> {
    tour: &'a Tour,
    i: usize,
    j: usize,
}

impl<'a> SwapNeighborhood<'a> {
    pub fn new(tour: &'a Tour) -> Self {
        SwapNeighborhood { tour, i: 0, j: 1 }
    }

    /// Number of candidates this neighborhood will yield: n(n-1)/2.
    pub fn size(&self) -> usize {
        let n = self.tour.len();
        n.saturating_sub(1) * n / 2
    }
}

impl Iterator for SwapNeighborhood<'_> {
    type Item = Tour;

    fn next(&mut self) -> Option<Tour> {
        let n = self.tour.len();
        if self.j >= n {
            self.i += 1;
            self.j = self.i + 1;
        }
        if self.j >= n {
            return None;
        }
        let neighbor = self.tour.swapped(self.i, self.j);
        self.j += 1;
        Some(neighbor)
    }
}

/// Scan a neighborhood and return the shortest candidate with its length.
///
/// Comparison is strict `<`, so the first candidate achieving the minimum in
/// enumeration order wins. That tie-break is part of the contract: it keeps
/// trajectories deterministic and reproducible. Returns
/// [`TspError::EmptyNeighborhood`] when there is no candidate at all, which
/// only happens for tours of length <= 1.
pub fn best_neighbor<I>(matrix: &DistanceMatrix, neighborhood: I) -> Result<(Tour, f64), TspError>
where
    I: IntoIterator<Item = Tour>,
{
    let mut best: Option<(Tour, f64)> = None;
    for candidate in neighborhood {
        let length = matrix.tour_length(&candidate)?;
        match best {
            Some((_, best_length)) if length < best_length => {
                best = Some((candidate, length));
            }
            None => best = Some((candidate, length)),
            _ => {}
        }
    }
    best.ok_or(TspError::EmptyNeighborhood)
}
