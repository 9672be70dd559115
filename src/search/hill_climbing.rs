//! Steepest-ascent hill climbing over the swap neighborhood.
//!
//! Each iteration evaluates the full neighborhood of the current tour, picks
//! the best neighbor, and accepts it only if it is strictly shorter than the
//! current tour; otherwise the climb has reached a local optimum and stops.
//! The accepted length is therefore strictly decreasing, which also bounds
//! the number of iterations: the set of reachable lengths is finite.

use serde::{Deserialize, Serialize};

use crate::error::TspError;
use crate::matrix::DistanceMatrix;
use crate::search::neighborhood::{best_neighbor, SwapNeighborhood};
use crate::tour::Tour;

/// Lifecycle of a climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbState {
    /// Initial tour and length computed, no iteration run yet.
    Initialized,
    /// At least one iteration run, last best neighbor was accepted.
    Iterating,
    /// Local optimum reached; further steps are no-ops.
    Converged,
}

/// What a single iteration did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The best neighbor was strictly shorter and became the current tour.
    Accepted(f64),
    /// No strictly better neighbor exists; the climb is over.
    Converged,
}

/// Result of a finished climb, handed to the caller read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimbResult {
    /// The locally optimal tour.
    pub tour: Tour,
    /// Its closed-tour length.
    pub length: f64,
    /// Best-neighbor length recorded at every iteration, accepted or not.
    pub trajectory: Vec<f64>,
}

/// A hill climb in progress. Owns its current tour, current length, and
/// trajectory; the distance matrix is only borrowed and never written, so
/// independent climbs may share one matrix.
pub struct HillClimb<'a> {
    matrix: &'a DistanceMatrix,
    current: Tour,
    current_length: f64,
    trajectory: Vec<f64>,
    state: ClimbState,
}

impl<'a> HillClimb<'a> {
    /// Start a climb from an explicit initial tour, computing its length.
    pub fn new(matrix: &'a DistanceMatrix, initial: Tour) -> Result<Self, TspError> {
        let current_length = matrix.tour_length(&initial)?;
        Ok(HillClimb {
            matrix,
            current: initial,
            current_length,
            trajectory: Vec::new(),
            state: ClimbState::Initialized,
        })
    }

    #[inline]
    pub fn state(&self) -> ClimbState {
        self.state
    }

    /// The current tour.
    #[inline]
    pub fn current(&self) -> &Tour {
        &self.current
    }

    /// Length of the current tour.
    #[inline]
    pub fn current_length(&self) -> f64 {
        self.current_length
    }

    /// Best-neighbor lengths recorded so far.
    #[inline]
    pub fn trajectory(&self) -> &[f64] {
        &self.trajectory
    }

    /// Run one iteration: enumerate the swap neighborhood, select its best
    /// candidate, record that candidate's length, and accept it iff strictly
    /// shorter than the current tour.
    ///
    /// Tours of length <= 1 have an empty neighborhood, so the climb
    /// converges immediately without touching the selector. Stepping an
    /// already converged climb is a no-op returning `Converged`.
    pub fn step(&mut self) -> Result<StepOutcome, TspError> {
        if self.state == ClimbState::Converged {
            return Ok(StepOutcome::Converged);
        }
        if self.current.len() <= 1 {
            self.state = ClimbState::Converged;
            return Ok(StepOutcome::Converged);
        }

        self.state = ClimbState::Iterating;
        let (best, best_length) =
            best_neighbor(self.matrix, SwapNeighborhood::new(&self.current))?;
        self.trajectory.push(best_length);

        if best_length < self.current_length {
            self.current = best;
            self.current_length = best_length;
            Ok(StepOutcome::Accepted(best_length))
        } else {
            self.state = ClimbState::Converged;
            Ok(StepOutcome::Converged)
        }
    }

    /// Drive the climb to convergence and return the final tour, its length,
    /// and the full trajectory.
    pub fn run(mut self) -> Result<ClimbResult, TspError> {
        while self.step()? != StepOutcome::Converged {
            log::debug!(
                "iteration {}: accepted tour of length {:.4}",
                self.trajectory.len(),
                self.current_length
            );
        }
        Ok(ClimbResult {
            tour: self.current,
            length: self.current_length,
            trajectory: self.trajectory,
        })
    }
}

/// Climb from `initial` until no swap neighbor improves on the current tour.
pub fn hill_climb(matrix: &DistanceMatrix, initial: Tour) -> Result<ClimbResult, TspError> {
    HillClimb::new(matrix, initial)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0],
            vec![10.0, 0.0, 20.0],
            vec![15.0, 20.0, 0.0],
        ])
        .unwrap()
    }

    /// Symmetric random matrix with zero diagonal, seeded.
    fn random_matrix(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i + 1..n {
                let d: f64 = rng.gen_range(1.0..100.0);
                rows[i][j] = d;
                rows[j][i] = d;
            }
        }
        DistanceMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_triangle_converges_after_one_iteration() {
        // All neighbors of [0, 1, 2] on the triangle matrix have length 45,
        // the same as the tour itself, so no strict improvement exists.
        let matrix = triangle();
        let initial = Tour::from_cities(vec![0, 1, 2]).unwrap();
        let result = hill_climb(&matrix, initial.clone()).unwrap();
        assert_eq!(result.tour, initial);
        assert_eq!(result.length, 45.0);
        assert_eq!(result.trajectory, vec![45.0]);
    }

    #[test]
    fn test_empty_tour_climb() {
        let matrix = triangle();
        let result = hill_climb(&matrix, Tour::empty()).unwrap();
        assert!(result.tour.is_empty());
        assert_eq!(result.length, 0.0);
        assert!(result.trajectory.is_empty());
    }

    #[test]
    fn test_single_city_climb() {
        let matrix = triangle();
        let initial = Tour::from_cities(vec![0]).unwrap();
        let result = hill_climb(&matrix, initial.clone()).unwrap();
        assert_eq!(result.tour, initial);
        assert_eq!(result.length, 0.0);
        assert!(result.trajectory.is_empty());
    }

    #[test]
    fn test_state_machine_transitions() {
        let matrix = triangle();
        let initial = Tour::from_cities(vec![0, 1, 2]).unwrap();
        let mut climb = HillClimb::new(&matrix, initial).unwrap();
        assert_eq!(climb.state(), ClimbState::Initialized);
        assert_eq!(climb.step().unwrap(), StepOutcome::Converged);
        assert_eq!(climb.state(), ClimbState::Converged);
        // Stepping a converged climb changes nothing.
        assert_eq!(climb.step().unwrap(), StepOutcome::Converged);
        assert_eq!(climb.trajectory().len(), 1);
    }

    #[test]
    fn test_accepted_lengths_strictly_decrease() {
        let matrix = random_matrix(8, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let initial = Tour::random(8, &mut rng);
        let initial_length = matrix.tour_length(&initial).unwrap();

        let mut climb = HillClimb::new(&matrix, initial).unwrap();
        let mut previous = initial_length;
        loop {
            match climb.step().unwrap() {
                StepOutcome::Accepted(length) => {
                    assert!(length < previous, "{} not < {}", length, previous);
                    previous = length;
                }
                StepOutcome::Converged => break,
            }
        }
        assert!(climb.current_length() <= initial_length);
    }

    #[test]
    fn test_terminates_within_generous_cap() {
        for seed in 0..5u64 {
            let matrix = random_matrix(8, seed);
            let mut rng = ChaCha8Rng::seed_from_u64(seed + 100);
            let initial = Tour::random(8, &mut rng);
            let mut climb = HillClimb::new(&matrix, initial).unwrap();
            let mut iterations = 0;
            while climb.step().unwrap() != StepOutcome::Converged {
                iterations += 1;
                assert!(iterations < 10_000, "climb did not terminate");
            }
        }
    }

    #[test]
    fn test_reclimbing_converged_tour_is_idempotent() {
        let matrix = random_matrix(7, 21);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let initial = Tour::random(7, &mut rng);
        let first = hill_climb(&matrix, initial).unwrap();

        let second = hill_climb(&matrix, first.tour.clone()).unwrap();
        assert_eq!(second.tour, first.tour);
        assert_eq!(second.length, first.length);
        // One iteration whose best neighbor is no better than the optimum.
        assert_eq!(second.trajectory.len(), 1);
        assert!(second.trajectory[0] >= second.length);
    }

    #[test]
    fn test_trajectory_records_unaccepted_final_length() {
        let matrix = random_matrix(6, 9);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let initial = Tour::random(6, &mut rng);
        let result = hill_climb(&matrix, initial).unwrap();
        // The final entry is the best neighbor that failed to improve.
        let last = *result.trajectory.last().unwrap();
        assert!(last >= result.length);
        // Every earlier entry was accepted and strictly decreases.
        for pair in result.trajectory[..result.trajectory.len() - 1].windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_size_mismatch_surfaces_index_error() {
        let matrix = triangle();
        let initial = Tour::from_cities(vec![0, 1, 2, 3]).unwrap();
        let err = hill_climb(&matrix, initial).unwrap_err();
        assert!(matches!(err, TspError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_shared_matrix_across_independent_climbs() {
        let matrix = random_matrix(6, 42);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = hill_climb(&matrix, Tour::random(6, &mut rng)).unwrap();
        let b = hill_climb(&matrix, Tour::random(6, &mut rng)).unwrap();
        // Both climbs reach some local optimum on the same read-only matrix.
        assert!(a.length > 0.0);
        assert!(b.length > 0.0);
    }
}
