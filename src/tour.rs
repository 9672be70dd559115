//! Tour (permutation) representation and random solution generation.
//!
//! A tour is an ordered sequence of distinct city indices, used cyclically:
//! the route returns from the last city to the first. Tours are immutable
//! once built; every transformation produces a new tour.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::TspError;

/// A permutation of the cities `0..n`, interpreted as a cyclic visiting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// The empty tour (zero cities).
    pub fn empty() -> Self {
        Tour { cities: Vec::new() }
    }

    /// Build a tour from an explicit city sequence, validating that it is a
    /// permutation of `0..n`: every index in range, each exactly once.
    pub fn from_cities(cities: Vec<usize>) -> Result<Self, TspError> {
        let n = cities.len();
        let mut seen = vec![false; n];
        for &city in &cities {
            if city >= n {
                return Err(TspError::InvalidInput(format!(
                    "city {} out of range for a {}-city tour",
                    city, n
                )));
            }
            if seen[city] {
                return Err(TspError::InvalidInput(format!(
                    "city {} appears more than once in the tour",
                    city
                )));
            }
            seen[city] = true;
        }
        Ok(Tour { cities })
    }

    /// Draw a tour uniformly at random over all permutations of `0..n`,
    /// consuming entropy only from the supplied generator. A Fisher-Yates
    /// shuffle keeps generation O(n).
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut cities: Vec<usize> = (0..n).collect();
        cities.shuffle(rng);
        Tour { cities }
    }

    /// Number of cities in the tour.
    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The visiting order as a slice.
    #[inline]
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// A new tour with the cities at positions `i` and `j` exchanged. The
    /// receiver is left untouched.
    pub fn swapped(&self, i: usize, j: usize) -> Tour {
        let mut cities = self.cities.clone();
        cities.swap(i, j);
        Tour { cities }
    }

    /// Consume the tour, yielding the underlying city sequence.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in [0usize, 1, 2, 5, 8, 13] {
            let tour = Tour::random(n, &mut rng);
            assert_eq!(tour.len(), n);
            let mut seen = vec![false; n];
            for &city in tour.cities() {
                assert!(city < n);
                assert!(!seen[city], "city {} drawn twice for n={}", city, n);
                seen[city] = true;
            }
        }
    }

    #[test]
    fn test_random_is_deterministic_under_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(Tour::random(10, &mut a), Tour::random(10, &mut b));
    }

    #[test]
    fn test_from_cities_rejects_duplicates() {
        let err = Tour::from_cities(vec![0, 1, 1]).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput(_)));
    }

    #[test]
    fn test_from_cities_rejects_out_of_range() {
        let err = Tour::from_cities(vec![0, 3, 1]).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput(_)));
    }

    #[test]
    fn test_swapped_leaves_original_untouched() {
        let tour = Tour::from_cities(vec![0, 1, 2, 3]).unwrap();
        let swapped = tour.swapped(1, 3);
        assert_eq!(tour.cities(), &[0, 1, 2, 3]);
        assert_eq!(swapped.cities(), &[0, 3, 2, 1]);
    }
}
