//! Distance matrix representation and route evaluation.
//!
//! The matrix is the read-only input of the whole search: an N x N table of
//! pairwise distances, indexed by city identifier `0..N`. Construction
//! validates the shape once, so the optimizer only ever deals with a square
//! table; entries need not be symmetric and the diagonal is conventionally
//! zero but not enforced.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TspError;
use crate::tour::Tour;

/// A validated square matrix of pairwise city distances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
    dimension: usize,
}

impl DistanceMatrix {
    /// Build a matrix from raw rows, validating that the table is square and
    /// every entry is a finite number.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TspError> {
        let dimension = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(TspError::InvalidInput(format!(
                    "matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    dimension
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() {
                    return Err(TspError::InvalidInput(format!(
                        "distance [{}][{}] is not a finite number",
                        i, j
                    )));
                }
            }
        }
        Ok(DistanceMatrix { rows, dimension })
    }

    /// Parse a matrix from a JSON nested-list literal, e.g.
    /// `[[0, 400, 500], [400, 0, 300], [500, 300, 0]]`.
    pub fn from_json_str(input: &str) -> Result<Self, TspError> {
        let rows: Vec<Vec<f64>> = serde_json::from_str(input)?;
        Self::from_rows(rows)
    }

    /// Load a matrix from a file containing the JSON nested-list literal.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TspError> {
        let file = File::open(path)?;
        let rows: Vec<Vec<f64>> = serde_json::from_reader(BufReader::new(file))?;
        Self::from_rows(rows)
    }

    /// Number of cities.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Distance from city `i` to city `j`. Callers must pass indices below
    /// `dimension()`; tour evaluation goes through [`Self::tour_length`],
    /// which performs the bounds check.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Closed-tour length of a permutation: the sum over all cyclic adjacent
    /// pairs, including the wrap-around edge from the last city back to the
    /// first. Tours of length <= 1 have no edges and length 0.
    pub fn tour_length(&self, tour: &Tour) -> Result<f64, TspError> {
        let cities = tour.cities();
        for &city in cities {
            if city >= self.dimension {
                return Err(TspError::IndexOutOfRange {
                    city,
                    dimension: self.dimension,
                });
            }
        }
        if cities.len() <= 1 {
            return Ok(0.0);
        }

        let mut length = 0.0;
        for i in 0..cities.len() {
            let from = cities[(i + cities.len() - 1) % cities.len()];
            length += self.distance(from, cities[i]);
        }
        Ok(length)
    }

    /// Whether `distance(i, j) == distance(j, i)` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.dimension {
            for j in i + 1..self.dimension {
                if (self.rows[i][j] - self.rows[j][i]).abs() > 1e-9 {
                    return false;
                }
            }
        }
        true
    }

    /// Summary statistics for the `analyze` command.
    pub fn statistics(&self) -> MatrixStatistics {
        let n = self.dimension;
        let zero_diagonal = (0..n).all(|i| self.rows[i][i] == 0.0);

        let mut min_distance = f64::INFINITY;
        let mut max_distance = 0.0f64;
        let mut sum = 0.0;
        let mut count = 0usize;
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let d = self.rows[i][j];
                    min_distance = min_distance.min(d);
                    max_distance = max_distance.max(d);
                    sum += d;
                    count += 1;
                }
            }
        }
        let avg_distance = if count > 0 { sum / count as f64 } else { 0.0 };
        if count == 0 {
            min_distance = 0.0;
        }

        MatrixStatistics {
            dimension: n,
            symmetric: self.is_symmetric(),
            zero_diagonal,
            min_distance,
            avg_distance,
            max_distance,
        }
    }
}

/// Statistics about a distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixStatistics {
    pub dimension: usize,
    pub symmetric: bool,
    pub zero_diagonal: bool,
    pub min_distance: f64,
    pub avg_distance: f64,
    pub max_distance: f64,
}

impl std::fmt::Display for MatrixStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matrix: {} cities", self.dimension)?;
        writeln!(f, "  Symmetric: {}", self.symmetric)?;
        writeln!(f, "  Zero diagonal: {}", self.zero_diagonal)?;
        writeln!(f, "  Min off-diagonal distance: {:.2}", self.min_distance)?;
        writeln!(f, "  Avg off-diagonal distance: {:.2}", self.avg_distance)?;
        writeln!(f, "  Max off-diagonal distance: {:.2}", self.max_distance)
    }
}
