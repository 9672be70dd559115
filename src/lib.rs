//! TSP Hill Climber Library
//!
//! An approximate Travelling Salesman Problem solver using steepest-ascent
//! hill climbing over pairwise-swap neighborhoods.
//!
//! # Features
//!
//! - Validated distance matrices loaded from JSON nested-list literals
//! - Uniform random tour generation with an injectable, seedable RNG
//! - Closed-tour route evaluation (including the wrap-around edge)
//! - Lazy enumeration of the full swap neighborhood
//! - Deterministic best-neighbor selection (first minimum wins on ties)
//! - An explicit state-machine hill-climbing controller with a per-iteration
//!   trajectory of best-neighbor lengths
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tsp_hill_climber::matrix::DistanceMatrix;
//! use tsp_hill_climber::search::hill_climb;
//! use tsp_hill_climber::tour::Tour;
//!
//! let matrix = DistanceMatrix::from_json_str(
//!     "[[0, 400, 500], [400, 0, 300], [500, 300, 0]]",
//! ).unwrap();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let initial = Tour::random(matrix.dimension(), &mut rng);
//!
//! let result = hill_climb(&matrix, initial).unwrap();
//! println!("Locally optimal length: {:.2}", result.length);
//! ```

pub mod error;
pub mod matrix;
pub mod report;
pub mod search;
pub mod tour;

pub use error::TspError;
pub use matrix::DistanceMatrix;
pub use search::{hill_climb, ClimbResult, HillClimb};
pub use tour::Tour;
