//! Search module for the TSP hill climber.
//!
//! This module exports the swap neighborhood and the hill-climbing controller.

pub mod hill_climbing;
pub mod neighborhood;

pub use hill_climbing::*;
pub use neighborhood::*;
