//! Climb reports and export for downstream rendering.
//!
//! A report bundles everything the presentation side needs: the initial and
//! final tours with their lengths (comparison rendering), the per-iteration
//! best-neighbor trajectory (distribution rendering), and run metadata.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TspError;
use crate::search::ClimbResult;
use crate::tour::Tour;

/// Full record of one hill-climbing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimbReport {
    /// Algorithm identifier, for downstream labeling.
    pub algorithm: String,
    /// Number of cities.
    pub dimension: usize,
    /// Seed the initial tour was drawn with, if it was random.
    pub seed: Option<u64>,
    /// The starting tour.
    pub initial_tour: Tour,
    /// Length of the starting tour.
    pub initial_length: f64,
    /// The locally optimal tour the climb ended on.
    pub final_tour: Tour,
    /// Length of the final tour.
    pub final_length: f64,
    /// Best-neighbor length per iteration.
    pub trajectory: Vec<f64>,
    /// Iterations run (accepted steps plus the final rejected one).
    pub iterations: usize,
    /// Wall-clock time of the climb in seconds.
    pub computation_time: f64,
}

/// One trajectory row, serialized for CSV export.
#[derive(Debug, Serialize)]
struct TrajectoryRow {
    iteration: usize,
    best_neighbor_length: f64,
}

impl ClimbReport {
    pub fn new(
        initial_tour: Tour,
        initial_length: f64,
        result: ClimbResult,
        seed: Option<u64>,
        computation_time: f64,
    ) -> Self {
        ClimbReport {
            algorithm: "steepest-hill-climbing-swap".to_string(),
            dimension: initial_tour.len(),
            seed,
            initial_tour,
            initial_length,
            final_tour: result.tour,
            final_length: result.length,
            iterations: result.trajectory.len(),
            trajectory: result.trajectory,
            computation_time,
        }
    }

    /// Write the full report as pretty-printed JSON.
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), TspError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Export the trajectory to CSV, one row per iteration.
    pub fn export_trajectory_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), TspError> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);

        for (i, &length) in self.trajectory.iter().enumerate() {
            writer.serialize(TrajectoryRow {
                iteration: i + 1,
                best_neighbor_length: length,
            })?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for ClimbReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Climb ({})", self.algorithm)?;
        writeln!(f, "  Cities: {}", self.dimension)?;
        if let Some(seed) = self.seed {
            writeln!(f, "  Seed: {}", seed)?;
        }
        writeln!(f, "  Initial tour: {}", self.initial_tour)?;
        writeln!(f, "  Initial length: {:.2}", self.initial_length)?;
        writeln!(f, "  Final tour: {}", self.final_tour)?;
        writeln!(f, "  Final length: {:.2}", self.final_length)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Time: {:.4}s", self.computation_time)
    }
}
