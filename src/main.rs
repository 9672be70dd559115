//! TSP Hill Climber - Command Line Interface
//!
//! Loads a distance matrix, runs steepest-ascent hill climbing from a random
//! initial tour, and prints or exports the results.

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tsp_hill_climber::matrix::DistanceMatrix;
use tsp_hill_climber::report::ClimbReport;
use tsp_hill_climber::search::hill_climb;
use tsp_hill_climber::tour::Tour;
use tsp_hill_climber::TspError;

use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tsp-hill-climber")]
#[command(author = "M2 AI2D Student")]
#[command(version = "1.0")]
#[command(about = "An approximate TSP solver via steepest-ascent hill climbing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run hill climbing on a distance matrix
    Solve {
        /// Path to a JSON nested-list distance matrix,
        /// e.g. [[0, 400, 500], [400, 0, 300], [500, 300, 0]]
        #[arg(short, long)]
        matrix: PathBuf,

        /// Random seed for the initial tour
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Write the full report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the per-iteration trajectory as CSV
        #[arg(short, long)]
        trajectory: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print statistics about a distance matrix
    Analyze {
        /// Path to a JSON nested-list distance matrix
        #[arg(short, long)]
        matrix: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Solve { matrix, seed, output, trajectory, verbose } => {
            solve(&matrix, seed, output, trajectory, verbose)
        }
        Commands::Analyze { matrix } => analyze(&matrix),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn solve(
    path: &PathBuf,
    seed: u64,
    output: Option<PathBuf>,
    trajectory: Option<PathBuf>,
    verbose: bool,
) -> Result<(), TspError> {
    log::info!("loading distance matrix from {:?}", path);
    let matrix = DistanceMatrix::from_json_file(path)?;

    if verbose {
        println!("{}", matrix.statistics());
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let initial = Tour::random(matrix.dimension(), &mut rng);
    let initial_length = matrix.tour_length(&initial)?;

    println!("Initial random tour: {}", initial);
    println!("Initial route length: {:.2}", initial_length);

    let start = Instant::now();
    let result = hill_climb(&matrix, initial.clone())?;
    let elapsed = start.elapsed().as_secs_f64();

    log::info!(
        "converged after {} iterations in {:.4}s",
        result.trajectory.len(),
        elapsed
    );

    println!("Best tour after hill climbing: {}", result.tour);
    println!("Best route length: {:.2}", result.length);
    println!("Iterations: {}", result.trajectory.len());

    let report = ClimbReport::new(initial, initial_length, result, Some(seed), elapsed);

    if verbose {
        println!();
        print!("{}", report);
    }

    if let Some(out) = output {
        report.export_json(&out)?;
        println!("Report written to {:?}", out);
    }

    if let Some(traj) = trajectory {
        report.export_trajectory_csv(&traj)?;
        println!("Trajectory written to {:?}", traj);
    }

    Ok(())
}

fn analyze(path: &PathBuf) -> Result<(), TspError> {
    let matrix = DistanceMatrix::from_json_file(path)?;
    print!("{}", matrix.statistics());
    Ok(())
}
