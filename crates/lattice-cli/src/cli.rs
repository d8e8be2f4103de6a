use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use lattice_core::STRETCH;
use lattice_paths::DEFAULT_BARRIER;

/// Largest accepted `--stretch`.
pub const MAX_STRETCH: i64 = 100;

/// Solve grid puzzles read from a block of digits.
#[derive(Debug, Parser)]
#[command(name = "lattice", version, about)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lowest total risk from the top-left to the bottom-right corner.
    Risk {
        input_path: PathBuf,
        /// Tile the grid 5 times in each direction first.
        #[arg(long)]
        extended: bool,
        /// Tiling factor (1-100); implies --extended.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_STRETCH))]
        stretch: Option<u32>,
    },
    /// Sum of the risk levels (height + 1) of all low points.
    LowPoints { input_path: PathBuf },
    /// Product of the sizes of the largest regions.
    Basins {
        input_path: PathBuf,
        /// Cell value separating regions.
        #[arg(long, default_value_t = DEFAULT_BARRIER)]
        barrier: u32,
        /// How many of the largest regions to multiply.
        #[arg(long, default_value_t = 3)]
        top: usize,
    },
}

impl Command {
    pub fn input_path(&self) -> &PathBuf {
        match self {
            Self::Risk { input_path, .. }
            | Self::LowPoints { input_path }
            | Self::Basins { input_path, .. } => input_path,
        }
    }
}

/// Tiling factor selected by `--extended` / `--stretch`.
pub fn stretch_factor(extended: bool, stretch: Option<u32>) -> u32 {
    match (extended, stretch) {
        (_, Some(s)) => s,
        (true, None) => STRETCH,
        (false, None) => 1,
    }
}
