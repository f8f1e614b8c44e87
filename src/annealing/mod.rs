//! Simulated annealing controller.
//!
//! Wires construction, neighborhood search, and refinement into the
//! cooling loop: build a greedy seed, walk randomized moves under the
//! Metropolis acceptance rule while the temperature decays geometrically,
//! stop on temperature or stagnation exhaustion, then polish the best
//! solution with 2-opt. Progress goes to a [`ProgressListener`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod error;
mod listener;
mod runner;

pub use config::AnnealingConfig;
pub use error::SolverError;
pub use listener::{ChannelListener, NopListener, ProgressEvent, ProgressListener};
pub use runner::{Annealer, AnnealingResult, Termination};
