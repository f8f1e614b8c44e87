//! Randomized neighborhood moves for the annealing loop.
//!
//! - [`NeighborhoodGenerator`] — one random Swap or Relocate per call,
//!   infeasible candidates rejected rather than repaired

mod generator;

pub use generator::NeighborhoodGenerator;
