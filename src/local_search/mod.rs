//! Post-optimization local search.
//!
//! - [`two_opt_refine`] — deterministic per-route 2-opt, applied once
//!   after the annealing loop ends

mod two_opt;

pub use two_opt::two_opt_refine;
