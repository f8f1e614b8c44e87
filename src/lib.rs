//! # u-cvrp
//!
//! Capacitated vehicle routing by simulated annealing.
//!
//! One depot, a homogeneous fleet, clients with demands: the engine builds
//! a greedy nearest-neighbor seed, improves it with randomized
//! Swap/Relocate moves under a Metropolis acceptance rule with geometric
//! cooling, and finally polishes each route with deterministic 2-opt.
//! Infeasible candidates are rejected outright, never repaired or
//! penalized. The search is a heuristic: it returns the best solution
//! found within its stopping budget, not a proven optimum.
//!
//! ## Modules
//!
//! - [`models`] — Problem data and route-partition solution
//! - [`distance`] — Dense distance matrix
//! - [`evaluation`] — Cost and capacity feasibility evaluation
//! - [`constructive`] — Nearest-neighbor initial construction
//! - [`neighborhood`] — Randomized Swap/Relocate candidate generation
//! - [`local_search`] — Per-route 2-opt refinement
//! - [`annealing`] — Annealing controller, configuration, progress
//!   listener, and errors
//!
//! ## Example
//!
//! ```
//! use u_cvrp::annealing::{Annealer, AnnealingConfig};
//! use u_cvrp::distance::DistanceMatrix;
//! use u_cvrp::models::ProblemData;
//!
//! let points = [(0.0, 0.0), (0.0, 5.0), (5.0, 0.0), (5.0, 5.0)];
//! let distances = DistanceMatrix::from_points(&points);
//! let data = ProblemData::new(2, 10, distances, vec![4, 4, 4]).unwrap();
//!
//! let config = AnnealingConfig::default().with_seed(7);
//! let result = Annealer::new(&data, config).run().unwrap();
//! assert_eq!(result.best.num_assigned(), 3);
//! ```

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod neighborhood;
