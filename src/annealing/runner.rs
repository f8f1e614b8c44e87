//! Annealing execution loop.

use super::config::AnnealingConfig;
use super::error::SolverError;
use super::listener::{NopListener, ProgressListener};
use crate::constructive::nearest_neighbor;
use crate::local_search::two_opt_refine;
use crate::models::{ProblemData, Solution};
use crate::neighborhood::NeighborhoodGenerator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why the annealing loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The temperature cooled down to the final temperature.
    TemperatureExhausted,
    /// No new best for `stagnation_limit` consecutive iterations.
    Stagnation,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// Best solution found, after 2-opt refinement.
    pub best: Solution,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Total inner iterations executed.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Why the loop stopped.
    pub termination: Termination,
}

/// Runs the simulated-annealing search for one problem instance.
///
/// Construction, the cooling loop, and refinement execute as one
/// sequential computation; `best` and `current` are owned here and never
/// shared. The run is safe to host on a worker thread while a consumer
/// observes progress through the listener.
///
/// # Examples
///
/// ```
/// use u_cvrp::annealing::{Annealer, AnnealingConfig};
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::ProblemData;
///
/// let points = [(0.0, 0.0), (0.0, 5.0), (5.0, 0.0), (5.0, 5.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let data = ProblemData::new(2, 10, dm, vec![4, 4, 4]).unwrap();
///
/// let config = AnnealingConfig::default().with_seed(7);
/// let result = Annealer::new(&data, config).run().unwrap();
/// assert!(result.best_cost.is_finite());
/// assert_eq!(result.best.num_assigned(), 3);
/// ```
pub struct Annealer<'a> {
    data: &'a ProblemData,
    config: AnnealingConfig,
}

impl<'a> Annealer<'a> {
    /// Creates an annealer over the given instance and schedule.
    pub fn new(data: &'a ProblemData, config: AnnealingConfig) -> Self {
        Self { data, config }
    }

    /// Runs without progress reporting or cancellation.
    pub fn run(&self) -> Result<AnnealingResult, SolverError> {
        self.run_with_cancel(&mut NopListener, None)
    }

    /// Runs with a progress listener.
    pub fn run_with_listener(
        &self,
        listener: &mut dyn ProgressListener,
    ) -> Result<AnnealingResult, SolverError> {
        self.run_with_cancel(listener, None)
    }

    /// Runs with a listener and an optional cancellation flag.
    ///
    /// The flag is checked once per temperature step; once raised, the
    /// loop stops with [`Termination::Cancelled`] and the best solution
    /// found so far is still refined and returned.
    pub fn run_with_cancel(
        &self,
        listener: &mut dyn ProgressListener,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealingResult, SolverError> {
        self.config.validate().map_err(SolverError::Configuration)?;

        // Fail fast before any construction work: the fleet as a whole
        // cannot carry the demand, so no search could succeed.
        let total_demand = self.data.total_demand();
        let fleet_capacity = self.data.fleet_capacity();
        if total_demand > fleet_capacity {
            return Err(SolverError::InsufficientFleetCapacity {
                total_demand,
                fleet_capacity,
                min_vehicles: self.data.min_vehicles_needed(),
            });
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let generator = NeighborhoodGenerator::new(self.data);

        let mut current = nearest_neighbor(self.data);
        let mut best = current.clone();
        listener.on_solution_changed(&best);

        let mut temperature = self.config.initial_temperature;
        let mut iteration = 0usize;
        let mut stagnation = 0usize;
        let mut cancelled = false;

        while temperature > self.config.final_temperature
            && stagnation < self.config.stagnation_limit
        {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            for _ in 0..self.config.iterations_per_temperature {
                iteration += 1;
                stagnation += 1;

                if let Some(candidate) = generator.neighbor(&current, &mut rng) {
                    let delta = candidate.cost() - current.cost();
                    let accept = delta < 0.0
                        || (-delta / temperature).exp() > rng.random_range(0.0..1.0);

                    if accept {
                        current = candidate;

                        if current.cost() < best.cost() {
                            best = current.clone();
                            stagnation = 0;
                            listener.on_new_best(
                                iteration,
                                best.cost(),
                                temperature,
                                best.vehicles_used(),
                            );
                            listener.on_solution_changed(&best);
                        }
                    }
                }

                if iteration.is_multiple_of(self.config.report_interval) {
                    listener.on_periodic_update(
                        iteration,
                        temperature,
                        best.cost(),
                        best.vehicles_used(),
                    );
                    listener.on_solution_changed(&best);
                }
            }

            temperature *= self.config.cooling_factor;
        }

        let termination = if cancelled {
            Termination::Cancelled
        } else if temperature <= self.config.final_temperature {
            Termination::TemperatureExhausted
        } else {
            Termination::Stagnation
        };

        let best = two_opt_refine(self.data, &best);
        listener.on_solution_changed(&best);

        Ok(AnnealingResult {
            best_cost: best.cost(),
            best,
            iterations: iteration,
            final_temperature: temperature,
            termination,
        })
    }
}
