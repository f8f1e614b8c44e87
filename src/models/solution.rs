//! Route partition with cached cost.

use serde::{Deserialize, Serialize};

/// A solution: one ordered client sequence per vehicle, plus a cached cost.
///
/// The outer container is fixed at the fleet size; route index = vehicle
/// index, and an empty route is an unused vehicle. Every route implicitly
/// starts and ends at the depot, which is never stored. A well-formed
/// solution assigns each client to exactly one position across all routes.
///
/// `Clone` is a deep copy. Candidate generation relies on that: clone,
/// mutate, validate, then keep or discard — the original is never touched.
///
/// The cached cost is only trustworthy immediately after an explicit
/// recomputation ([`recompute`](crate::evaluation::CostEvaluator::recompute));
/// mutating a route does not invalidate it.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Solution;
///
/// let mut sol = Solution::empty(2);
/// sol.routes_mut()[0].push(1);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.vehicles_used(), 1);
/// assert_eq!(sol.route(0), &[1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Vec<usize>>,
    cost: f64,
}

impl Solution {
    /// Creates a solution with `num_vehicles` empty routes and infinite cost.
    pub fn empty(num_vehicles: usize) -> Self {
        Self {
            routes: vec![Vec::new(); num_vehicles],
            cost: f64::INFINITY,
        }
    }

    /// The routes, indexed by vehicle.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Mutable access to the routes.
    ///
    /// Returned as a slice: routes can be reordered and edited, but the
    /// outer container stays sized to the fleet.
    pub fn routes_mut(&mut self) -> &mut [Vec<usize>] {
        &mut self.routes
    }

    /// The route of one vehicle.
    pub fn route(&self, vehicle: usize) -> &[usize] {
        &self.routes[vehicle]
    }

    /// Number of route slots (= fleet size).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of non-empty routes.
    pub fn vehicles_used(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total number of clients assigned across all routes.
    pub fn num_assigned(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// The cached cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Overwrites the cached cost.
    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }
}
