//! Cost and feasibility evaluation.

use crate::models::{ProblemData, Solution};

/// Computes route distances, loads, and capacity feasibility for solutions
/// of one problem instance.
///
/// Evaluation is pure: nothing here mutates a solution except the explicit
/// [`recompute`](CostEvaluator::recompute), which is the only operation
/// that makes a cached cost trustworthy again after a mutation.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::evaluation::CostEvaluator;
/// use u_cvrp::models::{ProblemData, Solution};
///
/// let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
/// let data = ProblemData::new(1, 10, DistanceMatrix::from_points(&points), vec![4, 4]).unwrap();
///
/// let mut sol = Solution::empty(1);
/// sol.routes_mut()[0].extend([1, 2]);
///
/// let evaluator = CostEvaluator::new(&data);
/// evaluator.recompute(&mut sol);
/// // 0 -> 1 -> 2 -> 0
/// assert!((sol.cost() - 4.0).abs() < 1e-10);
/// assert!(evaluator.is_feasible(&sol));
/// ```
pub struct CostEvaluator<'a> {
    data: &'a ProblemData,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator for the given problem data.
    pub fn new(data: &'a ProblemData) -> Self {
        Self { data }
    }

    /// Total travelled distance of a solution.
    ///
    /// Sums every non-empty route's depot-to-depot distance; empty routes
    /// contribute zero. O(assigned clients).
    pub fn cost(&self, solution: &Solution) -> f64 {
        solution
            .routes()
            .iter()
            .map(|route| self.route_distance(route))
            .sum()
    }

    /// Distance of a single route: depot → clients in order → depot.
    pub fn route_distance(&self, route: &[usize]) -> f64 {
        if route.is_empty() {
            return 0.0;
        }
        let depot = self.data.depot();
        let mut dist = self.data.distance(depot, route[0]);
        for pair in route.windows(2) {
            dist += self.data.distance(pair[0], pair[1]);
        }
        dist + self.data.distance(route[route.len() - 1], depot)
    }

    /// Total demand carried on a route.
    pub fn route_load(&self, route: &[usize]) -> i32 {
        route.iter().map(|&client| self.data.demand(client)).sum()
    }

    /// Returns `true` if no route's load exceeds the vehicle capacity.
    ///
    /// Stops at the first violating route.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        solution
            .routes()
            .iter()
            .all(|route| self.route_load(route) <= self.data.capacity())
    }

    /// Recomputes the solution's cost from scratch and caches it.
    pub fn recompute(&self, solution: &mut Solution) {
        let cost = self.cost(solution);
        solution.set_cost(cost);
    }
}
