//! Candidate generation by randomized Swap and Relocate moves.
//!
//! Each call clones the current solution, applies exactly one structural
//! move, and either returns the mutant with a freshly computed cost or
//! rejects it. Rejection covers two cases: the chosen move had no eligible
//! target (say, an inter-route swap with fewer than two non-empty routes),
//! or the mutant violates capacity. Rejected candidates are discarded,
//! never repaired or penalized.

use crate::evaluation::CostEvaluator;
use crate::models::{ProblemData, Solution};
use rand::Rng;

/// Generates random neighbor solutions for one problem instance.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_cvrp::constructive::nearest_neighbor;
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::evaluation::CostEvaluator;
/// use u_cvrp::models::ProblemData;
/// use u_cvrp::neighborhood::NeighborhoodGenerator;
///
/// let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 2.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let data = ProblemData::new(2, 20, dm, vec![10, 10, 10]).unwrap();
///
/// let current = nearest_neighbor(&data);
/// let generator = NeighborhoodGenerator::new(&data);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// if let Some(candidate) = generator.neighbor(&current, &mut rng) {
///     assert!(CostEvaluator::new(&data).is_feasible(&candidate));
/// }
/// ```
pub struct NeighborhoodGenerator<'a> {
    data: &'a ProblemData,
}

impl<'a> NeighborhoodGenerator<'a> {
    /// Creates a generator for the given problem data.
    pub fn new(data: &'a ProblemData) -> Self {
        Self { data }
    }

    /// Produces one candidate, or `None` when the chosen move was
    /// structurally impossible or yielded an infeasible solution.
    ///
    /// With probability 0.5 a Swap is attempted (itself split evenly
    /// between inter-route and intra-route), otherwise a Relocate. The
    /// returned candidate carries a freshly computed cost.
    pub fn neighbor<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Option<Solution> {
        let mut candidate = solution.clone();

        let moved = if rng.random_bool(0.5) {
            if rng.random_bool(0.5) {
                swap_between_routes(&mut candidate, rng)
            } else {
                swap_within_route(&mut candidate, rng)
            }
        } else {
            relocate(&mut candidate, rng)
        };
        if !moved {
            return None;
        }

        let evaluator = CostEvaluator::new(self.data);
        if !evaluator.is_feasible(&candidate) {
            return None;
        }
        evaluator.recompute(&mut candidate);
        Some(candidate)
    }
}

/// Indices of routes holding at least `min_len` clients.
fn routes_with_at_least(solution: &Solution, min_len: usize) -> Vec<usize> {
    solution
        .routes()
        .iter()
        .enumerate()
        .filter(|(_, route)| route.len() >= min_len)
        .map(|(v, _)| v)
        .collect()
}

/// Uniform draw from `0..len` excluding `taken`. `len` must be >= 2.
fn distinct_index<R: Rng>(rng: &mut R, len: usize, taken: usize) -> usize {
    let mut pick = rng.random_range(0..len - 1);
    if pick >= taken {
        pick += 1;
    }
    pick
}

/// Exchanges one randomly chosen client between two distinct non-empty
/// routes. Fails when fewer than two routes are non-empty.
fn swap_between_routes<R: Rng>(solution: &mut Solution, rng: &mut R) -> bool {
    let non_empty = routes_with_at_least(solution, 1);
    if non_empty.len() < 2 {
        return false;
    }

    let first = rng.random_range(0..non_empty.len());
    let second = distinct_index(rng, non_empty.len(), first);
    let (a, b) = (non_empty[first], non_empty[second]);

    let routes = solution.routes_mut();
    let pos_a = rng.random_range(0..routes[a].len());
    let pos_b = rng.random_range(0..routes[b].len());

    let held_a = routes[a][pos_a];
    let held_b = routes[b][pos_b];
    routes[a][pos_a] = held_b;
    routes[b][pos_b] = held_a;
    true
}

/// Exchanges two distinct positions inside one route. Fails when no route
/// holds two clients.
fn swap_within_route<R: Rng>(solution: &mut Solution, rng: &mut R) -> bool {
    let swappable = routes_with_at_least(solution, 2);
    if swappable.is_empty() {
        return false;
    }

    let vehicle = swappable[rng.random_range(0..swappable.len())];
    let route = &mut solution.routes_mut()[vehicle];
    let i = rng.random_range(0..route.len());
    let j = distinct_index(rng, route.len(), i);
    route.swap(i, j);
    true
}

/// Removes a client from a random position of a random non-empty route and
/// reinserts it at a random position of a random route (the source route
/// is allowed, and so is appending at the end). Fails only when every
/// route is empty.
fn relocate<R: Rng>(solution: &mut Solution, rng: &mut R) -> bool {
    let non_empty = routes_with_at_least(solution, 1);
    if non_empty.is_empty() {
        return false;
    }

    let source = non_empty[rng.random_range(0..non_empty.len())];
    let dest = rng.random_range(0..solution.num_routes());

    let routes = solution.routes_mut();
    let pos = rng.random_range(0..routes[source].len());
    let client = routes[source].remove(pos);
    let insert_at = rng.random_range(0..=routes[dest].len());
    routes[dest].insert(insert_at, client);
    true
}
