//! Nearest-neighbor constructive heuristic.
//!
//! Builds one route per vehicle greedily: starting from the depot, always
//! visit the nearest unvisited client whose demand still fits the vehicle's
//! remaining capacity. Clients left over once every vehicle is exhausted
//! are appended to the last route even if that overloads it — the seed is
//! then infeasible, and it is the annealing move filter that steers the
//! search back to feasibility, not a repair step here.
//!
//! # Complexity
//!
//! O(n²) where n = number of clients.

use crate::evaluation::CostEvaluator;
use crate::models::{ProblemData, Solution};

/// Constructs the initial solution with the nearest-neighbor heuristic.
///
/// On equal distance the lowest client identifier wins, so construction is
/// fully deterministic. The returned solution carries a freshly computed
/// cost.
///
/// # Examples
///
/// ```
/// use u_cvrp::constructive::nearest_neighbor;
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::ProblemData;
///
/// let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let data = ProblemData::new(1, 100, dm, vec![10, 10, 10]).unwrap();
///
/// let sol = nearest_neighbor(&data);
/// assert_eq!(sol.route(0), &[1, 2, 3]);
/// // 0 -> 1 -> 2 -> 3 -> 0
/// assert!((sol.cost() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(data: &ProblemData) -> Solution {
    let n = data.num_clients();
    let mut visited = vec![false; n + 1];
    visited[0] = true; // depot
    let mut solution = Solution::empty(data.num_vehicles());

    for vehicle in 0..data.num_vehicles() {
        let mut current = data.depot();
        let mut remaining = data.capacity();

        loop {
            // Candidates in ascending identifier order; `nearest` keeps the
            // first minimum, so ties go to the lowest identifier.
            let eligible: Vec<usize> = (1..=n)
                .filter(|&c| !visited[c] && data.demand(c) <= remaining)
                .collect();

            match data.distances().nearest(current, &eligible) {
                Some(next) => {
                    visited[next] = true;
                    remaining -= data.demand(next);
                    solution.routes_mut()[vehicle].push(next);
                    current = next;
                }
                None => break,
            }
        }
    }

    // Fleet exhausted with clients left over: dump them on the last
    // vehicle, capacity or not. The seed may be infeasible.
    let last = data.num_vehicles() - 1;
    for client in 1..=n {
        if !visited[client] {
            solution.routes_mut()[last].push(client);
        }
    }

    CostEvaluator::new(data).recompute(&mut solution);
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn line_instance(num_vehicles: usize, capacity: i32) -> ProblemData {
        let points: Vec<(f64, f64)> = (0..=3).map(|i| (i as f64, 0.0)).collect();
        ProblemData::new(
            num_vehicles,
            capacity,
            DistanceMatrix::from_points(&points),
            vec![10, 10, 10],
        )
        .expect("valid instance")
    }

    fn client_multiset(sol: &Solution) -> Vec<usize> {
        let mut clients: Vec<usize> = sol.routes().iter().flatten().copied().collect();
        clients.sort_unstable();
        clients
    }

    #[test]
    fn test_all_on_one_route() {
        let sol = nearest_neighbor(&line_instance(1, 100));
        assert_eq!(sol.route(0), &[1, 2, 3]);
        assert!((sol.cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_splits_when_capacity_runs_out() {
        let sol = nearest_neighbor(&line_instance(2, 20));
        // Vehicle 0 takes clients 1 and 2 (load 20), vehicle 1 takes 3.
        assert_eq!(sol.route(0), &[1, 2]);
        assert_eq!(sol.route(1), &[3]);
        assert_eq!(client_multiset(&sol), vec![1, 2, 3]);
    }

    #[test]
    fn test_picks_nearest_not_lowest() {
        let points = [(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)];
        let data = ProblemData::new(1, 100, DistanceMatrix::from_points(&points), vec![5, 5])
            .expect("valid instance");
        let sol = nearest_neighbor(&data);
        // Client 2 is nearer to the depot than client 1.
        assert_eq!(sol.route(0), &[2, 1]);
    }

    #[test]
    fn test_tie_break_prefers_lowest_identifier() {
        // Clients 1 and 2 are both at distance 5 from the depot.
        let points = [(0.0, 0.0), (3.0, 4.0), (4.0, 3.0)];
        let data = ProblemData::new(1, 100, DistanceMatrix::from_points(&points), vec![5, 5])
            .expect("valid instance");
        let sol = nearest_neighbor(&data);
        assert_eq!(sol.route(0)[0], 1);
    }

    #[test]
    fn test_escape_valve_dumps_leftovers_on_last_vehicle() {
        // One vehicle of capacity 10 only fits one client; the other two
        // are forced onto it anyway, in ascending order.
        let sol = nearest_neighbor(&line_instance(1, 10));
        assert_eq!(sol.route(0), &[1, 2, 3]);
        let data = line_instance(1, 10);
        assert!(!CostEvaluator::new(&data).is_feasible(&sol));
    }

    #[test]
    fn test_escape_valve_keeps_partition() {
        let sol = nearest_neighbor(&line_instance(2, 10));
        // Each vehicle fits one client; client 3 overflows onto vehicle 1.
        assert_eq!(sol.route(0), &[1]);
        assert_eq!(sol.route(1), &[2, 3]);
        assert_eq!(client_multiset(&sol), vec![1, 2, 3]);
    }

    #[test]
    fn test_cost_is_recomputed() {
        let data = line_instance(2, 20);
        let sol = nearest_neighbor(&data);
        let expected = CostEvaluator::new(&data).cost(&sol);
        assert!((sol.cost() - expected).abs() < 1e-12);
    }
}
