//! Problem instance data.

use crate::distance::DistanceMatrix;
use serde::{Deserialize, Serialize};

/// Immutable data of a capacitated vehicle routing instance.
///
/// Holds a `(n+1)×(n+1)` distance matrix with the depot at index 0, the
/// per-client demands, the fleet size, and the shared vehicle capacity.
/// Client identifiers are 1-based (`1..=num_clients`); the demand of
/// client `c` is stored at index `c - 1`. All lookups go through the
/// accessors here so that offset never leaks.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::ProblemData;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0)]);
/// let data = ProblemData::new(1, 10, dm, vec![5]).unwrap();
/// assert_eq!(data.num_clients(), 1);
/// assert_eq!(data.demand(1), 5);
/// assert!((data.distance(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemData {
    num_clients: usize,
    num_vehicles: usize,
    capacity: i32,
    distances: DistanceMatrix,
    demands: Vec<i32>,
}

impl ProblemData {
    /// Creates a problem instance.
    ///
    /// The number of clients is taken from `demands.len()`; `distances`
    /// must cover the clients plus the depot. Fails with a message when
    /// the fleet is empty, the capacity is not positive, the matrix size
    /// doesn't match, a demand is negative, or a distance is negative or
    /// non-finite.
    pub fn new(
        num_vehicles: usize,
        capacity: i32,
        distances: DistanceMatrix,
        demands: Vec<i32>,
    ) -> Result<Self, String> {
        let num_clients = demands.len();
        if num_vehicles == 0 {
            return Err("num_vehicles must be at least 1".into());
        }
        if capacity <= 0 {
            return Err(format!("capacity must be positive, got {capacity}"));
        }
        if distances.size() != num_clients + 1 {
            return Err(format!(
                "distance matrix covers {} locations, expected {} (clients plus depot)",
                distances.size(),
                num_clients + 1
            ));
        }
        if let Some(&d) = demands.iter().find(|&&d| d < 0) {
            return Err(format!("demands must be non-negative, got {d}"));
        }
        for from in 0..distances.size() {
            for to in 0..distances.size() {
                let d = distances.get(from, to);
                if !d.is_finite() || d < 0.0 {
                    return Err(format!(
                        "distance ({from}, {to}) must be finite and non-negative, got {d}"
                    ));
                }
            }
        }
        Ok(Self {
            num_clients,
            num_vehicles,
            capacity,
            distances,
            demands,
        })
    }

    /// Number of clients, excluding the depot.
    pub fn num_clients(&self) -> usize {
        self.num_clients
    }

    /// Number of vehicles in the fleet.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Capacity of each vehicle (homogeneous fleet).
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Depot location index (always 0).
    pub fn depot(&self) -> usize {
        0
    }

    /// Demand of the given client (1-based identifier).
    ///
    /// # Panics
    ///
    /// Panics if `client` is 0 (the depot) or greater than `num_clients`.
    pub fn demand(&self, client: usize) -> i32 {
        self.demands[client - 1]
    }

    /// All demands, indexed by client identifier minus one.
    pub fn demands(&self) -> &[i32] {
        &self.demands
    }

    /// Travel distance from location `from` to location `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// The underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Sum of all client demands.
    pub fn total_demand(&self) -> i64 {
        self.demands.iter().map(|&d| i64::from(d)).sum()
    }

    /// Combined capacity of the whole fleet.
    pub fn fleet_capacity(&self) -> i64 {
        self.num_vehicles as i64 * i64::from(self.capacity)
    }

    /// Minimum number of vehicles that could carry the total demand.
    pub fn min_vehicles_needed(&self) -> usize {
        // Equivalent to `i64::div_ceil`, which is still unstable (int_roundings).
        let total = self.total_demand();
        let cap = i64::from(self.capacity);
        let quot = total / cap;
        let rem = total % cap;
        let ceil = if (rem > 0 && cap > 0) || (rem < 0 && cap < 0) {
            quot + 1
        } else {
            quot
        };
        ceil as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix(n: usize) -> DistanceMatrix {
        let points: Vec<(f64, f64)> = (0..=n).map(|i| (i as f64, 0.0)).collect();
        DistanceMatrix::from_points(&points)
    }

    #[test]
    fn test_new_valid() {
        let data = ProblemData::new(2, 10, line_matrix(3), vec![3, 4, 5]).expect("valid");
        assert_eq!(data.num_clients(), 3);
        assert_eq!(data.num_vehicles(), 2);
        assert_eq!(data.capacity(), 10);
        assert_eq!(data.depot(), 0);
    }

    #[test]
    fn test_new_rejects_empty_fleet() {
        assert!(ProblemData::new(0, 10, line_matrix(2), vec![1, 1]).is_err());
    }

    #[test]
    fn test_new_rejects_bad_capacity() {
        assert!(ProblemData::new(1, 0, line_matrix(2), vec![1, 1]).is_err());
        assert!(ProblemData::new(1, -5, line_matrix(2), vec![1, 1]).is_err());
    }

    #[test]
    fn test_new_rejects_matrix_size_mismatch() {
        assert!(ProblemData::new(1, 10, line_matrix(3), vec![1, 1]).is_err());
    }

    #[test]
    fn test_new_rejects_negative_demand() {
        assert!(ProblemData::new(1, 10, line_matrix(2), vec![1, -1]).is_err());
    }

    #[test]
    fn test_new_rejects_bad_distance() {
        let mut dm = line_matrix(1);
        dm.set(0, 1, f64::NAN);
        assert!(ProblemData::new(1, 10, dm, vec![1]).is_err());

        let mut dm = line_matrix(1);
        dm.set(1, 0, -2.0);
        assert!(ProblemData::new(1, 10, dm, vec![1]).is_err());
    }

    #[test]
    fn test_demand_is_one_based() {
        let data = ProblemData::new(1, 10, line_matrix(3), vec![3, 4, 5]).expect("valid");
        assert_eq!(data.demand(1), 3);
        assert_eq!(data.demand(2), 4);
        assert_eq!(data.demand(3), 5);
    }

    #[test]
    fn test_totals() {
        let data = ProblemData::new(2, 10, line_matrix(3), vec![3, 4, 5]).expect("valid");
        assert_eq!(data.total_demand(), 12);
        assert_eq!(data.fleet_capacity(), 20);
        assert_eq!(data.min_vehicles_needed(), 2);
    }

    #[test]
    fn test_min_vehicles_rounds_up() {
        let data = ProblemData::new(3, 5, line_matrix(3), vec![4, 4, 4]).expect("valid");
        // 12 / 5 rounds up to 3
        assert_eq!(data.min_vehicles_needed(), 3);
    }

    #[test]
    fn test_asymmetric_distances_allowed() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        let data = ProblemData::new(1, 10, dm, vec![1]).expect("valid");
        assert_eq!(data.distance(0, 1), 10.0);
        assert_eq!(data.distance(1, 0), 15.0);
    }
}
