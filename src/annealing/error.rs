//! Fatal solver errors.

use std::error::Error;
use std::fmt;

/// A fatal error that aborts a run before any optimization work.
///
/// Anything that goes wrong *inside* the loop — an infeasible candidate, a
/// move with no eligible target — is expected control flow and never
/// surfaces here.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// An annealing parameter failed validation.
    Configuration(String),

    /// Total demand exceeds what the fleet can carry; no assignment of
    /// clients to vehicles can be feasible.
    InsufficientFleetCapacity {
        /// Sum of all client demands.
        total_demand: i64,
        /// Fleet-wide capacity (vehicles × per-vehicle capacity).
        fleet_capacity: i64,
        /// Minimum number of vehicles that could carry the demand.
        min_vehicles: usize,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::Configuration(msg) => write!(f, "invalid configuration: {msg}"),
            SolverError::InsufficientFleetCapacity {
                total_demand,
                fleet_capacity,
                min_vehicles,
            } => write!(
                f,
                "insufficient fleet capacity: total demand {total_demand} exceeds \
                 fleet capacity {fleet_capacity} (at least {min_vehicles} vehicles needed)"
            ),
        }
    }
}

impl Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_configuration() {
        let err = SolverError::Configuration("cooling_factor must be in (0, 1)".into());
        assert!(err.to_string().contains("invalid configuration"));
        assert!(err.to_string().contains("cooling_factor"));
    }

    #[test]
    fn test_display_capacity() {
        let err = SolverError::InsufficientFleetCapacity {
            total_demand: 12,
            fleet_capacity: 5,
            min_vehicles: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains('5'));
        assert!(msg.contains("3 vehicles"));
    }
}
