//! Progress reporting.
//!
//! The engine reports through a [`ProgressListener`]: advisory callbacks,
//! invoked synchronously from the optimization thread in non-decreasing
//! iteration order and never re-entrantly. A listener must not fail. How
//! (and whether) notifications reach another thread is the listener's
//! concern — [`ChannelListener`] is the ready-made forwarding adapter.

use crate::models::Solution;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// Observes an annealing run.
///
/// Every method defaults to a no-op, so a listener implements only what it
/// needs.
pub trait ProgressListener {
    /// A new best solution was found.
    fn on_new_best(&mut self, iteration: usize, cost: f64, temperature: f64, vehicles_used: usize) {
        let _ = (iteration, cost, temperature, vehicles_used);
    }

    /// Periodic heartbeat, emitted every `report_interval` iterations
    /// whether or not anything improved.
    fn on_periodic_update(
        &mut self,
        iteration: usize,
        temperature: f64,
        best_cost: f64,
        vehicles_used: usize,
    ) {
        let _ = (iteration, temperature, best_cost, vehicles_used);
    }

    /// The solution worth displaying changed (initial build, new best,
    /// periodic refresh, final result).
    fn on_solution_changed(&mut self, solution: &Solution) {
        let _ = solution;
    }
}

/// Listener that ignores every notification.
pub struct NopListener;

impl ProgressListener for NopListener {}

/// An owned snapshot of one progress notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgressEvent {
    /// Mirrors [`ProgressListener::on_new_best`].
    NewBest {
        iteration: usize,
        cost: f64,
        temperature: f64,
        vehicles_used: usize,
    },
    /// Mirrors [`ProgressListener::on_periodic_update`].
    PeriodicUpdate {
        iteration: usize,
        temperature: f64,
        best_cost: f64,
        vehicles_used: usize,
    },
    /// Mirrors [`ProgressListener::on_solution_changed`].
    SolutionChanged { solution: Solution },
}

/// Forwards every notification into an [`mpsc`](std::sync::mpsc) channel
/// as an owned [`ProgressEvent`], so a consumer on another thread can
/// render progress while the run continues.
///
/// Send failures (receiver gone) are ignored: reporting is advisory and
/// must not disturb the run.
pub struct ChannelListener {
    sender: Sender<ProgressEvent>,
}

impl ChannelListener {
    /// Creates a listener forwarding into `sender`.
    pub fn new(sender: Sender<ProgressEvent>) -> Self {
        Self { sender }
    }
}

impl ProgressListener for ChannelListener {
    fn on_new_best(&mut self, iteration: usize, cost: f64, temperature: f64, vehicles_used: usize) {
        let _ = self.sender.send(ProgressEvent::NewBest {
            iteration,
            cost,
            temperature,
            vehicles_used,
        });
    }

    fn on_periodic_update(
        &mut self,
        iteration: usize,
        temperature: f64,
        best_cost: f64,
        vehicles_used: usize,
    ) {
        let _ = self.sender.send(ProgressEvent::PeriodicUpdate {
            iteration,
            temperature,
            best_cost,
            vehicles_used,
        });
    }

    fn on_solution_changed(&mut self, solution: &Solution) {
        let _ = self.sender.send(ProgressEvent::SolutionChanged {
            solution: solution.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_nop_listener_accepts_everything() {
        let mut listener = NopListener;
        listener.on_new_best(1, 10.0, 100.0, 2);
        listener.on_periodic_update(2, 95.0, 10.0, 2);
        listener.on_solution_changed(&Solution::empty(1));
    }

    #[test]
    fn test_channel_listener_forwards_events() {
        let (tx, rx) = mpsc::channel();
        let mut listener = ChannelListener::new(tx);

        listener.on_new_best(7, 42.0, 500.0, 3);
        listener.on_solution_changed(&Solution::empty(2));

        assert_eq!(
            rx.recv().expect("event"),
            ProgressEvent::NewBest {
                iteration: 7,
                cost: 42.0,
                temperature: 500.0,
                vehicles_used: 3,
            }
        );
        match rx.recv().expect("event") {
            ProgressEvent::SolutionChanged { solution } => {
                assert_eq!(solution.num_routes(), 2);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_channel_listener_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut listener = ChannelListener::new(tx);
        listener.on_periodic_update(1, 100.0, 5.0, 1);
    }
}
