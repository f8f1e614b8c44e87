//! Annealing schedule configuration.

use serde::{Deserialize, Serialize};

/// Configuration of the annealing schedule.
///
/// Defaults: start at 1000.0, cool to 0.1 by a factor of 0.95, 100
/// iterations per temperature level, stop after 3000 iterations without a
/// new best, report every 50 iterations.
///
/// # Examples
///
/// ```
/// use u_cvrp::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_factor(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealingConfig {
    /// Initial temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Final temperature. The loop stops once the temperature is at or
    /// below this.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied once per temperature
    /// step.
    pub cooling_factor: f64,

    /// Inner iterations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Consecutive iterations without a new best before stopping early.
    pub stagnation_limit: usize,

    /// Progress events are emitted every this many iterations.
    pub report_interval: usize,

    /// Random seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            final_temperature: 0.1,
            cooling_factor: 0.95,
            iterations_per_temperature: 100,
            stagnation_limit: 3000,
            report_interval: 50,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, k: usize) -> Self {
        self.iterations_per_temperature = k;
        self
    }

    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if !self.final_temperature.is_finite() || self.final_temperature <= 0.0 {
            return Err("final_temperature must be positive".into());
        }
        if self.final_temperature >= self.initial_temperature {
            return Err("final_temperature must be less than initial_temperature".into());
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be positive".into());
        }
        if self.stagnation_limit == 0 {
            return Err("stagnation_limit must be positive".into());
        }
        if self.report_interval == 0 {
            return Err("report_interval must be positive".into());
        }
        Ok(())
    }
}
