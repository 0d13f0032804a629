//! Solver configuration.
//!
//! Sections mirror the namespaces configuration files use
//! (`simulated_annealing.initial_temperature`, `tabu_search.tabu_tenure`,
//! `vnd.neighborhoods`, …). Every field carries a default, so a config can
//! be deserialized from a partial document or assembled with the builder
//! methods; [`SolverConfig::validate`] screens it before a run.

use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::local_search::{Neighborhood, SearchParams};

/// Simulated-annealing schedule parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedAnnealing {
    /// Initial temperature; higher accepts more worsening moves.
    pub initial_temperature: f64,
    /// The loop stops once the temperature falls to this value.
    pub final_temperature: f64,
    /// Geometric cooling factor in (0, 1).
    pub alpha: f64,
    /// Inner-loop length at each temperature level.
    pub iterations_per_temperature: usize,
}

impl Default for SimulatedAnnealing {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            final_temperature: 1.0,
            alpha: 0.95,
            iterations_per_temperature: 100,
        }
    }
}

/// Tabu memory parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuSearch {
    /// Base forbid duration in iterations.
    pub tabu_tenure: usize,
    /// Upper bound of the uniform random offset added to the tenure.
    pub tabu_tenure_random_range: usize,
    /// Whether a tabu move may still be taken when it beats the global best.
    pub aspiration_enabled: bool,
}

impl Default for TabuSearch {
    fn default() -> Self {
        Self {
            tabu_tenure: 10,
            tabu_tenure_random_range: 5,
            aspiration_enabled: true,
        }
    }
}

/// VND parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vnd {
    /// Neighbourhood order for the descent; also the sampling pool of the
    /// annealing loop.
    pub neighborhoods: Vec<Neighborhood>,
    /// Stagnation guard for one descent run.
    pub max_iterations_without_improvement: usize,
    /// The annealing loop intensifies with a VND pass every this many
    /// iterations.
    pub intensification_period: usize,
}

impl Default for Vnd {
    fn default() -> Self {
        Self {
            neighborhoods: vec![
                Neighborhood::Swap,
                Neighborhood::Relocate,
                Neighborhood::TwoOpt,
                Neighborhood::CrossExchange,
            ],
            max_iterations_without_improvement: 50,
            intensification_period: 50,
        }
    }
}

/// Bounds and knobs of the outer search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSearch {
    /// Hard bound on annealing iterations.
    pub max_iterations: usize,
    /// Stop after this many accepted moves without a new global best.
    pub max_iterations_without_improvement: usize,
    /// Maximum cross-exchange segment length.
    pub max_segment_length: usize,
    /// Attempt budget for drawing one random move.
    pub random_move_attempts: usize,
}

impl Default for LocalSearch {
    fn default() -> Self {
        Self {
            max_iterations: 20_000,
            max_iterations_without_improvement: 5_000,
            max_segment_length: 3,
            random_move_attempts: 50,
        }
    }
}

/// Construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialSolution {
    /// Top-K widening fraction in [0, 1]; 0 is the pure greedy
    /// nearest-neighbour construction.
    pub randomness: f64,
}

impl Default for InitialSolution {
    fn default() -> Self {
        Self { randomness: 0.1 }
    }
}

/// Run-wide parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct General {
    /// RNG seed; absent means a fresh seed per run.
    pub seed: Option<u64>,
    /// Wall-clock budget; absent means unbounded.
    pub time_limit_seconds: Option<f64>,
}

impl Default for General {
    fn default() -> Self {
        Self {
            seed: None,
            time_limit_seconds: None,
        }
    }
}

/// Reporting parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quality {
    /// Informational gap target in percent, surfaced by reporters.
    pub target_gap_percentage: f64,
}

impl Default for Quality {
    fn default() -> Self {
        Self {
            target_gap_percentage: 7.0,
        }
    }
}

/// Full solver configuration.
///
/// # Examples
///
/// ```
/// use u_cvrp::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_seed(42)
///     .with_time_limit_seconds(5.0);
/// config.validate().unwrap();
/// ```
///
/// Partial documents deserialize against the defaults:
///
/// ```
/// use u_cvrp::SolverConfig;
///
/// let config: SolverConfig = serde_json::from_str(
///     r#"{"simulated_annealing": {"alpha": 0.9}, "general": {"seed": 7}}"#,
/// )
/// .unwrap();
/// assert_eq!(config.simulated_annealing.alpha, 0.9);
/// assert_eq!(config.general.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub simulated_annealing: SimulatedAnnealing,
    pub tabu_search: TabuSearch,
    pub vnd: Vnd,
    pub local_search: LocalSearch,
    pub initial_solution: InitialSolution,
    pub general: General,
    pub quality: Quality,
}

impl SolverConfig {
    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.general.seed = Some(seed);
        self
    }

    /// Sets the wall-clock budget in seconds.
    pub fn with_time_limit_seconds(mut self, seconds: f64) -> Self {
        self.general.time_limit_seconds = Some(seconds);
        self
    }

    /// Sets the neighbourhood order (and sampling pool).
    pub fn with_neighborhoods(mut self, neighborhoods: Vec<Neighborhood>) -> Self {
        self.vnd.neighborhoods = neighborhoods;
        self
    }

    /// Sets the annealing schedule in one call.
    pub fn with_annealing_schedule(
        mut self,
        initial_temperature: f64,
        final_temperature: f64,
        alpha: f64,
        iterations_per_temperature: usize,
    ) -> Self {
        self.simulated_annealing = SimulatedAnnealing {
            initial_temperature,
            final_temperature,
            alpha,
            iterations_per_temperature,
        };
        self
    }

    /// The neighbourhood enumeration knobs this config implies.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            max_segment_length: self.local_search.max_segment_length,
            random_move_attempts: self.local_search.random_move_attempts,
        }
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), SolverError> {
        let sa = &self.simulated_annealing;
        if sa.initial_temperature <= 0.0 || !sa.initial_temperature.is_finite() {
            return Err(invalid(format!(
                "initial_temperature must be positive, got {}",
                sa.initial_temperature
            )));
        }
        if sa.final_temperature <= 0.0 || !sa.final_temperature.is_finite() {
            return Err(invalid(format!(
                "final_temperature must be positive, got {}",
                sa.final_temperature
            )));
        }
        if sa.final_temperature >= sa.initial_temperature {
            return Err(invalid(format!(
                "final_temperature {} must be below initial_temperature {}",
                sa.final_temperature, sa.initial_temperature
            )));
        }
        if !(sa.alpha > 0.0 && sa.alpha < 1.0) {
            return Err(invalid(format!("alpha must be in (0, 1), got {}", sa.alpha)));
        }
        if sa.iterations_per_temperature == 0 {
            return Err(invalid("iterations_per_temperature must be positive".into()));
        }

        if self.vnd.neighborhoods.is_empty() {
            return Err(invalid("neighborhood list must not be empty".into()));
        }
        if self.vnd.max_iterations_without_improvement == 0 {
            return Err(invalid(
                "vnd.max_iterations_without_improvement must be positive".into(),
            ));
        }
        if self.vnd.intensification_period == 0 {
            return Err(invalid("vnd.intensification_period must be positive".into()));
        }

        if self.local_search.max_iterations == 0 {
            return Err(invalid("local_search.max_iterations must be positive".into()));
        }
        if self.local_search.max_iterations_without_improvement == 0 {
            return Err(invalid(
                "local_search.max_iterations_without_improvement must be positive".into(),
            ));
        }
        if self.local_search.max_segment_length == 0 {
            return Err(invalid("max_segment_length must be positive".into()));
        }
        if self.local_search.random_move_attempts == 0 {
            return Err(invalid("random_move_attempts must be positive".into()));
        }

        let randomness = self.initial_solution.randomness;
        if !(0.0..=1.0).contains(&randomness) || !randomness.is_finite() {
            return Err(invalid(format!(
                "initial_solution.randomness must be in [0, 1], got {randomness}"
            )));
        }

        if let Some(limit) = self.general.time_limit_seconds {
            if limit <= 0.0 || !limit.is_finite() {
                return Err(invalid(format!(
                    "time_limit_seconds must be positive, got {limit}"
                )));
            }
        }

        Ok(())
    }
}

fn invalid(msg: String) -> SolverError {
    SolverError::InvalidConfig(msg)
}
