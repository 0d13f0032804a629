//! Simulated Annealing + Tabu Search execution loop.
//!
//! # Algorithm
//!
//! 1. Construct a randomised nearest-neighbour solution and descend it to a
//!    local optimum with VND.
//! 2. While the temperature is above the final temperature and the
//!    iteration, stagnation, and wall-clock budgets hold, repeat `L` times:
//!    draw a random feasible move from a uniformly chosen neighbourhood,
//!    screen it against the tabu list (aspiration may override), accept it
//!    by the Metropolis criterion, and periodically intensify with VND.
//! 3. Cool geometrically and return the best solution ever seen.
//!
//! Given the same instance, configuration, and seed, the accepted-move
//! sequence and the returned solution are bit-identical across runs.
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C.D. & Vecchi, M.P. (1983). "Optimization by
//! Simulated Annealing", *Science* 220(4598), 671-680.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::constructive::nearest_neighbor;
use crate::error::SolverError;
use crate::evaluation::delta_cost;
use crate::local_search::vnd;
use crate::models::{Instance, Solution};
use crate::solver::TabuList;

/// Counters and reporting data gathered during one solve.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostics {
    /// Annealing iterations executed.
    pub iterations: usize,
    /// Accepted moves, improving ones included.
    pub accepted_moves: usize,
    /// Accepted moves that lowered the current cost.
    pub improving_moves: usize,
    /// Temperature when the loop stopped.
    pub final_temperature: f64,
    /// Wall-clock time spent.
    pub elapsed_seconds: f64,
    /// Whether the wall-clock budget cut the run short. Not an error: the
    /// best solution found so far is returned either way.
    pub timed_out: bool,
    /// Best cost at construction, after the initial descent, and at every
    /// subsequent improvement.
    pub cost_history: Vec<f64>,
    /// Gap versus the instance's reference objective, when one is attached.
    pub gap_percentage: Option<f64>,
    /// Vehicles actually used by the returned solution.
    pub non_empty_routes: usize,
}

/// A solved instance: the best solution found plus run diagnostics.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub solution: Solution,
    pub diagnostics: Diagnostics,
}

/// Runs the full hybrid metaheuristic on a validated instance.
///
/// Construction and search cannot fail once the configuration passes
/// validation; the result is always a feasible solution, at worst the
/// VND-improved initial one.
///
/// # Errors
///
/// Returns [`SolverError::InvalidConfig`] if the configuration is rejected
/// by [`SolverConfig::validate`].
///
/// # Examples
///
/// ```
/// use u_cvrp::{solve, Instance, SolverConfig};
///
/// let instance = Instance::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     vec![0, 1, 1, 1],
///     3,
/// )
/// .unwrap();
/// let outcome = solve(&instance, &SolverConfig::default().with_seed(42)).unwrap();
/// assert!((outcome.solution.cost() - 6.0).abs() < 1e-10);
/// ```
pub fn solve(instance: &Instance, config: &SolverConfig) -> Result<SolveOutcome, SolverError> {
    config.validate()?;

    let started = Instant::now();
    let deadline = config.general.time_limit_seconds.map(Duration::from_secs_f64);
    let mut rng = ChaCha8Rng::seed_from_u64(config.general.seed.unwrap_or_else(rand::random));

    let params = config.search_params();
    let neighborhoods = &config.vnd.neighborhoods;
    let vnd_guard = config.vnd.max_iterations_without_improvement;

    let mut current = nearest_neighbor(instance, config.initial_solution.randomness, &mut rng);
    info!(
        cost = current.cost(),
        routes = current.num_non_empty_routes(),
        "constructed initial solution"
    );
    let mut cost_history = vec![current.cost()];

    vnd(&mut current, instance, neighborhoods, &params, vnd_guard);
    debug!(cost = current.cost(), "initial descent finished");
    cost_history.push(current.cost());

    let mut best = current.clone();
    let mut tabu = TabuList::new(
        config.tabu_search.tabu_tenure,
        config.tabu_search.tabu_tenure_random_range,
    );

    let sa = &config.simulated_annealing;
    let mut temperature = sa.initial_temperature;
    let mut iteration = 0;
    let mut since_improvement = 0;
    let mut accepted_moves = 0;
    let mut improving_moves = 0;
    let mut timed_out = false;

    'cooling: while temperature > sa.final_temperature {
        for _ in 0..sa.iterations_per_temperature {
            if iteration >= config.local_search.max_iterations
                || since_improvement >= config.local_search.max_iterations_without_improvement
            {
                break 'cooling;
            }
            if let Some(limit) = deadline {
                if started.elapsed() >= limit {
                    timed_out = true;
                    break 'cooling;
                }
            }

            let neighborhood = neighborhoods[rng.random_range(0..neighborhoods.len())];
            if let Some(mv) = neighborhood.random(&current, instance, &params, &mut rng) {
                let delta = delta_cost(&mv, &current, instance);
                let signature = mv.signature(&current);

                let aspires = config.tabu_search.aspiration_enabled
                    && delta < best.cost() - current.cost();
                let admissible = !tabu.is_tabu(&signature, iteration) || aspires;

                if admissible {
                    let accept =
                        delta < 0.0 || rng.random_range(0.0..1.0) < (-delta / temperature).exp();
                    if accept {
                        current.apply(&mv, instance);
                        tabu.add(signature, iteration, &mut rng);
                        accepted_moves += 1;
                        if delta < 0.0 {
                            improving_moves += 1;
                        }
                        if current.cost() < best.cost() {
                            best = current.clone();
                            cost_history.push(best.cost());
                            since_improvement = 0;
                            debug!(cost = best.cost(), iteration, "new best solution");
                        } else {
                            since_improvement += 1;
                        }
                    }
                }
            }

            if iteration.is_multiple_of(config.vnd.intensification_period) {
                vnd(&mut current, instance, neighborhoods, &params, vnd_guard);
                if current.cost() < best.cost() {
                    best = current.clone();
                    cost_history.push(best.cost());
                    debug!(cost = best.cost(), iteration, "descent found new best");
                }
            }

            tabu.tick(iteration);
            iteration += 1;
        }
        temperature *= sa.alpha;
    }

    let elapsed_seconds = started.elapsed().as_secs_f64();
    let gap_percentage = instance.gap_percentage(best.cost());
    info!(
        cost = best.cost(),
        iterations = iteration,
        elapsed_seconds,
        timed_out,
        "search finished"
    );

    let diagnostics = Diagnostics {
        iterations: iteration,
        accepted_moves,
        improving_moves,
        final_temperature: temperature,
        elapsed_seconds,
        timed_out,
        cost_history,
        gap_percentage,
        non_empty_routes: best.num_non_empty_routes(),
    };
    Ok(SolveOutcome {
        solution: best,
        diagnostics,
    })
}
