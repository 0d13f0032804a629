//! Local search: the four neighbourhood operators and the VND driver.
//!
//! Each neighbourhood exposes a `best_improving` exhaustive scan and a
//! `random` bounded sampler over its move space:
//!
//! - [`swap`] — exchange two customers between distinct routes
//! - [`relocate`] — move one customer to another position or route
//! - [`two_opt`] — reverse a segment within one route
//! - [`cross_exchange`] — exchange two segments between distinct routes
//!
//! [`Neighborhood`] dispatches over the four kinds; [`vnd`] cycles them in
//! a configured order, restarting from the first on every improvement.

pub mod cross_exchange;
pub mod relocate;
pub mod swap;
pub mod two_opt;

mod vnd;

pub use vnd::vnd;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Instance, Move, Solution};

/// Deltas above this threshold do not count as improvements; keeps float
/// noise from driving endless descent steps.
pub(crate) const IMPROVEMENT_EPS: f64 = 1e-10;

/// Shared knobs for neighbourhood enumeration and sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Maximum cross-exchange segment length.
    pub max_segment_length: usize,
    /// Attempt budget for one `random` draw.
    pub random_move_attempts: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_segment_length: 3,
            random_move_attempts: 50,
        }
    }
}

/// One of the four move neighbourhoods.
///
/// The serialized names (`swap`, `relocate`, `two_opt`, `cross_exchange`)
/// are the ones configuration files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    Swap,
    Relocate,
    TwoOpt,
    CrossExchange,
}

impl Neighborhood {
    /// Best strictly improving feasible move in this neighbourhood, or
    /// `None` at a local optimum.
    ///
    /// The scan is deterministic: routes in ascending index order, positions
    /// ascending within them, ties resolved to the first move encountered.
    pub fn best_improving(
        self,
        solution: &Solution,
        instance: &Instance,
        params: &SearchParams,
    ) -> Option<Move> {
        match self {
            Neighborhood::Swap => swap::best_improving(solution, instance),
            Neighborhood::Relocate => relocate::best_improving(solution, instance),
            Neighborhood::TwoOpt => two_opt::best_improving(solution, instance),
            Neighborhood::CrossExchange => {
                cross_exchange::best_improving(solution, instance, params.max_segment_length)
            }
        }
    }

    /// A random feasible move from this neighbourhood, or `None` if the
    /// attempt budget ran out (or the neighbourhood is degenerate, e.g.
    /// fewer than two non-empty routes for swap).
    pub fn random<R: Rng>(
        self,
        solution: &Solution,
        instance: &Instance,
        params: &SearchParams,
        rng: &mut R,
    ) -> Option<Move> {
        match self {
            Neighborhood::Swap => swap::random(solution, instance, params.random_move_attempts, rng),
            Neighborhood::Relocate => {
                relocate::random(solution, instance, params.random_move_attempts, rng)
            }
            Neighborhood::TwoOpt => {
                two_opt::random(solution, params.random_move_attempts, rng)
            }
            Neighborhood::CrossExchange => cross_exchange::random(
                solution,
                instance,
                params.max_segment_length,
                params.random_move_attempts,
                rng,
            ),
        }
    }
}
