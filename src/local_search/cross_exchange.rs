//! Cross-exchange neighbourhood.
//!
//! # Algorithm
//!
//! Exchange a contiguous segment of one route with a contiguous segment of
//! a different route. Segment lengths vary independently up to a configured
//! maximum, which keeps the move space tractable. Four edges change; both
//! routes' loads shift by the difference of the segment demands.
//!
//! # Reference
//!
//! Taillard, É. et al. (1997). "A tabu search heuristic for the vehicle
//! routing problem with soft time windows", *Transportation Science* 31(2).

use rand::Rng;

use crate::evaluation::{delta_cost, is_feasible};
use crate::local_search::IMPROVEMENT_EPS;
use crate::models::{Instance, Move, Solution};

/// Best improving feasible cross-exchange with segments no longer than
/// `max_segment_length`, scanning route pairs in ascending index order.
pub fn best_improving(
    solution: &Solution,
    instance: &Instance,
    max_segment_length: usize,
) -> Option<Move> {
    let routes = solution.routes();
    let mut best: Option<Move> = None;
    let mut best_delta = -IMPROVEMENT_EPS;

    for route_a in 0..routes.len() {
        for route_b in (route_a + 1)..routes.len() {
            let limit_a = routes[route_a].len().min(max_segment_length);
            let limit_b = routes[route_b].len().min(max_segment_length);
            for len_a in 1..=limit_a {
                for len_b in 1..=limit_b {
                    for start_a in 0..=(routes[route_a].len() - len_a) {
                        for start_b in 0..=(routes[route_b].len() - len_b) {
                            let mv = Move::CrossExchange {
                                route_a,
                                start_a,
                                len_a,
                                route_b,
                                start_b,
                                len_b,
                            };
                            if !is_feasible(&mv, solution, instance) {
                                continue;
                            }
                            let delta = delta_cost(&mv, solution, instance);
                            if delta < best_delta {
                                best_delta = delta;
                                best = Some(mv);
                            }
                        }
                    }
                }
            }
        }
    }
    best
}

/// A random feasible cross-exchange, drawn within the given attempt budget.
pub fn random<R: Rng>(
    solution: &Solution,
    instance: &Instance,
    max_segment_length: usize,
    attempts: usize,
    rng: &mut R,
) -> Option<Move> {
    let routes = solution.routes();
    if solution.num_non_empty_routes() < 2 {
        return None;
    }

    for _ in 0..attempts {
        let route_a = rng.random_range(0..routes.len());
        let route_b = rng.random_range(0..routes.len());
        if route_a == route_b || routes[route_a].is_empty() || routes[route_b].is_empty() {
            continue;
        }
        let len_a = rng.random_range(1..=routes[route_a].len().min(max_segment_length));
        let len_b = rng.random_range(1..=routes[route_b].len().min(max_segment_length));
        let mv = Move::CrossExchange {
            route_a,
            start_a: rng.random_range(0..=routes[route_a].len() - len_a),
            len_a,
            route_b,
            start_b: rng.random_range(0..=routes[route_b].len() - len_b),
            len_b,
        };
        if is_feasible(&mv, solution, instance) {
            return Some(mv);
        }
    }
    None
}
