//! Inter-route swap neighbourhood.
//!
//! # Algorithm
//!
//! Exchange the customer at one position of a route with the customer at a
//! position of a different route. Four edges change; loads change by the
//! demand difference of the two customers, so feasibility is re-checked on
//! both routes.

use rand::Rng;

use crate::evaluation::{delta_cost, is_feasible};
use crate::local_search::IMPROVEMENT_EPS;
use crate::models::{Instance, Move, Solution};

/// Best improving feasible swap, scanning route pairs in ascending index
/// order and positions ascending within them.
pub fn best_improving(solution: &Solution, instance: &Instance) -> Option<Move> {
    let routes = solution.routes();
    let mut best: Option<Move> = None;
    let mut best_delta = -IMPROVEMENT_EPS;

    for route_a in 0..routes.len() {
        for route_b in (route_a + 1)..routes.len() {
            for pos_a in 0..routes[route_a].len() {
                for pos_b in 0..routes[route_b].len() {
                    let mv = Move::Swap {
                        route_a,
                        pos_a,
                        route_b,
                        pos_b,
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
    best
}

/// A random feasible swap, drawn within the given attempt budget.
pub fn random<R: Rng>(
    solution: &Solution,
    instance: &Instance,
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
        let mv = Move::Swap {
            route_a,
            pos_a: rng.random_range(0..routes[route_a].len()),
            route_b,
            pos_b: rng.random_range(0..routes[route_b].len()),
        };
        if is_feasible(&mv, solution, instance) {
            return Some(mv);
        }
    }
    None
}
