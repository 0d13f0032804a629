//! Relocate neighbourhood.
//!
//! # Algorithm
//!
//! Remove one customer and reinsert it at another position: in a different
//! route (any insertion point, including empty placeholder routes) or in
//! its own route at a non-equivalent position. Three edges change. Only the
//! destination route can gain load, so that is the single capacity check.

use rand::Rng;

use crate::evaluation::{delta_cost, is_feasible};
use crate::local_search::IMPROVEMENT_EPS;
use crate::models::{Instance, Move, Solution};

/// Best improving feasible relocation, scanning sources and destinations in
/// ascending index order.
pub fn best_improving(solution: &Solution, instance: &Instance) -> Option<Move> {
    let routes = solution.routes();
    let mut best: Option<Move> = None;
    let mut best_delta = -IMPROVEMENT_EPS;

    for from_route in 0..routes.len() {
        for from_pos in 0..routes[from_route].len() {
            for to_route in 0..routes.len() {
                // Insertion indexes the post-removal sequence when staying
                // in the same route.
                let slots = if to_route == from_route {
                    routes[from_route].len() - 1
                } else {
                    routes[to_route].len()
                };
                for to_pos in 0..=slots {
                    if to_route == from_route && to_pos == from_pos {
                        continue; // reinsertion at the removal point
                    }
                    let mv = Move::Relocate {
                        from_route,
                        from_pos,
                        to_route,
                        to_pos,
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

/// A random feasible relocation, drawn within the given attempt budget.
pub fn random<R: Rng>(
    solution: &Solution,
    instance: &Instance,
    attempts: usize,
    rng: &mut R,
) -> Option<Move> {
    let routes = solution.routes();
    if solution.num_served() == 0 {
        return None;
    }

    for _ in 0..attempts {
        let from_route = rng.random_range(0..routes.len());
        if routes[from_route].is_empty() {
            continue;
        }
        let from_pos = rng.random_range(0..routes[from_route].len());
        let to_route = rng.random_range(0..routes.len());
        let slots = if to_route == from_route {
            routes[from_route].len() - 1
        } else {
            routes[to_route].len()
        };
        let to_pos = rng.random_range(0..=slots);
        if to_route == from_route && to_pos == from_pos {
            continue;
        }
        let mv = Move::Relocate {
            from_route,
            from_pos,
            to_route,
            to_pos,
        };
        if is_feasible(&mv, solution, instance) {
            return Some(mv);
        }
    }
    None
}
