//! Delta-cost evaluation for moves.
//!
//! # Exactness
//!
//! A delta must equal `cost_after − cost_before` down to the last bit so
//! that long sequences of applied deltas never drift from the truth. Both
//! [`delta_cost`] and [`Solution::apply`](crate::models::Solution::apply)
//! therefore go through [`evaluate`]: the contribution of every affected
//! route is recomputed from scratch over its (hypothetical) customer
//! sequence, and the new total is assembled from the cached total in one
//! fixed order. Edge-based shortcut formulas would be cheaper but cannot
//! reproduce the cached arithmetic exactly, in particular for segment
//! reversals under floating-point addition.

use crate::models::route::sequence_distance;
use crate::models::{Instance, Move, Solution};

/// The recomputed outcome of a move: the new total cost plus the rebuilt
/// customer sequences of the affected routes.
pub(crate) struct MoveOutcome {
    pub new_total: f64,
    /// `(route index, new customer sequence)`, one or two entries.
    pub rebuilt: Vec<(usize, Vec<usize>)>,
}

/// Evaluates a move without mutating the solution.
pub(crate) fn evaluate(mv: &Move, solution: &Solution, instance: &Instance) -> MoveOutcome {
    let routes = solution.routes();
    match *mv {
        Move::Swap {
            route_a,
            pos_a,
            route_b,
            pos_b,
        } => {
            let mut seq_a = routes[route_a].customers().to_vec();
            let mut seq_b = routes[route_b].customers().to_vec();
            let held = seq_a[pos_a];
            seq_a[pos_a] = seq_b[pos_b];
            seq_b[pos_b] = held;
            two_route_outcome(solution, instance, route_a, seq_a, route_b, seq_b)
        }

        Move::Relocate {
            from_route,
            from_pos,
            to_route,
            to_pos,
        } => {
            if from_route == to_route {
                let mut seq = routes[from_route].customers().to_vec();
                let customer = seq.remove(from_pos);
                seq.insert(to_pos, customer);
                one_route_outcome(solution, instance, from_route, seq)
            } else {
                let mut seq_from = routes[from_route].customers().to_vec();
                let customer = seq_from.remove(from_pos);
                let mut seq_to = routes[to_route].customers().to_vec();
                seq_to.insert(to_pos, customer);
                two_route_outcome(solution, instance, from_route, seq_from, to_route, seq_to)
            }
        }

        Move::TwoOpt { route, start, end } => {
            let mut seq = routes[route].customers().to_vec();
            seq[start..=end].reverse();
            one_route_outcome(solution, instance, route, seq)
        }

        Move::CrossExchange {
            route_a,
            start_a,
            len_a,
            route_b,
            start_b,
            len_b,
        } => {
            let seq_a = routes[route_a].customers();
            let seq_b = routes[route_b].customers();
            let mut new_a = Vec::with_capacity(seq_a.len() - len_a + len_b);
            new_a.extend_from_slice(&seq_a[..start_a]);
            new_a.extend_from_slice(&seq_b[start_b..start_b + len_b]);
            new_a.extend_from_slice(&seq_a[start_a + len_a..]);
            let mut new_b = Vec::with_capacity(seq_b.len() - len_b + len_a);
            new_b.extend_from_slice(&seq_b[..start_b]);
            new_b.extend_from_slice(&seq_a[start_a..start_a + len_a]);
            new_b.extend_from_slice(&seq_b[start_b + len_b..]);
            two_route_outcome(solution, instance, route_a, new_a, route_b, new_b)
        }
    }
}

/// Change in total cost from applying the move, without mutating.
///
/// Negative means the move improves the solution.
///
/// # Examples
///
/// ```
/// use u_cvrp::{delta_cost, Instance, Move, Route, Solution};
///
/// let instance = Instance::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     vec![0, 1, 1, 1],
///     3,
/// )
/// .unwrap();
/// // 2, 1, 3 backtracks; reversing [2, 1] repairs it.
/// let solution = Solution::from_routes(
///     vec![Route::from_customers(vec![2, 1, 3], &instance)],
///     &instance,
/// );
/// let mv = Move::TwoOpt { route: 0, start: 0, end: 1 };
/// assert!(delta_cost(&mv, &solution, &instance) < 0.0);
/// ```
pub fn delta_cost(mv: &Move, solution: &Solution, instance: &Instance) -> f64 {
    evaluate(mv, solution, instance).new_total - solution.cost()
}

fn one_route_outcome(
    solution: &Solution,
    instance: &Instance,
    route: usize,
    seq: Vec<usize>,
) -> MoveOutcome {
    let old = solution.routes()[route].distance(instance);
    let new = sequence_distance(&seq, instance);
    MoveOutcome {
        new_total: solution.cost() - old + new,
        rebuilt: vec![(route, seq)],
    }
}

fn two_route_outcome(
    solution: &Solution,
    instance: &Instance,
    route_a: usize,
    seq_a: Vec<usize>,
    route_b: usize,
    seq_b: Vec<usize>,
) -> MoveOutcome {
    let old_a = solution.routes()[route_a].distance(instance);
    let old_b = solution.routes()[route_b].distance(instance);
    let new_a = sequence_distance(&seq_a, instance);
    let new_b = sequence_distance(&seq_b, instance);
    MoveOutcome {
        new_total: solution.cost() - old_a - old_b + new_a + new_b,
        rebuilt: vec![(route_a, seq_a), (route_b, seq_b)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid_instance() -> Instance {
        Instance::from_coords(
            &[
                (0.0, 0.0),
                (2.0, 1.0),
                (4.0, 0.0),
                (1.0, 3.0),
                (3.0, 3.0),
                (5.0, 2.0),
            ],
            vec![0, 2, 3, 1, 2, 2],
            6,
        )
        .expect("valid instance")
    }

    fn start_solution(instance: &Instance) -> Solution {
        Solution::from_routes(
            vec![
                Route::from_customers(vec![1, 2], instance),
                Route::from_customers(vec![3, 4, 5], instance),
            ],
            instance,
        )
    }

    fn assert_delta_exact(mv: Move, instance: &Instance, solution: &Solution) {
        let delta = delta_cost(&mv, solution, instance);
        let mut mutated = solution.clone();
        mutated.apply(&mv, instance);
        // Bitwise equality: delta and apply share the same arithmetic path.
        assert_eq!(
            mutated.cost() - solution.cost(),
            delta,
            "delta mismatch for {mv:?}"
        );
        mutated.verify(instance).expect("move preserved invariants");
    }

    #[test]
    fn test_swap_delta_matches_apply() {
        let instance = grid_instance();
        let solution = start_solution(&instance);
        assert_delta_exact(
            Move::Swap {
                route_a: 0,
                pos_a: 0,
                route_b: 1,
                pos_b: 2,
            },
            &instance,
            &solution,
        );
    }

    #[test]
    fn test_relocate_delta_matches_apply() {
        let instance = grid_instance();
        let solution = start_solution(&instance);
        assert_delta_exact(
            Move::Relocate {
                from_route: 1,
                from_pos: 0,
                to_route: 0,
                to_pos: 1,
            },
            &instance,
            &solution,
        );
        // Intra-route reinsertion.
        assert_delta_exact(
            Move::Relocate {
                from_route: 1,
                from_pos: 0,
                to_route: 1,
                to_pos: 1,
            },
            &instance,
            &solution,
        );
    }

    #[test]
    fn test_two_opt_delta_matches_apply() {
        let instance = grid_instance();
        let solution = start_solution(&instance);
        assert_delta_exact(
            Move::TwoOpt {
                route: 1,
                start: 0,
                end: 2,
            },
            &instance,
            &solution,
        );
    }

    #[test]
    fn test_cross_exchange_delta_matches_apply() {
        let instance = grid_instance();
        let solution = start_solution(&instance);
        // Exchanging customer 2 (demand 3) for [4, 5] (demand 4) keeps both
        // loads within the capacity of 6.
        assert_delta_exact(
            Move::CrossExchange {
                route_a: 0,
                start_a: 1,
                len_a: 1,
                route_b: 1,
                start_b: 1,
                len_b: 2,
            },
            &instance,
            &solution,
        );
    }

    #[test]
    fn test_relocate_into_empty_route() {
        let instance = grid_instance();
        let solution = Solution::from_routes(
            vec![
                Route::from_customers(vec![1, 2, 3], &instance),
                Route::from_customers(vec![4, 5], &instance),
                Route::new(),
            ],
            &instance,
        );
        assert_delta_exact(
            Move::Relocate {
                from_route: 0,
                from_pos: 1,
                to_route: 2,
                to_pos: 0,
            },
            &instance,
            &solution,
        );
    }

    /// Random instances, random feasible moves: the delta promise must hold
    /// on every one of them.
    #[test]
    fn test_delta_exact_on_random_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..60 {
            let n = rng.random_range(4..12usize);
            let coords: Vec<(f64, f64)> = (0..=n)
                .map(|_| (rng.random_range(0.0..50.0), rng.random_range(0.0..50.0)))
                .collect();
            let mut demands = vec![0];
            demands.extend((0..n).map(|_| rng.random_range(1..5)));
            let instance = Instance::from_coords(&coords, demands, 100).expect("valid");

            // Two routes splitting the customers roughly in half.
            let half = n / 2;
            let first: Vec<usize> = (1..=half).collect();
            let second: Vec<usize> = (half + 1..=n).collect();
            let solution = Solution::from_routes(
                vec![
                    Route::from_customers(first, &instance),
                    Route::from_customers(second, &instance),
                ],
                &instance,
            );

            let len_a = solution.routes()[0].len();
            let len_b = solution.routes()[1].len();
            let moves = [
                Move::Swap {
                    route_a: 0,
                    pos_a: rng.random_range(0..len_a),
                    route_b: 1,
                    pos_b: rng.random_range(0..len_b),
                },
                Move::Relocate {
                    from_route: 0,
                    from_pos: rng.random_range(0..len_a),
                    to_route: 1,
                    to_pos: rng.random_range(0..=len_b),
                },
                Move::TwoOpt {
                    route: 1,
                    start: 0,
                    end: len_b - 1,
                },
            ];
            for mv in moves {
                assert_delta_exact(mv, &instance, &solution);
            }
        }
    }
}
