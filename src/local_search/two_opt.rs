//! Intra-route 2-opt neighbourhood.
//!
//! # Algorithm
//!
//! Reverse the segment `[start..=end]` of one route. With symmetric
//! distances exactly two edges change: the ones entering the segment from
//! either side. Loads are untouched, so every 2-opt move is feasible.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use crate::evaluation::delta_cost;
use crate::local_search::IMPROVEMENT_EPS;
use crate::models::{Instance, Move, Solution};

/// Best improving 2-opt reversal, scanning routes in ascending index order
/// and segment bounds ascending within them.
pub fn best_improving(solution: &Solution, instance: &Instance) -> Option<Move> {
    let routes = solution.routes();
    let mut best: Option<Move> = None;
    let mut best_delta = -IMPROVEMENT_EPS;

    for route in 0..routes.len() {
        let len = routes[route].len();
        if len < 2 {
            continue;
        }
        for start in 0..(len - 1) {
            for end in (start + 1)..len {
                let mv = Move::TwoOpt { route, start, end };
                let delta = delta_cost(&mv, solution, instance);
                if delta < best_delta {
                    best_delta = delta;
                    best = Some(mv);
                }
            }
        }
    }
    best
}

/// A random 2-opt reversal, drawn within the given attempt budget.
pub fn random<R: Rng>(solution: &Solution, attempts: usize, rng: &mut R) -> Option<Move> {
    let routes = solution.routes();
    if routes.iter().all(|r| r.len() < 2) {
        return None;
    }

    for _ in 0..attempts {
        let route = rng.random_range(0..routes.len());
        let len = routes[route].len();
        if len < 2 {
            continue;
        }
        let start = rng.random_range(0..len - 1);
        let end = rng.random_range(start + 1..len);
        return Some(Move::TwoOpt { route, start, end });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn line_instance() -> Instance {
        Instance::from_coords(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)],
            vec![0, 1, 1, 1, 1],
            10,
        )
        .expect("valid instance")
    }

    #[test]
    fn test_uncrosses_route() {
        let instance = line_instance();
        // 0 -> 1 -> 3 -> 2 -> 4 -> 0 backtracks twice.
        let solution = Solution::from_routes(
            vec![Route::from_customers(vec![1, 3, 2, 4], &instance)],
            &instance,
        );
        let mv = best_improving(&solution, &instance).expect("crossing is improvable");
        let mut improved = solution.clone();
        improved.apply(&mv, &instance);
        assert_eq!(improved.routes()[0].customers(), &[1, 2, 3, 4]);
        assert!((improved.cost() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_none_on_optimal_route() {
        let instance = line_instance();
        let solution = Solution::from_routes(
            vec![Route::from_customers(vec![1, 2, 3, 4], &instance)],
            &instance,
        );
        assert!(best_improving(&solution, &instance).is_none());
    }

    #[test]
    fn test_none_on_short_routes() {
        let instance = line_instance();
        let solution = Solution::from_routes(
            vec![
                Route::from_customers(vec![1], &instance),
                Route::from_customers(vec![2], &instance),
                Route::from_customers(vec![3], &instance),
                Route::from_customers(vec![4], &instance),
            ],
            &instance,
        );
        assert!(best_improving(&solution, &instance).is_none());
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(random(&solution, 50, &mut rng).is_none());
    }

    #[test]
    fn test_random_bounds_are_ordered() {
        let instance = line_instance();
        let solution = Solution::from_routes(
            vec![Route::from_customers(vec![1, 3, 2, 4], &instance)],
            &instance,
        );
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..50 {
            let mv = random(&solution, 50, &mut rng).expect("route is long enough");
            let Move::TwoOpt { start, end, .. } = mv else {
                panic!("two_opt sampler returned {mv:?}");
            };
            assert!(start < end);
        }
    }
}
