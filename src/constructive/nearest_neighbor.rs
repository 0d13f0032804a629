//! Randomised nearest-neighbour constructive heuristic.
//!
//! # Algorithm
//!
//! Builds routes greedily from the depot: collect the unvisited customers
//! that still fit the current route's remaining capacity, sort them by
//! distance from the last stop, and pick uniformly among the nearest
//! `K = max(1, ceil(randomness · |candidates|))`. When nothing fits, close
//! the route and open a new one. With `randomness = 0` this degenerates to
//! the classic deterministic nearest-neighbour construction.
//!
//! The result is feasible by construction and reproducible for a given
//! random generator state.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers.

use rand::Rng;

use crate::models::{Instance, Route, Solution};

/// Constructs a feasible solution with the randomised nearest-neighbour
/// heuristic.
///
/// `randomness` in `[0, 1]` widens the candidate pool: 0 always takes the
/// nearest fitting customer, 1 picks uniformly among all fitting customers.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_cvrp::{nearest_neighbor, Instance};
///
/// let instance = Instance::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     vec![0, 1, 1, 1],
///     3,
/// )
/// .unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let solution = nearest_neighbor(&instance, 0.0, &mut rng);
/// assert_eq!(solution.routes()[0].customers(), &[1, 2, 3]);
/// solution.verify(&instance).unwrap();
/// ```
pub fn nearest_neighbor<R: Rng>(instance: &Instance, randomness: f64, rng: &mut R) -> Solution {
    let mut unvisited: Vec<usize> = instance.customers().collect();
    let mut routes: Vec<Route> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut load = 0;
    let mut last = 0;

    while !unvisited.is_empty() {
        let mut candidates: Vec<usize> = unvisited
            .iter()
            .copied()
            .filter(|&c| load + instance.demand(c) <= instance.capacity())
            .collect();

        if candidates.is_empty() {
            // Instance validation guarantees every demand fits an empty
            // vehicle, so the current route is non-empty here.
            debug_assert!(!current.is_empty());
            routes.push(Route::from_customers(std::mem::take(&mut current), instance));
            load = 0;
            last = 0;
            continue;
        }

        candidates.sort_by(|&a, &b| {
            instance
                .distance(last, a)
                .partial_cmp(&instance.distance(last, b))
                .expect("distances are finite")
                .then(a.cmp(&b))
        });

        let top_k = ((randomness * candidates.len() as f64).ceil() as usize).max(1);
        let next = candidates[rng.random_range(0..top_k)];

        current.push(next);
        load += instance.demand(next);
        last = next;
        unvisited.retain(|&c| c != next);
    }

    if !current.is_empty() {
        routes.push(Route::from_customers(current, instance));
    }
    Solution::from_routes(routes, instance)
}
