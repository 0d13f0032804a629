//! Capacity feasibility checks for moves.

use crate::models::{Instance, Move, Solution};

/// Returns `true` iff applying the move keeps every affected route's load
/// within capacity.
///
/// Intra-route moves (2-opt, same-route relocate) never change loads and
/// are always feasible. The check reads cached loads and the demands of the
/// customers being moved; it never walks whole routes.
///
/// # Examples
///
/// ```
/// use u_cvrp::{is_feasible, Instance, Move, Route, Solution};
///
/// let instance = Instance::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     vec![0, 1, 1, 2],
///     2,
/// )
/// .unwrap();
/// let solution = Solution::from_routes(
///     vec![
///         Route::from_customers(vec![1, 2], &instance),
///         Route::from_customers(vec![3], &instance),
///     ],
///     &instance,
/// );
/// // Route 1 is full; moving customer 3 into it would overload.
/// let mv = Move::Relocate { from_route: 1, from_pos: 0, to_route: 0, to_pos: 2 };
/// assert!(!is_feasible(&mv, &solution, &instance));
/// ```
pub fn is_feasible(mv: &Move, solution: &Solution, instance: &Instance) -> bool {
    let routes = solution.routes();
    let capacity = instance.capacity();
    match *mv {
        Move::Swap {
            route_a,
            pos_a,
            route_b,
            pos_b,
        } => {
            let demand_a = instance.demand(routes[route_a].customers()[pos_a]);
            let demand_b = instance.demand(routes[route_b].customers()[pos_b]);
            routes[route_a].load() - demand_a + demand_b <= capacity
                && routes[route_b].load() - demand_b + demand_a <= capacity
        }

        Move::Relocate {
            from_route,
            from_pos,
            to_route,
            ..
        } => {
            if from_route == to_route {
                return true;
            }
            let demand = instance.demand(routes[from_route].customers()[from_pos]);
            routes[to_route].load() + demand <= capacity
        }

        Move::TwoOpt { .. } => true,

        Move::CrossExchange {
            route_a,
            start_a,
            len_a,
            route_b,
            start_b,
            len_b,
        } => {
            let segment_a: i32 = routes[route_a].customers()[start_a..start_a + len_a]
                .iter()
                .map(|&c| instance.demand(c))
                .sum();
            let segment_b: i32 = routes[route_b].customers()[start_b..start_b + len_b]
                .iter()
                .map(|&c| instance.demand(c))
                .sum();
            routes[route_a].load() - segment_a + segment_b <= capacity
                && routes[route_b].load() - segment_b + segment_a <= capacity
        }
    }
}
