//! Variable Neighborhood Descent driver.
//!
//! # Algorithm
//!
//! Keep a pointer `k` into an ordered neighbourhood list. Take the best
//! improving move of neighbourhood `k`: if one exists, apply it and reset
//! `k` to the front of the list; otherwise advance `k`. Terminate when `k`
//! walks past the end — the solution is then a local optimum of every
//! configured neighbourhood.
//!
//! Every applied move strictly decreases the cost and the cost is bounded
//! below by zero, so the descent terminates; a stagnation guard bounds
//! pathological runs on top of that.
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use crate::local_search::{Neighborhood, SearchParams};
use crate::models::{Instance, Solution};

/// Runs Variable Neighborhood Descent in place and returns the number of
/// applied moves.
///
/// `max_no_improve` bounds the consecutive non-improving neighbourhood
/// scans; the natural end-of-list termination normally fires first.
///
/// # Examples
///
/// ```
/// use u_cvrp::{vnd, Instance, Neighborhood, Route, SearchParams, Solution};
///
/// let instance = Instance::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     vec![0, 1, 1, 1],
///     3,
/// )
/// .unwrap();
/// let mut solution = Solution::from_routes(
///     vec![Route::from_customers(vec![2, 1, 3], &instance)],
///     &instance,
/// );
/// vnd(
///     &mut solution,
///     &instance,
///     &[Neighborhood::TwoOpt, Neighborhood::Relocate],
///     &SearchParams::default(),
///     50,
/// );
/// assert!((solution.cost() - 6.0).abs() < 1e-10);
/// ```
pub fn vnd(
    solution: &mut Solution,
    instance: &Instance,
    neighborhoods: &[Neighborhood],
    params: &SearchParams,
    max_no_improve: usize,
) -> usize {
    let mut k = 0;
    let mut no_improve = 0;
    let mut applied = 0;

    while k < neighborhoods.len() && no_improve < max_no_improve {
        match neighborhoods[k].best_improving(solution, instance, params) {
            Some(mv) => {
                solution.apply(&mv, instance);
                applied += 1;
                k = 0;
                no_improve = 0;
            }
            None => {
                k += 1;
                no_improve += 1;
            }
        }
    }
    applied
}
