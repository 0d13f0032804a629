//! Solution type: a set of routes with a cached total cost.

use std::fmt;

use crate::evaluation;
use crate::models::{Instance, Move, Route};

/// A complete CVRP solution: one route per vehicle plus a cached total cost.
///
/// Invariants after every public mutation:
///
/// 1. Every customer appears in exactly one route exactly once.
/// 2. No route load exceeds the vehicle capacity.
/// 3. The cached total cost agrees with a from-scratch recomputation.
///
/// Empty routes are retained during search so that later relocations can
/// refill them; the [`Display`] rendering filters them out, which is the
/// form external writers consume.
///
/// # Examples
///
/// ```
/// use u_cvrp::{Instance, Route, Solution};
///
/// let instance = Instance::from_coords(
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     vec![0, 1, 1, 1],
///     3,
/// )
/// .unwrap();
/// let solution = Solution::from_routes(
///     vec![Route::from_customers(vec![1, 2, 3], &instance)],
///     &instance,
/// );
/// assert!((solution.cost() - 6.0).abs() < 1e-10);
/// assert_eq!(format!("{solution}"), "Route #1: 1 2 3\nCost 6");
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    routes: Vec<Route>,
    total_cost: f64,
}

impl Solution {
    /// Creates a solution over the given routes, computing its total cost.
    pub fn from_routes(routes: Vec<Route>, instance: &Instance) -> Self {
        let mut solution = Self {
            routes,
            total_cost: 0.0,
        };
        solution.total_cost = solution.recompute_cost(instance);
        solution
    }

    /// The routes, empty placeholders included.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Cached total cost.
    pub fn cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of routes, empty placeholders included.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Iterator over the routes that actually serve customers.
    pub fn non_empty_routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|r| !r.is_empty())
    }

    /// Number of routes that actually serve customers.
    pub fn num_non_empty_routes(&self) -> usize {
        self.non_empty_routes().count()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Applies a move, updating the affected routes' sequences and loads and
    /// the cached total cost.
    ///
    /// The new total is the exact value
    /// [`evaluation::delta_cost`](crate::evaluation::delta_cost) promised:
    /// both go through the same arithmetic, so a delta computed beforehand
    /// equals `cost()` after minus `cost()` before, bit for bit.
    ///
    /// Applying a move that violates capacity is a programmer error; callers
    /// screen with [`evaluation::is_feasible`](crate::evaluation::is_feasible).
    pub fn apply(&mut self, mv: &Move, instance: &Instance) {
        debug_assert!(
            evaluation::is_feasible(mv, self, instance),
            "move violates capacity: {mv:?}"
        );
        let outcome = evaluation::evaluate(mv, self, instance);
        for (index, customers) in outcome.rebuilt {
            self.routes[index].set_customers(customers, instance);
        }
        self.total_cost = outcome.new_total;
    }

    /// Recomputes the total cost from scratch.
    pub(crate) fn recompute_cost(&self, instance: &Instance) -> f64 {
        self.routes.iter().map(|r| r.distance(instance)).sum()
    }

    /// Recomputes everything from scratch and checks the solution
    /// invariants. Intended for tests and debugging only.
    pub fn verify(&self, instance: &Instance) -> Result<(), String> {
        let mut seen = vec![false; instance.num_customers() + 1];
        for (index, route) in self.routes.iter().enumerate() {
            for &customer in route.customers() {
                if customer == 0 || customer > instance.num_customers() {
                    return Err(format!("route {index} visits unknown location {customer}"));
                }
                if seen[customer] {
                    return Err(format!("customer {customer} appears more than once"));
                }
                seen[customer] = true;
            }

            let load = crate::models::route::sequence_load(route.customers(), instance);
            if load != route.load() {
                return Err(format!(
                    "route {index} cached load {} differs from recomputed {load}",
                    route.load()
                ));
            }
            if load > instance.capacity() {
                return Err(format!(
                    "route {index} load {load} exceeds capacity {}",
                    instance.capacity()
                ));
            }
        }
        if let Some(missing) = seen.iter().skip(1).position(|&v| !v) {
            return Err(format!("customer {} is not served", missing + 1));
        }

        let recomputed = self.recompute_cost(instance);
        let tolerance = 1e-6 * recomputed.max(1.0);
        if (self.total_cost - recomputed).abs() > tolerance {
            return Err(format!(
                "cached cost {} differs from recomputed {recomputed}",
                self.total_cost
            ));
        }
        Ok(())
    }
}

/// Renders the external textual form consumed by solution writers:
/// one `Route #k: …` line per non-empty route, then `Cost <total>` with the
/// total rounded to a whole number.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, route) in self.non_empty_routes().enumerate() {
            write!(f, "Route #{}:", index + 1)?;
            for customer in route.customers() {
                write!(f, " {customer}")?;
            }
            writeln!(f)?;
        }
        write!(f, "Cost {:.0}", self.total_cost)
    }
}
