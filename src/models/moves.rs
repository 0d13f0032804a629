//! Move and move-signature types.

use crate::models::Solution;

/// A single local modification of a solution.
///
/// Moves are produced by the neighbourhood enumerators in
/// [`local_search`](crate::local_search), screened through
/// [`evaluation`](crate::evaluation), and consumed at most once by
/// [`Solution::apply`](crate::models::Solution::apply). They are never kept
/// beyond the iteration that created them.
///
/// Positions are indices into the current customer sequences of the named
/// routes. For [`Move::Relocate`] with `to_route == from_route`, `to_pos`
/// indexes the sequence *after* the customer has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Exchange the customer at `(route_a, pos_a)` with the one at
    /// `(route_b, pos_b)`; the two routes are distinct.
    Swap {
        route_a: usize,
        pos_a: usize,
        route_b: usize,
        pos_b: usize,
    },
    /// Remove the customer at `(from_route, from_pos)` and insert it at
    /// position `to_pos` of `to_route`.
    Relocate {
        from_route: usize,
        from_pos: usize,
        to_route: usize,
        to_pos: usize,
    },
    /// Reverse the segment `start..=end` within a single route.
    TwoOpt {
        route: usize,
        start: usize,
        end: usize,
    },
    /// Swap the segment of `len_a` customers starting at `start_a` in
    /// `route_a` with the segment of `len_b` customers starting at `start_b`
    /// in `route_b`; the two routes are distinct.
    CrossExchange {
        route_a: usize,
        start_a: usize,
        len_a: usize,
        route_b: usize,
        start_b: usize,
        len_b: usize,
    },
}

impl Move {
    /// Canonical tabu key of this move against the given solution.
    ///
    /// The signature abstracts the move to a small key that survives the
    /// position shifts later moves cause, so the tabu list forbids the
    /// *idea* of the move rather than its exact coordinates.
    pub fn signature(&self, solution: &Solution) -> MoveSignature {
        let routes = solution.routes();
        match *self {
            Move::Swap {
                route_a,
                pos_a,
                route_b,
                pos_b,
            } => MoveSignature::swap(
                routes[route_a].customers()[pos_a],
                routes[route_b].customers()[pos_b],
            ),
            Move::Relocate {
                from_route,
                from_pos,
                to_route,
                ..
            } => MoveSignature::relocate(routes[from_route].customers()[from_pos], to_route),
            Move::TwoOpt { route, start, end } => MoveSignature::two_opt(
                routes[route].customers()[start],
                routes[route].customers()[end],
            ),
            Move::CrossExchange {
                route_a,
                start_a,
                route_b,
                start_b,
                ..
            } => MoveSignature::cross_exchange(
                routes[route_a].customers()[start_a],
                routes[route_b].customers()[start_b],
            ),
        }
    }
}

/// Canonical key identifying a move in the tabu list.
///
/// Constructors normalise symmetric arguments, so `swap(3, 7)` and
/// `swap(7, 3)` produce the same key.
///
/// # Examples
///
/// ```
/// use u_cvrp::MoveSignature;
///
/// assert_eq!(MoveSignature::swap(3, 7), MoveSignature::swap(7, 3));
/// assert_ne!(MoveSignature::swap(3, 7), MoveSignature::two_opt(3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSignature {
    /// Unordered pair of swapped customer ids.
    Swap(usize, usize),
    /// Relocated customer and its destination route index. Route indices are
    /// stable because empty routes are retained during search.
    Relocate(usize, usize),
    /// Unordered pair of the reversal endpoints' customer ids.
    TwoOpt(usize, usize),
    /// Unordered pair of the exchanged segments' head customer ids.
    CrossExchange(usize, usize),
}

impl MoveSignature {
    /// Key for a swap of two customers.
    pub fn swap(a: usize, b: usize) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        MoveSignature::Swap(lo, hi)
    }

    /// Key for relocating `customer` into `to_route`.
    pub fn relocate(customer: usize, to_route: usize) -> Self {
        MoveSignature::Relocate(customer, to_route)
    }

    /// Key for a 2-opt reversal with the given endpoint customers.
    pub fn two_opt(a: usize, b: usize) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        MoveSignature::TwoOpt(lo, hi)
    }

    /// Key for a cross-exchange with the given segment heads.
    pub fn cross_exchange(a: usize, b: usize) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        MoveSignature::CrossExchange(lo, hi)
    }
}
