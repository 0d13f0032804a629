//! Constructive heuristics producing initial feasible solutions.

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
