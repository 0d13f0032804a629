//! # u-cvrp
//!
//! Hybrid metaheuristic solver for the Capacitated Vehicle Routing Problem
//! (symmetric distances, single depot, identical vehicles, no time
//! windows): randomised nearest-neighbour construction, four neighbourhood
//! operators, Variable Neighborhood Descent intensification, and a
//! Simulated Annealing + Tabu Search outer loop.
//!
//! Instances arrive pre-parsed as a demand vector plus distance matrix;
//! solution output is the textual route listing rendered by
//! [`Solution`]'s `Display` impl. Runs are reproducible: the same instance,
//! configuration, and seed give bit-identical results.
//!
//! ## Modules
//!
//! - [`models`] — Instance, Route, Solution, Move, MoveSignature
//! - [`distance`] — Dense symmetric distance matrix
//! - [`evaluation`] — Delta-cost evaluation and capacity feasibility
//! - [`constructive`] — Randomised nearest-neighbour construction
//! - [`local_search`] — Neighbourhood operators and the VND driver
//! - [`solver`] — Tabu memory and the SA + Tabu runner
//! - [`config`] — Sectioned, serde-friendly solver configuration
//!
//! ## Example
//!
//! ```
//! use u_cvrp::{solve, Instance, SolverConfig};
//!
//! let instance = Instance::from_coords(
//!     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
//!     vec![0, 1, 1, 1],
//!     3,
//! )
//! .unwrap();
//! let outcome = solve(&instance, &SolverConfig::default().with_seed(42)).unwrap();
//! assert_eq!(outcome.solution.to_string(), "Route #1: 1 2 3\nCost 6");
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;

mod error;

pub use config::SolverConfig;
pub use constructive::nearest_neighbor;
pub use distance::DistanceMatrix;
pub use error::SolverError;
pub use evaluation::{delta_cost, is_feasible};
pub use local_search::{vnd, Neighborhood, SearchParams};
pub use models::{Instance, Move, MoveSignature, Route, Solution};
pub use solver::{solve, Diagnostics, SolveOutcome, TabuList};
