//! Solver error types.

use std::fmt;

/// An error raised while validating problem data or configuration.
///
/// Once inputs are validated, search itself cannot fail: construction, VND,
/// and the annealing loop always hold a feasible solution. A wall-clock
/// timeout is reported through diagnostics, never through this type.
///
/// # Examples
///
/// ```
/// use u_cvrp::{DistanceMatrix, Instance, SolverError};
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
/// let err = Instance::new(vec![0, 50], 10, dm).unwrap_err();
/// assert!(matches!(err, SolverError::InvalidInstance(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The problem instance is malformed: a demand exceeds capacity, a
    /// distance is negative or non-finite, the matrix dimensions do not
    /// match the demand vector, or the depot is missing.
    InvalidInstance(String),

    /// A configuration value is outside its legal range, e.g. a cooling
    /// factor not in (0, 1) or an empty neighbourhood list.
    InvalidConfig(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidInstance(msg) => write!(f, "invalid instance: {msg}"),
            SolverError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for SolverError {}
