//! Immutable problem instance.

use crate::distance::DistanceMatrix;
use crate::error::SolverError;

/// Symmetry tolerance applied when validating the distance matrix.
const SYMMETRY_TOL: f64 = 1e-9;

/// An immutable CVRP instance: demands, vehicle capacity, and a symmetric
/// distance matrix.
///
/// Location 0 is the depot; customers are numbered `1..=n`. All vehicles
/// share the same capacity. The instance is validated once at construction;
/// search components never re-check it.
///
/// # Examples
///
/// ```
/// use u_cvrp::{DistanceMatrix, Instance};
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = Instance::new(vec![0, 1, 1], 3, dm).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.demand(1), 1);
/// assert!((instance.distance(1, 2) - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    demands: Vec<i32>,
    capacity: i32,
    distances: DistanceMatrix,
    best_known: Option<f64>,
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// `demands` is indexed by location id, so `demands[0]` is the depot
    /// (must be zero) and `demands.len() - 1` is the customer count.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInstance`] if the matrix dimensions do
    /// not match the demand vector, the matrix has negative, non-finite,
    /// diagonal, or asymmetric entries, the capacity is non-positive, a
    /// demand is negative, or any demand exceeds the capacity.
    pub fn new(
        demands: Vec<i32>,
        capacity: i32,
        distances: DistanceMatrix,
    ) -> Result<Self, SolverError> {
        if demands.len() < 2 {
            return Err(SolverError::InvalidInstance(
                "instance must have a depot and at least one customer".into(),
            ));
        }
        if distances.size() != demands.len() {
            return Err(SolverError::InvalidInstance(format!(
                "distance matrix covers {} locations but {} demands were given",
                distances.size(),
                demands.len()
            )));
        }
        if capacity <= 0 {
            return Err(SolverError::InvalidInstance(format!(
                "capacity must be positive, got {capacity}"
            )));
        }
        if demands[0] != 0 {
            return Err(SolverError::InvalidInstance(format!(
                "depot demand must be zero, got {}",
                demands[0]
            )));
        }
        for (id, &demand) in demands.iter().enumerate().skip(1) {
            if demand < 0 {
                return Err(SolverError::InvalidInstance(format!(
                    "customer {id} has negative demand {demand}"
                )));
            }
            if demand > capacity {
                return Err(SolverError::InvalidInstance(format!(
                    "customer {id} demand {demand} exceeds capacity {capacity}"
                )));
            }
        }
        if !distances.is_well_formed() {
            return Err(SolverError::InvalidInstance(
                "distance matrix has negative, non-finite, or non-zero diagonal entries".into(),
            ));
        }
        if !distances.is_symmetric(SYMMETRY_TOL) {
            return Err(SolverError::InvalidInstance(
                "distance matrix is not symmetric".into(),
            ));
        }

        Ok(Self {
            demands,
            capacity,
            distances,
            best_known: None,
        })
    }

    /// Creates an instance from planar coordinates with Euclidean distances.
    ///
    /// `coords[0]` is the depot. Demands are indexed the same way.
    pub fn from_coords(
        coords: &[(f64, f64)],
        demands: Vec<i32>,
        capacity: i32,
    ) -> Result<Self, SolverError> {
        Self::new(demands, capacity, DistanceMatrix::from_coords(coords))
    }

    /// Attaches a reference objective used for gap reporting.
    pub fn with_best_known(mut self, cost: f64) -> Self {
        self.best_known = Some(cost);
        self
    }

    /// Number of customers (depot excluded).
    pub fn num_customers(&self) -> usize {
        self.demands.len() - 1
    }

    /// Demand of the given location (zero for the depot).
    pub fn demand(&self, id: usize) -> i32 {
        self.demands[id]
    }

    /// Shared vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Distance between two locations.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Iterator over customer ids `1..=n`.
    pub fn customers(&self) -> std::ops::Range<usize> {
        1..self.demands.len()
    }

    /// The reference objective, if one was attached.
    pub fn best_known(&self) -> Option<f64> {
        self.best_known
    }

    /// Gap of `cost` versus the reference objective, in percent.
    ///
    /// Returns `None` when no reference objective is attached.
    pub fn gap_percentage(&self, cost: f64) -> Option<f64> {
        self.best_known
            .map(|best| (cost - best) / best * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_instance() -> Instance {
        Instance::from_coords(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
            vec![0, 1, 1, 1],
            3,
        )
        .expect("valid instance")
    }

    #[test]
    fn test_accessors() {
        let instance = line_instance();
        assert_eq!(instance.num_customers(), 3);
        assert_eq!(instance.capacity(), 3);
        assert_eq!(instance.demand(0), 0);
        assert_eq!(instance.demand(2), 1);
        assert_eq!(instance.customers().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!((instance.distance(0, 3) - 3.0).abs() < 1e-10);
        assert!(instance.best_known().is_none());
    }

    #[test]
    fn test_rejects_demand_over_capacity() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        let err = Instance::new(vec![0, 10], 5, dm).unwrap_err();
        assert!(err.to_string().contains("exceeds capacity"));
    }

    #[test]
    fn test_rejects_negative_demand() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(Instance::new(vec![0, -1], 5, dm).is_err());
    }

    #[test]
    fn test_rejects_nonzero_depot_demand() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(Instance::new(vec![3, 1], 5, dm).is_err());
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(Instance::new(vec![0, 1, 1], 5, dm).is_err());
    }

    #[test]
    fn test_rejects_negative_distance() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, -2.0, -2.0, 0.0]).unwrap();
        assert!(Instance::new(vec![0, 1], 5, dm).is_err());
    }

    #[test]
    fn test_rejects_asymmetric_matrix() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0, 0.0]).unwrap();
        assert!(Instance::new(vec![0, 1], 5, dm).is_err());
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(Instance::new(vec![0, 1], 0, dm).is_err());
    }

    #[test]
    fn test_zero_demand_customer_allowed() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        let instance = Instance::new(vec![0, 0], 5, dm).expect("zero demand is legal");
        assert_eq!(instance.demand(1), 0);
    }

    #[test]
    fn test_gap_percentage() {
        let instance = line_instance().with_best_known(100.0);
        assert_eq!(instance.best_known(), Some(100.0));
        let gap = instance.gap_percentage(107.0).expect("reference attached");
        assert!((gap - 7.0).abs() < 1e-10);
        assert!(line_instance().gap_percentage(107.0).is_none());
    }
}
