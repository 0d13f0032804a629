//! Tabu memory over move signatures.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing*
//! 1(3), 190-206.

use std::collections::HashMap;

use rand::Rng;

use crate::models::MoveSignature;

/// Forbids recently applied move signatures for a randomised number of
/// iterations.
///
/// Each entry maps a signature to the iteration at which it stops being
/// tabu: `expiry = iteration + tenure + U[0, random_range]`. The random
/// offset breaks the periodicity a fixed tenure would induce. Expired
/// entries are swept out lazily by [`TabuList::tick`].
///
/// Aspiration — taking a tabu move anyway because it beats the global best —
/// is the caller's decision; the list only answers membership queries.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_cvrp::{MoveSignature, TabuList};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let mut tabu = TabuList::new(3, 0);
/// tabu.add(MoveSignature::swap(2, 5), 10, &mut rng);
/// assert!(tabu.is_tabu(&MoveSignature::swap(5, 2), 11));
/// assert!(!tabu.is_tabu(&MoveSignature::swap(5, 2), 14));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    entries: HashMap<MoveSignature, usize>,
    tenure: usize,
    random_range: usize,
}

impl TabuList {
    /// Creates an empty list with the given base tenure and random offset
    /// upper bound.
    pub fn new(tenure: usize, random_range: usize) -> Self {
        Self {
            entries: HashMap::new(),
            tenure,
            random_range,
        }
    }

    /// Returns `true` iff the signature is forbidden at the given iteration.
    pub fn is_tabu(&self, signature: &MoveSignature, iteration: usize) -> bool {
        self.entries
            .get(signature)
            .is_some_and(|&expiry| expiry >= iteration)
    }

    /// Forbids a signature starting at the given iteration.
    ///
    /// Re-adding an already forbidden signature refreshes its expiry.
    pub fn add<R: Rng>(&mut self, signature: MoveSignature, iteration: usize, rng: &mut R) {
        let offset = rng.random_range(0..=self.random_range);
        self.entries
            .insert(signature, iteration + self.tenure + offset);
    }

    /// Sweeps out entries that expired before the given iteration.
    pub fn tick(&mut self, iteration: usize) {
        self.entries.retain(|_, &mut expiry| expiry >= iteration);
    }

    /// Number of live entries (expired ones linger until the next sweep).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_expiry_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut tabu = TabuList::new(5, 0);
        let sig = MoveSignature::relocate(3, 1);

        tabu.add(sig, 100, &mut rng);
        assert!(tabu.is_tabu(&sig, 100));
        assert!(tabu.is_tabu(&sig, 105));
        assert!(!tabu.is_tabu(&sig, 106));
    }

    #[test]
    fn test_unknown_signature_is_free() {
        let tabu = TabuList::new(5, 0);
        assert!(!tabu.is_tabu(&MoveSignature::swap(1, 2), 0));
    }

    #[test]
    fn test_random_offset_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..50 {
            let mut tabu = TabuList::new(10, 4);
            let sig = MoveSignature::two_opt(7, 9);
            tabu.add(sig, 0, &mut rng);
            // Expiry lands in [tenure, tenure + random_range].
            assert!(tabu.is_tabu(&sig, 10));
            assert!(!tabu.is_tabu(&sig, 15));
        }
    }

    #[test]
    fn test_readding_refreshes() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut tabu = TabuList::new(3, 0);
        let sig = MoveSignature::cross_exchange(2, 8);

        tabu.add(sig, 0, &mut rng);
        tabu.add(sig, 10, &mut rng);
        assert!(tabu.is_tabu(&sig, 13));
        assert_eq!(tabu.len(), 1);
    }

    #[test]
    fn test_tick_sweeps_expired() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut tabu = TabuList::new(2, 0);
        tabu.add(MoveSignature::swap(1, 2), 0, &mut rng);
        tabu.add(MoveSignature::swap(3, 4), 10, &mut rng);
        assert_eq!(tabu.len(), 2);

        tabu.tick(5);
        assert_eq!(tabu.len(), 1);
        assert!(tabu.is_tabu(&MoveSignature::swap(3, 4), 10));
        assert!(!tabu.is_empty());
    }

    #[test]
    fn test_symmetric_signatures_share_one_entry() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut tabu = TabuList::new(5, 0);
        tabu.add(MoveSignature::swap(9, 4), 0, &mut rng);
        assert!(tabu.is_tabu(&MoveSignature::swap(4, 9), 3));
        assert_eq!(tabu.len(), 1);
    }
}
