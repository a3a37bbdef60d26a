use crate::core::notation::markers::{MAX_RING_NUMBER, MIN_RING_NUMBER};
use crate::core::pool::FragmentPool;

/// Hands out ring-closure labels for one molecule.
///
/// Labels start at 10 and only count upward, so no label is ever reused
/// within a molecule even across variable sites: interleaved `%NN` pairs
/// must not alias. Numbers already used by the current site's scaffold,
/// linker, or building block are skipped.
#[derive(Debug)]
pub struct RingNumberAllocator {
    next: u32,
}

impl RingNumberAllocator {
    pub fn new() -> Self {
        Self {
            next: MIN_RING_NUMBER,
        }
    }

    /// The next label not blacklisted by the referenced fragments, or `None`
    /// once the two-digit label space is exhausted.
    pub fn allocate(
        &mut self,
        pool: &FragmentPool,
        scaffold: usize,
        linker: usize,
        building_block: usize,
    ) -> Option<u32> {
        while self.next <= MAX_RING_NUMBER {
            let number = self.next;
            self.next += 1;
            if !pool.is_number_blacklisted(number, scaffold, linker, building_block) {
                return Some(number);
            }
        }
        None
    }
}

impl Default for RingNumberAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(scaffold: &str, linker: &str, block: &str) -> FragmentPool {
        FragmentPool::from_lines(
            &[scaffold.to_string()],
            &[linker.to_string()],
            &[block.to_string()],
            false,
        )
        .unwrap()
    }

    #[test]
    fn allocation_starts_at_ten_and_advances() {
        let pool = pool("[R1]CC", "[A]O[R1]", "[A]CC");
        let mut rings = RingNumberAllocator::new();
        assert_eq!(rings.allocate(&pool, 0, 0, 0), Some(10));
        assert_eq!(rings.allocate(&pool, 0, 0, 0), Some(11));
    }

    #[test]
    fn blacklisted_numbers_are_skipped() {
        let pool = pool("[R1]C%10CC%10", "[A]O[R1]", "[A]C%11CC%11");
        let mut rings = RingNumberAllocator::new();
        assert_eq!(rings.allocate(&pool, 0, 0, 0), Some(12));
    }

    #[test]
    fn exhaustion_yields_none() {
        let pool = pool("[R1]CC", "[A]O[R1]", "[A]CC");
        let mut rings = RingNumberAllocator::new();
        for _ in 0..90 {
            assert!(rings.allocate(&pool, 0, 0, 0).is_some());
        }
        assert_eq!(rings.allocate(&pool, 0, 0, 0), None);
    }
}
