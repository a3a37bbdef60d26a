use super::{ReactionGenerator, ReactionTuple, mixed_radix_digits};
use crate::core::pool::FragmentPool;

/// Generates the full cartesian reaction space.
///
/// For a scaffold with `r` variable sites the space holds
/// `(linkers × building blocks)^r` combinations. A per-scaffold counter is
/// decomposed into `r` linker digits followed by `r` building-block digits,
/// linker digits more significant, so enumeration is lexicographic over
/// `(l_1, …, l_r, b_1, …, b_r)`. Scaffolds are visited in pool order.
#[derive(Debug)]
pub struct FullGenerator {
    num_linkers: u64,
    num_blocks: u64,
    site_counts: Vec<usize>,
    spaces: Vec<u64>,
    cursor: usize,
    reaction_index: u64,
    total: u64,
}

impl FullGenerator {
    pub fn new(pool: &FragmentPool) -> Self {
        let num_linkers = pool.linker_count() as u64;
        let num_blocks = pool.building_block_count() as u64;
        let site_counts: Vec<usize> = (0..pool.scaffold_count())
            .map(|idx| pool.scaffold(idx).site_count())
            .collect();
        let spaces: Vec<u64> = site_counts
            .iter()
            .map(|&sites| num_linkers.saturating_mul(num_blocks).saturating_pow(sites as u32))
            .collect();
        let total = spaces.iter().fold(0u64, |sum, &s| sum.saturating_add(s));
        let mut generator = Self {
            num_linkers,
            num_blocks,
            site_counts,
            spaces,
            cursor: 0,
            reaction_index: 0,
            total,
        };
        generator.skip_exhausted_scaffolds();
        generator
    }

    fn skip_exhausted_scaffolds(&mut self) {
        while self.cursor < self.spaces.len() && self.spaces[self.cursor] == 0 {
            self.cursor += 1;
        }
    }
}

impl ReactionGenerator for FullGenerator {
    fn has_next(&self) -> bool {
        self.cursor < self.spaces.len()
    }

    fn next_reaction(&mut self) -> Option<ReactionTuple> {
        if !self.has_next() {
            return None;
        }
        let sites = self.site_counts[self.cursor];
        let space = self.spaces[self.cursor];
        let radices = std::iter::repeat_n(self.num_linkers, sites)
            .chain(std::iter::repeat_n(self.num_blocks, sites));
        let digits = mixed_radix_digits(self.reaction_index, radices, space);
        let tuple = ReactionTuple {
            scaffold: self.cursor,
            linkers: digits[..sites].iter().map(|&d| d as usize).collect(),
            building_blocks: digits[sites..].iter().map(|&d| d as usize).collect(),
        };
        self.reaction_index += 1;
        if self.reaction_index >= space {
            self.cursor += 1;
            self.reaction_index = 0;
            self.skip_exhausted_scaffolds();
        }
        Some(tuple)
    }

    fn max_count(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(scaffolds: &[&str], linkers: &[&str], blocks: &[&str]) -> FragmentPool {
        let lines = |raw: &[&str]| raw.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        FragmentPool::from_lines(&lines(scaffolds), &lines(linkers), &lines(blocks), true).unwrap()
    }

    #[test]
    fn count_law_over_two_sites() {
        let pool = pool(
            &["[R2]C([R1])C"],
            &["[A][R1]", "[A]O[R1]"],
            &["[A]CC", "[A]CN", "[A]CO", "[A]CS"],
        );
        let generator = FullGenerator::new(&pool);
        assert_eq!(generator.max_count(), 64);
    }

    #[test]
    fn linker_digits_are_more_significant() {
        let pool = pool(
            &["[R1]CC"],
            &["[A][R1]", "[A]O[R1]"],
            &["[A]CC", "[A]CN", "[A]CO", "[A]CS"],
        );
        let mut generator = FullGenerator::new(&pool);
        assert_eq!(generator.max_count(), 8);

        let mut produced = Vec::new();
        while let Some(tuple) = generator.next_reaction() {
            produced.push((tuple.scaffold, tuple.linkers[0], tuple.building_blocks[0]));
        }
        assert_eq!(
            produced,
            vec![
                (0, 0, 0),
                (0, 0, 1),
                (0, 0, 2),
                (0, 0, 3),
                (0, 1, 0),
                (0, 1, 1),
                (0, 1, 2),
                (0, 1, 3),
            ]
        );
        assert!(!generator.has_next());
    }

    #[test]
    fn scaffolds_are_visited_in_pool_order() {
        let pool = pool(&["[R1]CC", "[R1]CN"], &["[A][R1]"], &["[A]CC", "[A]CN"]);
        let mut generator = FullGenerator::new(&pool);
        assert_eq!(generator.max_count(), 4);

        let scaffolds: Vec<usize> = std::iter::from_fn(|| generator.next_reaction())
            .map(|t| t.scaffold)
            .collect();
        assert_eq!(scaffolds, vec![0, 0, 1, 1]);
    }

    #[test]
    fn empty_pools_produce_nothing() {
        let pool = pool(&["[R1]CC"], &["[A][R1]"], &[]);
        let mut generator = FullGenerator::new(&pool);
        assert_eq!(generator.max_count(), 0);
        assert!(!generator.has_next());
        assert!(generator.next_reaction().is_none());
    }

    #[test]
    fn two_site_enumeration_orders_sites_lexicographically() {
        let pool = pool(
            &["[R2]C([R1])C"],
            &["[A][R1]", "[A]O[R1]"],
            &["[A]CC", "[A]CN"],
        );
        let mut generator = FullGenerator::new(&pool);
        assert_eq!(generator.max_count(), 16);

        let first = generator.next_reaction().unwrap();
        assert_eq!(first.linkers, vec![0, 0]);
        assert_eq!(first.building_blocks, vec![0, 0]);
        let second = generator.next_reaction().unwrap();
        assert_eq!(second.linkers, vec![0, 0]);
        assert_eq!(second.building_blocks, vec![0, 1]);
    }
}
