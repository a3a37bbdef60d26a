use super::scheme::{CombinationScheme, SchemeEntry, SchemeError};
use super::{ReactionGenerator, ReactionTuple, mixed_radix_digits};
use crate::core::pool::FragmentPool;

/// Generates only the reactions a combination scheme permits.
///
/// Entries are walked in scheme order; within an entry the same mixed-radix
/// decomposition as the full generator runs over the candidate-list lengths,
/// and each digit selects from the (possibly non-contiguous) candidate list
/// instead of the whole pool.
#[derive(Debug)]
pub struct PartialGenerator {
    entries: Vec<SchemeEntry>,
    spaces: Vec<u64>,
    cursor: usize,
    reaction_index: u64,
    total: u64,
}

impl PartialGenerator {
    /// Parses `scheme_lines` against the pool and builds the generator.
    ///
    /// # Errors
    ///
    /// Returns the `SchemeError` of the first malformed or out-of-range
    /// specification.
    pub fn new(pool: &FragmentPool, scheme_lines: &[String]) -> Result<Self, SchemeError> {
        let scheme = CombinationScheme::parse(pool, scheme_lines)?;
        Ok(Self::from_scheme(scheme))
    }

    pub fn from_scheme(scheme: CombinationScheme) -> Self {
        let entries = scheme.into_entries();
        let spaces: Vec<u64> = entries.iter().map(entry_space).collect();
        let total = spaces.iter().fold(0u64, |sum, &s| sum.saturating_add(s));
        let mut generator = Self {
            entries,
            spaces,
            cursor: 0,
            reaction_index: 0,
            total,
        };
        generator.skip_exhausted_entries();
        generator
    }

    fn skip_exhausted_entries(&mut self) {
        while self.cursor < self.spaces.len() && self.spaces[self.cursor] == 0 {
            self.cursor += 1;
        }
    }
}

fn entry_space(entry: &SchemeEntry) -> u64 {
    entry
        .linker_candidates
        .iter()
        .chain(entry.block_candidates.iter())
        .fold(1u64, |space, candidates| {
            space.saturating_mul(candidates.len() as u64)
        })
}

impl ReactionGenerator for PartialGenerator {
    fn has_next(&self) -> bool {
        self.cursor < self.spaces.len()
    }

    fn next_reaction(&mut self) -> Option<ReactionTuple> {
        if !self.has_next() {
            return None;
        }
        let entry = &self.entries[self.cursor];
        let space = self.spaces[self.cursor];
        let sites = entry.linker_candidates.len();
        let radices = entry
            .linker_candidates
            .iter()
            .chain(entry.block_candidates.iter())
            .map(|candidates| candidates.len() as u64);
        let digits = mixed_radix_digits(self.reaction_index, radices, space);
        let tuple = ReactionTuple {
            scaffold: entry.scaffold,
            linkers: (0..sites)
                .map(|site| entry.linker_candidates[site][digits[site] as usize])
                .collect(),
            building_blocks: (0..sites)
                .map(|site| entry.block_candidates[site][digits[sites + site] as usize])
                .collect(),
        };
        self.reaction_index += 1;
        if self.reaction_index >= space {
            self.cursor += 1;
            self.reaction_index = 0;
            self.skip_exhausted_entries();
        }
        Some(tuple)
    }

    fn max_count(&self) -> u64 {
        self.total
    }
}
