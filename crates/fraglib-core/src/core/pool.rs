use crate::core::io::traits::FragmentSource;
use crate::core::models::building_block::BuildingBlock;
use crate::core::models::fragment::FragmentKind;
use crate::core::models::linker::Linker;
use crate::core::models::scaffold::Scaffold;
use crate::core::notation::conformity::{self, ConformityError};
use std::io;
use thiserror::Error;

/// Represents errors that abort fragment-pool construction.
///
/// No partial pool is usable: the first offending fragment or unreadable
/// source fails the whole load.
#[derive(Debug, Error)]
pub enum PoolError {
    /// A fragment string violates the notation's structural rules.
    #[error(transparent)]
    Conformity(#[from] ConformityError),

    /// A fragment source could not be read.
    #[error("failed to read {kind} fragments: {source}")]
    Io {
        kind: FragmentKind,
        #[source]
        source: io::Error,
    },
}

/// The read-only administrator of the three fragment collections.
///
/// Built once at startup from three independent sources; the enumeration
/// engine then addresses fragments by index only. Also answers the cross-pool
/// ring-number query that keeps splice numbering collision-free.
#[derive(Debug, Default)]
pub struct FragmentPool {
    scaffolds: Vec<Scaffold>,
    linkers: Vec<Linker>,
    building_blocks: Vec<BuildingBlock>,
}

impl FragmentPool {
    /// Builds a pool from three fragment sources.
    ///
    /// Each raw line is optionally `id<TAB>text`; the default identifier is
    /// the 1-based ordinal among non-blank lines. When `check_conformity` is
    /// set, every raw text runs through the conformity checker before
    /// normalization.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Io` if a source cannot be read and
    /// `PoolError::Conformity` for the first fragment failing validation.
    pub fn load(
        scaffolds: &mut dyn FragmentSource,
        linkers: &mut dyn FragmentSource,
        building_blocks: &mut dyn FragmentSource,
        check_conformity: bool,
    ) -> Result<Self, PoolError> {
        let read = |source: &mut dyn FragmentSource, kind| {
            source
                .fragment_lines()
                .map_err(|source| PoolError::Io { kind, source })
        };
        let scaffold_lines = read(scaffolds, FragmentKind::Scaffold)?;
        let linker_lines = read(linkers, FragmentKind::Linker)?;
        let block_lines = read(building_blocks, FragmentKind::BuildingBlock)?;
        Self::from_lines(
            &scaffold_lines,
            &linker_lines,
            &block_lines,
            check_conformity,
        )
    }

    /// Builds a pool from raw lines already held in memory.
    pub fn from_lines(
        scaffold_lines: &[String],
        linker_lines: &[String],
        block_lines: &[String],
        check_conformity: bool,
    ) -> Result<Self, PoolError> {
        let mut pool = Self::default();
        for (id, text) in parse_fragment_lines(scaffold_lines) {
            if check_conformity {
                conformity::check(&text, FragmentKind::Scaffold)?;
            }
            pool.scaffolds.push(Scaffold::new(id, &text));
        }
        for (id, text) in parse_fragment_lines(linker_lines) {
            if check_conformity {
                conformity::check(&text, FragmentKind::Linker)?;
            }
            pool.linkers.push(Linker::new(id, &text));
        }
        for (id, text) in parse_fragment_lines(block_lines) {
            if check_conformity {
                conformity::check(&text, FragmentKind::BuildingBlock)?;
            }
            pool.building_blocks.push(BuildingBlock::new(id, &text));
        }
        tracing::info!(
            scaffolds = pool.scaffold_count(),
            linkers = pool.linker_count(),
            building_blocks = pool.building_block_count(),
            "Fragment pool loaded."
        );
        Ok(pool)
    }

    pub fn scaffold_count(&self) -> usize {
        self.scaffolds.len()
    }

    pub fn linker_count(&self) -> usize {
        self.linkers.len()
    }

    pub fn building_block_count(&self) -> usize {
        self.building_blocks.len()
    }

    pub fn scaffold(&self, index: usize) -> &Scaffold {
        &self.scaffolds[index]
    }

    pub fn linker(&self, index: usize) -> &Linker {
        &self.linkers[index]
    }

    pub fn building_block(&self, index: usize) -> &BuildingBlock {
        &self.building_blocks[index]
    }

    /// True if `number` is already used as a `%NN` ring closure by any of the
    /// three referenced fragments.
    pub fn is_number_blacklisted(
        &self,
        number: u32,
        scaffold: usize,
        linker: usize,
        building_block: usize,
    ) -> bool {
        self.scaffolds[scaffold].uses_ring_number(number)
            || self.linkers[linker].uses_ring_number(number)
            || self.building_blocks[building_block].uses_ring_number(number)
    }
}

/// Splits raw lines into `(id, text)` pairs. Blank or whitespace-only lines
/// are skipped and do not consume a default identifier.
pub fn parse_fragment_lines(lines: &[String]) -> Vec<(String, String)> {
    let mut fragments = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let ordinal = fragments.len() + 1;
        let (id, text) = match line.split_once('\t') {
            Some((id, text)) => (id.trim(), text.trim()),
            None => ("", line.trim()),
        };
        let id = if id.is_empty() {
            ordinal.to_string()
        } else {
            id.to_string()
        };
        fragments.push((id, text.to_string()));
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::memory::MemorySource;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_ids_count_only_non_blank_lines() {
        let parsed = parse_fragment_lines(&lines(&["[R1]CC", "", "   ", "[R1]CN"]));
        assert_eq!(
            parsed,
            vec![
                ("1".to_string(), "[R1]CC".to_string()),
                ("2".to_string(), "[R1]CN".to_string()),
            ]
        );
    }

    #[test]
    fn tab_separated_ids_are_kept() {
        let parsed = parse_fragment_lines(&lines(&["abc\t[R1]CC", "[R1]CN"]));
        assert_eq!(parsed[0], ("abc".to_string(), "[R1]CC".to_string()));
        assert_eq!(parsed[1], ("2".to_string(), "[R1]CN".to_string()));
    }

    #[test]
    fn conformity_failure_aborts_construction() {
        let result = FragmentPool::from_lines(
            &lines(&["[R1]CC"]),
            &lines(&["[A]O[R1]"]),
            &lines(&["CC"]),
            true,
        );
        assert!(matches!(result, Err(PoolError::Conformity(_))));
    }

    #[test]
    fn conformity_checking_can_be_disabled() {
        let pool = FragmentPool::from_lines(
            &lines(&["[R1]CC"]),
            &lines(&["[A]O[R1]"]),
            &lines(&["CC"]),
            false,
        )
        .unwrap();
        assert_eq!(pool.building_block_count(), 1);
    }

    #[test]
    fn load_pulls_from_sources() {
        let mut scaffolds = MemorySource::new(["s\t[R1]c1ccccc1"]);
        let mut linkers = MemorySource::new(["[A][R1]"]);
        let mut blocks = MemorySource::new(["[A]CC", "[A]CN"]);
        let pool = FragmentPool::load(&mut scaffolds, &mut linkers, &mut blocks, true).unwrap();
        assert_eq!(pool.scaffold_count(), 1);
        assert_eq!(pool.linker_count(), 1);
        assert_eq!(pool.building_block_count(), 2);
        assert_eq!(pool.scaffold(0).id(), "s");
        assert_eq!(pool.building_block(1).id(), "2");
    }

    #[test]
    fn blacklist_query_spans_all_three_fragments() {
        let pool = FragmentPool::from_lines(
            &lines(&["[R1]C%10CC%10"]),
            &lines(&["[A]C%11CC%11O[R1]"]),
            &lines(&["[A]C%12CC%12"]),
            false,
        )
        .unwrap();
        assert!(pool.is_number_blacklisted(10, 0, 0, 0));
        assert!(pool.is_number_blacklisted(11, 0, 0, 0));
        assert!(pool.is_number_blacklisted(12, 0, 0, 0));
        assert!(!pool.is_number_blacklisted(13, 0, 0, 0));
    }
}
