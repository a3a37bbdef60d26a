use crate::core::io::traits::MoleculeSink;
use crate::core::pool::FragmentPool;
use crate::engine::cancel::CancelToken;
use crate::engine::concat;
use crate::engine::error::EngineError;
use crate::engine::generator::{ReactionGenerator, ReactionTuple};
use crate::engine::numbering::RingNumberAllocator;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

const ID_SITE_SEPARATOR: char = '.';
const ID_PAIR_SEPARATOR: char = '_';
const PART_SEPARATOR: &str = ".";

/// How an enumeration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationOutcome {
    /// The generator was exhausted.
    Completed,
    /// The cancellation token was set; the run stopped between molecules.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationSummary {
    pub outcome: EnumerationOutcome,
    pub molecules: u64,
}

/// Runs one enumeration: pulls reaction tuples from the generator, splices
/// the referenced fragments into complete molecules, and emits
/// `(identifier, SMILES)` pairs to the sink.
///
/// The identifier format is `<scaffold-id>` followed by
/// `.<linker-id>_<block-id>` per variable site. The cancellation token is
/// polled once per molecule; a cancelled run still closes the sink and
/// reports how far it got.
///
/// # Errors
///
/// Fails on the first molecule that cannot be assembled (missing site token,
/// exhausted ring labels) or written; no partial molecule reaches the sink.
#[instrument(skip_all, name = "enumeration_workflow")]
pub fn run(
    pool: &FragmentPool,
    generator: &mut dyn ReactionGenerator,
    sink: &mut dyn MoleculeSink,
    cancel: &CancelToken,
    reporter: &ProgressReporter,
) -> Result<EnumerationSummary, EngineError> {
    let total = generator.max_count();
    reporter.report(Progress::EnumerationStart {
        total_molecules: total,
    });
    info!(total_molecules = total, "Starting library enumeration.");

    // Reused across iterations; cleared per molecule.
    let mut id = String::new();
    let mut smiles = String::new();
    let mut molecules = 0u64;
    let mut outcome = EnumerationOutcome::Completed;

    while generator.has_next() {
        if cancel.is_cancelled() {
            outcome = EnumerationOutcome::Cancelled;
            info!(molecules, "Enumeration cancelled on request.");
            reporter.report(Progress::Message(format!(
                "Cancelled after {molecules} molecule(s)."
            )));
            break;
        }
        let Some(tuple) = generator.next_reaction() else {
            break;
        };
        assemble(pool, &tuple, &mut id, &mut smiles)?;
        sink.write_molecule(&id, &smiles)
            .map_err(|source| EngineError::Sink {
                id: id.clone(),
                source,
            })?;
        molecules += 1;
        reporter.report(Progress::MoleculeFinished);
    }

    sink.finish()
        .map_err(|source| EngineError::SinkClose { source })?;
    reporter.report(Progress::EnumerationFinish);
    info!(molecules, "Enumeration finished.");
    Ok(EnumerationSummary { outcome, molecules })
}

/// Splices one reaction tuple into the reused id and SMILES buffers.
fn assemble(
    pool: &FragmentPool,
    tuple: &ReactionTuple,
    id: &mut String,
    smiles: &mut String,
) -> Result<(), EngineError> {
    let scaffold = pool.scaffold(tuple.scaffold);
    smiles.clear();
    smiles.push_str(scaffold.smiles());
    id.clear();
    id.push_str(scaffold.id());

    let mut rings = RingNumberAllocator::new();
    for site in 0..scaffold.site_count() {
        let linker_index = tuple.linkers[site];
        let block_index = tuple.building_blocks[site];
        let linker = pool.linker(linker_index);
        let block = pool.building_block(block_index);
        let site_token = scaffold.site_token(site);

        let allocate = |rings: &mut RingNumberAllocator| {
            rings
                .allocate(pool, tuple.scaffold, linker_index, block_index)
                .ok_or_else(|| EngineError::RingNumbersExhausted { id: id.clone() })
        };

        let (piece, scaffold_ring) = if linker.is_empty() {
            // Pass-through linker: bond the block straight onto the site.
            let ring = allocate(&mut rings)?;
            (block.spliced(ring), ring)
        } else {
            let block_ring = allocate(&mut rings)?;
            let scaffold_ring = allocate(&mut rings)?;
            let mut intermediate = linker.spliced(block_ring);
            concat::join_intermediate(&mut intermediate, PART_SEPARATOR, &block.spliced(block_ring));
            (intermediate, scaffold_ring)
        };

        if !concat::attach(smiles, piece, PART_SEPARATOR, site_token, scaffold_ring) {
            return Err(EngineError::SiteTokenMissing {
                token: site_token.to_string(),
                id: id.clone(),
            });
        }

        id.push(ID_SITE_SEPARATOR);
        id.push_str(linker.id());
        id.push(ID_PAIR_SEPARATOR);
        id.push_str(block.id());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::memory::MemorySink;
    use crate::engine::generator::full::FullGenerator;
    use crate::engine::generator::partial::PartialGenerator;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn demo_pool() -> FragmentPool {
        FragmentPool::from_lines(
            &lines(&["[R1]c1ccccc1"]),
            &lines(&["[A]O[R1]"]),
            &lines(&["[A]CN(C)C", "[A]C(O)=O"]),
            true,
        )
        .unwrap()
    }

    fn balanced(text: &str) -> bool {
        let mut round = 0i32;
        let mut square = 0i32;
        for c in text.chars() {
            match c {
                '(' => round += 1,
                ')' => round -= 1,
                '[' => square += 1,
                ']' => square -= 1,
                _ => {}
            }
            if round < 0 || square < 0 {
                return false;
            }
        }
        round == 0 && square == 0
    }

    #[test]
    fn full_enumeration_emits_the_whole_library() {
        let pool = demo_pool();
        let mut generator = FullGenerator::new(&pool);
        let mut sink = MemorySink::new();
        let summary = run(
            &pool,
            &mut generator,
            &mut sink,
            &CancelToken::new(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(summary.outcome, EnumerationOutcome::Completed);
        assert_eq!(summary.molecules, 2);
        assert!(sink.is_finished());

        let molecules = sink.molecules();
        assert_eq!(molecules[0].0, "1.1_1");
        assert_eq!(molecules[1].0, "1.1_2");
        for (_, smiles) in molecules {
            assert!(balanced(smiles));
            assert!(!smiles.contains("[A]"));
            assert!(!smiles.contains("[R"));
            // One ring pair per junction: block–linker and linker–scaffold.
            assert_eq!(smiles.matches("%10").count(), 2);
            assert_eq!(smiles.matches("%11").count(), 2);
        }
        assert_eq!(molecules[0].1, "c1%11ccccc1.O%11%10.C%10N(C)C");
        assert_eq!(molecules[1].1, "c1%11ccccc1.O%11%10.C%10(O)=O");
    }

    #[test]
    fn empty_linker_bonds_block_directly() {
        let pool = FragmentPool::from_lines(
            &lines(&["[R1]c1ccccc1"]),
            &lines(&["[A][R1]"]),
            &lines(&["[A]CN(C)C"]),
            true,
        )
        .unwrap();
        let mut generator = FullGenerator::new(&pool);
        let mut sink = MemorySink::new();
        run(
            &pool,
            &mut generator,
            &mut sink,
            &CancelToken::new(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(sink.molecules().len(), 1);
        let (id, smiles) = &sink.molecules()[0];
        assert_eq!(id, "1.1_1");
        assert_eq!(smiles, "c1%10ccccc1.C%10N(C)C");
    }

    #[test]
    fn blacklisted_numbers_are_never_inserted() {
        let pool = FragmentPool::from_lines(
            &lines(&["[R1]C1CCCCC1C%10CC%10"]),
            &lines(&["[A][R1]"]),
            &lines(&["[A]C%11CC%11C"]),
            true,
        )
        .unwrap();
        let mut generator = FullGenerator::new(&pool);
        let mut sink = MemorySink::new();
        run(
            &pool,
            &mut generator,
            &mut sink,
            &CancelToken::new(),
            &ProgressReporter::new(),
        )
        .unwrap();

        let (_, smiles) = &sink.molecules()[0];
        // 10 and 11 are taken by the fragments themselves; the splice gets 12.
        assert_eq!(smiles.matches("%12").count(), 2);
    }

    #[test]
    fn two_sites_use_distinct_ring_labels() {
        let pool = FragmentPool::from_lines(
            &lines(&["[R2]C([R1])CC"]),
            &lines(&["[A][R1]"]),
            &lines(&["[A]CO"]),
            true,
        )
        .unwrap();
        let mut generator = FullGenerator::new(&pool);
        let mut sink = MemorySink::new();
        run(
            &pool,
            &mut generator,
            &mut sink,
            &CancelToken::new(),
            &ProgressReporter::new(),
        )
        .unwrap();

        let (id, smiles) = &sink.molecules()[0];
        assert_eq!(id, "1.1_1.1_1");
        assert_eq!(smiles.matches("%10").count(), 2);
        assert_eq!(smiles.matches("%11").count(), 2);
        assert!(balanced(smiles));
    }

    #[test]
    fn restricted_enumeration_respects_the_scheme() {
        let pool = demo_pool();
        let mut generator =
            PartialGenerator::new(&pool, &lines(&["1\t1\t2"])).unwrap();
        let mut sink = MemorySink::new();
        let summary = run(
            &pool,
            &mut generator,
            &mut sink,
            &CancelToken::new(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(summary.molecules, 1);
        assert_eq!(sink.molecules()[0].0, "1.1_2");
    }

    #[test]
    fn cancellation_stops_between_molecules() {
        let pool = demo_pool();
        let mut generator = FullGenerator::new(&pool);
        let mut sink = MemorySink::new();
        let cancel = CancelToken::new();
        cancel.cancel();
        let summary = run(
            &pool,
            &mut generator,
            &mut sink,
            &cancel,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(summary.outcome, EnumerationOutcome::Cancelled);
        assert_eq!(summary.molecules, 0);
        assert!(sink.molecules().is_empty());
        assert!(sink.is_finished());
    }

    #[test]
    fn progress_reports_start_increment_and_finish() {
        use std::sync::Mutex;

        let pool = demo_pool();
        let mut generator = FullGenerator::new(&pool);
        let mut sink = MemorySink::new();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(format!("{event:?}"));
        }));
        run(
            &pool,
            &mut generator,
            &mut sink,
            &CancelToken::new(),
            &reporter,
        )
        .unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events[0], "EnumerationStart { total_molecules: 2 }");
        assert_eq!(
            events
                .iter()
                .filter(|e| e.as_str() == "MoleculeFinished")
                .count(),
            2
        );
        assert_eq!(events.last().unwrap(), "EnumerationFinish");
    }
}
