use crate::cli::EnumerateArgs;
use crate::config::RunSettings;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use anyhow::Context;
use fraglib::core::io::file::{FileSource, SmilesFileSink};
use fraglib::core::pool::FragmentPool;
use fraglib::engine::cancel::CancelToken;
use fraglib::engine::generator::full::FullGenerator;
use fraglib::engine::generator::partial::PartialGenerator;
use fraglib::engine::generator::ReactionGenerator;
use fraglib::engine::progress::ProgressReporter;
use fraglib::workflows::enumerate::{self, EnumerationOutcome};
use std::io::BufRead;
use tracing::{info, warn};

/// Above this many molecules the CLI warns before starting; the core itself
/// imposes no cap.
const LARGE_LIBRARY_WARNING: u64 = 10_000_000;

pub fn run(args: EnumerateArgs) -> Result<()> {
    let settings = RunSettings::resolve(&args)?;
    info!(?settings, "Resolved enumeration settings.");

    let mut scaffolds = FileSource::new(&settings.scaffolds);
    let mut linkers = FileSource::new(&settings.linkers);
    let mut blocks = FileSource::new(&settings.building_blocks);
    let pool = FragmentPool::load(
        &mut scaffolds,
        &mut linkers,
        &mut blocks,
        settings.check_conformity,
    )?;

    let mut generator: Box<dyn ReactionGenerator> = match &settings.scheme {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open scheme '{}'", path.display()))?;
            let lines: Vec<String> = std::io::BufReader::new(file)
                .lines()
                .collect::<std::io::Result<_>>()?;
            Box::new(PartialGenerator::new(&pool, &lines)?)
        }
        None => Box::new(FullGenerator::new(&pool)),
    };

    let total = generator.max_count();
    println!("Library size: {total} molecule(s).");
    if total > LARGE_LIBRARY_WARNING {
        warn!(total, "Very large library; consider a reaction scheme.");
        eprintln!(
            "⚠️  {total} molecules is a very large library; press Ctrl-C to cancel at any time."
        );
    }

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("failed to install Ctrl-C handler")?;

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    let mut sink = SmilesFileSink::create(&settings.output)?;

    let summary = enumerate::run(&pool, generator.as_mut(), &mut sink, &cancel, &reporter)?;

    match summary.outcome {
        EnumerationOutcome::Completed => println!(
            "✅ Wrote {} molecule(s) to '{}'.",
            summary.molecules,
            settings.output.display()
        ),
        EnumerationOutcome::Cancelled => println!(
            "⚠️  Cancelled after {} of {} molecule(s); partial library in '{}'.",
            summary.molecules,
            total,
            settings.output.display()
        ),
    }
    Ok(())
}
