use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use fraglib::core::io::file::FileSource;
use fraglib::core::io::traits::FragmentSource;
use fraglib::core::models::fragment::FragmentKind;
use fraglib::core::notation::conformity;
use fraglib::core::pool::parse_fragment_lines;
use std::path::PathBuf;
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let inputs: Vec<(FragmentKind, &Option<PathBuf>)> = vec![
        (FragmentKind::Scaffold, &args.scaffolds),
        (FragmentKind::Linker, &args.linkers),
        (FragmentKind::BuildingBlock, &args.building_blocks),
    ];
    if inputs.iter().all(|(_, path)| path.is_none()) {
        return Err(CliError::Config(
            "nothing to check; pass at least one fragment file".to_string(),
        ));
    }

    let mut failures = 0usize;
    for (kind, path) in inputs {
        let Some(path) = path else {
            continue;
        };
        let lines = FileSource::new(path).fragment_lines()?;
        let fragments = parse_fragment_lines(&lines);
        let mut file_failures = 0usize;
        for (id, text) in &fragments {
            if let Err(e) = conformity::check(text, kind) {
                println!("  ✗ {kind} {id}: {e}");
                file_failures += 1;
            }
        }
        info!(
            kind = %kind,
            fragments = fragments.len(),
            failures = file_failures,
            "Checked fragment file."
        );
        println!(
            "{}: {} fragment(s), {} failure(s).",
            path.display(),
            fragments.len(),
            file_failures
        );
        failures += file_failures;
    }

    if failures > 0 {
        return Err(CliError::ConformityFailures { count: failures });
    }
    println!("✅ All fragments conform.");
    Ok(())
}
