use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "FragLib CLI - A command-line interface for FragLib, a combinatorial chemical library enumerator splicing annotated SMILES fragments.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate a combinatorial library from scaffold, linker, and building-block files.
    Enumerate(EnumerateArgs),
    /// Check fragment files for conformity with the notation without enumerating.
    Check(CheckArgs),
}

/// Arguments for the `enumerate` subcommand.
#[derive(Args, Debug)]
pub struct EnumerateArgs {
    /// Path to the scaffold fragment file (one fragment per line, optionally id<TAB>smiles).
    #[arg(short, long, value_name = "PATH")]
    pub scaffolds: Option<PathBuf>,

    /// Path to the linker fragment file.
    #[arg(short, long, value_name = "PATH")]
    pub linkers: Option<PathBuf>,

    /// Path to the building-block fragment file.
    #[arg(short, long, value_name = "PATH")]
    pub building_blocks: Option<PathBuf>,

    /// Path for the enumerated library (SMILES<TAB>id lines).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Reaction scheme restricting the enumeration; omit for the full cartesian library.
    #[arg(short = 'r', long, value_name = "PATH")]
    pub scheme: Option<PathBuf>,

    /// Skip conformity checking of the input fragments.
    #[arg(long)]
    pub no_conformity_check: bool,

    /// Read run settings from a TOML configuration file; explicit flags override it.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the scaffold fragment file.
    #[arg(short, long, value_name = "PATH")]
    pub scaffolds: Option<PathBuf>,

    /// Path to the linker fragment file.
    #[arg(short, long, value_name = "PATH")]
    pub linkers: Option<PathBuf>,

    /// Path to the building-block fragment file.
    #[arg(short, long, value_name = "PATH")]
    pub building_blocks: Option<PathBuf>,
}
