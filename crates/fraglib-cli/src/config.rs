use crate::cli::EnumerateArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Run settings for the `enumerate` command, loadable from a TOML file.
/// Explicit command-line flags override file values.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RunConfig {
    pub scaffolds: Option<PathBuf>,
    pub linkers: Option<PathBuf>,
    pub building_blocks: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub scheme: Option<PathBuf>,
    pub check_conformity: Option<bool>,
}

impl RunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("failed to parse '{}': {}", path.display(), e))
        })
    }
}

/// The fully resolved settings the `enumerate` command runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub scaffolds: PathBuf,
    pub linkers: PathBuf,
    pub building_blocks: PathBuf,
    pub output: PathBuf,
    pub scheme: Option<PathBuf>,
    pub check_conformity: bool,
}

impl RunSettings {
    /// Merges command-line arguments over an optional configuration file.
    pub fn resolve(args: &EnumerateArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };
        let require = |flag: Option<&PathBuf>, fallback: Option<&PathBuf>, name: &str| {
            flag.or(fallback)
                .cloned()
                .ok_or_else(|| CliError::Config(format!("missing required setting '{name}'")))
        };
        Ok(Self {
            scaffolds: require(args.scaffolds.as_ref(), file.scaffolds.as_ref(), "scaffolds")?,
            linkers: require(args.linkers.as_ref(), file.linkers.as_ref(), "linkers")?,
            building_blocks: require(
                args.building_blocks.as_ref(),
                file.building_blocks.as_ref(),
                "building-blocks",
            )?,
            output: require(args.output.as_ref(), file.output.as_ref(), "output")?,
            scheme: args.scheme.clone().or(file.scheme),
            check_conformity: if args.no_conformity_check {
                false
            } else {
                file.check_conformity.unwrap_or(true)
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> EnumerateArgs {
        EnumerateArgs {
            scaffolds: None,
            linkers: None,
            building_blocks: None,
            output: None,
            scheme: None,
            no_conformity_check: false,
            config: None,
        }
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(
            &path,
            "scaffolds = \"file.txt\"\nlinkers = \"l.txt\"\nbuilding-blocks = \"b.txt\"\noutput = \"out.smi\"\ncheck-conformity = false\n",
        )
        .unwrap();

        let mut args = args();
        args.config = Some(path);
        args.scaffolds = Some(PathBuf::from("cli.txt"));
        let settings = RunSettings::resolve(&args).unwrap();
        assert_eq!(settings.scaffolds, PathBuf::from("cli.txt"));
        assert_eq!(settings.linkers, PathBuf::from("l.txt"));
        assert!(!settings.check_conformity);
    }

    #[test]
    fn conformity_checking_defaults_on() {
        let mut args = args();
        args.scaffolds = Some(PathBuf::from("s"));
        args.linkers = Some(PathBuf::from("l"));
        args.building_blocks = Some(PathBuf::from("b"));
        args.output = Some(PathBuf::from("o"));
        let settings = RunSettings::resolve(&args).unwrap();
        assert!(settings.check_conformity);
        assert_eq!(settings.scheme, None);
    }

    #[test]
    fn missing_required_setting_is_a_config_error() {
        let result = RunSettings::resolve(&args());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, "scafolds = \"typo.txt\"\n").unwrap();
        assert!(matches!(
            RunConfig::from_file(&path),
            Err(CliError::Config(_))
        ));
    }
}
