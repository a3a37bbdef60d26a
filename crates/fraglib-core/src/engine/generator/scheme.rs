use crate::core::models::fragment::FragmentKind;
use crate::core::pool::FragmentPool;
use thiserror::Error;

/// A malformed or out-of-range reaction-scheme specification. Raised during
/// parsing, before any enumeration starts; `line` is the 1-based line number
/// in the scheme input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemeError {
    #[error("scheme line {line}: empty index specification")]
    EmptySpec { line: usize },

    #[error("scheme line {line}: invalid index '{token}'")]
    InvalidIndex { line: usize, token: String },

    #[error("scheme line {line}: reversed range {start}-{end}")]
    ReversedRange {
        line: usize,
        start: usize,
        end: usize,
    },

    #[error("scheme line {line}: {kind} index {index} exceeds pool size {size}")]
    IndexOutOfRange {
        line: usize,
        kind: FragmentKind,
        index: usize,
        size: usize,
    },

    #[error(
        "scheme line {line}: scaffold {scaffold} has {sites} variable site(s) and needs {expected} columns, found {found}"
    )]
    ColumnCount {
        line: usize,
        scaffold: usize,
        sites: usize,
        expected: usize,
        found: usize,
    },
}

/// The restrictions for one scaffold occurrence: per variable site, the
/// permitted linker and building-block pool indices (0-based, in listed
/// order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeEntry {
    pub scaffold: usize,
    pub linker_candidates: Vec<Vec<usize>>,
    pub block_candidates: Vec<Vec<usize>>,
}

/// A parsed reaction scheme: the ordered restriction table limiting which
/// linkers and building blocks may occupy which scaffold site. One scaffold
/// may appear in several entries, in scheme-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationScheme {
    entries: Vec<SchemeEntry>,
}

impl CombinationScheme {
    /// Parses TAB-separated scheme lines against a pool.
    ///
    /// Column 1 is a scaffold index-spec, which may expand to several scheme
    /// entries; the remaining columns alternate linker and building-block
    /// index-specs, one pair per variable site. Index-specs follow the
    /// grammar `range(";"range)*` with `range := INT | INT"-"INT`, 1-based
    /// and inclusive. Blank lines are skipped but keep their line number.
    ///
    /// # Errors
    ///
    /// Returns the first `SchemeError` encountered; no partial scheme is
    /// usable.
    pub fn parse(pool: &FragmentPool, lines: &[String]) -> Result<Self, SchemeError> {
        let mut entries = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            let line_number = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
            let scaffolds = parse_index_spec(
                columns[0],
                line_number,
                FragmentKind::Scaffold,
                pool.scaffold_count(),
            )?;
            for scaffold in scaffolds {
                entries.push(parse_entry(pool, scaffold, &columns, line_number)?);
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SchemeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<SchemeEntry> {
        self.entries
    }
}

fn parse_entry(
    pool: &FragmentPool,
    scaffold: usize,
    columns: &[&str],
    line: usize,
) -> Result<SchemeEntry, SchemeError> {
    let sites = pool.scaffold(scaffold).site_count();
    let expected = 1 + 2 * sites;
    if columns.len() != expected {
        return Err(SchemeError::ColumnCount {
            line,
            scaffold: scaffold + 1,
            sites,
            expected,
            found: columns.len(),
        });
    }
    let mut linker_candidates = Vec::with_capacity(sites);
    let mut block_candidates = Vec::with_capacity(sites);
    for site in 0..sites {
        linker_candidates.push(parse_index_spec(
            columns[1 + 2 * site],
            line,
            FragmentKind::Linker,
            pool.linker_count(),
        )?);
        block_candidates.push(parse_index_spec(
            columns[2 + 2 * site],
            line,
            FragmentKind::BuildingBlock,
            pool.building_block_count(),
        )?);
    }
    Ok(SchemeEntry {
        scaffold,
        linker_candidates,
        block_candidates,
    })
}

/// Expands an index-spec (`"1-3;5"`) into 0-based indices, in listed order
/// and without deduplication.
fn parse_index_spec(
    spec: &str,
    line: usize,
    kind: FragmentKind,
    pool_size: usize,
) -> Result<Vec<usize>, SchemeError> {
    let mut indices = Vec::new();
    if spec.trim().is_empty() {
        return Err(SchemeError::EmptySpec { line });
    }
    for segment in spec.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(SchemeError::EmptySpec { line });
        }
        let (start, end) = match segment.split_once('-') {
            Some((start, end)) => (
                parse_index(start.trim(), line)?,
                parse_index(end.trim(), line)?,
            ),
            None => {
                let single = parse_index(segment, line)?;
                (single, single)
            }
        };
        if start > end {
            return Err(SchemeError::ReversedRange { line, start, end });
        }
        for index in start..=end {
            if index > pool_size {
                return Err(SchemeError::IndexOutOfRange {
                    line,
                    kind,
                    index,
                    size: pool_size,
                });
            }
            indices.push(index - 1);
        }
    }
    Ok(indices)
}

/// A single 1-based index; zero is as malformed as a non-number.
fn parse_index(token: &str, line: usize) -> Result<usize, SchemeError> {
    match token.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(SchemeError::InvalidIndex {
            line,
            token: token.to_string(),
        }),
    }
}
