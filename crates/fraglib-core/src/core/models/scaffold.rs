use super::fragment::Fragment;
use crate::core::notation::markers::{self, MarkerKind};

/// A scaffold: the fragment every molecule of the library grows from.
///
/// Site tokens are the exact substrings (`[R1]` or `([R1])` when the marker is
/// wrapped in its own branch) the concatenator later replaces with ring-closure
/// labels. Tokens are stored sorted by site number, so logical site `n` is at
/// position `n - 1` once the conformity checker has enforced contiguity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    fragment: Fragment,
    site_numbers: Vec<u32>,
    site_tokens: Vec<String>,
}

impl Scaffold {
    pub fn new(id: impl Into<String>, original: &str) -> Self {
        let fragment = Fragment::new(id, original);
        let mut sites: Vec<(u32, String)> = markers::markers(fragment.smiles())
            .iter()
            .filter_map(|marker| match marker.kind {
                MarkerKind::Site {
                    number: Some(number),
                } => {
                    let range = markers::token_range(fragment.smiles(), marker);
                    Some((number, fragment.smiles()[range].to_string()))
                }
                _ => None,
            })
            .collect();
        sites.sort_by_key(|(number, _)| *number);
        let (site_numbers, site_tokens) = sites.into_iter().unzip();
        Self {
            fragment,
            site_numbers,
            site_tokens,
        }
    }

    pub fn id(&self) -> &str {
        self.fragment.id()
    }

    pub fn smiles(&self) -> &str {
        self.fragment.smiles()
    }

    pub fn uses_ring_number(&self, number: u32) -> bool {
        self.fragment.uses_ring_number(number)
    }

    pub fn site_count(&self) -> usize {
        self.site_tokens.len()
    }

    pub fn site_numbers(&self) -> &[u32] {
        &self.site_numbers
    }

    /// The splice token of the `position`-th variable site (0-based, in site
    /// number order).
    pub fn site_token(&self, position: usize) -> &str {
        &self.site_tokens[position]
    }
}
