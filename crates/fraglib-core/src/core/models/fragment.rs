use crate::core::notation::preprocessor;
use std::collections::HashSet;
use std::fmt;

/// The three fragment kinds of the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Scaffold,
    Linker,
    BuildingBlock,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FragmentKind::Scaffold => "scaffold",
            FragmentKind::Linker => "linker",
            FragmentKind::BuildingBlock => "building block",
        };
        f.write_str(name)
    }
}

/// The record shared by all fragment kinds: identifier, raw text, normalized
/// text, and the ring-closure numbers the raw text already occupies.
///
/// Immutable once constructed. The blacklist holds every two-digit `%NN`
/// label found in the raw text; single-digit ring closures cannot collide
/// with the splice labels (those start at 10) and are not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    id: String,
    original: String,
    smiles: String,
    blacklist: HashSet<u32>,
}

impl Fragment {
    pub fn new(id: impl Into<String>, original: &str) -> Self {
        Self {
            id: id.into(),
            original: original.to_string(),
            smiles: preprocessor::normalize(original),
            blacklist: scan_ring_blacklist(original),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// The normalized text all splicing operates on.
    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    pub fn uses_ring_number(&self, number: u32) -> bool {
        self.blacklist.contains(&number)
    }
}

/// Collects every `%NN` two-digit ring-closure label in `text`.
fn scan_ring_blacklist(text: &str) -> HashSet<u32> {
    let bytes = text.as_bytes();
    let mut used = HashSet::new();
    let mut cursor = 0;
    while cursor < bytes.len() {
        if bytes[cursor] == b'%'
            && bytes.get(cursor + 1).is_some_and(u8::is_ascii_digit)
            && bytes.get(cursor + 2).is_some_and(u8::is_ascii_digit)
        {
            let number = &text[cursor + 1..cursor + 3];
            used.insert(number.parse().expect("two ascii digits"));
            cursor += 3;
        } else {
            cursor += 1;
        }
    }
    used
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist_collects_two_digit_ring_numbers() {
        let fragment = Fragment::new("1", "C%10CC%23C%10");
        assert!(fragment.uses_ring_number(10));
        assert!(fragment.uses_ring_number(23));
        assert!(!fragment.uses_ring_number(11));
    }

    #[test]
    fn single_digit_ring_closures_are_not_blacklisted() {
        let fragment = Fragment::new("1", "c1ccccc1");
        assert!(!fragment.uses_ring_number(1));
    }

    #[test]
    fn percent_without_two_digits_is_ignored() {
        let fragment = Fragment::new("1", "C%1C");
        assert!(!fragment.uses_ring_number(1));
    }

    #[test]
    fn smiles_is_the_normalized_text() {
        let fragment = Fragment::new("s1", "[R1]CC");
        assert_eq!(fragment.original(), "[R1]CC");
        assert_eq!(fragment.smiles(), "C([R1])C");
        assert_eq!(fragment.id(), "s1");
    }
}
