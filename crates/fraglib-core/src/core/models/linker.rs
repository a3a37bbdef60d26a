use super::fragment::Fragment;
use crate::core::notation::markers;
use crate::core::notation::symbols;

/// A linker: the fragment spliced between a scaffold site and a building
/// block.
///
/// Its `[A]` marker faces the building block and is removed at construction;
/// `spliced` re-inserts a ring-closure label at the recorded offset. The
/// `[R]`-type marker faces the scaffold and stays in the text until the
/// concatenator replaces it. The canonical empty forms carry no atoms and are
/// bypassed entirely during splicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linker {
    fragment: Fragment,
    is_empty: bool,
    concat_smiles: String,
    attachment_index: usize,
}

impl Linker {
    pub fn new(id: impl Into<String>, original: &str) -> Self {
        let is_empty = symbols::is_empty_linker_form(original);
        let fragment = Fragment::new(id, original);
        let (concat_smiles, attachment_index) = markers::remove_attachment(fragment.smiles());
        Self {
            fragment,
            is_empty,
            concat_smiles,
            attachment_index,
        }
    }

    pub fn id(&self) -> &str {
        self.fragment.id()
    }

    pub fn uses_ring_number(&self, number: u32) -> bool {
        self.fragment.uses_ring_number(number)
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// The linker text with `ring` bonded where the `[A]` marker sat.
    pub fn spliced(&self, ring: u32) -> String {
        let mut smiles = self.concat_smiles.clone();
        smiles.insert_str(self.attachment_index, &markers::ring_label(ring));
        smiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms_are_empty() {
        assert!(Linker::new("1", "[A][R1]").is_empty());
        assert!(Linker::new("1", "(-[R])-[A]").is_empty());
        assert!(!Linker::new("1", "[A]O[R1]").is_empty());
    }

    #[test]
    fn attachment_is_removed_and_reinserted_as_ring_label() {
        let linker = Linker::new("1", "[A]O[R1]");
        assert_eq!(linker.spliced(10), "O([R1])%10");
    }

    #[test]
    fn attachment_mid_chain_keeps_its_offset() {
        let linker = Linker::new("1", "[R1]CC[A]O");
        // Normalized to C([R1])C([A])O before [A] extraction.
        assert_eq!(linker.spliced(42), "C([R1])C%42O");
    }
}
