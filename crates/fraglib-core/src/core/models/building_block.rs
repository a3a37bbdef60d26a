use super::fragment::Fragment;
use crate::core::notation::markers;

/// A building block: the terminal fragment bonded onto a scaffold site,
/// directly or through a linker, at its single `[A]` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingBlock {
    fragment: Fragment,
    concat_smiles: String,
    attachment_index: usize,
}

impl BuildingBlock {
    pub fn new(id: impl Into<String>, original: &str) -> Self {
        let fragment = Fragment::new(id, original);
        let (concat_smiles, attachment_index) = markers::remove_attachment(fragment.smiles());
        Self {
            fragment,
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

    /// The block text with `ring` bonded where the `[A]` marker sat.
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
    fn spliced_inserts_label_at_attachment_offset() {
        let block = BuildingBlock::new("1", "[A]CN(C)C");
        assert_eq!(block.spliced(10), "C%10N(C)C");

        let block = BuildingBlock::new("2", "[A]C(O)=O");
        assert_eq!(block.spliced(11), "C%11(O)=O");
    }

    #[test]
    fn trailing_attachment_appends_label() {
        let block = BuildingBlock::new("1", "CCO[A]");
        assert_eq!(block.spliced(12), "CCO%12");
    }
}
