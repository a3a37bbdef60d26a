use crate::core::notation::markers::{self, ring_label};

/// Appends a building block onto the linker buffer, forming the intermediate
/// that is later attached to the scaffold. Both texts carry their shared ring
/// label already.
pub fn join_intermediate(buf: &mut String, separator: &str, block_text: &str) {
    buf.push_str(separator);
    buf.push_str(block_text);
}

/// Splices `piece` onto the molecule at `site_token`, bonding the two through
/// ring closure `number`.
///
/// The first `[R]`-type marker inside `piece` and the given `site_token`
/// inside `molecule` are both replaced by the `%NN` label, then `piece` is
/// appended behind `separator`. Returns `false` (leaving the molecule buffer
/// untouched) when `site_token` does not occur, which the driver treats as a
/// fatal assembly error.
pub fn attach(
    molecule: &mut String,
    mut piece: String,
    separator: &str,
    site_token: &str,
    number: u32,
) -> bool {
    let Some(at) = molecule.find(site_token) else {
        return false;
    };
    let label = ring_label(number);
    replace_first_site_marker(&mut piece, &label);
    molecule.replace_range(at..at + site_token.len(), &label);
    molecule.push_str(separator);
    molecule.push_str(&piece);
    true
}

/// Replaces the first `[R]`-type marker (with its wrapping branch, if any) in
/// `text`. Pieces without a site marker (spliced building blocks) are left
/// alone.
fn replace_first_site_marker(text: &mut String, label: &str) {
    let site = markers::markers(text).into_iter().find(|m| m.is_site());
    if let Some(marker) = site {
        let range = markers::token_range(text, &marker);
        text.replace_range(range, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_appends_separator_and_block() {
        let mut buf = String::from("O([R1])%10");
        join_intermediate(&mut buf, ".", "C%10N(C)C");
        assert_eq!(buf, "O([R1])%10.C%10N(C)C");
    }

    #[test]
    fn attach_bonds_piece_and_site_through_one_label() {
        let mut molecule = String::from("c1([R1])ccccc1");
        let attached = attach(
            &mut molecule,
            String::from("O([R1])%10.C%10N(C)C"),
            ".",
            "([R1])",
            11,
        );
        assert!(attached);
        assert_eq!(molecule, "c1%11ccccc1.O%11%10.C%10N(C)C");
    }

    #[test]
    fn attach_without_piece_marker_only_replaces_site() {
        let mut molecule = String::from("c1([R1])ccccc1");
        let attached = attach(&mut molecule, String::from("C%10N(C)C"), ".", "([R1])", 10);
        assert!(attached);
        assert_eq!(molecule, "c1%10ccccc1.C%10N(C)C");
    }

    #[test]
    fn missing_site_token_leaves_molecule_untouched() {
        let mut molecule = String::from("c1ccccc1");
        let attached = attach(&mut molecule, String::from("C%10"), ".", "([R1])", 10);
        assert!(!attached);
        assert_eq!(molecule, "c1ccccc1");
    }

    #[test]
    fn attachment_markers_in_piece_are_not_site_markers() {
        let mut piece = String::from("C([A])C[R1]");
        replace_first_site_marker(&mut piece, "%12");
        assert_eq!(piece, "C([A])C%12");
    }
}
