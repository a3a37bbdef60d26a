use phf::{Set, phf_set};

/// Canonical "pass-through" linker forms. A linker whose raw text matches one of
/// these literals carries no atoms of its own: the building block is bonded
/// directly to the scaffold site. These forms bypass normalization entirely.
pub static EMPTY_LINKER_FORMS: Set<&'static str> = phf_set! {
    "[A][R]", "[R][A]", "[A][R1]", "[R1][A]",
    "[A]-[R]", "[R]-[A]", "[A]-[R1]", "[R1]-[A]",
    "[A]([R])", "[R]([A])", "[A]([R1])", "[R1]([A])",
    "[A](-[R])", "[R](-[A])", "[A](-[R1])", "[R1](-[A])",
    "([R])[A]", "([A])[R]", "([R1])[A]", "([A])[R1]",
    "(-[R])[A]", "(-[A])[R]", "(-[R1])[A]", "(-[A])[R1]",
    "([R])-[A]", "([A])-[R]", "([R1])-[A]", "([A])-[R1]",
    "(-[R])-[A]", "(-[A])-[R]", "(-[R1])-[A]", "(-[A])-[R1]",
};

/// Bond symbols that imply a second, explicit bond order next to a marker.
pub static BOND_SYMBOLS: Set<char> = phf_set! { '=', '#' };

/// Characters that open or continue a ring-closure label.
pub static RING_CLOSURE_SYMBOLS: Set<char> = phf_set! {
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '%',
};

/// Characters that may end an atom specification, used to classify the
/// character *preceding* a marker. A closing round bracket counts: the marker
/// then bonds the atom in front of the branch.
pub static ATOM_SYMBOLS: Set<char> = phf_set! {
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ']', ')', '*',
};

/// Characters that may start an atom specification, used to classify the
/// character *following* a marker.
pub static ATOM_START_SYMBOLS: Set<char> = phf_set! {
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    'b', 'c', 'n', 'o', 'p', 's',
    '[', '*',
};

pub fn is_empty_linker_form(text: &str) -> bool {
    EMPTY_LINKER_FORMS.contains(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_linker_table_holds_all_canonical_forms() {
        assert_eq!(EMPTY_LINKER_FORMS.len(), 32);
        assert!(is_empty_linker_form("[A][R1]"));
        assert!(is_empty_linker_form("[R]-[A]"));
        assert!(is_empty_linker_form("(-[A])-[R1]"));
        assert!(!is_empty_linker_form("[A]C[R1]"));
        assert!(!is_empty_linker_form("[A]"));
    }

    #[test]
    fn bond_symbols_cover_double_and_triple_only() {
        assert!(BOND_SYMBOLS.contains(&'='));
        assert!(BOND_SYMBOLS.contains(&'#'));
        assert!(!BOND_SYMBOLS.contains(&'-'));
    }

    #[test]
    fn ring_closure_symbols_cover_digits_and_percent() {
        for c in '0'..='9' {
            assert!(RING_CLOSURE_SYMBOLS.contains(&c));
        }
        assert!(RING_CLOSURE_SYMBOLS.contains(&'%'));
        assert!(!RING_CLOSURE_SYMBOLS.contains(&'C'));
    }

    #[test]
    fn atom_classification_distinguishes_start_from_body() {
        assert!(ATOM_START_SYMBOLS.contains(&'C'));
        assert!(ATOM_START_SYMBOLS.contains(&'c'));
        assert!(ATOM_START_SYMBOLS.contains(&'['));
        assert!(!ATOM_START_SYMBOLS.contains(&'l'));
        assert!(ATOM_SYMBOLS.contains(&'l'));
        assert!(ATOM_SYMBOLS.contains(&']'));
        assert!(ATOM_SYMBOLS.contains(&')'));
        assert!(!ATOM_SYMBOLS.contains(&'('));
    }
}
