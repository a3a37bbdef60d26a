use super::markers::{self, Marker};
use super::symbols;

/// Rewrites a raw fragment string into the canonical form the concatenation
/// engine splices by byte offset.
///
/// The canonical empty-linker forms pass through untouched. For everything
/// else three rewrites run in order:
///
/// 1. explicit single-bond dashes outside bracket atom specifications are
///    removed;
/// 2. a marker at the very start of the string becomes a parenthesized branch
///    off the first following atom (`[R1]CC` → `C([R1])C`), so every marker is
///    preceded by an atom;
/// 3. a marker directly behind a closing round bracket is relocated to sit
///    behind the atom owning that branch (`CC(C)[R1]` → `CC([R1])(C)`).
///
/// Later stages index into the returned string, so the rewrites must be exact.
pub fn normalize(raw: &str) -> String {
    if symbols::is_empty_linker_form(raw) {
        return raw.to_string();
    }
    let text = strip_single_bonds(raw);
    let text = relocate_leading_marker(text);
    relocate_markers_behind_branches(text)
}

/// Removes `-` characters at square-bracket depth zero. Dashes inside `[...]`
/// denote negative charges and stay.
fn strip_single_bonds(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut bracket_depth = 0usize;
    for c in raw.chars() {
        match c {
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            '-' if bracket_depth == 0 => continue,
            _ => {}
        }
        out.push(c);
    }
    out
}

fn relocate_leading_marker(text: String) -> String {
    let Some(marker) = markers::marker_at(&text, 0) else {
        return text;
    };
    let tail = &text[marker.end..];
    let Some(atom_end) = atom_token_end(tail) else {
        return text;
    };
    let atom_end = ring_closures_end(tail, atom_end);
    let mut out = String::with_capacity(text.len() + 2);
    out.push_str(&tail[..atom_end]);
    out.push('(');
    out.push_str(marker.text(&text));
    out.push(')');
    out.push_str(&tail[atom_end..]);
    out
}

fn relocate_markers_behind_branches(mut text: String) -> String {
    while let Some(marker) = marker_behind_branch(&text) {
        let close = marker.start - 1;
        let Some(open) = matching_open_paren(text.as_bytes(), close) else {
            break;
        };
        let token = marker.text(&text).to_string();
        text.replace_range(marker.start..marker.end, "");
        text.insert_str(open, &format!("({token})"));
    }
    text
}

fn marker_behind_branch(text: &str) -> Option<Marker> {
    let bytes = text.as_bytes();
    let mut cursor = 0;
    while let Some(marker) = markers::find_marker(text, cursor) {
        if marker.start > 0 && bytes[marker.start - 1] == b')' {
            return Some(marker);
        }
        cursor = marker.end;
    }
    None
}

/// Backward scan for the `(` matching the `)` at `close`.
fn matching_open_paren(bytes: &[u8], close: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut cursor = close;
    loop {
        match bytes[cursor] {
            b')' => depth += 1,
            b'(' => {
                depth -= 1;
                if depth == 0 {
                    return Some(cursor);
                }
            }
            _ => {}
        }
        if cursor == 0 {
            return None;
        }
        cursor -= 1;
    }
}

/// End offset of the atom token starting at the beginning of `text`, or
/// `None` if the text does not start with an atom.
fn atom_token_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    match *bytes.first()? {
        b'[' => bytes.iter().position(|&b| b == b']').map(|p| p + 1),
        b'C' if bytes.get(1) == Some(&b'l') => Some(2),
        b'B' if bytes.get(1) == Some(&b'r') => Some(2),
        b'*' => Some(1),
        b if b.is_ascii_alphabetic() => Some(1),
        _ => None,
    }
}

/// Consumes ring-closure labels (`1`, `%12`, …) directly behind an atom so a
/// relocated marker lands behind them, keeping the closure attached to its
/// atom.
fn ring_closures_end(text: &str, mut cursor: usize) -> usize {
    let bytes = text.as_bytes();
    loop {
        match bytes.get(cursor) {
            Some(b) if b.is_ascii_digit() => cursor += 1,
            Some(&b'%')
                if bytes.get(cursor + 1).is_some_and(u8::is_ascii_digit)
                    && bytes.get(cursor + 2).is_some_and(u8::is_ascii_digit) =>
            {
                cursor += 3;
            }
            _ => return cursor,
        }
    }
}
