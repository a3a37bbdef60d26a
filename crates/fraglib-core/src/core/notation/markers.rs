use std::ops::Range;

/// Lowest ring-closure label inserted when splicing. Labels below 10 would
/// render as a single digit and could collide with in-fragment ring closures.
pub const MIN_RING_NUMBER: u32 = 10;

/// Highest usable label: `%100` would parse as `%10` followed by closure `0`.
pub const MAX_RING_NUMBER: u32 = 99;

/// The two-digit ring-closure label a marker is replaced with.
pub fn ring_label(number: u32) -> String {
    debug_assert!((MIN_RING_NUMBER..=MAX_RING_NUMBER).contains(&number));
    format!("%{number}")
}

/// Classification of a bracketed marker token.
///
/// `Attachment` is the `[A]` marker carried by linkers and building blocks.
/// `Site` is a variable-site marker: `[R1]`, `[R2]`, … or the unnumbered `[R]`
/// used by linkers and the canonical empty-linker forms. Bracket atoms whose
/// symbol merely begins with `R` (`[Rb]`, `[Ru]`, …) are not markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Attachment,
    Site { number: Option<u32> },
}

/// One marker occurrence within a fragment string, as byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub start: usize,
    pub end: usize,
    pub kind: MarkerKind,
}

impl Marker {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn is_site(&self) -> bool {
        matches!(self.kind, MarkerKind::Site { .. })
    }
}

/// Parses a marker starting exactly at `at`, or `None` if the text there is
/// not a marker token.
pub fn marker_at(text: &str, at: usize) -> Option<Marker> {
    let bytes = text.as_bytes();
    if bytes.get(at) != Some(&b'[') {
        return None;
    }
    match bytes.get(at + 1) {
        Some(&b'A') if bytes.get(at + 2) == Some(&b']') => Some(Marker {
            start: at,
            end: at + 3,
            kind: MarkerKind::Attachment,
        }),
        Some(&b'R') => {
            let mut cursor = at + 2;
            while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
                cursor += 1;
            }
            if bytes.get(cursor) != Some(&b']') {
                return None;
            }
            let number = if cursor > at + 2 {
                text[at + 2..cursor].parse().ok()
            } else {
                None
            };
            Some(Marker {
                start: at,
                end: cursor + 1,
                kind: MarkerKind::Site { number },
            })
        }
        _ => None,
    }
}

/// Returns the first marker at or after `from`.
pub fn find_marker(text: &str, from: usize) -> Option<Marker> {
    let bytes = text.as_bytes();
    let mut cursor = from;
    while cursor < bytes.len() {
        if bytes[cursor] == b'[' {
            if let Some(marker) = marker_at(text, cursor) {
                return Some(marker);
            }
        }
        cursor += 1;
    }
    None
}

/// All marker occurrences in `text`, in order of appearance.
pub fn markers(text: &str) -> Vec<Marker> {
    let mut found = Vec::new();
    let mut cursor = 0;
    while let Some(marker) = find_marker(text, cursor) {
        cursor = marker.end;
        found.push(marker);
    }
    found
}

/// The byte range the marker occupies as a splice token. When the marker is
/// directly wrapped in a round-bracket branch, the brackets belong to the
/// token: replacing `([R1])` as a whole keeps the surrounding SMILES valid.
pub fn token_range(text: &str, marker: &Marker) -> Range<usize> {
    let bytes = text.as_bytes();
    let wrapped = marker.start > 0
        && bytes[marker.start - 1] == b'('
        && bytes.get(marker.end) == Some(&b')');
    if wrapped {
        marker.start - 1..marker.end + 1
    } else {
        marker.start..marker.end
    }
}

/// Removes the first `[A]` attachment marker (with its wrapping branch, if
/// any) and reports the byte offset where a ring-closure label must later be
/// inserted. Text without an attachment marker is returned unchanged with the
/// insertion point at its end.
pub fn remove_attachment(text: &str) -> (String, usize) {
    let attachment = markers(text)
        .into_iter()
        .find(|m| m.kind == MarkerKind::Attachment);
    match attachment {
        Some(marker) => {
            let range = token_range(text, &marker);
            let offset = range.start;
            let mut stripped = String::with_capacity(text.len());
            stripped.push_str(&text[..range.start]);
            stripped.push_str(&text[range.end..]);
            (stripped, offset)
        }
        None => (text.to_string(), text.len()),
    }
}
