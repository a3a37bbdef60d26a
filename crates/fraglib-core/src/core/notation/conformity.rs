use super::markers::{self, MarkerKind};
use super::symbols::{ATOM_START_SYMBOLS, ATOM_SYMBOLS, BOND_SYMBOLS, RING_CLOSURE_SYMBOLS};
use crate::core::models::fragment::FragmentKind;
use thiserror::Error;

/// A raw fragment string violating the notation's structural rules. Every
/// variant carries the offending text; checking stops at the first failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConformityError {
    #[error("unbalanced '{bracket}' brackets in '{text}'")]
    UnbalancedBrackets { text: String, bracket: char },

    #[error("stereo bond symbols ('/' or '\\') are not supported: '{text}'")]
    StereoBond { text: String },

    #[error("scaffold '{text}' contains no numbered site markers")]
    NoSiteMarkers { text: String },

    #[error("scaffold '{text}' is missing site number {number}")]
    MissingSiteNumber { text: String, number: u32 },

    #[error("{kind} '{text}' must contain exactly one [A] marker, found {found}")]
    AttachmentMarkerCount {
        text: String,
        kind: FragmentKind,
        found: usize,
    },

    #[error("linker '{text}' contains no [R] site markers")]
    NoLinkerSiteMarkers { text: String },

    #[error("marker {marker} in '{text}' sits next to a double or triple bond")]
    BondNextToMarker { text: String, marker: String },

    #[error("marker {marker} in '{text}' sits next to a ring closure")]
    RingClosureNextToMarker { text: String, marker: String },

    #[error("marker {marker} in '{text}' would be bonded on both sides")]
    MarkerBondedTwice { text: String, marker: String },

    #[error("marker {marker} in '{text}' is followed by a branch and a continuation")]
    BranchWithContinuation { text: String, marker: String },
}

/// Validates a raw fragment string against the notation's structural rules.
///
/// Four independent checks run in order: bracket balance, stereo-bond
/// rejection, required markers for the fragment kind, and the bond-count
/// check that every marker can form exactly one bond when spliced. The input
/// is the raw text, before normalization.
pub fn check(text: &str, kind: FragmentKind) -> Result<(), ConformityError> {
    check_bracket_balance(text)?;
    check_stereo_bonds(text)?;
    check_required_markers(text, kind)?;
    check_bond_counts(text)
}

fn check_bracket_balance(text: &str) -> Result<(), ConformityError> {
    let mut round = 0i32;
    let mut square = 0i32;
    for c in text.chars() {
        match c {
            '(' => round += 1,
            ')' => round -= 1,
            '[' => square += 1,
            ']' => square -= 1,
            _ => {}
        }
        if round < 0 {
            return Err(ConformityError::UnbalancedBrackets {
                text: text.to_string(),
                bracket: ')',
            });
        }
        if square < 0 {
            return Err(ConformityError::UnbalancedBrackets {
                text: text.to_string(),
                bracket: ']',
            });
        }
    }
    if round != 0 {
        return Err(ConformityError::UnbalancedBrackets {
            text: text.to_string(),
            bracket: '(',
        });
    }
    if square != 0 {
        return Err(ConformityError::UnbalancedBrackets {
            text: text.to_string(),
            bracket: '[',
        });
    }
    Ok(())
}

fn check_stereo_bonds(text: &str) -> Result<(), ConformityError> {
    if text.contains('/') || text.contains('\\') {
        return Err(ConformityError::StereoBond {
            text: text.to_string(),
        });
    }
    Ok(())
}

fn check_required_markers(text: &str, kind: FragmentKind) -> Result<(), ConformityError> {
    let found = markers::markers(text);
    let attachments = found
        .iter()
        .filter(|m| m.kind == MarkerKind::Attachment)
        .count();
    match kind {
        FragmentKind::Scaffold => {
            // Unnumbered [R] markers are malformed in a scaffold and ignored.
            let numbers: Vec<u32> = found
                .iter()
                .filter_map(|m| match m.kind {
                    MarkerKind::Site { number } => number,
                    MarkerKind::Attachment => None,
                })
                .collect();
            if numbers.is_empty() {
                return Err(ConformityError::NoSiteMarkers {
                    text: text.to_string(),
                });
            }
            for expected in 1..=numbers.len() as u32 {
                if !numbers.contains(&expected) {
                    return Err(ConformityError::MissingSiteNumber {
                        text: text.to_string(),
                        number: expected,
                    });
                }
            }
        }
        FragmentKind::Linker => {
            if attachments != 1 {
                return Err(ConformityError::AttachmentMarkerCount {
                    text: text.to_string(),
                    kind,
                    found: attachments,
                });
            }
            if !found.iter().any(|m| m.is_site()) {
                return Err(ConformityError::NoLinkerSiteMarkers {
                    text: text.to_string(),
                });
            }
        }
        FragmentKind::BuildingBlock => {
            if attachments != 1 {
                return Err(ConformityError::AttachmentMarkerCount {
                    text: text.to_string(),
                    kind,
                    found: attachments,
                });
            }
        }
    }
    Ok(())
}

/// The bond-count check: every marker must be able to form exactly one bond.
/// Runs per dot-separated part so part boundaries count as string boundaries.
fn check_bond_counts(text: &str) -> Result<(), ConformityError> {
    for part in text.split('.') {
        for marker in markers::markers(part) {
            let before = part[..marker.start].chars().next_back();
            let after = part[marker.end..].chars().next();
            let fail = |err: fn(String, String) -> ConformityError| {
                Err(err(text.to_string(), marker.text(part).to_string()))
            };

            if before.is_some_and(|c| BOND_SYMBOLS.contains(&c))
                || after.is_some_and(|c| BOND_SYMBOLS.contains(&c))
            {
                return fail(|text, marker| ConformityError::BondNextToMarker { text, marker });
            }
            if before.is_some_and(|c| RING_CLOSURE_SYMBOLS.contains(&c))
                || after.is_some_and(|c| RING_CLOSURE_SYMBOLS.contains(&c))
            {
                return fail(|text, marker| ConformityError::RingClosureNextToMarker {
                    text,
                    marker,
                });
            }
            if before.is_some_and(|c| ATOM_SYMBOLS.contains(&c))
                && after.is_some_and(|c| ATOM_START_SYMBOLS.contains(&c))
            {
                return fail(|text, marker| ConformityError::MarkerBondedTwice { text, marker });
            }
            if after == Some('(') {
                let rest = &part[marker.end..];
                if let Some(close) = branch_end(rest) {
                    if rest[close..]
                        .chars()
                        .nth(1)
                        .is_some_and(|c| ATOM_START_SYMBOLS.contains(&c))
                    {
                        return fail(|text, marker| ConformityError::BranchWithContinuation {
                            text,
                            marker,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

/// Offset of the `)` closing the branch that opens at the start of `text`.
fn branch_end(text: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}
