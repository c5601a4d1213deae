//! Identifier resolution: positions and id prefixes against a note listing.

use crate::error::{Error, Result};

use super::filter;
use super::note::NoteItem;

/// Minimum length for an id-prefix token. Shorter non-numeric tokens are
/// rejected outright rather than matched.
pub const MIN_PREFIX_LEN: usize = 4;

/// Resolves user-supplied tokens to notes.
///
/// Candidates are ordered by modification time, newest first, so index 1 is
/// the most recently modified note. Each token resolves independently:
///
/// - An integer token is a 1-based position into the sorted collection.
/// - Anything else is matched as a case-insensitive prefix of note ids and
///   must identify exactly one note.
///
/// The output preserves the input token order.
pub fn resolve(tokens: &[String], notes: &[NoteItem]) -> Result<Vec<NoteItem>> {
    let mut sorted = notes.to_vec();
    filter::sort_by_modified_desc(&mut sorted);

    let mut resolved = Vec::with_capacity(tokens.len());
    for token in tokens {
        let trimmed = token.trim();

        if let Ok(index) = trimmed.parse::<i64>() {
            if index < 1 || index as usize > sorted.len() {
                return Err(Error::InvalidIdentifier(trimmed.to_string()));
            }
            resolved.push(sorted[index as usize - 1].clone());
            continue;
        }

        if trimmed.chars().count() < MIN_PREFIX_LEN {
            return Err(Error::InvalidIdentifier(trimmed.to_string()));
        }

        let needle = trimmed.to_lowercase();
        let matches: Vec<&NoteItem> = sorted
            .iter()
            .filter(|n| n.id.to_lowercase().starts_with(&needle))
            .collect();

        match matches.len() {
            0 => return Err(Error::NoteNotFound(trimmed.to_string())),
            1 => resolved.push(matches[0].clone()),
            _ => {
                return Err(Error::AmbiguousIdentifier {
                    input: trimmed.to_string(),
                    matches: matches.iter().map(|n| n.id.clone()).collect(),
                });
            }
        }
    }

    Ok(resolved)
}
