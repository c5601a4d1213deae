//! Account matching via shared UUID prefixes in `x-coredata://` ids.
//!
//! Notes, folders, and accounts that belong to the same account all embed
//! the same UUID right after the scheme:
//!
//! ```text
//! x-coredata://<UUID>/<kind>/<localID>
//! ```
//!
//! There is no join between entities; membership is inferred by comparing
//! extracted UUIDs.

use std::collections::HashSet;

use super::note::{NoteAccount, NoteFolder, NoteItem};

const ID_SCHEME: &str = "x-coredata://";

/// Extracts the account UUID from an `x-coredata://UUID/Type/...` id.
///
/// Returns `None` for any other shape: missing scheme, no `/` after the
/// UUID, or an empty UUID segment.
pub fn extract_uuid(id: &str) -> Option<&str> {
    let rest = id.strip_prefix(ID_SCHEME)?;
    let (uuid, _) = rest.split_once('/')?;
    if uuid.is_empty() { None } else { Some(uuid) }
}

/// Keeps the notes whose account display name contains `name`
/// (case-insensitive). An empty UUID set yields an empty result.
pub fn filter_notes(notes: Vec<NoteItem>, name: &str, accounts: &[NoteAccount]) -> Vec<NoteItem> {
    let uuids = matching_uuids(name, accounts);
    notes
        .into_iter()
        .filter(|note| note.account_uuid().is_some_and(|uuid| uuids.contains(uuid)))
        .collect()
}

/// Keeps the folders whose account display name contains `name`
/// (case-insensitive).
pub fn filter_folders(
    folders: Vec<NoteFolder>,
    name: &str,
    accounts: &[NoteAccount],
) -> Vec<NoteFolder> {
    let uuids = matching_uuids(name, accounts);
    folders
        .into_iter()
        .filter(|folder| folder.account_uuid().is_some_and(|uuid| uuids.contains(uuid)))
        .collect()
}

/// True if any account display name contains `name` (case-insensitive).
pub fn account_exists(name: &str, accounts: &[NoteAccount]) -> bool {
    let needle = name.to_lowercase();
    accounts.iter().any(|a| a.name.to_lowercase().contains(&needle))
}

/// UUIDs of the accounts whose display name contains `name`.
fn matching_uuids<'a>(name: &str, accounts: &'a [NoteAccount]) -> HashSet<&'a str> {
    let needle = name.to_lowercase();
    accounts
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&needle))
        .filter_map(|a| extract_uuid(&a.id))
        .collect()
}
