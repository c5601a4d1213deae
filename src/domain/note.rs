//! Entities mirrored from the Notes backend.
//!
//! All of these are transient: fetched per operation, never cached, with no
//! local identity beyond the backend-assigned id.

use chrono::{DateTime, Utc};

use super::{account, trash};

/// A note as reported by the backend.
///
/// The folder name is denormalized display text, not a reference; the
/// timestamps are backend-trusted (`modified >= created` is not enforced).
#[derive(Debug, Clone, PartialEq)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub folder: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl NoteItem {
    /// Whether this note lives in the local iCloud account (vs IMAP/Exchange).
    pub fn is_icloud(&self) -> bool {
        self.id.contains("/ICNote/")
    }

    /// Whether this note sits in the "Recently Deleted" folder.
    pub fn is_trashed(&self) -> bool {
        trash::is_trash_name(&self.folder)
    }

    /// The account UUID embedded in the note id, if the id is well-formed.
    pub fn account_uuid(&self) -> Option<&str> {
        account::extract_uuid(&self.id)
    }
}

/// A folder with its backend-computed note count.
///
/// The count is eager and may overstate what a filtered listing shows, e.g.
/// after trash exclusion downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteFolder {
    pub id: String,
    pub name: String,
    pub note_count: usize,
}

impl NoteFolder {
    /// Whether this folder lives in the local iCloud account.
    pub fn is_icloud(&self) -> bool {
        self.id.contains("/ICFolder/")
    }

    /// The account UUID embedded in the folder id, if the id is well-formed.
    pub fn account_uuid(&self) -> Option<&str> {
        account::extract_uuid(&self.id)
    }
}

/// An account (iCloud, Exchange, IMAP, ...). Membership of notes and folders
/// is inferred through the shared UUID in their ids, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteAccount {
    pub id: String,
    pub name: String,
}

/// Request to create a new note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    /// Target folder; `None` means the default "Notes" folder.
    pub folder: Option<String>,
}

/// Partial update of an existing note. `None` means "leave unchanged",
/// which is distinct from setting a field to an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub folder: Option<String>,
}

impl NoteUpdate {
    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.folder.is_none()
    }
}
