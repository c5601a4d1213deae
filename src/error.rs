//! Error taxonomy for notes operations.

use thiserror::Error;

/// Errors surfaced by the store, the identifier resolver, and account
/// scoping. None of these are retried automatically; every backend call is
/// attempted exactly once.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Notes automation access has not been granted to this process.
    #[error("permission denied: Notes automation access is not authorized")]
    PermissionDenied,

    /// No note matched the given id, prefix, or index.
    #[error("note not found: \"{0}\"")]
    NoteNotFound(String),

    /// No folder with the given name exists.
    #[error("folder not found: \"{0}\"")]
    FolderNotFound(String),

    /// No account display name matched the given filter.
    #[error("account not found: \"{0}\" (use 'nook accounts' to list available accounts)")]
    AccountNotFound(String),

    /// An id prefix matched more than one note.
    #[error("identifier \"{input}\" matches multiple notes: {}", .matches.join(", "))]
    AmbiguousIdentifier { input: String, matches: Vec<String> },

    /// The token is neither a valid index nor a usable id prefix.
    #[error("invalid identifier: \"{0}\"")]
    InvalidIdentifier(String),

    /// Raw backend failure text, passed through verbatim.
    #[error("AppleScript error: {0}")]
    Script(String),

    /// A local failure, e.g. an empty result where one record was expected.
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for notes operations.
pub type Result<T> = std::result::Result<T, Error>;
