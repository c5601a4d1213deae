//! Domain model: notes, folders, accounts, and the matching rules over them.

pub mod account;
pub mod filter;
pub mod note;
pub mod resolve;
pub mod trash;

pub use filter::RecencyFilter;
pub use note::{NoteAccount, NoteDraft, NoteFolder, NoteItem, NoteUpdate};
