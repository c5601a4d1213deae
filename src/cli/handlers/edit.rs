//! Edit command handler.

use anyhow::Result;

use super::{RESOLVE_FETCH_LIMIT, resolve_notes, scope_notes};
use crate::cli::output;
use crate::cli::{EditArgs, Runtime};
use crate::domain::{NoteUpdate, trash};
use crate::error::Error;
use crate::store::NotesStore;

pub fn handle_edit(args: &EditArgs, runtime: &Runtime) -> Result<()> {
    let update = NoteUpdate {
        title: args.title.clone(),
        body: args.body.clone(),
        folder: args.folder.clone(),
    };
    if update.is_empty() {
        return Err(Error::OperationFailed("no changes specified".to_string()).into());
    }

    let store = NotesStore::new();

    let notes = store.notes(None, RESOLVE_FETCH_LIMIT)?;
    let notes = trash::exclude_trashed(notes);
    let notes = scope_notes(&store, runtime, notes)?;

    let note = resolve_notes(&store, std::slice::from_ref(&args.id), &notes)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoteNotFound(args.id.clone()))?;

    let updated = store.update_note(&note.id, &update)?;
    output::print_note(&updated, args.format, false);
    Ok(())
}
