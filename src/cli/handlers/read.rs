//! Read command handler.

use anyhow::Result;

use super::{RESOLVE_FETCH_LIMIT, resolve_notes, scope_notes};
use crate::cli::output;
use crate::cli::{ReadArgs, Runtime};
use crate::domain::trash;
use crate::error::Error;
use crate::store::NotesStore;

pub fn handle_read(args: &ReadArgs, runtime: &Runtime) -> Result<()> {
    let store = NotesStore::new();

    let notes = store.notes(None, RESOLVE_FETCH_LIMIT)?;
    let notes = trash::exclude_trashed(notes);
    let notes = scope_notes(&store, runtime, notes)?;

    let note = resolve_notes(&store, std::slice::from_ref(&args.id), &notes)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoteNotFound(args.id.clone()))?;

    output::print_note(&note, args.format, true);
    Ok(())
}
