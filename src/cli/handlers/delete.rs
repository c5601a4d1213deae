//! Delete command handler.

use anyhow::Result;

use super::{RESOLVE_FETCH_LIMIT, resolve_notes, scope_notes};
use crate::cli::output;
use crate::cli::{DeleteArgs, Runtime};
use crate::domain::trash;
use crate::store::NotesStore;

pub fn handle_delete(args: &DeleteArgs, runtime: &Runtime) -> Result<()> {
    let store = NotesStore::new();

    let notes = store.notes(None, RESOLVE_FETCH_LIMIT)?;
    let notes = trash::exclude_trashed(notes);
    let notes = scope_notes(&store, runtime, notes)?;

    // Resolve every token before touching anything, so a bad token in the
    // middle of the list aborts the whole command instead of leaving a
    // half-deleted batch.
    let resolved = resolve_notes(&store, &args.ids, &notes)?;

    if args.dry_run {
        for note in &resolved {
            output::print_note(note, args.format, false);
        }
        return Ok(());
    }

    for note in &resolved {
        store.delete_note(&note.id)?;
    }

    output::print_delete_result(resolved.len(), args.format);
    Ok(())
}
