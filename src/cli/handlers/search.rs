//! Search command handler.

use anyhow::Result;

use super::{DEFAULT_LIMIT, scope_notes};
use crate::cli::output;
use crate::cli::{Runtime, SearchArgs};
use crate::domain::{filter, trash};
use crate::store::NotesStore;

pub fn handle_search(args: &SearchArgs, runtime: &Runtime) -> Result<()> {
    let store = NotesStore::new();
    let limit = args.limit.or(runtime.limit).unwrap_or(DEFAULT_LIMIT);

    let notes = store.search(&args.query, args.folder.as_deref())?;
    let notes = trash::exclude_trashed(notes);
    let mut notes = scope_notes(&store, runtime, notes)?;

    filter::sort_by_modified_desc(&mut notes);
    notes.truncate(limit);

    output::print_notes(&notes, args.format);
    Ok(())
}
