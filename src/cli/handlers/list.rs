//! List command handler.

use anyhow::Result;
use chrono::Utc;

use super::{DEFAULT_LIMIT, scope_notes};
use crate::cli::output;
use crate::cli::{ListArgs, Runtime};
use crate::domain::{filter, trash};
use crate::store::NotesStore;

pub fn handle_ls(args: &ListArgs, runtime: &Runtime) -> Result<()> {
    let store = NotesStore::new();
    let limit = args.limit.or(runtime.limit).unwrap_or(DEFAULT_LIMIT);

    let notes = store.notes(args.folder.as_deref(), limit)?;
    let notes = trash::exclude_trashed(notes);
    let notes = scope_notes(&store, runtime, notes)?;

    let recency = args.filter.unwrap_or_default();
    let mut notes = recency.apply(notes, Utc::now());
    filter::sort_by_modified_desc(&mut notes);

    output::print_notes(&notes, args.format);
    Ok(())
}
