//! Add command handler.

use anyhow::Result;

use crate::cli::output;
use crate::cli::{AddArgs, Runtime};
use crate::domain::NoteDraft;
use crate::store::NotesStore;

pub fn handle_add(args: &AddArgs, _runtime: &Runtime) -> Result<()> {
    let draft = NoteDraft {
        title: args.title.clone(),
        body: args.body.clone().unwrap_or_default(),
        folder: args.folder.clone(),
    };

    let store = NotesStore::new();
    let note = store.create_note(&draft)?;

    output::print_note(&note, args.format, false);
    Ok(())
}
