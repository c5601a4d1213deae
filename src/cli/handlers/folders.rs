//! Folder command handlers.

use anyhow::Result;

use super::scope_folders;
use crate::cli::output;
use crate::cli::{FoldersArgs, MkfolderArgs, Runtime};
use crate::domain::trash;
use crate::store::NotesStore;

pub fn handle_folders(args: &FoldersArgs, runtime: &Runtime) -> Result<()> {
    let store = NotesStore::new();

    let folders = store.folders()?;
    let folders: Vec<_> = folders
        .into_iter()
        .filter(|f| !trash::is_trash_name(&f.name))
        .collect();
    let folders = scope_folders(&store, runtime, folders)?;

    output::print_folders(&folders, args.format);
    Ok(())
}

pub fn handle_mkfolder(args: &MkfolderArgs, runtime: &Runtime) -> Result<()> {
    let store = NotesStore::new();
    let folder = store.create_folder(&args.name, runtime.account.as_deref())?;
    output::print_folders(&[folder], args.format);
    Ok(())
}
