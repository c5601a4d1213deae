//! Account and status command handlers.

use anyhow::Result;

use crate::cli::output;
use crate::cli::{AccountsArgs, Runtime, StatusArgs};
use crate::store::NotesStore;

pub fn handle_accounts(args: &AccountsArgs, _runtime: &Runtime) -> Result<()> {
    let store = NotesStore::new();
    let accounts = store.accounts()?;
    output::print_accounts(&accounts, args.format);
    Ok(())
}

pub fn handle_status(args: &StatusArgs, _runtime: &Runtime) -> Result<()> {
    let store = NotesStore::new();
    let granted = store.check_permission();
    output::print_status(granted, args.format);
    Ok(())
}
