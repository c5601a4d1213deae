//! Command handlers for the CLI.

mod accounts;
mod add;
mod delete;
mod edit;
mod folders;
mod list;
mod read;
mod search;

pub use accounts::{handle_accounts, handle_status};
pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use folders::{handle_folders, handle_mkfolder};
pub use list::handle_ls;
pub use read::handle_read;
pub use search::handle_search;

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs, Runtime};
use crate::domain::note::{NoteAccount, NoteFolder, NoteItem};
use crate::domain::{account, resolve};
use crate::error::Error;
use crate::script::runner::ScriptRunner;
use crate::store::NotesStore;

/// Default listing limit when neither the flag nor the config sets one.
pub(crate) const DEFAULT_LIMIT: usize = 20;

/// How many notes to fetch when resolving identifiers. Positions shown by
/// `ls` stay valid as long as both views draw from the same window.
pub(crate) const RESOLVE_FETCH_LIMIT: usize = 100;

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "nook", &mut std::io::stdout());
    Ok(())
}

/// Applies the account scoping policy to a note listing.
///
/// Priority: `--account NAME`, then `--all-accounts`, then iCloud only.
/// A name that matches no account is an error rather than a silent empty
/// listing.
pub(crate) fn scope_notes<R: ScriptRunner>(
    store: &NotesStore<R>,
    runtime: &Runtime,
    notes: Vec<NoteItem>,
) -> Result<Vec<NoteItem>> {
    if let Some(name) = &runtime.account {
        let accounts = ensure_account(store, name)?;
        Ok(account::filter_notes(notes, name, &accounts))
    } else if runtime.all_accounts {
        Ok(notes)
    } else {
        Ok(notes.into_iter().filter(|n| n.is_icloud()).collect())
    }
}

/// Applies the account scoping policy to a folder listing.
pub(crate) fn scope_folders<R: ScriptRunner>(
    store: &NotesStore<R>,
    runtime: &Runtime,
    folders: Vec<NoteFolder>,
) -> Result<Vec<NoteFolder>> {
    if let Some(name) = &runtime.account {
        let accounts = ensure_account(store, name)?;
        Ok(account::filter_folders(folders, name, &accounts))
    } else if runtime.all_accounts {
        Ok(folders)
    } else {
        Ok(folders.into_iter().filter(|f| f.is_icloud()).collect())
    }
}

/// Resolves user tokens to notes, in input order.
///
/// Tokens go through the identifier resolver against the scoped listing
/// first. A token the listing cannot resolve is retried as a full id against
/// the backend, which keeps notes outside the default view (most notably the
/// trash) addressable by their explicit identifier.
pub(crate) fn resolve_notes<R: ScriptRunner>(
    store: &NotesStore<R>,
    tokens: &[String],
    candidates: &[NoteItem],
) -> crate::error::Result<Vec<NoteItem>> {
    let mut resolved = Vec::with_capacity(tokens.len());
    for token in tokens {
        match resolve::resolve(std::slice::from_ref(token), candidates) {
            Ok(mut notes) => resolved.append(&mut notes),
            Err(Error::NoteNotFound(_)) => resolved.push(store.note(token.trim())?),
            Err(err) => return Err(err),
        }
    }
    Ok(resolved)
}

fn ensure_account<R: ScriptRunner>(
    store: &NotesStore<R>,
    name: &str,
) -> Result<Vec<NoteAccount>> {
    let accounts = store.accounts()?;
    if !account::account_exists(name, &accounts) {
        return Err(Error::AccountNotFound(name.to_string()).into());
    }
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result as StoreResult;
    use crate::script::codec::{FIELD_SEP, RECORD_SEP};
    use crate::script::date::BackendDateParser;
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;

    /// Runner whose only job is answering the `accounts` listing.
    struct AccountsRunner {
        wire: String,
    }

    impl AccountsRunner {
        fn new(accounts: &[(&str, &str)]) -> Self {
            let wire = accounts
                .iter()
                .map(|(id, name)| format!("{id}{FIELD_SEP}{name}{RECORD_SEP}"))
                .collect();
            Self { wire }
        }
    }

    impl ScriptRunner for AccountsRunner {
        fn run(&self, _script: &str) -> StoreResult<String> {
            Ok(self.wire.clone())
        }
    }

    /// Runner that answers every script with the same canned wire.
    struct CannedRunner {
        wire: String,
    }

    impl ScriptRunner for CannedRunner {
        fn run(&self, _script: &str) -> StoreResult<String> {
            Ok(self.wire.clone())
        }
    }

    /// Runner for paths that must never reach the backend.
    struct UnreachableRunner;

    impl ScriptRunner for UnreachableRunner {
        fn run(&self, _script: &str) -> StoreResult<String> {
            panic!("the backend must not be called");
        }
    }

    fn pinned_dates() -> BackendDateParser {
        BackendDateParser::new(FixedOffset::east_opt(0).unwrap())
    }

    fn store_with(accounts: &[(&str, &str)]) -> NotesStore<AccountsRunner> {
        NotesStore::with_runner_and_dates(AccountsRunner::new(accounts), pinned_dates())
    }

    fn note_wire(id: &str, folder: &str) -> String {
        [id, "Title", "body", folder, "2024-02-08 15:30:45", "2024-02-08 16:00:00"]
            .join(FIELD_SEP)
    }

    fn note(id: &str) -> NoteItem {
        use chrono::{TimeZone, Utc};
        NoteItem {
            id: id.to_string(),
            title: "Title".to_string(),
            body: String::new(),
            folder: "Notes".to_string(),
            created: Utc.with_ymd_and_hms(2024, 2, 8, 12, 0, 0).unwrap(),
            modified: Utc.with_ymd_and_hms(2024, 2, 8, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn default_scope_is_icloud_only() {
        let store = store_with(&[]);
        let runtime = Runtime::default();
        let notes = vec![
            note("x-coredata://AAA/ICNote/p1"),
            note("x-coredata://BBB/IMAPNote/p2"),
        ];
        let scoped = scope_notes(&store, &runtime, notes).unwrap();
        assert_eq!(scoped.len(), 1);
        assert!(scoped[0].is_icloud());
    }

    #[test]
    fn all_accounts_keeps_everything() {
        let store = store_with(&[]);
        let runtime = Runtime {
            all_accounts: true,
            ..Default::default()
        };
        let notes = vec![
            note("x-coredata://AAA/ICNote/p1"),
            note("x-coredata://BBB/IMAPNote/p2"),
        ];
        assert_eq!(scope_notes(&store, &runtime, notes).unwrap().len(), 2);
    }

    #[test]
    fn account_name_scopes_by_uuid() {
        let store = store_with(&[
            ("x-coredata://AAA/ICAccount/p1", "iCloud"),
            ("x-coredata://BBB/IMAPAccount/p2", "Work"),
        ]);
        let runtime = Runtime {
            account: Some("work".to_string()),
            ..Default::default()
        };
        let notes = vec![
            note("x-coredata://AAA/ICNote/p1"),
            note("x-coredata://BBB/IMAPNote/p2"),
        ];
        let scoped = scope_notes(&store, &runtime, notes).unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, "x-coredata://BBB/IMAPNote/p2");
    }

    #[test]
    fn resolve_notes_prefers_the_listing() {
        let store = NotesStore::with_runner_and_dates(UnreachableRunner, pinned_dates());
        let candidates = vec![note("x-coredata://AAA/ICNote/p1")];
        let resolved = resolve_notes(&store, &["1".to_string()], &candidates).unwrap();
        assert_eq!(resolved[0].id, "x-coredata://AAA/ICNote/p1");
    }

    #[test]
    fn resolve_notes_fetches_unlisted_full_ids_directly() {
        // Trashed notes are excluded from the candidate listing but stay
        // addressable by their full id.
        let id = "x-coredata://AAA/ICNote/p9";
        let store = NotesStore::with_runner_and_dates(
            CannedRunner {
                wire: note_wire(id, "Recently Deleted"),
            },
            pinned_dates(),
        );
        let candidates = vec![note("x-coredata://AAA/ICNote/p1")];
        let resolved = resolve_notes(&store, &[id.to_string()], &candidates).unwrap();
        assert_eq!(resolved[0].id, id);
        assert_eq!(resolved[0].folder, "Recently Deleted");
    }

    #[test]
    fn resolve_notes_fallback_miss_is_still_not_found() {
        let store = NotesStore::with_runner_and_dates(
            CannedRunner { wire: String::new() },
            pinned_dates(),
        );
        let token = "x-coredata://AAA/ICNote/gone".to_string();
        let err = resolve_notes(&store, std::slice::from_ref(&token), &[]).unwrap_err();
        assert_eq!(err, Error::NoteNotFound(token));
    }

    #[test]
    fn resolve_notes_does_not_mask_ambiguity() {
        let store = NotesStore::with_runner_and_dates(UnreachableRunner, pinned_dates());
        let candidates = vec![
            note("x-coredata://AAA/ICNote/p1"),
            note("x-coredata://AAA/ICNote/p2"),
        ];
        let err =
            resolve_notes(&store, &["x-coredata://AAA".to_string()], &candidates).unwrap_err();
        assert!(matches!(err, Error::AmbiguousIdentifier { .. }));
    }

    #[test]
    fn resolve_notes_invalid_tokens_skip_the_fallback() {
        let store = NotesStore::with_runner_and_dates(UnreachableRunner, pinned_dates());
        let candidates = vec![note("x-coredata://AAA/ICNote/p1")];
        let err = resolve_notes(&store, &["0".to_string()], &candidates).unwrap_err();
        assert_eq!(err, Error::InvalidIdentifier("0".to_string()));
    }

    #[test]
    fn unknown_account_name_is_an_error() {
        let store = store_with(&[("x-coredata://AAA/ICAccount/p1", "iCloud")]);
        let runtime = Runtime {
            account: Some("exchange".to_string()),
            ..Default::default()
        };
        let err = scope_notes(&store, &runtime, vec![note("x-coredata://AAA/ICNote/p1")])
            .unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert_eq!(err, Error::AccountNotFound("exchange".to_string()));
    }
}
