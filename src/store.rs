//! High-level notes operations over the scripting backend.
//!
//! Each method is one logical operation: build the script, run it, decode
//! the delimited output into domain entities. Nothing is cached; every call
//! reflects the backend's state at that moment.

use crate::domain::note::{NoteAccount, NoteDraft, NoteFolder, NoteItem, NoteUpdate};
use crate::error::{Error, Result};
use crate::script::builder;
use crate::script::codec;
use crate::script::date::BackendDateParser;
use crate::script::runner::{OsaRunner, ScriptRunner};

/// Minimum field counts per record kind on the wire.
const ACCOUNT_FIELDS: usize = 2;
const FOLDER_FIELDS: usize = 3;
const NOTE_FIELDS: usize = 6;

/// The main interface to the Notes backend.
pub struct NotesStore<R: ScriptRunner> {
    runner: R,
    dates: BackendDateParser,
}

impl NotesStore<OsaRunner> {
    /// A store backed by the live osascript interpreter.
    pub fn new() -> Self {
        Self::with_runner(OsaRunner)
    }
}

impl Default for NotesStore<OsaRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ScriptRunner> NotesStore<R> {
    /// A store over an arbitrary runner, parsing dates in the local offset.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            dates: BackendDateParser::local(),
        }
    }

    /// A store with an explicit date parser, so tests can pin the offset.
    pub fn with_runner_and_dates(runner: R, dates: BackendDateParser) -> Self {
        Self { runner, dates }
    }

    /// Lists all accounts.
    pub fn accounts(&self) -> Result<Vec<NoteAccount>> {
        let output = self.runner.run(&builder::list_accounts())?;
        Ok(codec::decode(&output, ACCOUNT_FIELDS)
            .into_iter()
            .map(|mut fields| NoteAccount {
                id: std::mem::take(&mut fields[0]),
                name: std::mem::take(&mut fields[1]),
            })
            .collect())
    }

    /// Lists all folders with their note counts. The counts are computed by
    /// the backend at read time and may overstate filtered views.
    pub fn folders(&self) -> Result<Vec<NoteFolder>> {
        let output = self.runner.run(&builder::list_folders())?;
        Ok(parse_folders(&output))
    }

    /// Creates a folder, optionally inside a named account.
    pub fn create_folder(&self, name: &str, account: Option<&str>) -> Result<NoteFolder> {
        let output = self.runner.run(&builder::create_folder(name, account))?;
        parse_folders(&output)
            .into_iter()
            .next()
            .ok_or_else(|| Error::OperationFailed(format!("failed to create folder \"{name}\"")))
    }

    /// Lists up to `limit` notes, from one folder or across all folders.
    pub fn notes(&self, folder: Option<&str>, limit: usize) -> Result<Vec<NoteItem>> {
        let output = self.runner.run(&builder::list_notes(folder, limit))?;
        Ok(self.parse_notes(&output))
    }

    /// Fetches a single note by its full id. An empty result from an
    /// apparently successful script is still a not-found, never an empty
    /// entity.
    pub fn note(&self, id: &str) -> Result<NoteItem> {
        let output = self.runner.run(&builder::get_note(id))?;
        self.parse_notes(&output)
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))
    }

    /// Creates a note and returns the backend's view of it.
    pub fn create_note(&self, draft: &NoteDraft) -> Result<NoteItem> {
        let script = builder::create_note(&draft.title, &draft.body, draft.folder.as_deref());
        let output = self.runner.run(&script)?;
        self.parse_notes(&output)
            .into_iter()
            .next()
            .ok_or_else(|| Error::OperationFailed("failed to create note".to_string()))
    }

    /// Applies a partial update and returns the refetched note.
    pub fn update_note(&self, id: &str, update: &NoteUpdate) -> Result<NoteItem> {
        let script = builder::update_note(
            id,
            update.title.as_deref(),
            update.body.as_deref(),
            update.folder.as_deref(),
        );
        let output = self.runner.run(&script)?;
        self.parse_notes(&output)
            .into_iter()
            .next()
            .ok_or_else(|| Error::OperationFailed("failed to update note".to_string()))
    }

    /// Deletes a note by its full id.
    pub fn delete_note(&self, id: &str) -> Result<()> {
        self.runner.run(&builder::delete_note(id))?;
        Ok(())
    }

    /// Searches note titles and bodies for a substring.
    pub fn search(&self, query: &str, folder: Option<&str>) -> Result<Vec<NoteItem>> {
        let output = self.runner.run(&builder::search_notes(query, folder))?;
        Ok(self.parse_notes(&output))
    }

    /// Probes whether automation access is granted by running the cheapest
    /// possible script.
    pub fn check_permission(&self) -> bool {
        self.runner.run(&builder::count_folders()).is_ok()
    }

    /// Decodes note records. Records whose dates fail to parse are skipped,
    /// same as records with missing fields.
    fn parse_notes(&self, output: &str) -> Vec<NoteItem> {
        codec::decode(output, NOTE_FIELDS)
            .into_iter()
            .filter_map(|mut fields| {
                let created = self.dates.parse(&fields[4])?;
                let modified = self.dates.parse(&fields[5])?;
                Some(NoteItem {
                    id: std::mem::take(&mut fields[0]),
                    title: std::mem::take(&mut fields[1]),
                    body: std::mem::take(&mut fields[2]),
                    folder: std::mem::take(&mut fields[3]),
                    created,
                    modified,
                })
            })
            .collect()
    }
}

fn parse_folders(output: &str) -> Vec<NoteFolder> {
    codec::decode(output, FOLDER_FIELDS)
        .into_iter()
        .map(|mut fields| NoteFolder {
            id: std::mem::take(&mut fields[0]),
            name: std::mem::take(&mut fields[1]),
            note_count: fields[2].parse().unwrap_or(0),
        })
        .collect()
}
