//! Output rendering for command results.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::note::{NoteAccount, NoteFolder, NoteItem};
use crate::script::date;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Tab-separated lines for scripting
    Plain,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A note in machine output. Timestamps are extended ISO-8601 with
/// fractional seconds.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub body: String,
    pub folder: String,
    pub created: String,
    pub modified: String,
}

impl NoteListing {
    fn from_note(note: &NoteItem) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            body: note.body.clone(),
            folder: note.folder.clone(),
            created: date::format_iso8601(note.created),
            modified: date::format_iso8601(note.modified),
        }
    }
}

/// A folder in machine output.
#[derive(Debug, Serialize)]
pub struct FolderListing {
    pub id: String,
    pub name: String,
    pub note_count: usize,
}

/// An account in machine output.
#[derive(Debug, Serialize)]
pub struct AccountListing {
    pub id: String,
    pub name: String,
}

/// Prints a note listing. Human output numbers the notes so the positions
/// line up with what the identifier resolver accepts.
pub fn print_notes(notes: &[NoteItem], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found");
                return;
            }
            for (index, note) in notes.iter().enumerate() {
                println!(
                    "[{}] {} - {} - {}",
                    index + 1,
                    note.title,
                    note.folder,
                    date::format_display(note.modified)
                );
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from_note).collect();
            print_json(&Output::new(listings));
        }
        OutputFormat::Plain => {
            for note in notes {
                println!("{}", plain_line(note));
            }
        }
    }
}

/// Prints a single note, optionally with its full body.
pub fn print_note(note: &NoteItem, format: OutputFormat, full_content: bool) {
    match format {
        OutputFormat::Human => {
            println!("Title: {}", note.title);
            println!("Folder: {}", note.folder);
            println!("Created: {}", date::format_display(note.created));
            println!("Modified: {}", date::format_display(note.modified));
            if full_content {
                println!();
                println!("{}", note.body);
            }
        }
        OutputFormat::Json => print_json(&Output::new(NoteListing::from_note(note))),
        OutputFormat::Plain => println!("{}", plain_line(note)),
    }
}

/// Prints a folder listing.
pub fn print_folders(folders: &[NoteFolder], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if folders.is_empty() {
                println!("No folders found");
                return;
            }
            for (index, folder) in folders.iter().enumerate() {
                let plural = if folder.note_count == 1 { "note" } else { "notes" };
                println!(
                    "[{}] {} ({} {})",
                    index + 1,
                    folder.name,
                    folder.note_count,
                    plural
                );
            }
        }
        OutputFormat::Json => {
            let listings: Vec<FolderListing> = folders
                .iter()
                .map(|f| FolderListing {
                    id: f.id.clone(),
                    name: f.name.clone(),
                    note_count: f.note_count,
                })
                .collect();
            print_json(&Output::new(listings));
        }
        OutputFormat::Plain => {
            for folder in folders {
                println!("{}\t{}", folder.name, folder.note_count);
            }
        }
    }
}

/// Prints an account listing.
pub fn print_accounts(accounts: &[NoteAccount], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if accounts.is_empty() {
                println!("No accounts found");
                return;
            }
            for (index, account) in accounts.iter().enumerate() {
                println!("[{}] {}", index + 1, account.name);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<AccountListing> = accounts
                .iter()
                .map(|a| AccountListing {
                    id: a.id.clone(),
                    name: a.name.clone(),
                })
                .collect();
            print_json(&Output::new(listings));
        }
        OutputFormat::Plain => {
            for account in accounts {
                println!("{}\t{}", account.id, account.name);
            }
        }
    }
}

/// Prints the result of a delete operation.
pub fn print_delete_result(count: usize, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            let plural = if count == 1 { "note" } else { "notes" };
            println!("Deleted {count} {plural}");
        }
        OutputFormat::Json => print_json(&serde_json::json!({ "deleted": count })),
        OutputFormat::Plain => println!("{count}"),
    }
}

/// Prints the automation permission state.
pub fn print_status(granted: bool, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if granted {
                println!("Notes automation permission: granted");
            } else {
                println!("Notes automation permission: denied or not determined");
                println!();
                println!("To grant permission:");
                println!("  1. Open System Settings > Privacy & Security > Automation");
                println!("  2. Find your terminal application");
                println!("  3. Enable access to Notes");
            }
        }
        OutputFormat::Json => print_json(&serde_json::json!({ "authorized": granted })),
        OutputFormat::Plain => println!("{}", if granted { "granted" } else { "denied" }),
    }
}

fn plain_line(note: &NoteItem) -> String {
    [
        note.id.as_str(),
        note.folder.as_str(),
        &date::format_iso8601(note.created),
        &date::format_iso8601(note.modified),
        note.title.as_str(),
    ]
    .join("\t")
}

fn print_json<T: Serialize>(payload: &T) {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to encode JSON: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn sample_note() -> NoteItem {
        NoteItem {
            id: "x-coredata://AAA/ICNote/p1".to_string(),
            title: "Meeting".to_string(),
            body: "agenda".to_string(),
            folder: "Work".to_string(),
            created: Utc.with_ymd_and_hms(2024, 2, 8, 15, 30, 45).unwrap(),
            modified: Utc.with_ymd_and_hms(2024, 2, 8, 16, 0, 0).unwrap(),
        }
    }

    #[test]
    fn listing_timestamps_are_iso8601_with_fractional_seconds() {
        let listing = NoteListing::from_note(&sample_note());
        assert_eq!(listing.created, "2024-02-08T15:30:45.000Z");
        assert_eq!(listing.modified, "2024-02-08T16:00:00.000Z");
    }

    #[test]
    fn plain_line_is_tab_separated() {
        let line = plain_line(&sample_note());
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], "x-coredata://AAA/ICNote/p1");
        assert_eq!(fields[4], "Meeting");
    }

    #[test]
    fn note_listing_serializes_all_fields() {
        let json = serde_json::to_value(NoteListing::from_note(&sample_note())).unwrap();
        for key in ["id", "title", "body", "folder", "created", "modified"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
