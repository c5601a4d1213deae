//! AppleScript source generation, one function per store operation.
//!
//! Every interpolated value passes through [`escape`] before it lands inside
//! a script string literal; callers never splice raw user text themselves.
//! Lookups that can miss are wrapped in `try`/`on error` blocks so a missing
//! folder or note surfaces as recognizable error text instead of an
//! unhandled AppleScript fault, and listing loops enforce their result limit
//! inside the script to bound the work the backend does.

use super::codec::{FIELD_SEP, NEWLINE_TOKEN, RECORD_SEP};

/// Escapes a value for embedding inside an AppleScript string literal.
/// Backslashes first, then quotes, then line breaks.
pub fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Converts a plain-text body into the HTML the backend requires for note
/// content, escaping reserved characters and mapping newlines to `<br>`.
pub fn html_body(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\n', "<br>");
    format!("<html><body>{escaped}</body></html>")
}

/// AppleScript text replacement subroutine, appended to any script that
/// sanitizes note bodies.
fn replace_text_handler() -> &'static str {
    r#"on replaceText(theText, old, new)
  set {TID, AppleScript's text item delimiters} to {AppleScript's text item delimiters, old}
  set parts to text items of theText
  set AppleScript's text item delimiters to new
  set theText to parts as text
  set AppleScript's text item delimiters to TID
  return theText
end replaceText"#
}

/// Body sanitation: newlines in the plaintext would break record parsing, so
/// they are swapped for the transport token before concatenation.
fn sanitize_body(indent: &str) -> String {
    format!(
        "{indent}set noteBody to my replaceText(noteBody, linefeed, \"{NEWLINE_TOKEN}\")\n\
         {indent}set noteBody to my replaceText(noteBody, return, \"{NEWLINE_TOKEN}\")"
    )
}

/// The six-field note record expression shared by every note-returning
/// script. Field order is fixed: id, title, body, folder, created, modified.
fn note_record() -> String {
    format!(
        "noteID & \"{FIELD_SEP}\" & noteName & \"{FIELD_SEP}\" & noteBody & \"{FIELD_SEP}\" & \
         folderName & \"{FIELD_SEP}\" & createdDate & \"{FIELD_SEP}\" & modifiedDate"
    )
}

/// Lists all accounts as (id, name) records.
pub fn list_accounts() -> String {
    format!(
        r#"tell application "Notes"
  set output to ""
  repeat with a in accounts
    set output to output & (id of a) & "{FIELD_SEP}" & (name of a) & "{RECORD_SEP}"
  end repeat
  return output
end tell"#
    )
}

/// Lists all folders as (id, name, count) records.
pub fn list_folders() -> String {
    format!(
        r#"tell application "Notes"
  set output to ""
  repeat with f in folders
    set folderID to id of f
    set folderName to name of f
    set folderCount to count of notes in f
    set output to output & folderID & "{FIELD_SEP}" & folderName & "{FIELD_SEP}" & folderCount & "{RECORD_SEP}"
  end repeat
  return output
end tell"#
    )
}

/// Creates a folder, optionally inside a named account, and returns it as a
/// single (id, name, count) record.
pub fn create_folder(name: &str, account: Option<&str>) -> String {
    let name = escape(name);
    match account {
        Some(account) => {
            let account = escape(account);
            format!(
                r#"tell application "Notes"
  try
    set targetAccount to account "{account}"
  on error
    error "Account not found: {account}"
  end try
  set newFolder to make new folder at targetAccount with properties {{name:"{name}"}}
  set folderID to id of newFolder
  set folderName to name of newFolder
  set folderCount to count of notes in newFolder
  return folderID & "{FIELD_SEP}" & folderName & "{FIELD_SEP}" & folderCount
end tell"#
            )
        }
        None => format!(
            r#"tell application "Notes"
  set newFolder to make new folder with properties {{name:"{name}"}}
  set folderID to id of newFolder
  set folderName to name of newFolder
  set folderCount to count of notes in newFolder
  return folderID & "{FIELD_SEP}" & folderName & "{FIELD_SEP}" & folderCount
end tell"#
        ),
    }
}

/// Lists up to `limit` notes, either from one folder or across all folders.
/// Notes that fail to read (e.g. mid-sync) are skipped by the inner `try`.
pub fn list_notes(folder: Option<&str>, limit: usize) -> String {
    let record = note_record();
    match folder {
        Some(folder) => {
            let folder = escape(folder);
            let sanitize = sanitize_body("      ");
            format!(
                r#"tell application "Notes"
  try
    set targetFolder to folder "{folder}"
  on error
    error "Folder not found: {folder}"
  end try
  set folderName to name of targetFolder
  set output to ""
  set counter to 0
  repeat with n in notes of targetFolder
    if counter ≥ {limit} then exit repeat
    try
      set noteID to id of n
      set noteName to name of n
      set noteBody to plaintext of n
{sanitize}
      set createdDate to creation date of n
      set modifiedDate to modification date of n
      set output to output & {record} & "{RECORD_SEP}"
      set counter to counter + 1
    end try
  end repeat
  return output
end tell
{handler}"#,
                handler = replace_text_handler()
            )
        }
        None => {
            let sanitize = sanitize_body("        ");
            format!(
                r#"tell application "Notes"
  set output to ""
  set counter to 0
  repeat with f in folders
    try
      set folderName to name of f
      repeat with n in notes of f
        if counter ≥ {limit} then exit repeat
        try
          set noteID to id of n
          set noteName to name of n
          set noteBody to plaintext of n
{sanitize}
          set createdDate to creation date of n
          set modifiedDate to modification date of n
          set output to output & {record} & "{RECORD_SEP}"
          set counter to counter + 1
        end try
      end repeat
    end try
    if counter ≥ {limit} then exit repeat
  end repeat
  return output
end tell
{handler}"#,
                handler = replace_text_handler()
            )
        }
    }
}

/// Fetches a single note by its full id.
pub fn get_note(id: &str) -> String {
    let id = escape(id);
    let sanitize = sanitize_body("  ");
    let record = note_record();
    format!(
        r#"tell application "Notes"
  try
    set targetNote to note id "{id}"
  on error
    error "Note not found: {id}"
  end try
  set noteID to id of targetNote
  set noteName to name of targetNote
  set noteBody to plaintext of targetNote
{sanitize}
  set folderName to "Notes"
  try
    set folderName to name of container of targetNote
  end try
  set createdDate to creation date of targetNote
  set modifiedDate to modification date of targetNote
  return {record}
end tell
{handler}"#,
        handler = replace_text_handler()
    )
}

/// Creates a note and returns the refetched record, so the caller sees the
/// backend's view (assigned id, actual timestamps) rather than the draft.
pub fn create_note(title: &str, body: &str, folder: Option<&str>) -> String {
    let folder = escape(folder.unwrap_or("Notes"));
    let title = escape(title);
    let html = escape(&html_body(body));
    let sanitize = sanitize_body("  ");
    let record = note_record();
    format!(
        r#"tell application "Notes"
  try
    set targetFolder to folder "{folder}"
  on error
    error "Folder not found: {folder}"
  end try
  set newNote to make new note at targetFolder with properties {{name:"{title}", body:"{html}"}}
  set noteID to id of newNote
  set noteName to name of newNote
  set noteBody to plaintext of newNote
{sanitize}
  set folderName to "{folder}"
  try
    set folderName to name of container of newNote
  end try
  set createdDate to creation date of newNote
  set modifiedDate to modification date of newNote
  return {record}
end tell
{handler}"#,
        handler = replace_text_handler()
    )
}

/// Applies a partial update to a note and returns the refetched record.
/// Absent fields contribute no statements at all, so "leave unchanged" never
/// touches the backend value.
pub fn update_note(
    id: &str,
    title: Option<&str>,
    body: Option<&str>,
    folder: Option<&str>,
) -> String {
    let id = escape(id);

    let mut updates: Vec<String> = Vec::new();
    if let Some(title) = title {
        updates.push(format!("set name of targetNote to \"{}\"", escape(title)));
    }
    if let Some(body) = body {
        updates.push(format!(
            "set body of targetNote to \"{}\"",
            escape(&html_body(body))
        ));
    }
    if let Some(folder) = folder {
        let folder = escape(folder);
        updates.push(format!(
            "try\n    set newFolder to folder \"{folder}\"\n    move targetNote to newFolder\n  on error\n    error \"Folder not found: {folder}\"\n  end try"
        ));
    }
    let update_block = updates.join("\n  ");

    let sanitize = sanitize_body("  ");
    let record = note_record();
    format!(
        r#"tell application "Notes"
  try
    set targetNote to note id "{id}"
  on error
    error "Note not found: {id}"
  end try
  {update_block}
  set noteID to id of targetNote
  set noteName to name of targetNote
  set noteBody to plaintext of targetNote
{sanitize}
  set folderName to "Notes"
  try
    set folderName to name of container of targetNote
  end try
  set createdDate to creation date of targetNote
  set modifiedDate to modification date of targetNote
  return {record}
end tell
{handler}"#,
        handler = replace_text_handler()
    )
}

/// Deletes a note by its full id.
pub fn delete_note(id: &str) -> String {
    let id = escape(id);
    format!(
        r#"tell application "Notes"
  try
    set targetNote to note id "{id}"
    delete targetNote
  on error
    error "Note not found: {id}"
  end try
end tell"#
    )
}

/// Searches note titles and plaintext bodies for a substring, either within
/// one folder or across all folders.
pub fn search_notes(query: &str, folder: Option<&str>) -> String {
    let query = escape(query);
    let record = note_record();
    match folder {
        Some(folder) => {
            let folder = escape(folder);
            let sanitize = sanitize_body("      ");
            format!(
                r#"tell application "Notes"
  try
    set targetFolder to folder "{folder}"
  on error
    error "Folder not found: {folder}"
  end try
  set folderName to name of targetFolder
  set searchResults to (every note of targetFolder whose name contains "{query}" or plaintext contains "{query}")
  set output to ""
  repeat with n in searchResults
    try
      set noteID to id of n
      set noteName to name of n
      set noteBody to plaintext of n
{sanitize}
      set createdDate to creation date of n
      set modifiedDate to modification date of n
      set output to output & {record} & "{RECORD_SEP}"
    end try
  end repeat
  return output
end tell
{handler}"#,
                handler = replace_text_handler()
            )
        }
        None => {
            let sanitize = sanitize_body("        ");
            format!(
                r#"tell application "Notes"
  set output to ""
  repeat with f in folders
    try
      set folderName to name of f
      set searchResults to (every note of f whose name contains "{query}" or plaintext contains "{query}")
      repeat with n in searchResults
        try
          set noteID to id of n
          set noteName to name of n
          set noteBody to plaintext of n
{sanitize}
          set createdDate to creation date of n
          set modifiedDate to modification date of n
          set output to output & {record} & "{RECORD_SEP}"
        end try
      end repeat
    end try
  end repeat
  return output
end tell
{handler}"#,
                handler = replace_text_handler()
            )
        }
    }
}

/// Minimal probe used to check whether automation access is granted.
pub fn count_folders() -> String {
    r#"tell application "Notes"
  return count of folders
end tell"#
        .to_string()
}
