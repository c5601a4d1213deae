//! Backend gateway: executes generated scripts through osascript.

use std::process::Command;

use crate::error::{Error, Result};

/// Narrow boundary to the scripting backend.
///
/// The rest of the crate only ever sees text in, text out, which keeps every
/// layer above testable with a fake runner returning canned delimited
/// output.
pub trait ScriptRunner {
    /// Runs a script and returns its trimmed standard output.
    fn run(&self, script: &str) -> Result<String>;
}

const OSASCRIPT: &str = "/usr/bin/osascript";

/// Runs scripts through `/usr/bin/osascript`, blocking until the process
/// exits. No timeout is enforced; the interpreter is trusted to terminate.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsaRunner;

impl ScriptRunner for OsaRunner {
    fn run(&self, script: &str) -> Result<String> {
        let output = Command::new(OSASCRIPT)
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|e| Error::Script(format!("failed to launch {OSASCRIPT}: {e}")))?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(classify_failure(&stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Maps a failed invocation's error text onto the error taxonomy.
///
/// The generated scripts raise "<kind> not found: <name>" for misses, and
/// osascript reports denied automation access with "not allowed" / "not
/// authorized" phrasing. A silent non-zero exit still surfaces as a failure,
/// never as empty success.
fn classify_failure(stderr: &str) -> Error {
    let lowered = stderr.to_lowercase();
    if lowered.contains("not allowed") || lowered.contains("not authorized") {
        return Error::PermissionDenied;
    }
    if let Some(name) = marker_value(stderr, "Note not found: ") {
        return Error::NoteNotFound(name);
    }
    if let Some(name) = marker_value(stderr, "Folder not found: ") {
        return Error::FolderNotFound(name);
    }
    if let Some(name) = marker_value(stderr, "Account not found: ") {
        return Error::AccountNotFound(name);
    }
    if stderr.is_empty() {
        return Error::Script("Unknown error".to_string());
    }
    Error::Script(stderr.to_string())
}

/// Pulls the value following a planted error marker, dropping the trailing
/// "(-NNNN)" osascript appends to `error` output.
fn marker_value(stderr: &str, marker: &str) -> Option<String> {
    let start = stderr.find(marker)? + marker.len();
    let mut rest = stderr[start..].trim_end();
    if rest.ends_with(')') {
        if let Some(idx) = rest.rfind(" (-") {
            rest = &rest[..idx];
        }
    }
    Some(rest.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn authorization_phrases_classify_as_permission_denied() {
        for stderr in [
            "execution error: Not authorized to send Apple events to Notes. (-1743)",
            "osascript is not allowed assistive access",
            "NOT ALLOWED",
        ] {
            assert_eq!(classify_failure(stderr), Error::PermissionDenied, "{stderr:?}");
        }
    }

    #[test]
    fn planted_note_marker_classifies_as_not_found() {
        let err = classify_failure(
            "execution error: Note not found: x-coredata://AAA/ICNote/p9 (-2700)",
        );
        assert_eq!(err, Error::NoteNotFound("x-coredata://AAA/ICNote/p9".to_string()));
    }

    #[test]
    fn planted_folder_marker_classifies_as_not_found() {
        let err = classify_failure("execution error: Folder not found: Projects (-2700)");
        assert_eq!(err, Error::FolderNotFound("Projects".to_string()));
    }

    #[test]
    fn planted_account_marker_classifies_as_not_found() {
        let err = classify_failure("execution error: Account not found: Work (-2700)");
        assert_eq!(err, Error::AccountNotFound("Work".to_string()));
    }

    #[test]
    fn marker_without_error_code_suffix_still_parses() {
        let err = classify_failure("Folder not found: Projects");
        assert_eq!(err, Error::FolderNotFound("Projects".to_string()));
    }

    #[test]
    fn other_failures_keep_the_raw_text() {
        let err = classify_failure("execution error: Notes got an error (-1728)");
        assert_eq!(
            err,
            Error::Script("execution error: Notes got an error (-1728)".to_string())
        );
    }

    #[test]
    fn empty_stderr_is_still_a_failure() {
        assert_eq!(classify_failure(""), Error::Script("Unknown error".to_string()));
    }
}
