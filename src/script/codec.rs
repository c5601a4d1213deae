//! Delimited wire format for AppleScript results.
//!
//! The automation channel can only return one string, so structured records
//! travel as fields joined by sentinel tokens. The sentinels are multi
//! character bracketed strings that do not occur in real note data; embedded
//! newlines inside a field are carried as a third token and restored on
//! decode.

/// Separates fields within a record.
pub const FIELD_SEP: &str = "<<F>>";

/// Separates records within a batch.
pub const RECORD_SEP: &str = "<<R>>";

/// Stands in for a literal newline or carriage return inside a field value.
pub const NEWLINE_TOKEN: &str = "<<NL>>";

/// Replaces literal newlines and carriage returns with the transport token.
pub fn encode_field(value: &str) -> String {
    value.replace('\n', NEWLINE_TOKEN).replace('\r', NEWLINE_TOKEN)
}

/// Encodes one record from ordered field values.
pub fn encode_record(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(FIELD_SEP)
}

/// Encodes a batch the way the generated scripts do: every record is
/// followed by a record separator, including the last one.
pub fn encode_records(records: &[Vec<String>]) -> String {
    let mut out = String::new();
    for record in records {
        let fields: Vec<&str> = record.iter().map(String::as_str).collect();
        out.push_str(&encode_record(&fields));
        out.push_str(RECORD_SEP);
    }
    out
}

/// Splits raw backend output into records with at least `min_fields` fields.
///
/// Empty or whitespace-only records are discarded, and records with too few
/// fields are skipped rather than failing the batch, so one malformed record
/// degrades a long listing to partial results instead of aborting it.
pub fn decode(output: &str, min_fields: usize) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    for raw in output.split(RECORD_SEP) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<String> = trimmed.split(FIELD_SEP).map(decode_field).collect();
        if fields.len() < min_fields {
            continue;
        }
        records.push(fields);
    }
    records
}

fn decode_field(value: &str) -> String {
    value.replace(NEWLINE_TOKEN, "\n")
}
