//! Parsing and formatting of backend date strings.
//!
//! AppleScript prints dates as localized wall-clock text with no zone
//! marker, in a shape that shifts with the system language and with the
//! presence of weekday and seconds components. Parsing tries a fixed,
//! ordered pattern list and interprets the result in an explicitly
//! configured UTC offset rather than whatever the process environment
//! happens to be.

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;

/// Wall-clock patterns tried in order; first match wins.
const PATTERNS: &[&str] = &[
    // Chinese long form, weekday already stripped: "2026年2月8日 15:38:05"
    "%Y年%m月%d日 %H:%M:%S",
    "%Y年%m月%d日 %H:%M",
    // English long form: "Thursday, February 8, 2024 at 3:30:45 PM"
    "%A, %B %d, %Y at %I:%M:%S %p",
    "%A, %B %d, %Y at %I:%M %p",
    "%B %d, %Y at %I:%M:%S %p",
    "%B %d, %Y at %I:%M %p",
    // Generic fallback
    "%Y-%m-%d %H:%M:%S",
];

/// Parses the date strings the scripting backend emits.
#[derive(Debug, Clone, Copy)]
pub struct BackendDateParser {
    offset: FixedOffset,
}

impl BackendDateParser {
    /// A parser that interprets wall-clock text in the given UTC offset.
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// A parser pinned to the offset this process is currently running in.
    /// The backend prints local time, so this is the right default when
    /// talking to the live backend on the same machine.
    pub fn local() -> Self {
        Self::new(*Local::now().offset())
    }

    /// Parses one backend date string, or returns `None` when no pattern
    /// matches. Never panics on unrecognized input.
    pub fn parse(&self, value: &str) -> Option<DateTime<Utc>> {
        let content = strip_wrapper(value);
        let naive = parse_wall_clock(&content)?;
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Removes surrounding whitespace and the `date "<content>"` convention
/// osascript uses when echoing date values.
fn strip_wrapper(value: &str) -> String {
    let mut s = value.trim();
    if let Some(rest) = s.strip_prefix("date \"") {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix('"') {
        s = rest;
    }
    s.trim().to_string()
}

fn parse_wall_clock(value: &str) -> Option<NaiveDateTime> {
    let normalized = strip_cjk_weekday(value);
    for pattern in PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, pattern) {
            return Some(dt);
        }
    }
    None
}

/// Collapses a CJK weekday token ("星期六", "周三", ...) to a single space so
/// the weekday-free patterns apply. English weekdays are handled by `%A`.
fn strip_cjk_weekday(value: &str) -> String {
    static WEEKDAY: OnceLock<Regex> = OnceLock::new();
    let re = WEEKDAY
        .get_or_init(|| Regex::new(r"\s*(?:星期|週|周)[一二三四五六日天]\s*").expect("valid regex"));
    re.replace_all(value, " ").trim().to_string()
}

/// Formats a timestamp as extended ISO-8601 with fractional seconds and a
/// `Z` suffix, the machine round-trip format.
pub fn format_iso8601(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an ISO-8601 timestamp, with or without fractional seconds.
pub fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Formats a timestamp for interactive display: medium date, short time,
/// in the local timezone.
pub fn format_display(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%b %-d, %Y %H:%M").to_string()
}
