//! Modification-date recency filters for note listings.

use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;

use super::note::NoteItem;

/// Recency window applied to listings, keyed on the modification timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RecencyFilter {
    /// Every note.
    All,
    /// Modified on the same UTC calendar day as `now`.
    Today,
    /// Modified within the last 7 days.
    Week,
    /// Modified within the last 30 days.
    #[default]
    Recent,
}

impl RecencyFilter {
    /// Whether a note modified at `modified` passes the filter relative to
    /// `now`. The reference instant is explicit so callers and tests control
    /// it instead of reading the clock here.
    pub fn matches(&self, modified: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Today => modified.date_naive() == now.date_naive(),
            Self::Week => modified >= now - Duration::weeks(1),
            Self::Recent => modified >= now - Duration::days(30),
        }
    }

    /// Applies the filter to a collection.
    pub fn apply(&self, notes: Vec<NoteItem>, now: DateTime<Utc>) -> Vec<NoteItem> {
        notes
            .into_iter()
            .filter(|n| self.matches(n.modified, now))
            .collect()
    }
}

/// Sorts notes newest-modified first. This ordering defines the positions
/// shown in listings and accepted by the identifier resolver.
pub fn sort_by_modified_desc(notes: &mut [NoteItem]) {
    notes.sort_by_key(|n| std::cmp::Reverse(n.modified));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn note_modified_at(id: &str, modified: DateTime<Utc>) -> NoteItem {
        NoteItem {
            id: id.to_string(),
            title: "Title".to_string(),
            body: String::new(),
            folder: "Notes".to_string(),
            created: modified,
            modified,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 8, 15, 0, 0).unwrap()
    }

    #[test]
    fn all_matches_everything() {
        let old = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        assert!(RecencyFilter::All.matches(old, now()));
    }

    #[test]
    fn today_matches_same_day_only() {
        let morning = Utc.with_ymd_and_hms(2024, 2, 8, 0, 5, 0).unwrap();
        let yesterday = Utc.with_ymd_and_hms(2024, 2, 7, 23, 55, 0).unwrap();
        assert!(RecencyFilter::Today.matches(morning, now()));
        assert!(!RecencyFilter::Today.matches(yesterday, now()));
    }

    #[test]
    fn week_is_a_seven_day_window() {
        let six_days = now() - Duration::days(6);
        let eight_days = now() - Duration::days(8);
        assert!(RecencyFilter::Week.matches(six_days, now()));
        assert!(!RecencyFilter::Week.matches(eight_days, now()));
    }

    #[test]
    fn recent_is_a_thirty_day_window() {
        let in_window = now() - Duration::days(29);
        let out_of_window = now() - Duration::days(31);
        assert!(RecencyFilter::Recent.matches(in_window, now()));
        assert!(!RecencyFilter::Recent.matches(out_of_window, now()));
    }

    #[test]
    fn apply_keeps_only_matching_notes() {
        let notes = vec![
            note_modified_at("a", now() - Duration::days(1)),
            note_modified_at("b", now() - Duration::days(40)),
        ];
        let kept = RecencyFilter::Recent.apply(notes, now());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "a");
    }

    #[test]
    fn sort_puts_newest_first() {
        let mut notes = vec![
            note_modified_at("old", now() - Duration::days(3)),
            note_modified_at("new", now()),
            note_modified_at("mid", now() - Duration::days(1)),
        ];
        sort_by_modified_desc(&mut notes);
        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }
}
