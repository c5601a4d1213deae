//! The "Recently Deleted" folder under its localized display names.
//!
//! The backend exposes no structural trash marker, only the folder's display
//! name in the system language, so membership is an exact match against a
//! closed set. No substring or fuzzy matching: a user folder named
//! "My Recently Deleted Stuff" is not trash.

use super::note::NoteItem;

const KNOWN_NAMES: &[&str] = &[
    "Recently Deleted",
    "最近删除",
    "最近刪除",
    "最近削除した項目",
    "최근 삭제한 항목",
    "Zuletzt gelöscht",
    "Supprimés récemment",
    "Borrados recientemente",
    "Eliminados recientemente",
    "Apagados Recentemente",
    "Eliminati di recente",
    "Onlangs verwijderd",
    "Недавно удаленные",
    "ลบล่าสุด",
    "محذوفة مؤخرًا",
    "Son Silinenler",
];

/// Exact-match check against the known trash folder names.
pub fn is_trash_name(name: &str) -> bool {
    KNOWN_NAMES.contains(&name)
}

/// Drops trash-folder notes from a listing. Notes in the trash stay
/// addressable through their full id; they just never show up in default
/// views.
pub fn exclude_trashed(notes: Vec<NoteItem>) -> Vec<NoteItem> {
    notes.into_iter().filter(|n| !n.is_trashed()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn note_in(folder: &str) -> NoteItem {
        NoteItem {
            id: "x-coredata://AAA/ICNote/p1".to_string(),
            title: "Title".to_string(),
            body: String::new(),
            folder: folder.to_string(),
            created: Utc.with_ymd_and_hms(2024, 2, 8, 15, 30, 45).unwrap(),
            modified: Utc.with_ymd_and_hms(2024, 2, 8, 15, 30, 45).unwrap(),
        }
    }

    #[test]
    fn matches_known_names_in_several_languages() {
        assert!(is_trash_name("Recently Deleted"));
        assert!(is_trash_name("最近删除"));
        assert!(is_trash_name("Zuletzt gelöscht"));
        assert!(is_trash_name("Supprimés récemment"));
    }

    #[test]
    fn does_not_match_substrings_or_other_names() {
        assert!(!is_trash_name("Notes"));
        assert!(!is_trash_name("My Recently Deleted Stuff"));
        assert!(!is_trash_name("recently deleted"));
    }

    #[test]
    fn exclude_trashed_keeps_everything_else() {
        let notes = vec![
            note_in("Work"),
            note_in("Recently Deleted"),
            note_in("Notes"),
        ];
        let kept = exclude_trashed(notes);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|n| !n.is_trashed()));
    }
}
