use tempfile::TempDir;

use tgwatch::api::types::ProfileSnapshot;
use tgwatch::changelog::detector::{current_value, detect_changes};
use tgwatch::changelog::entry::{ChangeEntry, ChangeKind};
use tgwatch::changelog::store::ChangeLogStore;

fn snapshot(bio: Option<&str>, has_photo: bool) -> ProfileSnapshot {
    ProfileSnapshot {
        id: 42,
        first_name: "Ada".to_string(),
        last_name: None,
        username: Some("ada".to_string()),
        bio: bio.map(str::to_string),
        has_photo,
        last_seen: None,
    }
}

#[test]
fn bio_change_emits_one_entry() {
    let log = vec![ChangeEntry::now(ChangeKind::Bio, "", "A")];
    let changes = detect_changes(&snapshot(Some("B"), false), &log);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Bio);
    assert_eq!(changes[0].old, "A");
    assert_eq!(changes[0].new, "B");
}

#[test]
fn unchanged_snapshot_is_idempotent() {
    let log = vec![
        ChangeEntry::now(ChangeKind::Bio, "", "Hello"),
        ChangeEntry::now(ChangeKind::Photo, "none", "present"),
    ];
    let changes = detect_changes(&snapshot(Some("Hello"), true), &log);
    assert!(changes.is_empty());
}

#[test]
fn empty_or_absent_bio_never_fires() {
    let log = vec![ChangeEntry::now(ChangeKind::Bio, "", "something")];
    assert!(detect_changes(&snapshot(Some(""), false), &log).is_empty());
    assert!(detect_changes(&snapshot(None, false), &log).is_empty());
}

#[test]
fn first_bio_uses_empty_old_value() {
    let changes = detect_changes(&snapshot(Some("Hello"), false), &[]);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].old, "");
    assert_eq!(changes[0].new, "Hello");
}

#[test]
fn photo_appearance_is_logged_once() {
    let changes = detect_changes(&snapshot(None, true), &[]);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Photo);
    assert_eq!(changes[0].old, "none");
    assert_eq!(changes[0].new, "present");

    let log = changes;
    assert!(detect_changes(&snapshot(None, true), &log).is_empty());
}

#[test]
fn photo_removal_emits_nothing() {
    let log = vec![ChangeEntry::now(ChangeKind::Photo, "none", "present")];
    assert!(detect_changes(&snapshot(None, false), &log).is_empty());
}

#[test]
fn bio_entry_comes_before_photo_entry() {
    let changes = detect_changes(&snapshot(Some("new bio"), true), &[]);
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].kind, ChangeKind::Bio);
    assert_eq!(changes[1].kind, ChangeKind::Photo);
}

#[test]
fn current_value_is_the_latest_of_a_kind() {
    let log = vec![
        ChangeEntry::now(ChangeKind::Bio, "", "A"),
        ChangeEntry::now(ChangeKind::Photo, "none", "present"),
        ChangeEntry::now(ChangeKind::Bio, "A", "B"),
    ];
    assert_eq!(current_value(&log, ChangeKind::Bio), Some("B"));
    assert_eq!(current_value(&log, ChangeKind::Photo), Some("present"));
    assert_eq!(current_value(&[], ChangeKind::Bio), None);
}

#[test]
fn three_runs_log_exactly_one_bio_entry() {
    let dir = TempDir::new().unwrap();
    let store = ChangeLogStore::new(dir.path().join("changes.json"));

    // Run 1: empty bio, nothing stored.
    let log = store.load().unwrap();
    for entry in detect_changes(&snapshot(Some(""), false), &log) {
        store.append(entry).unwrap();
    }
    assert!(store.load().unwrap().is_empty());

    // Run 2: bio appears.
    let log = store.load().unwrap();
    for entry in detect_changes(&snapshot(Some("Hello"), false), &log) {
        store.append(entry).unwrap();
    }
    let log = store.load().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].new, "Hello");

    // Run 3: same bio again, no new entry.
    for entry in detect_changes(&snapshot(Some("Hello"), false), &log) {
        store.append(entry).unwrap();
    }
    assert_eq!(store.load().unwrap().len(), 1);
}
