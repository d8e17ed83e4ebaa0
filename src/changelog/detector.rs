use crate::api::types::ProfileSnapshot;
use crate::changelog::entry::{ChangeEntry, ChangeKind};

/// State marker recorded when a profile photo first appears.
pub const PHOTO_PRESENT: &str = "present";
/// Prior-state placeholder when no photo entry exists yet.
pub const PHOTO_NONE: &str = "none";

/// The current value of a kind is the `new` of its last log entry.
pub fn current_value(log: &[ChangeEntry], kind: ChangeKind) -> Option<&str> {
    log.iter()
        .rev()
        .find(|e| e.kind == kind)
        .map(|e| e.new.as_str())
}

/// Compares a fresh snapshot against the log and returns the entries to
/// append, bio before photo, at most one per kind.
///
/// Photo removal intentionally produces no entry: only the appearance
/// transition is tracked.
pub fn detect_changes(snapshot: &ProfileSnapshot, log: &[ChangeEntry]) -> Vec<ChangeEntry> {
    let mut out = Vec::new();

    let prior_bio = current_value(log, ChangeKind::Bio);
    if let Some(bio) = snapshot.bio.as_deref() {
        if !bio.is_empty() && prior_bio != Some(bio) {
            out.push(ChangeEntry::now(
                ChangeKind::Bio,
                prior_bio.unwrap_or(""),
                bio,
            ));
        }
    }

    let prior_photo = current_value(log, ChangeKind::Photo);
    if snapshot.has_photo && prior_photo != Some(PHOTO_PRESENT) {
        out.push(ChangeEntry::now(
            ChangeKind::Photo,
            prior_photo.unwrap_or(PHOTO_NONE),
            PHOTO_PRESENT,
        ));
    }

    out
}
