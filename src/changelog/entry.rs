use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tracked profile fields. The serialized tag is part of the on-disk
/// contract and must stay lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Bio,
    Photo,
}

/// One detected field transition. Immutable once created; the log file is
/// a JSON list of these in chronological append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub time: DateTime<Utc>,
    pub kind: ChangeKind,
    pub old: String,
    pub new: String,
}

impl ChangeEntry {
    pub fn now(kind: ChangeKind, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            kind,
            old: old.into(),
            new: new.into(),
        }
    }
}
