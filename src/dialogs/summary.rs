use std::collections::HashMap;

use crate::api::types::{Dialog, Peer};

const EXCERPT_MAX_CHARS: usize = 30;

/// Display-ready dialog row. Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    pub kind_label: &'static str,
    pub unread: u32,
    pub excerpt: String,
}

/// Bounds a message preview to 30 characters plus an ellipsis marker.
pub fn excerpt(text: &str) -> String {
    if text.chars().count() > EXCERPT_MAX_CHARS {
        let mut short: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
        short.push('…');
        short
    } else {
        text.to_string()
    }
}

/// Joins conversation metadata with the message index. Every dialog gets
/// exactly one row, in input order; a peer with no indexed message gets an
/// empty excerpt.
pub fn build_summary(dialogs: &[Dialog], index: &HashMap<Peer, String>) -> Vec<SummaryRow> {
    dialogs
        .iter()
        .map(|d| SummaryRow {
            name: d.name.clone(),
            kind_label: d.peer.kind.label(),
            unread: d.unread,
            excerpt: excerpt(index.get(&d.peer).map(String::as_str).unwrap_or("")),
        })
        .collect()
}
