use std::collections::HashMap;

use crate::api::types::{MessageRecord, Peer};

/// Reduces the message window to one latest text per peer.
///
/// Last-write-wins over the supplied iteration order; the window is not
/// re-sorted by message time, so ordering is whatever the fetch returned.
pub fn latest_messages(window: &[MessageRecord]) -> HashMap<Peer, String> {
    let mut index = HashMap::new();
    for msg in window {
        index.insert(msg.peer, msg.text.clone());
    }
    index
}
