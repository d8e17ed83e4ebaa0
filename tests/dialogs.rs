use tgwatch::api::types::{Dialog, MessageRecord, Peer, PeerKind};
use tgwatch::dialogs::index::latest_messages;
use tgwatch::dialogs::summary::{build_summary, excerpt};

fn peer(kind: PeerKind, id: i64) -> Peer {
    Peer { kind, id }
}

fn msg(p: Peer, text: &str) -> MessageRecord {
    MessageRecord { peer: p, text: text.to_string() }
}

#[test]
fn index_keeps_the_last_message_per_peer() {
    let alice = peer(PeerKind::User, 1);
    let group = peer(PeerKind::Chat, 2);
    let window = vec![
        msg(alice, "first"),
        msg(group, "group talk"),
        msg(alice, "second"),
    ];

    let index = latest_messages(&window);
    assert_eq!(index.len(), 2);
    assert_eq!(index[&alice], "second");
    assert_eq!(index[&group], "group talk");
}

#[test]
fn same_id_in_different_categories_stays_distinct() {
    let user = peer(PeerKind::User, 7);
    let channel = peer(PeerKind::Channel, 7);
    let index = latest_messages(&[msg(user, "dm"), msg(channel, "broadcast")]);
    assert_eq!(index[&user], "dm");
    assert_eq!(index[&channel], "broadcast");
}

#[test]
fn excerpt_truncates_past_thirty_chars() {
    let long = "a".repeat(35);
    let cut = excerpt(&long);
    assert_eq!(cut.chars().count(), 31);
    assert!(cut.starts_with(&"a".repeat(30)));
    assert!(cut.ends_with('…'));

    let exact = "b".repeat(30);
    assert_eq!(excerpt(&exact), exact);
    assert_eq!(excerpt("short"), "short");
    assert_eq!(excerpt(""), "");
}

#[test]
fn excerpt_counts_characters_not_bytes() {
    let text: String = "é".repeat(30);
    assert_eq!(excerpt(&text), text);
}

#[test]
fn every_dialog_appears_exactly_once() {
    let alice = peer(PeerKind::User, 1);
    let group = peer(PeerKind::Chat, 2);
    let silent = peer(PeerKind::Channel, 3);
    let dialogs = vec![
        Dialog { peer: alice, name: "Alice".into(), unread: 3 },
        Dialog { peer: group, name: "Weekend plans".into(), unread: 0 },
        Dialog { peer: silent, name: "News".into(), unread: 12 },
    ];
    let index = latest_messages(&[msg(alice, "see you"), msg(group, "who's in?")]);

    let rows = build_summary(&dialogs, &index);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].kind_label, "User");
    assert_eq!(rows[0].excerpt, "see you");
    assert_eq!(rows[1].kind_label, "Chat");
    assert_eq!(rows[1].unread, 0);
    assert_eq!(rows[2].name, "News");
    assert_eq!(rows[2].kind_label, "Channel");
    assert_eq!(rows[2].excerpt, "");
}

#[test]
fn summary_truncates_long_messages() {
    let p = peer(PeerKind::User, 9);
    let dialogs = vec![Dialog { peer: p, name: "Chatty".into(), unread: 1 }];
    let index = latest_messages(&[msg(p, &"x".repeat(40))]);

    let rows = build_summary(&dialogs, &index);
    assert_eq!(rows[0].excerpt, format!("{}…", "x".repeat(30)));
}
