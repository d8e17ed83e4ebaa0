use serde::Deserialize;

/// One point-in-time view of a monitored account's public profile.
/// Never persisted as a whole; only diffed against the change log.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub has_photo: bool,
    pub last_seen: Option<String>,
}

impl ProfileSnapshot {
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// A conversation's identity, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Peer {
    pub kind: PeerKind,
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeerKind {
    User,
    Chat,
    Channel,
}

impl PeerKind {
    pub fn label(&self) -> &'static str {
        match self {
            PeerKind::User => "User",
            PeerKind::Chat => "Chat",
            PeerKind::Channel => "Channel",
        }
    }
}

/// Conversation metadata as returned by the dialog fetch.
#[derive(Debug, Clone)]
pub struct Dialog {
    pub peer: Peer,
    pub name: String,
    pub unread: u32,
}

/// One message from the recent-message window. Transient, scoped to a fetch.
#[derive(Debug, Clone)]
pub struct MessageRecord {
    pub peer: Peer,
    pub text: String,
}

// Wire shapes from the gateway. Peers arrive as a tagged object;
// conversion into `Peer` is the only place the tag is interpreted.

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum WirePeer {
    User { id: i64 },
    Chat { id: i64 },
    Channel { id: i64 },
}

impl From<WirePeer> for Peer {
    fn from(wire: WirePeer) -> Self {
        match wire {
            WirePeer::User { id } => Peer { kind: PeerKind::User, id },
            WirePeer::Chat { id } => Peer { kind: PeerKind::Chat, id },
            WirePeer::Channel { id } => Peer { kind: PeerKind::Channel, id },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireProfile {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub has_photo: bool,
    #[serde(default)]
    pub last_seen: Option<String>,
}

impl From<WireProfile> for ProfileSnapshot {
    fn from(wire: WireProfile) -> Self {
        ProfileSnapshot {
            id: wire.id,
            first_name: wire.first_name,
            last_name: wire.last_name,
            username: wire.username,
            bio: wire.bio,
            has_photo: wire.has_photo,
            last_seen: wire.last_seen,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireDialog {
    pub peer: WirePeer,
    pub name: String,
    #[serde(default)]
    pub unread: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMessage {
    pub peer: WirePeer,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireDialogsResponse {
    pub dialogs: Vec<WireDialog>,
    pub messages: Vec<WireMessage>,
}
