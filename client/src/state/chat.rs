//! Transcript state for the booking chat widget.
//!
//! DESIGN
//! ======
//! The transcript is append-only: user bubbles, replies, room cards, and
//! apologies are only ever pushed. The one exception is the loading
//! placeholder of each in-flight turn, which is tracked as `TurnId -> entry
//! key` and removed when that turn resolves. Turns resolve independently, so
//! two concurrent replies may land in either order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashMap;
use std::fmt;

use crate::net::types::{ChatReply, RoomOption};
use crate::util::clock::ClockTime;

/// Shown in place of a reply when the chat request fails.
pub const APOLOGY_MESSAGE: &str = "抱歉，目前無法取得回覆，請稍後再試。";

/// Identifier of one in-flight turn, derived from its send time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TurnId(String);

impl TurnId {
    /// `seq` disambiguates turns sent within the same millisecond.
    pub fn new(sent_at_ms: u64, seq: u64) -> Self {
        Self(format!("turn-{sent_at_ms}-{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a transcript entry renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEntryKind {
    /// Outgoing user message.
    User { text: String, time: ClockTime },
    /// Typing indicator for a turn awaiting its reply.
    Loading { turn: TurnId },
    /// Reply conclusion, one element per rendered line.
    Bot { lines: Vec<String>, time: ClockTime },
    /// One suggested room.
    Room(RoomOption),
    /// Fixed apology for a failed turn.
    Apology { time: ClockTime },
}

/// A transcript entry with a stable key for keyed list rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub key: u64,
    pub kind: ChatEntryKind,
}

/// A turn that has been appended and must now be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub id: TurnId,
    pub message: String,
}

/// Text currently typed into the chat input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    pub text: String,
}

impl Composer {
    pub fn set(&mut self, text: String) {
        self.text = text;
    }

    /// Take the message for sending and empty the input.
    ///
    /// Blank input is left in place and yields `None`.
    pub fn take_message(&mut self) -> Option<String> {
        if self.text.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }
}

/// State for the chat widget transcript.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    placeholders: HashMap<TurnId, u64>,
    next_key: u64,
}

impl ChatState {
    /// Append a user bubble and a loading placeholder for `input`.
    ///
    /// Returns `None` without touching the transcript when `input` is blank.
    pub fn begin_turn(&mut self, input: &str, sent_at_ms: u64, time: ClockTime) -> Option<PendingTurn> {
        if input.trim().is_empty() {
            return None;
        }

        self.push(ChatEntryKind::User { text: input.to_owned(), time });
        let id = TurnId::new(sent_at_ms, self.next_key);
        let key = self.push(ChatEntryKind::Loading { turn: id.clone() });
        self.placeholders.insert(id.clone(), key);
        Some(PendingTurn { id, message: input.to_owned() })
    }

    /// Replace the turn's placeholder with the reply and its room cards.
    pub fn complete_turn(&mut self, id: &TurnId, reply: ChatReply, time: ClockTime) {
        self.remove_placeholder(id);
        self.push(ChatEntryKind::Bot { lines: conclusion_lines(&reply.conclusion), time });
        for room in reply.rooms {
            self.push(ChatEntryKind::Room(room));
        }
    }

    /// Replace the turn's placeholder with the apology bubble.
    pub fn fail_turn(&mut self, id: &TurnId, time: ClockTime) {
        self.remove_placeholder(id);
        self.push(ChatEntryKind::Apology { time });
    }

    pub fn is_pending(&self, id: &TurnId) -> bool {
        self.placeholders.contains_key(id)
    }

    pub fn pending_count(&self) -> usize {
        self.placeholders.len()
    }

    pub fn card_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.kind, ChatEntryKind::Room(_)))
            .count()
    }

    fn push(&mut self, kind: ChatEntryKind) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.push(ChatEntry { key, kind });
        key
    }

    fn remove_placeholder(&mut self, id: &TurnId) {
        if let Some(key) = self.placeholders.remove(id) {
            self.entries.retain(|e| e.key != key);
        }
    }
}

/// Split a conclusion on its newline separators.
pub fn conclusion_lines(conclusion: &str) -> Vec<String> {
    conclusion.lines().map(str::to_owned).collect()
}
