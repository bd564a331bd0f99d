//! Transcript state and actions for the concierge chat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a transcript message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// The site visitor
    Guest,
    /// The scripted concierge
    Concierge,
}

/// One transcript entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// One-based position in the transcript
    pub id: u32,
    /// Message body
    pub body: String,
    /// Author
    pub sender: Sender,
    /// When the message was appended
    pub sent_at: DateTime<Utc>,
}

/// State of the chat widget
///
/// The transcript is append-only; nothing is ever edited or removed, so
/// replaying the same actions rebuilds the same transcript.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatState {
    /// Widget expanded
    pub open: bool,
    /// Compose field contents
    pub input: String,
    /// The transcript, oldest first
    pub messages: Vec<Message>,
}

impl ChatState {
    /// Appends a message, assigning the next transcript id
    pub fn push_message(&mut self, sender: Sender, body: impl Into<String>, at: DateTime<Utc>) {
        let id = u32::try_from(self.messages.len()).unwrap_or(u32::MAX).saturating_add(1);
        self.messages.push(Message {
            id,
            body: body.into(),
            sender,
            sent_at: at,
        });
    }

    /// Last transcript entry, if any
    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// All inputs to the chat widget
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ChatAction {
    /// Expand or collapse the widget; the first expansion seeds the greeting
    ToggleChat,
    /// Set the compose field
    SetInput(String),
    /// Send the composed message (ignored when blank)
    SendMessage,
    /// The scripted reply timer completed
    ScriptedReplyArrived {
        /// Reply body chosen when the guest message was sent
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn transcript_ids_are_one_based_and_sequential() {
        let mut state = ChatState::default();
        let now = Utc::now();
        state.push_message(Sender::Concierge, "hello", now);
        state.push_message(Sender::Guest, "hi", now);

        let ids: Vec<u32> = state.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
