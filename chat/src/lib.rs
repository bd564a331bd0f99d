//! # Seaside Chat
//!
//! The scripted concierge chat for Seaside Suites. The "bot" is an ordered
//! list of (predicate, response) rules evaluated first-match-wins over the
//! guest's message — no learning, no state beyond the append-only
//! transcript. The only real external surface is the WhatsApp handoff deep
//! link, a static URL template with a percent-encoded message body.

/// Reducer and environment
pub mod reducer;
/// Canned response rules and the WhatsApp deep link
pub mod rules;
/// Transcript state and actions
pub mod types;

pub use reducer::{ChatEnvironment, ChatReducer};
pub use rules::{GREETING, HANDOFF_MESSAGE, scripted_reply, whatsapp_link};
pub use types::{ChatAction, ChatState, Message, Sender};
