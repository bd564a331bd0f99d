//! Reducer logic for the concierge chat.
//!
//! Sending a message appends the guest entry immediately and schedules the
//! scripted reply behind a short delay, the widget's one piece of simulated
//! latency. The reply is chosen when the guest message is sent; the timer
//! only delivers it.

use crate::rules::{GREETING, scripted_reply};
use crate::types::{ChatAction, ChatState, Sender};
use seaside_core::environment::Clock;
use seaside_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;
use std::time::Duration;

/// Environment dependencies for the chat widget
#[derive(Clone)]
pub struct ChatEnvironment {
    /// Clock for transcript timestamps
    pub clock: Arc<dyn Clock>,
    /// Simulated typing delay before the scripted reply lands
    pub reply_delay: Duration,
}

impl ChatEnvironment {
    /// Creates a new `ChatEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, reply_delay: Duration) -> Self {
        Self { clock, reply_delay }
    }
}

impl std::fmt::Debug for ChatEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEnvironment")
            .field("reply_delay", &self.reply_delay)
            .finish_non_exhaustive()
    }
}

/// Reducer for the chat widget
#[derive(Clone, Copy, Debug, Default)]
pub struct ChatReducer;

impl ChatReducer {
    /// Creates a new `ChatReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ChatReducer {
    type State = ChatState;
    type Action = ChatAction;
    type Environment = ChatEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ChatAction::ToggleChat => {
                state.open = !state.open;
                if state.open && state.messages.is_empty() {
                    state.push_message(Sender::Concierge, GREETING, env.clock.now());
                }
                SmallVec::new()
            },
            ChatAction::SetInput(value) => {
                state.input = value;
                SmallVec::new()
            },
            ChatAction::SendMessage => {
                if state.input.trim().is_empty() {
                    return SmallVec::new();
                }

                let body = std::mem::take(&mut state.input);
                let reply = scripted_reply(&body);
                state.push_message(Sender::Guest, body, env.clock.now());
                tracing::debug!(transcript_len = state.messages.len(), "guest message sent");

                smallvec![Effect::delay(
                    env.reply_delay,
                    ChatAction::ScriptedReplyArrived {
                        body: reply.to_string(),
                    },
                )]
            },
            ChatAction::ScriptedReplyArrived { body } => {
                state.push_message(Sender::Concierge, body, env.clock.now());
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaside_testing::{ReducerTest, assertions, test_clock};

    fn test_env() -> ChatEnvironment {
        ChatEnvironment::new(Arc::new(test_clock()), Duration::from_millis(10))
    }

    #[test]
    fn first_open_seeds_the_greeting_once() {
        let env = test_env();
        let reducer = ChatReducer::new();
        let mut state = ChatState::default();

        reducer.reduce(&mut state, ChatAction::ToggleChat, &env);
        assert!(state.open);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].sender, Sender::Concierge);

        reducer.reduce(&mut state, ChatAction::ToggleChat, &env);
        reducer.reduce(&mut state, ChatAction::ToggleChat, &env);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn sending_appends_the_guest_message_and_schedules_the_reply() {
        ReducerTest::new(ChatReducer::new())
            .with_env(test_env())
            .given_state(ChatState::default())
            .when_action(ChatAction::SetInput("What is the price?".to_string()))
            .when_action(ChatAction::SendMessage)
            .then_state(|state| {
                assert_eq!(state.messages.len(), 1);
                assert_eq!(state.messages[0].sender, Sender::Guest);
                assert_eq!(state.messages[0].body, "What is the price?");
                assert!(state.input.is_empty());
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_delay_effect(effects);
            })
            .run();
    }

    #[test]
    fn blank_input_is_ignored() {
        ReducerTest::new(ChatReducer::new())
            .with_env(test_env())
            .given_state(ChatState::default())
            .when_action(ChatAction::SetInput("   ".to_string()))
            .when_action(ChatAction::SendMessage)
            .then_state(|state| {
                assert!(state.messages.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn the_reply_lands_as_a_concierge_message() {
        let env = test_env();
        let reducer = ChatReducer::new();
        let mut state = ChatState::default();

        reducer.reduce(
            &mut state,
            ChatAction::SetInput("where are you located?".to_string()),
            &env,
        );
        reducer.reduce(&mut state, ChatAction::SendMessage, &env);
        reducer.reduce(
            &mut state,
            ChatAction::ScriptedReplyArrived {
                body: scripted_reply("where are you located?").to_string(),
            },
            &env,
        );

        assert_eq!(state.messages.len(), 2);
        let reply = state.last_message().map(|m| m.body.as_str()).unwrap_or("");
        assert!(reply.starts_with("We're located at 123 Ocean View Drive"));
    }
}
