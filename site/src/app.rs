//! Composition root.
//!
//! Owns the three feature stores and the little coordination between them:
//! opening the wizard forwards the preselected room card, and closing it
//! discards the draft by starting a new wizard session.

use crate::config::Config;
use crate::shell::{ShellAction, ShellReducer, ShellState};
use seaside_booking::{
    BookingAction, BookingEnvironment, BookingReducer, RoomId, WizardState,
};
use seaside_chat::{ChatAction, ChatEnvironment, ChatReducer, ChatState};
use seaside_core::environment::{RandomCodes, SystemClock};
use seaside_runtime::{Store, StoreError};
use std::sync::Arc;
use std::time::Duration;

/// Store driving the page shell
pub type ShellStore = Store<ShellState, ShellAction, (), ShellReducer>;
/// Store driving the booking wizard
pub type BookingStore = Store<WizardState, BookingAction, BookingEnvironment, BookingReducer>;
/// Store driving the concierge chat
pub type ChatStore = Store<ChatState, ChatAction, ChatEnvironment, ChatReducer>;

/// The assembled site: one store per interactive feature
pub struct Site {
    shell: ShellStore,
    booking: BookingStore,
    chat: ChatStore,
}

impl Site {
    /// Assembles the production stores from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let booking_env = BookingEnvironment::seaside(
            Arc::new(RandomCodes),
            config.booking.availability_delay(),
            config.booking.payment_delay(),
        );
        let chat_env = ChatEnvironment::new(Arc::new(SystemClock), config.chat.reply_delay());

        Self {
            shell: Store::new(ShellState::default(), ShellReducer::new(), ()),
            booking: Store::new(WizardState::default(), BookingReducer::new(), booking_env),
            chat: Store::new(ChatState::default(), ChatReducer::new(), chat_env),
        }
    }

    /// The page shell store
    #[must_use]
    pub const fn shell(&self) -> &ShellStore {
        &self.shell
    }

    /// The booking wizard store
    #[must_use]
    pub const fn booking(&self) -> &BookingStore {
        &self.booking
    }

    /// The concierge chat store
    #[must_use]
    pub const fn chat(&self) -> &ChatStore {
        &self.chat
    }

    /// Opens the booking wizard, forwarding the card the guest came from
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if either store is shutting down.
    pub async fn open_booking(&self, preselected: Option<RoomId>) -> Result<(), StoreError> {
        self.shell
            .send(ShellAction::OpenBooking {
                preselected: preselected.clone(),
            })
            .await?;
        self.booking
            .send(BookingAction::Open { preselected })
            .await?;
        Ok(())
    }

    /// Closes the booking wizard and discards the draft
    ///
    /// The wizard starts a new session epoch, so any timer still running for
    /// the abandoned draft lands as a stale completion and is dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if either store is shutting down.
    pub async fn close_booking(&self) -> Result<(), StoreError> {
        self.shell.send(ShellAction::CloseBooking).await?;
        self.booking.send(BookingAction::Reset).await?;
        Ok(())
    }

    /// Gracefully shuts down all stores, draining pending timers
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError::ShutdownTimeout`] encountered.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.shell.shutdown(timeout).await?;
        self.booking.shutdown(timeout).await?;
        self.chat.shutdown(timeout).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaside_booking::Step;

    fn quick_site() -> Site {
        let mut config = Config::from_env();
        config.booking.availability_delay_ms = 10;
        config.booking.payment_delay_ms = 10;
        config.chat.reply_delay_ms = 10;
        Site::new(&config)
    }

    #[tokio::test]
    async fn opening_and_closing_keeps_shell_and_wizard_in_step() {
        let site = quick_site();

        site.open_booking(Some(RoomId::new("suite"))).await.unwrap();
        assert!(site.shell().state(|s| s.booking_open).await);
        assert_eq!(
            site.booking().state(|s| s.preselected.clone()).await,
            Some(RoomId::new("suite"))
        );

        site.close_booking().await.unwrap();
        assert!(!site.shell().state(|s| s.booking_open).await);
        let wizard = site.booking().state(Clone::clone).await;
        assert_eq!(wizard.step, Step::Dates);
        assert_eq!(wizard.session, 1);
        assert!(wizard.preselected.is_none());
    }
}
