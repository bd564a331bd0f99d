//! Page shell state.
//!
//! Which modal is open and which apartment card the guest arrived through
//! are explicit state owned by the composition root and passed down, not
//! ambient globals. The shell reducer is pure; the coordination with the
//! wizard (resetting its draft on close) happens in [`crate::app::Site`].

use seaside_booking::RoomId;
use seaside_core::{SmallVec, effect::Effect, reducer::Reducer};
use serde::{Deserialize, Serialize};

/// Top-level page state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    /// Booking wizard modal visible
    pub booking_open: bool,
    /// Apartment card the guest clicked Book Now on, if any
    pub preselected: Option<RoomId>,
}

/// Page shell actions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ShellAction {
    /// Open the booking wizard, optionally from an apartment card
    OpenBooking {
        /// Card the guest came from
        preselected: Option<RoomId>,
    },
    /// Close the booking wizard
    CloseBooking,
}

/// Reducer for the page shell
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellReducer;

impl ShellReducer {
    /// Creates a new `ShellReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ShellReducer {
    type State = ShellState;
    type Action = ShellAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ShellAction::OpenBooking { preselected } => {
                state.booking_open = true;
                state.preselected = preselected;
            },
            ShellAction::CloseBooking => {
                state.booking_open = false;
                state.preselected = None;
            },
        }
        SmallVec::new()
    }
}
