//! Reducer logic for the booking wizard.
//!
//! All business logic lives here: step guards, room-quantity clamping, the
//! loyalty flow, coupon resolution, and the two simulated timers. The
//! reducer never errors; an action whose guard is unmet is ignored (the UI
//! keeps the button disabled) and the only explicit rejection paths surface
//! as [`Notice`] values.

use crate::catalog::{Catalog, RoomId};
use crate::loyalty::Directory;
use crate::pricing::resolve_coupon;
use crate::types::{
    BookingAction, ConfirmationCode, LoyaltyAccount, LoyaltyPrompt, Notice, SelectedRoom, Step,
    WizardState,
};
use seaside_core::environment::CodeGenerator;
use seaside_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;
use std::time::Duration;

/// Environment dependencies for the booking wizard
///
/// The catalog and member directory are static reference data, injected so
/// tests can substitute fixtures. The delays are the cosmetic latencies
/// around the availability check and payment settlement.
#[derive(Clone)]
pub struct BookingEnvironment {
    /// Room catalog
    pub catalog: Arc<Catalog>,
    /// Loyalty member directory
    pub directory: Arc<Directory>,
    /// Confirmation code source
    pub codes: Arc<dyn CodeGenerator>,
    /// Simulated latency of the availability check
    pub availability_delay: Duration,
    /// Simulated latency of payment settlement
    pub payment_delay: Duration,
}

impl BookingEnvironment {
    /// Creates an environment from explicit parts
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        directory: Arc<Directory>,
        codes: Arc<dyn CodeGenerator>,
        availability_delay: Duration,
        payment_delay: Duration,
    ) -> Self {
        Self {
            catalog,
            directory,
            codes,
            availability_delay,
            payment_delay,
        }
    }

    /// Environment over the seeded Seaside Suites reference data
    #[must_use]
    pub fn seaside(
        codes: Arc<dyn CodeGenerator>,
        availability_delay: Duration,
        payment_delay: Duration,
    ) -> Self {
        Self::new(
            Arc::new(Catalog::seaside()),
            Arc::new(Directory::seaside()),
            codes,
            availability_delay,
            payment_delay,
        )
    }
}

impl std::fmt::Debug for BookingEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingEnvironment")
            .field("availability_delay", &self.availability_delay)
            .field("payment_delay", &self.payment_delay)
            .finish_non_exhaustive()
    }
}

/// Reducer for the booking wizard
#[derive(Clone, Copy, Debug, Default)]
pub struct BookingReducer;

impl BookingReducer {
    /// Creates a new `BookingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Starts the simulated availability check
    ///
    /// Guarded on being at the dates step with both dates picked and no
    /// check already running.
    fn check_availability(
        state: &mut WizardState,
        env: &BookingEnvironment,
    ) -> SmallVec<[Effect<BookingAction>; 4]> {
        let dates_picked = state.draft.check_in.is_some() && state.draft.check_out.is_some();
        if state.step != Step::Dates || !dates_picked || state.checking_availability {
            tracing::debug!(step = %state.step, dates_picked, "availability check refused");
            return SmallVec::new();
        }

        state.checking_availability = true;
        smallvec![Effect::delay(
            env.availability_delay,
            BookingAction::AvailabilityChecked {
                session: state.session,
            },
        )]
    }

    /// Applies the availability result and advances to room selection
    fn availability_checked(state: &mut WizardState, env: &BookingEnvironment, session: u64) {
        if session != state.session {
            tracing::debug!(session, current = state.session, "stale availability result dropped");
            return;
        }
        if !state.checking_availability {
            return;
        }

        state.checking_availability = false;
        state.available_rooms = env
            .catalog
            .rooms_for_party(state.draft.adults, state.draft.children)
            .into_iter()
            .map(|room| room.id.clone())
            .collect();
        state.step = Step::Rooms;

        // Seed the room card the guest arrived through, if it fits the party
        if let Some(preselected) = state.preselected.take() {
            if state.available_rooms.contains(&preselected)
                && state.draft.quantity_of(&preselected) == 0
            {
                state.draft.selected_rooms.push(SelectedRoom {
                    room: preselected,
                    quantity: 1,
                });
            }
        }

        tracing::debug!(rooms = state.available_rooms.len(), "availability ready");
    }

    /// Sets a room quantity, clamped to the catalog bound
    ///
    /// Only rooms surfaced by the availability check can be selected, and a
    /// quantity of zero removes the entry.
    fn set_room_quantity(
        state: &mut WizardState,
        env: &BookingEnvironment,
        room: &RoomId,
        quantity: u32,
    ) {
        if !state.available_rooms.contains(room) {
            tracing::debug!(%room, "quantity change for a room not on offer");
            return;
        }
        let Some(room_type) = env.catalog.get(room) else {
            return;
        };

        let clamped = quantity.min(room_type.available);
        if clamped == 0 {
            state
                .draft
                .selected_rooms
                .retain(|selected| &selected.room != room);
            return;
        }

        if let Some(selected) = state
            .draft
            .selected_rooms
            .iter_mut()
            .find(|selected| &selected.room == room)
        {
            selected.quantity = clamped;
        } else {
            state.draft.selected_rooms.push(SelectedRoom {
                room: room.clone(),
                quantity: clamped,
            });
        }
    }

    /// Attempts loyalty login against the member directory
    ///
    /// On a match the member is bound and the contact fields are auto-filled
    /// from the record; on a miss nothing changes except the notice.
    fn loyalty_login(state: &mut WizardState, env: &BookingEnvironment) {
        let email = state.draft.loyalty.login_email.clone();
        if email.is_empty() {
            return;
        }

        match env.directory.find_by_email(&email) {
            Some(member) => {
                state.draft.guest.fill_from_member(member);
                state.draft.loyalty.account = LoyaltyAccount::SignedIn(member.clone());
                state.loyalty_prompt = LoyaltyPrompt::Choice;
                tracing::debug!(member = %member.id, tier = %member.tier, "loyalty login");
            },
            None => {
                tracing::debug!("loyalty login email not in directory");
                state.notice = Some(Notice::MemberNotFound);
            },
        }
    }

    /// Starts the simulated payment
    fn submit_payment(
        state: &mut WizardState,
        env: &BookingEnvironment,
    ) -> SmallVec<[Effect<BookingAction>; 4]> {
        if state.step != Step::Payment || state.processing_payment {
            tracing::debug!(step = %state.step, "payment submit refused");
            return SmallVec::new();
        }

        state.processing_payment = true;
        smallvec![Effect::delay(
            env.payment_delay,
            BookingAction::PaymentSettled {
                session: state.session,
            },
        )]
    }

    /// Completes the simulated payment and assigns the confirmation code
    fn payment_settled(state: &mut WizardState, env: &BookingEnvironment, session: u64) {
        if session != state.session {
            tracing::debug!(session, current = state.session, "stale payment result dropped");
            return;
        }
        if !state.processing_payment {
            return;
        }

        state.processing_payment = false;
        state.confirmation = Some(ConfirmationCode::new(env.codes.confirmation_code()));
        state.step = Step::Confirmation;
        tracing::debug!("booking confirmed");
    }
}

impl Reducer for BookingReducer {
    type State = WizardState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per action keeps the table readable
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Wizard lifecycle ==========
            BookingAction::Open { preselected } => {
                state.preselected = preselected;
                SmallVec::new()
            },
            BookingAction::Reset => {
                *state = state.next_session();
                SmallVec::new()
            },

            // ========== Step 1: dates and party ==========
            BookingAction::SetCheckIn(date) => {
                state.draft.check_in = Some(date);
                SmallVec::new()
            },
            BookingAction::SetCheckOut(date) => {
                state.draft.check_out = Some(date);
                SmallVec::new()
            },
            BookingAction::IncrementAdults => {
                state.draft.adults += 1;
                SmallVec::new()
            },
            BookingAction::DecrementAdults => {
                state.draft.adults = state.draft.adults.saturating_sub(1).max(1);
                SmallVec::new()
            },
            BookingAction::IncrementChildren => {
                state.draft.children += 1;
                SmallVec::new()
            },
            BookingAction::DecrementChildren => {
                state.draft.children = state.draft.children.saturating_sub(1);
                SmallVec::new()
            },
            BookingAction::CheckAvailability => Self::check_availability(state, env),
            BookingAction::AvailabilityChecked { session } => {
                Self::availability_checked(state, env, session);
                SmallVec::new()
            },

            // ========== Step 2: rooms ==========
            BookingAction::SetRoomQuantity { room, quantity } => {
                Self::set_room_quantity(state, env, &room, quantity);
                SmallVec::new()
            },
            BookingAction::ContinueToGuestInfo => {
                if state.step == Step::Rooms && state.draft.total_rooms() > 0 {
                    state.step = Step::GuestInfo;
                } else {
                    tracing::debug!(step = %state.step, "continue to guest info refused");
                }
                SmallVec::new()
            },

            // ========== Step 3: guest info ==========
            BookingAction::SetFirstName(value) => {
                state.draft.guest.first_name = value;
                SmallVec::new()
            },
            BookingAction::SetLastName(value) => {
                state.draft.guest.last_name = value;
                SmallVec::new()
            },
            BookingAction::SetEmail(value) => {
                state.draft.guest.email = value;
                SmallVec::new()
            },
            BookingAction::SetPhone(value) => {
                state.draft.guest.phone = value;
                SmallVec::new()
            },
            BookingAction::SetSpecialRequests(value) => {
                state.draft.guest.special_requests = value;
                SmallVec::new()
            },
            BookingAction::SetEarlyCheckIn(value) => {
                state.draft.guest.early_check_in = value;
                SmallVec::new()
            },
            BookingAction::SetLateCheckOut(value) => {
                state.draft.guest.late_check_out = value;
                SmallVec::new()
            },
            BookingAction::SetAirportTransfer(value) => {
                state.draft.guest.airport_transfer = value;
                SmallVec::new()
            },
            BookingAction::OpenLoyaltyLogin => {
                state.loyalty_prompt = LoyaltyPrompt::Login;
                SmallVec::new()
            },
            BookingAction::OpenLoyaltyJoin => {
                state.loyalty_prompt = LoyaltyPrompt::Join;
                SmallVec::new()
            },
            BookingAction::DismissLoyaltyPrompt => {
                state.loyalty_prompt = LoyaltyPrompt::Choice;
                SmallVec::new()
            },
            BookingAction::SetLoginEmail(value) => {
                state.draft.loyalty.login_email = value;
                SmallVec::new()
            },
            BookingAction::LoyaltyLogin => {
                Self::loyalty_login(state, env);
                SmallVec::new()
            },
            BookingAction::LoyaltyLogout => {
                state.draft.loyalty.account = LoyaltyAccount::SignedOut;
                state.draft.guest.clear_identity();
                SmallVec::new()
            },
            BookingAction::JoinLoyalty => {
                state.draft.loyalty.joining = true;
                state.loyalty_prompt = LoyaltyPrompt::Choice;
                SmallVec::new()
            },
            BookingAction::CancelJoin => {
                state.draft.loyalty.joining = false;
                SmallVec::new()
            },
            BookingAction::ContinueToPayment => {
                if state.step == Step::GuestInfo && state.draft.guest.is_complete() {
                    state.step = Step::Payment;
                } else {
                    tracing::debug!(step = %state.step, "continue to payment refused");
                }
                SmallVec::new()
            },

            // ========== Step 4: payment ==========
            BookingAction::SetCouponCode(value) => {
                state.draft.coupon_code = value;
                SmallVec::new()
            },
            BookingAction::ApplyCoupon => {
                match resolve_coupon(&state.draft.coupon_code) {
                    Some(percent) => {
                        state.draft.discount_percent = percent;
                        tracing::debug!(percent, "coupon applied");
                    },
                    None => {
                        tracing::debug!("coupon rejected");
                        state.notice = Some(Notice::InvalidCoupon);
                    },
                }
                SmallVec::new()
            },
            BookingAction::SubmitPayment => Self::submit_payment(state, env),
            BookingAction::PaymentSettled { session } => {
                Self::payment_settled(state, env, session);
                SmallVec::new()
            },

            // ========== Anywhere ==========
            BookingAction::GoBack => {
                if !state.is_busy() {
                    if let Some(previous) = state.step.back() {
                        state.step = previous;
                    }
                }
                SmallVec::new()
            },
            BookingAction::DismissNotice => {
                state.notice = None;
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Quote;
    use chrono::NaiveDate;
    use seaside_testing::{ReducerTest, SequentialCodes, assertions};

    fn test_env() -> BookingEnvironment {
        BookingEnvironment::seaside(
            Arc::new(SequentialCodes::new()),
            Duration::from_millis(10),
            Duration::from_millis(10),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// State advanced past the availability check with the default party
    fn state_at_rooms() -> WizardState {
        let env = test_env();
        let mut state = WizardState::default();
        let reducer = BookingReducer::new();
        reducer.reduce(
            &mut state,
            BookingAction::SetCheckIn(date(2025, 7, 1)),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetCheckOut(date(2025, 7, 3)),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::CheckAvailability, &env);
        reducer.reduce(
            &mut state,
            BookingAction::AvailabilityChecked { session: 0 },
            &env,
        );
        state
    }

    /// State advanced to the payment step with one suite selected
    fn state_at_payment() -> WizardState {
        let env = test_env();
        let mut state = state_at_rooms();
        let reducer = BookingReducer::new();
        reducer.reduce(
            &mut state,
            BookingAction::SetRoomQuantity {
                room: RoomId::new("suite"),
                quantity: 1,
            },
            &env,
        );
        reducer.reduce(&mut state, BookingAction::ContinueToGuestInfo, &env);
        reducer.reduce(
            &mut state,
            BookingAction::SetFirstName("Ada".to_string()),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetLastName("Lovelace".to_string()),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetEmail("ada@example.com".to_string()),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetPhone("+1 555".to_string()),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::ContinueToPayment, &env);
        state
    }

    #[test]
    fn availability_check_requires_both_dates() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(WizardState::default())
            .when_action(BookingAction::SetCheckIn(date(2025, 7, 1)))
            .when_action(BookingAction::CheckAvailability)
            .then_state(|state| {
                assert!(!state.checking_availability);
                assert_eq!(state.step, Step::Dates);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn availability_check_schedules_the_timer() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(WizardState::default())
            .when_action(BookingAction::SetCheckIn(date(2025, 7, 1)))
            .when_action(BookingAction::SetCheckOut(date(2025, 7, 3)))
            .when_action(BookingAction::CheckAvailability)
            .then_state(|state| {
                assert!(state.checking_availability);
                assert_eq!(state.step, Step::Dates);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_delay_effect(effects);
            })
            .run();
    }

    #[test]
    fn availability_result_filters_rooms_and_advances() {
        let state = state_at_rooms();
        assert_eq!(state.step, Step::Rooms);
        assert!(!state.checking_availability);
        // The default couple fits all three room types
        assert_eq!(state.available_rooms.len(), 3);
    }

    #[test]
    fn availability_result_respects_the_party_size() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = WizardState::default();
        reducer.reduce(
            &mut state,
            BookingAction::SetCheckIn(date(2025, 7, 1)),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetCheckOut(date(2025, 7, 3)),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::IncrementAdults, &env);
        reducer.reduce(&mut state, BookingAction::CheckAvailability, &env);
        reducer.reduce(
            &mut state,
            BookingAction::AvailabilityChecked { session: 0 },
            &env,
        );

        // Three adults exclude the studio
        assert_eq!(state.available_rooms.len(), 2);
        assert!(!state.available_rooms.contains(&RoomId::new("studio")));
    }

    #[test]
    fn stale_availability_result_is_dropped() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state({
                let mut state = WizardState::default();
                state.session = 2;
                state.checking_availability = true;
                state
            })
            .when_action(BookingAction::AvailabilityChecked { session: 1 })
            .then_state(|state| {
                assert!(state.checking_availability);
                assert_eq!(state.step, Step::Dates);
                assert!(state.available_rooms.is_empty());
            })
            .run();
    }

    #[test]
    fn preselected_room_is_seeded_when_it_fits() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = WizardState::default();
        reducer.reduce(
            &mut state,
            BookingAction::Open {
                preselected: Some(RoomId::new("suite")),
            },
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetCheckIn(date(2025, 7, 1)),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetCheckOut(date(2025, 7, 3)),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::CheckAvailability, &env);
        reducer.reduce(
            &mut state,
            BookingAction::AvailabilityChecked { session: 0 },
            &env,
        );

        assert_eq!(state.draft.quantity_of(&RoomId::new("suite")), 1);
        assert!(state.preselected.is_none());
    }

    #[test]
    fn quantity_is_clamped_to_the_catalog_bound() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_rooms();

        // Only two garden suites exist
        reducer.reduce(
            &mut state,
            BookingAction::SetRoomQuantity {
                room: RoomId::new("suite"),
                quantity: 99,
            },
            &env,
        );
        assert_eq!(state.draft.quantity_of(&RoomId::new("suite")), 2);
    }

    #[test]
    fn quantity_zero_removes_the_selection() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_rooms();

        reducer.reduce(
            &mut state,
            BookingAction::SetRoomQuantity {
                room: RoomId::new("studio"),
                quantity: 2,
            },
            &env,
        );
        assert_eq!(state.draft.total_rooms(), 2);

        reducer.reduce(
            &mut state,
            BookingAction::SetRoomQuantity {
                room: RoomId::new("studio"),
                quantity: 0,
            },
            &env,
        );
        assert!(state.draft.selected_rooms.is_empty());
    }

    #[test]
    fn unavailable_rooms_cannot_be_selected() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_rooms();
        state.available_rooms.retain(|id| id != &RoomId::new("family"));

        reducer.reduce(
            &mut state,
            BookingAction::SetRoomQuantity {
                room: RoomId::new("family"),
                quantity: 1,
            },
            &env,
        );
        assert!(state.draft.selected_rooms.is_empty());
    }

    #[test]
    fn continue_to_guest_info_requires_a_selection() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(state_at_rooms())
            .when_action(BookingAction::ContinueToGuestInfo)
            .then_state(|state| assert_eq!(state.step, Step::Rooms))
            .run();
    }

    #[test]
    fn continue_to_payment_requires_contact_details() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_rooms();
        reducer.reduce(
            &mut state,
            BookingAction::SetRoomQuantity {
                room: RoomId::new("suite"),
                quantity: 1,
            },
            &env,
        );
        reducer.reduce(&mut state, BookingAction::ContinueToGuestInfo, &env);
        assert_eq!(state.step, Step::GuestInfo);

        reducer.reduce(&mut state, BookingAction::ContinueToPayment, &env);
        assert_eq!(state.step, Step::GuestInfo);

        reducer.reduce(
            &mut state,
            BookingAction::SetFirstName("Ada".to_string()),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetLastName("Lovelace".to_string()),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetEmail("ada@example.com".to_string()),
            &env,
        );
        reducer.reduce(
            &mut state,
            BookingAction::SetPhone("+1 555".to_string()),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::ContinueToPayment, &env);
        assert_eq!(state.step, Step::Payment);
    }

    #[test]
    fn going_back_preserves_the_draft() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_payment();

        reducer.reduce(&mut state, BookingAction::GoBack, &env);
        assert_eq!(state.step, Step::GuestInfo);
        reducer.reduce(&mut state, BookingAction::GoBack, &env);
        assert_eq!(state.step, Step::Rooms);
        reducer.reduce(&mut state, BookingAction::GoBack, &env);
        assert_eq!(state.step, Step::Dates);
        reducer.reduce(&mut state, BookingAction::GoBack, &env);
        assert_eq!(state.step, Step::Dates);

        // Prior data survives the walk back
        assert_eq!(state.draft.total_rooms(), 1);
        assert_eq!(state.draft.guest.first_name, "Ada");
        assert_eq!(state.draft.check_in, Some(date(2025, 7, 1)));
    }

    #[test]
    fn loyalty_login_binds_the_member_and_fills_contact_details() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(WizardState::default())
            .when_action(BookingAction::OpenLoyaltyLogin)
            .when_action(BookingAction::SetLoginEmail("John.Smith@Email.com".to_string()))
            .when_action(BookingAction::LoyaltyLogin)
            .then_state(|state| {
                assert!(state.draft.loyalty.account.is_signed_in());
                assert_eq!(state.loyalty_prompt, LoyaltyPrompt::Choice);
                assert_eq!(state.draft.guest.first_name, "John");
                assert_eq!(state.draft.guest.email, "john.smith@email.com");
                assert!(state.notice.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn loyalty_login_with_unknown_email_changes_nothing_but_the_notice() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(WizardState::default())
            .when_action(BookingAction::SetLoginEmail("nobody@example.com".to_string()))
            .when_action(BookingAction::LoyaltyLogin)
            .then_state(|state| {
                assert!(!state.draft.loyalty.account.is_signed_in());
                assert_eq!(state.draft.guest.first_name, "");
                assert_eq!(state.notice, Some(Notice::MemberNotFound));
            })
            .run();
    }

    #[test]
    fn loyalty_logout_clears_the_auto_filled_identity() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = WizardState::default();
        reducer.reduce(
            &mut state,
            BookingAction::SetLoginEmail("sarah.johnson@email.com".to_string()),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::LoyaltyLogin, &env);
        reducer.reduce(
            &mut state,
            BookingAction::SetSpecialRequests("Quiet floor".to_string()),
            &env,
        );

        reducer.reduce(&mut state, BookingAction::LoyaltyLogout, &env);
        assert!(!state.draft.loyalty.account.is_signed_in());
        assert_eq!(state.draft.guest.first_name, "");
        assert_eq!(state.draft.guest.email, "");
        // The guest's own inputs survive
        assert_eq!(state.draft.guest.special_requests, "Quiet floor");
    }

    #[test]
    fn joining_enables_the_discount_without_binding_a_member() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = WizardState::default();
        reducer.reduce(&mut state, BookingAction::OpenLoyaltyJoin, &env);
        reducer.reduce(&mut state, BookingAction::JoinLoyalty, &env);

        assert!(state.draft.loyalty.is_active());
        assert!(!state.draft.loyalty.account.is_signed_in());
        assert_eq!(state.loyalty_prompt, LoyaltyPrompt::Choice);

        reducer.reduce(&mut state, BookingAction::CancelJoin, &env);
        assert!(!state.draft.loyalty.is_active());
    }

    #[test]
    fn valid_coupons_set_the_discount_in_any_case() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(WizardState::default())
            .when_action(BookingAction::SetCouponCode("WELCOME10".to_string()))
            .when_action(BookingAction::ApplyCoupon)
            .then_state(|state| {
                assert_eq!(state.draft.discount_percent, 10);
                assert!(state.notice.is_none());
            })
            .run();
    }

    #[test]
    fn bogus_coupons_leave_the_discount_and_raise_a_notice() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = WizardState::default();
        reducer.reduce(
            &mut state,
            BookingAction::SetCouponCode("stay20".to_string()),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::ApplyCoupon, &env);
        assert_eq!(state.draft.discount_percent, 20);

        reducer.reduce(
            &mut state,
            BookingAction::SetCouponCode("bogus".to_string()),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::ApplyCoupon, &env);
        assert_eq!(state.draft.discount_percent, 20);
        assert_eq!(state.notice, Some(Notice::InvalidCoupon));

        reducer.reduce(&mut state, BookingAction::DismissNotice, &env);
        assert!(state.notice.is_none());
    }

    #[test]
    fn payment_settles_into_a_confirmed_booking() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_payment();

        let effects = reducer.reduce(&mut state, BookingAction::SubmitPayment, &env);
        assert!(state.processing_payment);
        assertions::assert_has_delay_effect(&effects);

        reducer.reduce(&mut state, BookingAction::PaymentSettled { session: 0 }, &env);
        assert_eq!(state.step, Step::Confirmation);
        assert!(!state.processing_payment);
        assert_eq!(
            state.confirmation.as_ref().map(ConfirmationCode::as_str),
            Some("SS-TEST00001")
        );
    }

    #[test]
    fn payment_cannot_be_submitted_before_the_payment_step() {
        ReducerTest::new(BookingReducer::new())
            .with_env(test_env())
            .given_state(state_at_rooms())
            .when_action(BookingAction::SubmitPayment)
            .then_state(|state| assert!(!state.processing_payment))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn stale_payment_result_is_dropped() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_payment();
        reducer.reduce(&mut state, BookingAction::SubmitPayment, &env);

        // The wizard was closed and reopened before the timer fired
        reducer.reduce(&mut state, BookingAction::Reset, &env);
        reducer.reduce(&mut state, BookingAction::PaymentSettled { session: 0 }, &env);

        assert_eq!(state.step, Step::Dates);
        assert!(state.confirmation.is_none());
    }

    #[test]
    fn reset_discards_the_draft_and_bumps_the_session() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_payment();
        assert_eq!(state.session, 0);

        reducer.reduce(&mut state, BookingAction::Reset, &env);
        assert_eq!(state.session, 1);
        assert_eq!(state.step, Step::Dates);
        assert_eq!(state.draft, crate::types::BookingDraft::default());
        assert!(state.available_rooms.is_empty());
    }

    #[test]
    fn the_worked_example_prices_at_277_50() {
        let env = test_env();
        let reducer = BookingReducer::new();
        let mut state = state_at_payment();
        reducer.reduce(&mut state, BookingAction::GoBack, &env);
        reducer.reduce(&mut state, BookingAction::SetEarlyCheckIn(true), &env);
        reducer.reduce(&mut state, BookingAction::SetAirportTransfer(true), &env);
        reducer.reduce(&mut state, BookingAction::JoinLoyalty, &env);
        reducer.reduce(&mut state, BookingAction::ContinueToPayment, &env);
        reducer.reduce(
            &mut state,
            BookingAction::SetCouponCode("stay20".to_string()),
            &env,
        );
        reducer.reduce(&mut state, BookingAction::ApplyCoupon, &env);

        let quote = Quote::for_draft(&state.draft, &env.catalog);
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.base(), 370.0);
        assert_eq!(quote.total(), 277.5);
    }
}
