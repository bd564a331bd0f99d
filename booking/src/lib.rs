//! # Seaside Booking
//!
//! The booking wizard for Seaside Suites: a five-step state machine
//! (dates → rooms → guest info → payment → confirmation) over a single
//! mutable [`types::BookingDraft`], with a pure pricing engine derived from
//! the draft on every read.
//!
//! The wizard depends on two pieces of static reference data — the room
//! [`catalog`](catalog::Catalog) and the loyalty
//! [`directory`](loyalty::Directory) — injected through
//! [`reducer::BookingEnvironment`]. There is no backend: availability and
//! payment are fixed-delay timers expressed as `Effect::Delay`, and their
//! completions carry a session epoch so a timer that outlives a reset cannot
//! touch the fresh draft.
//!
//! ## Example
//!
//! ```ignore
//! use seaside_booking::{BookingAction, BookingEnvironment, BookingReducer, WizardState};
//! use seaside_runtime::Store;
//!
//! let env = BookingEnvironment::seaside(codes, availability_delay, payment_delay);
//! let store = Store::new(WizardState::default(), BookingReducer::new(), env);
//!
//! store.send(BookingAction::CheckAvailability).await?;
//! ```

/// Room catalog and availability filter
pub mod catalog;
/// Loyalty member directory
pub mod loyalty;
/// Pricing engine and coupon table
pub mod pricing;
/// Wizard reducer and environment
pub mod reducer;
/// Wizard state and actions
pub mod types;

pub use catalog::{Catalog, RoomId, RoomType};
pub use loyalty::{Directory, LoyaltyMember, Tier};
pub use pricing::Quote;
pub use reducer::{BookingEnvironment, BookingReducer};
pub use types::{BookingAction, BookingDraft, GuestInfo, Notice, Step, WizardState};
