//! Wizard state and actions for the booking flow.
//!
//! The wizard owns a single mutable [`BookingDraft`] for the lifetime of one
//! booking session. Everything else in [`WizardState`] is flow bookkeeping:
//! the current step, the loyalty prompt sub-state, loading flags for the two
//! simulated timers, and the session epoch that guards against stray timer
//! completions after a reset.

use crate::catalog::RoomId;
use crate::loyalty::LoyaltyMember;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five wizard steps, strictly linear
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    /// Step 1: dates and party size
    #[default]
    Dates,
    /// Step 2: room selection
    Rooms,
    /// Step 3: guest details, add-ons, loyalty
    GuestInfo,
    /// Step 4: summary, coupon, payment form
    Payment,
    /// Step 5: confirmation
    Confirmation,
}

impl Step {
    /// One-based step number shown in the progress header
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Dates => 1,
            Self::Rooms => 2,
            Self::GuestInfo => 3,
            Self::Payment => 4,
            Self::Confirmation => 5,
        }
    }

    /// Step title shown in the progress header
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dates => "Select Dates",
            Self::Rooms => "Choose Rooms",
            Self::GuestInfo => "Guest Information",
            Self::Payment => "Payment",
            Self::Confirmation => "Confirmation",
        }
    }

    /// The step a Back button returns to, if any
    ///
    /// Only the three middle steps go back; the first step has nothing behind
    /// it and the confirmation is terminal.
    #[must_use]
    pub const fn back(self) -> Option<Self> {
        match self {
            Self::Rooms => Some(Self::Dates),
            Self::GuestInfo => Some(Self::Rooms),
            Self::Payment => Some(Self::GuestInfo),
            Self::Dates | Self::Confirmation => None,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {} of 5: {}", self.number(), self.title())
    }
}

/// A room type selected with a quantity
///
/// The draft keeps these as an insertion-ordered set keyed by room id;
/// quantity zero removes the entry rather than storing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRoom {
    /// Which room type
    pub room: RoomId,
    /// How many units, always 1..=available
    pub quantity: u32,
}

/// Guest contact details and the three flat-fee add-ons
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInfo {
    /// Guest first name
    pub first_name: String,
    /// Guest last name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Free-text special requests
    pub special_requests: String,
    /// Early check-in add-on (before 3:00 PM)
    pub early_check_in: bool,
    /// Late check-out add-on (after 11:00 AM)
    pub late_check_out: bool,
    /// Airport transfer add-on
    pub airport_transfer: bool,
}

impl GuestInfo {
    /// Whether all required contact fields are filled
    ///
    /// Gates the GuestInfo → Payment transition.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
    }

    /// Clears the four identity fields auto-filled from a member record
    ///
    /// Special requests and add-on choices are the guest's own input and
    /// survive a loyalty logout.
    pub fn clear_identity(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.phone.clear();
    }

    /// Overwrites the identity fields from a member record
    pub fn fill_from_member(&mut self, member: &LoyaltyMember) {
        self.first_name = member.first_name.clone();
        self.last_name = member.last_name.clone();
        self.email = member.email.clone();
        self.phone = member.phone.clone();
    }
}

/// Loyalty account binding: exactly one of signed-out or signed-in holds
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoyaltyAccount {
    /// No member bound
    #[default]
    SignedOut,
    /// A directory member is bound
    SignedIn(LoyaltyMember),
}

impl LoyaltyAccount {
    /// Returns the bound member, if signed in
    #[must_use]
    pub const fn member(&self) -> Option<&LoyaltyMember> {
        match self {
            Self::SignedOut => None,
            Self::SignedIn(member) => Some(member),
        }
    }

    /// Whether a member is bound
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}

/// Loyalty program state carried on the draft
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyState {
    /// Signed-out or signed-in with a bound member
    pub account: LoyaltyAccount,
    /// Scratch field for the login form
    pub login_email: String,
    /// Enrolling as a new member during this booking
    pub joining: bool,
}

impl LoyaltyState {
    /// Whether the 5% member discount applies
    ///
    /// Active for a signed-in member or a guest joining the program; the two
    /// paths earn the same flat discount.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.account.is_signed_in() || self.joining
    }
}

/// The loyalty prompt sub-state inside the guest-info step
///
/// Independent of the step counter: it gates the discount prompt shown on
/// step 3 but never blocks progression to payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoyaltyPrompt {
    /// Offer to log in or join
    #[default]
    Choice,
    /// Login form open
    Login,
    /// Join pitch open
    Join,
}

/// The in-progress, uncommitted booking
///
/// Owned exclusively by the wizard for the lifetime of one session; reset to
/// defaults on close and after confirmation acknowledgment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// Check-in date
    pub check_in: Option<NaiveDate>,
    /// Check-out date, strictly after check-in for a positive stay
    pub check_out: Option<NaiveDate>,
    /// Adults in the party, at least 1
    pub adults: u32,
    /// Children in the party
    pub children: u32,
    /// Selected rooms, id-keyed set in insertion order
    pub selected_rooms: Vec<SelectedRoom>,
    /// Guest details and add-ons
    pub guest: GuestInfo,
    /// Loyalty program state
    pub loyalty: LoyaltyState,
    /// Coupon code as typed
    pub coupon_code: String,
    /// Resolved coupon percentage: 0, 10 or 20
    pub discount_percent: u8,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            adults: 2,
            children: 0,
            selected_rooms: Vec::new(),
            guest: GuestInfo::default(),
            loyalty: LoyaltyState::default(),
            coupon_code: String::new(),
            discount_percent: 0,
        }
    }
}

impl BookingDraft {
    /// Selected quantity for a room, zero when unselected
    #[must_use]
    pub fn quantity_of(&self, room: &RoomId) -> u32 {
        self.selected_rooms
            .iter()
            .find(|selected| &selected.room == room)
            .map_or(0, |selected| selected.quantity)
    }

    /// Total units selected across all room types
    #[must_use]
    pub fn total_rooms(&self) -> u32 {
        self.selected_rooms
            .iter()
            .map(|selected| selected.quantity)
            .sum()
    }
}

/// Booking confirmation code, assigned once when payment settles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    /// Wraps a generated code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Advisory user-facing rejection notices
///
/// The wizard never errors; the only explicit rejection paths surface as
/// blocking notices with no other state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The typed coupon code matched nothing
    InvalidCoupon,
    /// The login email matched no directory member
    MemberNotFound,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InvalidCoupon => "Invalid coupon code",
            Self::MemberNotFound => {
                "Member not found. Please check your email address or join our loyalty program."
            },
        };
        write!(f, "{message}")
    }
}

/// Complete state of the booking wizard
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// Current step
    pub step: Step,
    /// The in-progress booking
    pub draft: BookingDraft,
    /// Loyalty prompt sub-state on the guest-info step
    pub loyalty_prompt: LoyaltyPrompt,
    /// Rooms that fit the party, filled by the availability check
    pub available_rooms: Vec<RoomId>,
    /// Availability timer running
    pub checking_availability: bool,
    /// Payment timer running
    pub processing_payment: bool,
    /// Room type preselected from the page, seeded after the availability check
    pub preselected: Option<RoomId>,
    /// Assigned when payment settles
    pub confirmation: Option<ConfirmationCode>,
    /// Pending advisory notice, if any
    pub notice: Option<Notice>,
    /// Session epoch; timer completions from older epochs are dropped
    pub session: u64,
}

impl WizardState {
    /// Fresh state for the next session, carrying the bumped epoch forward
    #[must_use]
    pub fn next_session(&self) -> Self {
        Self {
            session: self.session + 1,
            ..Self::default()
        }
    }

    /// Whether either simulated timer is running
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.checking_availability || self.processing_payment
    }
}

/// All inputs to the booking wizard
///
/// User intents plus the two timer-completion actions fed back by the
/// runtime. Timer completions carry the session epoch they were issued
/// under so stale ones can be dropped after a reset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BookingAction {
    // ========== Wizard lifecycle ==========
    /// Open the wizard, optionally preselecting a room type from the page
    Open {
        /// Room card the guest clicked, if any
        preselected: Option<RoomId>,
    },
    /// Discard the draft and start a new session epoch
    Reset,

    // ========== Step 1: dates and party ==========
    /// Set the check-in date
    SetCheckIn(NaiveDate),
    /// Set the check-out date
    SetCheckOut(NaiveDate),
    /// Add an adult
    IncrementAdults,
    /// Remove an adult, floor 1
    DecrementAdults,
    /// Add a child
    IncrementChildren,
    /// Remove a child, floor 0
    DecrementChildren,
    /// Run the availability check (gated on both dates)
    CheckAvailability,
    /// Availability timer completed
    AvailabilityChecked {
        /// Session epoch the timer was started under
        session: u64,
    },

    // ========== Step 2: rooms ==========
    /// Set the selected quantity for a room; zero removes it
    SetRoomQuantity {
        /// Which room type
        room: RoomId,
        /// Requested quantity, clamped to the catalog bound
        quantity: u32,
    },
    /// Advance to guest info (gated on a non-empty selection)
    ContinueToGuestInfo,

    // ========== Step 3: guest info ==========
    /// Set guest first name
    SetFirstName(String),
    /// Set guest last name
    SetLastName(String),
    /// Set guest email
    SetEmail(String),
    /// Set guest phone
    SetPhone(String),
    /// Set special requests
    SetSpecialRequests(String),
    /// Toggle the early check-in add-on
    SetEarlyCheckIn(bool),
    /// Toggle the late check-out add-on
    SetLateCheckOut(bool),
    /// Toggle the airport transfer add-on
    SetAirportTransfer(bool),
    /// Open the loyalty login form
    OpenLoyaltyLogin,
    /// Open the loyalty join pitch
    OpenLoyaltyJoin,
    /// Return the loyalty prompt to the choice state
    DismissLoyaltyPrompt,
    /// Set the login email scratch field
    SetLoginEmail(String),
    /// Attempt login against the member directory
    LoyaltyLogin,
    /// Unbind the member and clear auto-filled identity fields
    LoyaltyLogout,
    /// Enroll in the program during this booking
    JoinLoyalty,
    /// Cancel the pending enrollment
    CancelJoin,
    /// Advance to payment (gated on complete contact details)
    ContinueToPayment,

    // ========== Step 4: payment ==========
    /// Set the coupon code field
    SetCouponCode(String),
    /// Resolve the typed coupon code
    ApplyCoupon,
    /// Start the simulated payment
    SubmitPayment,
    /// Payment timer completed
    PaymentSettled {
        /// Session epoch the timer was started under
        session: u64,
    },

    // ========== Anywhere ==========
    /// Navigate one step back
    GoBack,
    /// Clear the pending notice
    DismissNotice,
}
