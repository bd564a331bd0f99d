//! Pricing engine for the booking wizard.
//!
//! A pure function of the current draft, recomputed on every read. Values
//! stay `f64` throughout and round to two decimals only at display time.
//!
//! Nights are counted on date-only values, so the arithmetic is whole
//! calendar days and daylight-saving shifts cannot produce an off-by-one.

use crate::catalog::Catalog;
use crate::types::BookingDraft;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flat fee for early check-in, once per booking
pub const EARLY_CHECK_IN_FEE: f64 = 25.0;
/// Flat fee for late check-out, once per booking
pub const LATE_CHECK_OUT_FEE: f64 = 25.0;
/// Flat fee for the airport transfer, once per booking
pub const AIRPORT_TRANSFER_FEE: f64 = 45.0;
/// Member discount rate, applied to the add-on-inclusive base
pub const LOYALTY_RATE: f64 = 0.05;

/// Nights between two calendar dates
///
/// Zero when either date is missing or the range is not positive;
/// `nights(d, d)` is zero.
#[must_use]
pub fn nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            let days = check_out.signed_duration_since(check_in).num_days();
            u32::try_from(days.max(0)).unwrap_or(u32::MAX)
        },
        _ => 0,
    }
}

/// Resolves a coupon code to its discount percentage
///
/// Case-insensitive exact match against the fixed coupon table. Unknown
/// codes resolve to `None` and must leave any previously applied discount
/// unchanged.
#[must_use]
pub fn resolve_coupon(code: &str) -> Option<u8> {
    match code.to_ascii_lowercase().as_str() {
        "welcome10" => Some(10),
        "stay20" => Some(20),
        _ => None,
    }
}

/// Formats a dollar amount for display, rounding to two decimals
///
/// The only place amounts are rounded.
#[must_use]
pub fn usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Price breakdown for a draft
///
/// Both percentage discounts are taken on the same add-on-inclusive base and
/// add together; they never compound.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Nights in the stay
    pub nights: u32,
    /// Sum of rate × quantity × nights over the selected rooms
    pub room_subtotal: f64,
    /// Flat add-on fees
    pub add_on_total: f64,
    /// 5% of the base when loyalty is active, else zero
    pub loyalty_discount: f64,
    /// Coupon percentage of the base
    pub coupon_discount: f64,
}

impl Quote {
    /// Prices the draft against the catalog
    #[must_use]
    pub fn for_draft(draft: &BookingDraft, catalog: &Catalog) -> Self {
        let nights = nights(draft.check_in, draft.check_out);

        let room_subtotal = draft
            .selected_rooms
            .iter()
            .filter_map(|selected| {
                catalog
                    .get(&selected.room)
                    .map(|room| room.rate * f64::from(selected.quantity) * f64::from(nights))
            })
            .sum();

        let mut add_on_total = 0.0;
        if draft.guest.early_check_in {
            add_on_total += EARLY_CHECK_IN_FEE;
        }
        if draft.guest.late_check_out {
            add_on_total += LATE_CHECK_OUT_FEE;
        }
        if draft.guest.airport_transfer {
            add_on_total += AIRPORT_TRANSFER_FEE;
        }

        let base = room_subtotal + add_on_total;

        let loyalty_discount = if draft.loyalty.is_active() {
            base * LOYALTY_RATE
        } else {
            0.0
        };

        let coupon_discount = base * f64::from(draft.discount_percent) / 100.0;

        Self {
            nights,
            room_subtotal,
            add_on_total,
            loyalty_discount,
            coupon_discount,
        }
    }

    /// The discount base: room subtotal plus add-ons
    #[must_use]
    pub fn base(&self) -> f64 {
        self.room_subtotal + self.add_on_total
    }

    /// Amount due after both discounts
    #[must_use]
    pub fn total(&self) -> f64 {
        self.base() - self.loyalty_discount - self.coupon_discount
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", usd(self.total()))
    }
}
