//! Configuration for the site.
//!
//! Loads configuration from environment variables with the original demo's
//! defaults. Everything here is cosmetic pacing and contact data; there is
//! no backend to configure.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Site configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Booking wizard timers
    pub booking: BookingConfig,
    /// Concierge chat settings
    pub chat: ChatConfig,
    /// Default log filter when `SEASIDE_LOG`/`RUST_LOG` are unset
    pub log_filter: String,
}

/// Booking wizard timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Simulated availability-check latency in milliseconds
    pub availability_delay_ms: u64,
    /// Simulated payment-settlement latency in milliseconds
    pub payment_delay_ms: u64,
}

impl BookingConfig {
    /// Availability latency as a `Duration`
    #[must_use]
    pub const fn availability_delay(&self) -> Duration {
        Duration::from_millis(self.availability_delay_ms)
    }

    /// Payment latency as a `Duration`
    #[must_use]
    pub const fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

/// Concierge chat configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Simulated typing pause before the scripted reply, in milliseconds
    pub reply_delay_ms: u64,
    /// WhatsApp number for the handoff deep link
    pub whatsapp_phone: String,
}

impl ChatConfig {
    /// Reply latency as a `Duration`
    #[must_use]
    pub const fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default, so this never fails.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            booking: BookingConfig {
                availability_delay_ms: env::var("SEASIDE_AVAILABILITY_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1500),
                payment_delay_ms: env::var("SEASIDE_PAYMENT_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2000),
            },
            chat: ChatConfig {
                reply_delay_ms: env::var("SEASIDE_CHAT_REPLY_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
                whatsapp_phone: env::var("SEASIDE_WHATSAPP_PHONE")
                    .unwrap_or_else(|_| "15551234567".to_string()),
            },
            log_filter: env::var("SEASIDE_LOG")
                .unwrap_or_else(|_| "seaside_site=info,seaside_booking=info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_pacing() {
        // The SEASIDE_* variables are unset under `cargo test`
        let config = Config::from_env();
        assert_eq!(config.booking.availability_delay_ms, 1500);
        assert_eq!(config.booking.payment_delay_ms, 2000);
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert_eq!(config.chat.whatsapp_phone, "15551234567");
    }

    #[test]
    fn delays_convert_to_durations() {
        let booking = BookingConfig {
            availability_delay_ms: 10,
            payment_delay_ms: 20,
        };
        assert_eq!(booking.availability_delay(), Duration::from_millis(10));
        assert_eq!(booking.payment_delay(), Duration::from_millis(20));
    }
}
