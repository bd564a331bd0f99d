//! Canned concierge responses.
//!
//! The script is an ordered list of (predicate, response) rules evaluated
//! first-match-wins. A rule matches when any of its keywords appears as a
//! substring of the lower-cased guest message; the last rule carries the
//! empty keyword, which is a substring of everything, so the script always
//! answers.

/// A single scripted rule: keywords and the reply they trigger
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Substrings matched against the lower-cased guest message
    pub keywords: &'static [&'static str],
    /// Reply sent when any keyword matches
    pub reply: &'static str,
}

impl Rule {
    /// Whether this rule fires for an already lower-cased message
    #[must_use]
    pub fn matches(&self, lowercased: &str) -> bool {
        self.keywords.iter().any(|keyword| lowercased.contains(keyword))
    }
}

/// Greeting that seeds the transcript when the widget first opens
pub const GREETING: &str = "Hello! Welcome to Seaside Suites. I'm here to help you with any \
    questions about our luxury apartment hotel. How can I assist you today?";

/// The concierge script, in evaluation order
///
/// Order is behavior: "check availability" hits the check-in rule before the
/// availability rule, exactly as the reception team scripted it.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["book", "reservation"],
        reply: "I'd be happy to help you with booking! For personalized assistance and to \
            complete your reservation, I recommend connecting with our booking specialists on \
            WhatsApp. They can help you find the perfect apartment and handle all the details. \
            Would you like me to connect you to WhatsApp now?",
    },
    Rule {
        keywords: &["price", "cost", "rate"],
        reply: "Our rates start at $120/night for Ocean View Studios, $150/night for Garden \
            Suites, and $200/night for Family Apartments. All rates include complimentary WiFi, \
            parking, and access to all amenities. For current availability and special offers, \
            our team on WhatsApp can provide real-time pricing. Shall I connect you?",
    },
    Rule {
        keywords: &["amenities", "facilities", "pool"],
        reply: "We offer fantastic amenities including a heated swimming pool, beautiful \
            gardens, fitness center, secure parking, high-speed WiFi, and 24/7 security. Each \
            apartment features a fully equipped kitchen. For a virtual tour or specific \
            questions about our facilities, our WhatsApp team can share photos and videos. \
            Would you like to continue on WhatsApp?",
    },
    Rule {
        keywords: &["location", "address", "where"],
        reply: "We're located at 123 Ocean View Drive, just 2 minutes from the beach in a \
            peaceful, scenic environment. Our WhatsApp team can send you detailed directions, \
            local attraction recommendations, and transportation options. Ready to chat with \
            them?",
    },
    Rule {
        keywords: &["check", "arrival", "time"],
        reply: "Check-in is at 3:00 PM and check-out is at 11:00 AM. We offer convenient \
            online check-in and our front desk is available 24/7. For specific arrival \
            arrangements or early check-in requests, our WhatsApp team can coordinate \
            everything for you. Shall I connect you?",
    },
    Rule {
        keywords: &["whatsapp", "contact", "phone", "yes", "connect"],
        reply: "Perfect! I'm connecting you to our WhatsApp team now. They'll be able to \
            provide personalized assistance, real-time availability, special offers, and \
            handle your booking. Click the WhatsApp button below to continue your conversation \
            with our specialists!",
    },
    Rule {
        keywords: &["available", "vacancy", "free"],
        reply: "For real-time availability and to secure your preferred dates, our WhatsApp \
            team has access to our live booking system. They can check availability instantly \
            and even hold rooms while you decide. Would you like me to connect you to WhatsApp \
            for immediate assistance?",
    },
    Rule {
        keywords: &["special", "offer", "discount", "deal"],
        reply: "We often have special offers and packages available! Our WhatsApp team can \
            share current promotions, loyalty program benefits, and exclusive deals that might \
            not be advertised elsewhere. Ready to see what special offers are available for \
            your dates?",
    },
    // The empty keyword is a substring of every message: the catch-all
    Rule {
        keywords: &[""],
        reply: "I'm here to help with basic information about Seaside Suites! For detailed \
            assistance, personalized recommendations, and to complete your booking, our \
            WhatsApp specialists are standing by. They can provide real-time support, share \
            photos, check availability, and handle special requests. Would you like to \
            continue this conversation on WhatsApp?",
    },
];

/// Scripted reply for a guest message, first matching rule wins
#[must_use]
pub fn scripted_reply(message: &str) -> &'static str {
    let lowercased = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowercased))
        .map_or("", |rule| rule.reply)
}

/// Prefilled body for the WhatsApp handoff
pub const HANDOFF_MESSAGE: &str = "Hello! I was chatting with your assistant and would like to \
    continue our conversation about booking a stay at Seaside Suites.";

/// Builds the WhatsApp deep link with a percent-encoded message body
#[must_use]
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_questions_route_to_the_booking_reply() {
        let reply = scripted_reply("Can I book a room for next weekend?");
        assert!(reply.starts_with("I'd be happy to help you with booking!"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // "check availability" contains keywords of both the check-in rule
        // and the availability rule; the earlier rule answers
        let reply = scripted_reply("Can you check availability?");
        assert!(reply.starts_with("Check-in is at 3:00 PM"));

        // Without the word "check", the availability rule answers
        let reply = scripted_reply("any vacancy in July?");
        assert!(reply.starts_with("For real-time availability"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reply = scripted_reply("WHAT IS THE PRICE?");
        assert!(reply.starts_with("Our rates start at $120/night"));
    }

    #[test]
    fn unmatched_messages_hit_the_catch_all() {
        let reply = scripted_reply("zzzz");
        assert!(reply.starts_with("I'm here to help with basic information"));
        assert!(!reply.is_empty());
    }

    #[test]
    fn every_rule_has_a_reply() {
        for rule in RULES {
            assert!(!rule.reply.is_empty());
        }
        // and the final rule catches everything
        let last = RULES[RULES.len() - 1];
        assert!(last.matches("anything at all"));
    }

    #[test]
    fn whatsapp_link_percent_encodes_the_body() {
        let link = whatsapp_link("15551234567", "Hello! See you at 3:00 PM?");
        assert!(link.starts_with("https://wa.me/15551234567?text="));
        assert!(link.contains("Hello%21"));
        assert!(!link.contains(' '));
    }
}
