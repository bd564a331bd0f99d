//! Loyalty program directory.
//!
//! A static, read-only member directory looked up by exact case-insensitive
//! email match. Tiers are ordinal and cosmetic: no pricing rule reads them,
//! the 5% member discount is flat across tiers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordinal loyalty rank carried on a member record
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Entry tier, granted on first booking
    Bronze,
    /// Mid tier
    Silver,
    /// Upper tier
    Gold,
    /// Top tier
    Platinum,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        };
        write!(f, "{name}")
    }
}

/// A loyalty program member record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyMember {
    /// Directory identifier
    pub id: String,
    /// Member first name
    pub first_name: String,
    /// Member last name
    pub last_name: String,
    /// Login email (matched case-insensitively)
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Enrollment date
    pub member_since: NaiveDate,
    /// Completed stays
    pub total_stays: u32,
    /// Current tier
    pub tier: Tier,
}

/// The member directory: static, read-only reference data
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Directory {
    members: Vec<LoyaltyMember>,
}

impl Directory {
    /// Builds a directory from explicit member records
    #[must_use]
    pub fn new(members: Vec<LoyaltyMember>) -> Self {
        Self { members }
    }

    /// The seeded Seaside Rewards directory
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded enrollment dates fail to construct, which
    /// cannot happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn seaside() -> Self {
        let date = |y, m, d| {
            NaiveDate::from_ymd_opt(y, m, d).expect("hardcoded enrollment date is valid")
        };

        Self::new(vec![
            LoyaltyMember {
                id: "1".to_string(),
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
                email: "john.smith@email.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                member_since: date(2022, 1, 15),
                total_stays: 12,
                tier: Tier::Gold,
            },
            LoyaltyMember {
                id: "2".to_string(),
                first_name: "Sarah".to_string(),
                last_name: "Johnson".to_string(),
                email: "sarah.johnson@email.com".to_string(),
                phone: "+1 (555) 987-6543".to_string(),
                member_since: date(2023, 3, 20),
                total_stays: 5,
                tier: Tier::Silver,
            },
        ])
    }

    /// All member records
    #[must_use]
    pub fn members(&self) -> &[LoyaltyMember] {
        &self.members
    }

    /// Looks up a member by exact case-insensitive email match
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&LoyaltyMember> {
        self.members
            .iter()
            .find(|member| member.email.eq_ignore_ascii_case(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let directory = Directory::seaside();
        let member = directory.find_by_email("JOHN.SMITH@EMAIL.COM");
        assert!(member.is_some_and(|m| m.first_name == "John"));
    }

    #[test]
    fn lookup_requires_exact_match() {
        let directory = Directory::seaside();
        assert!(directory.find_by_email("john.smith@email").is_none());
        assert!(directory.find_by_email("").is_none());
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Tier::Bronze < Tier::Silver);
        assert!(Tier::Silver < Tier::Gold);
        assert!(Tier::Gold < Tier::Platinum);
    }
}
