//! Static page content.
//!
//! The informational sections of the site are plain data: apartment cards,
//! amenity tiles, guest reviews, and the contact block. Booking behavior
//! lives in `seaside-booking`; these records only feed the page sections,
//! with each apartment card carrying the catalog id its Book Now button
//! preselects.

use seaside_booking::RoomId;
use serde::{Deserialize, Serialize};

/// An apartment card in the showcase section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApartmentCard {
    /// Display name
    pub name: String,
    /// Nightly price label
    pub price_label: String,
    /// Beds shown on the card
    pub beds: u32,
    /// Baths shown on the card
    pub baths: u32,
    /// Guests shown on the card
    pub guests: u32,
    /// Card description
    pub description: String,
    /// Feature tags
    pub features: Vec<String>,
    /// Catalog room the Book Now button preselects
    pub room: RoomId,
}

/// An amenity tile
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Amenity {
    /// Tile title
    pub title: String,
    /// Tile description
    pub description: String,
}

/// A guest review card
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    /// Guest name
    pub name: String,
    /// Guest home town
    pub location: String,
    /// Star rating out of five
    pub rating: u8,
    /// Month of the stay
    pub date: String,
    /// Review text
    pub text: String,
}

/// The contact section block
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Front-desk phone
    pub phone: String,
    /// Reservations email
    pub email: String,
    /// Street address
    pub address: String,
}

/// The three apartment cards
#[must_use]
pub fn apartments() -> Vec<ApartmentCard> {
    let tags = |features: &[&str]| features.iter().map(ToString::to_string).collect();

    vec![
        ApartmentCard {
            name: "Ocean View Studio".to_string(),
            price_label: "$120".to_string(),
            beds: 1,
            baths: 1,
            guests: 2,
            description: "Elegant studio with stunning ocean views, perfect for couples seeking \
                a romantic getaway."
                .to_string(),
            features: tags(&["Ocean View", "Kitchenette", "Private Balcony", "Work Desk"]),
            room: RoomId::new("studio"),
        },
        ApartmentCard {
            name: "Garden Suite".to_string(),
            price_label: "$150".to_string(),
            beds: 1,
            baths: 1,
            guests: 3,
            description: "Spacious suite overlooking our beautiful gardens with premium \
                amenities and comfort."
                .to_string(),
            features: tags(&["Garden View", "Full Kitchen", "Living Area", "Premium Bedding"]),
            room: RoomId::new("suite"),
        },
        ApartmentCard {
            name: "Family Apartment".to_string(),
            price_label: "$200".to_string(),
            beds: 2,
            baths: 2,
            guests: 4,
            description: "Perfect for families, featuring two bedrooms and a spacious living \
                area with all modern conveniences."
                .to_string(),
            features: tags(&["Two Bedrooms", "Full Kitchen", "Living Room", "Washer/Dryer"]),
            room: RoomId::new("family"),
        },
    ]
}

/// The eight amenity tiles
#[must_use]
pub fn amenities() -> Vec<Amenity> {
    let amenity = |title: &str, description: &str| Amenity {
        title: title.to_string(),
        description: description.to_string(),
    };

    vec![
        amenity(
            "Swimming Pool",
            "Relax in our heated outdoor pool with stunning views and comfortable lounging areas.",
        ),
        amenity(
            "Secure Parking",
            "Complimentary covered parking spaces available for all guests with 24/7 security \
             monitoring.",
        ),
        amenity(
            "High-Speed WiFi",
            "Stay connected with complimentary high-speed internet throughout the property.",
        ),
        amenity(
            "24/7 Security",
            "Round-the-clock security personnel and surveillance systems ensure your safety and \
             peace of mind.",
        ),
        amenity(
            "Beautiful Gardens",
            "Stroll through our meticulously maintained gardens and enjoy the peaceful natural \
             surroundings.",
        ),
        amenity(
            "Full Kitchens",
            "Each suite features a fully equipped kitchen with modern appliances and dining \
             essentials.",
        ),
        amenity(
            "Fitness Center",
            "Stay active in our well-equipped fitness center, open 24 hours for your convenience.",
        ),
        amenity(
            "Coffee Lounge",
            "Start your day right in our cozy coffee lounge with premium beverages and light \
             snacks.",
        ),
    ]
}

/// The six guest reviews
#[must_use]
pub fn reviews() -> Vec<Review> {
    let review = |name: &str, location: &str, date: &str, text: &str| Review {
        name: name.to_string(),
        location: location.to_string(),
        rating: 5,
        date: date.to_string(),
        text: text.to_string(),
    };

    vec![
        review(
            "Sarah Johnson",
            "Los Angeles, CA",
            "March 2024",
            "Absolutely stunning property! The apartment was immaculate, the pool area was like \
             a private resort, and the staff went above and beyond. We'll definitely be back!",
        ),
        review(
            "Michael Chen",
            "San Francisco, CA",
            "February 2024",
            "Perfect for our family vacation. The two-bedroom apartment had everything we \
             needed, and the kids loved the pool. The location is peaceful yet convenient to \
             everything.",
        ),
        review(
            "Emily Rodriguez",
            "Austin, TX",
            "January 2024",
            "The garden suite exceeded all expectations. Beautiful views, top-notch amenities, \
             and the most comfortable bed I've ever slept in. Highly recommend!",
        ),
        review(
            "David Thompson",
            "Denver, CO",
            "December 2023",
            "Business trip turned into a mini-vacation thanks to this amazing place. The WiFi \
             was excellent for work, and the pool was perfect for unwinding after long days.",
        ),
        review(
            "Lisa Wang",
            "Seattle, WA",
            "November 2023",
            "Celebrating our anniversary here was magical. The ocean view studio was romantic, \
             the gardens were perfect for evening walks, and the service was impeccable.",
        ),
        review(
            "Robert Martinez",
            "Phoenix, AZ",
            "October 2023",
            "Everything was perfect from check-in to check-out. The apartment was spotless, \
             amenities were top-tier, and the peaceful atmosphere made our stay unforgettable.",
        ),
    ]
}

/// The contact block
#[must_use]
pub fn contact() -> ContactDetails {
    ContactDetails {
        phone: "+1 (555) 123-4567".to_string(),
        email: "info@seasidesuites.com".to_string(),
        address: "123 Ocean View Drive, Paradise City, PC 12345".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaside_booking::Catalog;

    #[test]
    fn every_apartment_card_maps_to_a_catalog_room() {
        let catalog = Catalog::seaside();
        for card in apartments() {
            assert!(
                catalog.get(&card.room).is_some(),
                "card {} points at a missing room",
                card.name
            );
        }
    }

    #[test]
    fn content_counts_match_the_page_sections() {
        assert_eq!(apartments().len(), 3);
        assert_eq!(amenities().len(), 8);
        assert_eq!(reviews().len(), 6);
    }
}
