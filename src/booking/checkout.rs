//! Checkout link builder
//!
//! Pure state-to-URL encoding: the selected listing, stay dates, guest
//! configuration, and quoted price travel to the checkout page as query
//! parameters. Navigation itself stays with the router.

use std::collections::HashMap;

use chrono::Utc;
use url::form_urlencoded;

use crate::models::BookableType;

use super::{dates::DateRange, guests::GuestConfiguration, to_iso_millis};

pub const CHECKOUT_PATH: &str = "/checkout";

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLink {
    pub listing: BookableType,
    pub listing_id: i64,
    pub title: String,
    pub range: DateRange,
    pub guests: GuestConfiguration,
    /// Weekday price quoted on the card
    pub price: i64,
}

impl CheckoutLink {
    pub fn new(
        listing: BookableType,
        listing_id: i64,
        title: impl Into<String>,
        range: DateRange,
        guests: GuestConfiguration,
        price: i64,
    ) -> Self {
        Self {
            listing,
            listing_id,
            title: title.into(),
            range,
            guests,
            price,
        }
    }

    /// Relative checkout URL with everything percent-encoded
    pub fn to_url(&self) -> String {
        let (id_key, title_key) = match self.listing {
            BookableType::Room => ("roomId", "roomTitle"),
            BookableType::Cabin => ("cabinId", "cabinTitle"),
        };

        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair(id_key, &self.listing_id.to_string())
            .append_pair(title_key, &self.title)
            .append_pair("checkIn", &to_iso_millis(self.range.start()))
            .append_pair("checkOut", &to_iso_millis(self.range.end()))
            .append_pair("guests", &self.guests.to_query_value())
            .append_pair("price", &self.price.to_string());

        format!("{}?{}", CHECKOUT_PATH, query.finish())
    }

    /// Recover the builder state from a checkout URL's query string.
    /// Returns `None` when no listing id is present; missing dates, guests,
    /// or price degrade to their usual fallbacks.
    pub fn from_query(query: &str) -> Option<Self> {
        let pairs: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        let (listing, raw_id, title_key) = if let Some(id) = pairs.get("roomId") {
            (BookableType::Room, id, "roomTitle")
        } else if let Some(id) = pairs.get("cabinId") {
            (BookableType::Cabin, id, "cabinTitle")
        } else {
            return None;
        };

        let listing_id = raw_id.parse().ok()?;
        let range = DateRange::from_query(
            pairs.get("checkIn").map(String::as_str),
            pairs.get("checkOut").map(String::as_str),
            Utc::now(),
        );
        let guests = pairs
            .get("guests")
            .and_then(|raw| GuestConfiguration::from_query_value(raw))
            .unwrap_or_default();
        let price = pairs
            .get("price")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);

        Some(Self {
            listing,
            listing_id,
            title: pairs.get(title_key).cloned().unwrap_or_default(),
            range,
            guests,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::guests::GuestField;

    fn sample() -> CheckoutLink {
        let range = DateRange::from_query(Some("2025-01-10"), Some("2025-01-12"), Utc::now());
        let mut guests = GuestConfiguration::default();
        guests.add_room();
        guests.set(1, GuestField::Children, 2);

        CheckoutLink::new(
            BookableType::Room,
            4,
            "Люкс с видом на озеро",
            range,
            guests,
            18500,
        )
    }

    #[test]
    fn test_round_trip() {
        let link = sample();
        let url = link.to_url();
        let query = url.strip_prefix("/checkout?").unwrap();

        let parsed = CheckoutLink::from_query(query).unwrap();
        assert_eq!(parsed, link);
    }

    #[test]
    fn test_guests_round_trip_through_single_parameter() {
        let link = sample();
        let url = link.to_url();
        let query = url.strip_prefix("/checkout?").unwrap();

        let parsed = CheckoutLink::from_query(query).unwrap();
        assert_eq!(parsed.guests, link.guests);
        assert_eq!(parsed.guests.total_children(), 2);
    }

    #[test]
    fn test_cabin_uses_cabin_parameters() {
        let mut link = sample();
        link.listing = BookableType::Cabin;
        let url = link.to_url();

        assert!(url.contains("cabinId=4"));
        assert!(!url.contains("roomId"));

        let parsed = CheckoutLink::from_query(url.strip_prefix("/checkout?").unwrap()).unwrap();
        assert_eq!(parsed.listing, BookableType::Cabin);
    }

    #[test]
    fn test_missing_listing_id_is_rejected() {
        assert!(CheckoutLink::from_query("checkIn=2025-01-10&price=100").is_none());
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let parsed = CheckoutLink::from_query("roomId=9&roomTitle=X").unwrap();
        assert_eq!(parsed.price, 0);
        assert_eq!(parsed.listing_id, 9);
    }
}
