//! Room listing models
//!
//! The wire format is camelCase (pydantic `to_camel` on the backend). Prices
//! arrive as strings and are normalized to integers on deserialization, so
//! everything past the wire sees one display model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{images_or_empty, price};

/// A bookable room as listed by `/room_admin/` and the public search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub title: String,
    pub category: String,
    /// Number of rooms in the unit
    pub rooms: i32,
    /// Floor area, free-form ("25 м²")
    pub area: String,
    pub beds: i32,
    pub tv: bool,
    #[serde(with = "price::lenient_string")]
    pub price_weekdays: i64,
    #[serde(with = "price::lenient_string")]
    pub price_weekend: i64,
    #[serde(default, deserialize_with = "images_or_empty")]
    pub images: Vec<String>,
    /// Absent in search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update draft for the admin panel; prices stay strings here because
/// that is what the backend schema expects on input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDraft {
    pub title: String,
    pub category: String,
    pub rooms: i32,
    pub area: String,
    pub beds: i32,
    pub tv: bool,
    pub price_weekdays: String,
    pub price_weekend: String,
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringified_price_normalizes() {
        let room: Room = serde_json::from_value(json!({
            "id": 3,
            "title": "Стандарт",
            "category": "standard",
            "rooms": 1,
            "area": "25 м²",
            "beds": 2,
            "tv": true,
            "priceWeekdays": "12345",
            "priceWeekend": "15000"
        }))
        .unwrap();

        assert_eq!(room.price_weekdays, 12345);
        assert_eq!(room.price_weekend, 15000);
    }

    #[test]
    fn test_missing_images_default_to_empty() {
        let room: Room = serde_json::from_value(json!({
            "id": 1,
            "title": "Люкс",
            "category": "lux",
            "rooms": 2,
            "area": "40 м²",
            "beds": 3,
            "tv": true,
            "priceWeekdays": "20000",
            "priceWeekend": "25000"
        }))
        .unwrap();

        assert!(room.images.is_empty());
        assert!(room.created_at.is_none());
    }

    #[test]
    fn test_non_numeric_price_becomes_zero() {
        let room: Room = serde_json::from_value(json!({
            "id": 5,
            "title": "Эконом",
            "category": "econom",
            "rooms": 1,
            "area": "18 м²",
            "beds": 1,
            "tv": false,
            "priceWeekdays": "по запросу",
            "priceWeekend": 9000,
            "images": null
        }))
        .unwrap();

        assert_eq!(room.price_weekdays, 0);
        assert_eq!(room.price_weekend, 9000);
        assert!(room.images.is_empty());
    }

    #[test]
    fn test_prices_serialize_back_as_strings() {
        let room = Room {
            id: 7,
            title: "Семейный".to_string(),
            category: "family".to_string(),
            rooms: 2,
            area: "35 м²".to_string(),
            beds: 4,
            tv: true,
            price_weekdays: 18000,
            price_weekend: 21000,
            images: vec![],
            created_at: None,
        };

        let body = serde_json::to_value(&room).unwrap();
        assert_eq!(body["priceWeekdays"], "18000");
        assert_eq!(body["priceWeekend"], "21000");
    }
}
