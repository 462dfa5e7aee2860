//! Booking (checkout) models
//!
//! Unlike listings, the booking wire format is snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::enums::{BookableType, BookingStatus};

/// A persisted reservation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub object_type: BookableType,
    pub object_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub phone: String,
    pub email: String,
    pub citizenship: String,
    pub comments: Option<String>,
    pub payment: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub room_id: Option<i64>,
    #[serde(default)]
    pub cabin_id: Option<i64>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// A booking in the personal dashboard, enriched with the listing title
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MyBooking {
    #[serde(flatten)]
    pub booking: Booking,
    pub object_title: Option<String>,
}

/// Checkout submission payload
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub object_type: BookableType,
    pub object_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub phone: String,
    pub email: String,
    pub citizenship: String,
    pub comments: Option<String>,
    pub payment: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl BookingDraft {
    /// Empty checkout form for the selected listing and stay dates; the
    /// payment method and citizenship defaults match the checkout page
    pub fn new(
        object_type: BookableType,
        object_id: i64,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            object_type,
            object_id,
            last_name: String::new(),
            first_name: String::new(),
            middle_name: None,
            phone: String::new(),
            email: String::new(),
            citizenship: "RU".to_string(),
            comments: None,
            payment: "card".to_string(),
            start_date,
            end_date,
        }
    }
}

/// Status-only PATCH body for `/checkout/admin/{id}/status`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}
