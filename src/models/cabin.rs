//! Cabin listing models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{images_or_empty, price};

/// A bookable cabin as listed by `/cabin_admin/`
///
/// Unlike rooms, cabin prices are integers on the wire; the lenient parse is
/// kept anyway for older records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabin {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub rooms: i32,
    pub floors: i32,
    pub beds: i32,
    pub category: String,
    #[serde(with = "price::lenient")]
    pub price_weekdays: i64,
    #[serde(with = "price::lenient")]
    pub price_weekend: i64,
    pub pool: bool,
    #[serde(default, deserialize_with = "images_or_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update draft for the admin panel
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinDraft {
    pub title: String,
    pub description: Option<String>,
    pub rooms: i32,
    pub floors: i32,
    pub beds: i32,
    pub category: String,
    pub price_weekdays: i64,
    pub price_weekend: i64,
    pub pool: bool,
    pub images: Vec<String>,
}
