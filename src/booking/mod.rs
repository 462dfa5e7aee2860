//! Booking flow core: guest configuration, stay dates, availability search,
//! and the checkout handoff

pub mod checkout;
pub mod dates;
pub mod guests;
pub mod search;

pub use checkout::CheckoutLink;
pub use dates::DateRange;
pub use guests::{GuestConfiguration, GuestField, RoomGuests};
pub use search::{AvailabilityQuery, AvailabilitySearch};

use chrono::{DateTime, SecondsFormat, Utc};

/// JS-style ISO-8601 with milliseconds and a `Z` suffix; the format the
/// search endpoint and the checkout query-string protocol both use
pub(crate) fn to_iso_millis(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
