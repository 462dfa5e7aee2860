//! Data models for the OTD platform

pub mod booking;
pub mod cabin;
pub mod enums;
pub mod media;
pub mod price;
pub mod room;
pub mod user;

use serde::{Deserialize, Deserializer};

// Re-export commonly used types
pub use booking::{Booking, BookingDraft, MyBooking, StatusUpdate};
pub use cabin::{Cabin, CabinDraft};
pub use enums::{BookableType, BookingStatus, UserRole};
pub use media::{DeleteMediaRequest, DeleteMediaResponse, PresignUploadRequest, PresignedUpload};
pub use room::{Room, RoomDraft};
pub use user::{Credentials, RegisterUser, TokenResponse, UpdateUser, User};

/// Image lists may be absent or explicitly null; both become an empty list
pub(crate) fn images_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
