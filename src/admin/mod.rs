//! Admin back-office controllers
//!
//! One generic store drives the users, rooms and cabins tables; bookings get
//! a thin specialization for the status lifecycle.

pub mod bookings;
pub mod resource;
pub mod store;

pub use bookings::BookingDesk;
pub use resource::{AdminResource, BookingAdmin, CabinAdmin, Identified, RoomAdmin, UserAdmin};
pub use store::{
    EntityStore, Messages, BOOKING_MESSAGES, CABIN_MESSAGES, ROOM_MESSAGES, USER_MESSAGES,
};

use crate::services::Services;

/// All back-office controllers wired over one service stack
pub struct AdminPanel {
    pub users: EntityStore<UserAdmin>,
    pub rooms: EntityStore<RoomAdmin>,
    pub cabins: EntityStore<CabinAdmin>,
    pub bookings: BookingDesk,
}

impl AdminPanel {
    pub fn new(services: &Services) -> Self {
        Self {
            users: EntityStore::new(UserAdmin::new(services.users.clone()), USER_MESSAGES),
            rooms: EntityStore::new(RoomAdmin::new(services.rooms.clone()), ROOM_MESSAGES),
            cabins: EntityStore::new(CabinAdmin::new(services.cabins.clone()), CABIN_MESSAGES),
            bookings: BookingDesk::new(services.bookings.clone()),
        }
    }
}
