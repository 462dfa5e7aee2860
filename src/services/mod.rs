//! Domain services over the API client

pub mod auth;
pub mod bookings;
pub mod cabins;
pub mod media;
pub mod rooms;

use crate::http::ApiClient;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub users: auth::AuthService, // User administration is part of the auth service
    pub rooms: rooms::RoomsService,
    pub cabins: cabins::CabinsService,
    pub bookings: bookings::BookingsService,
    pub media: media::MediaService,
}

impl Services {
    /// Create all services sharing one API client (and thus one session)
    pub fn new(api: ApiClient) -> Self {
        Self {
            auth: auth::AuthService::new(api.clone()),
            users: auth::AuthService::new(api.clone()),
            rooms: rooms::RoomsService::new(api.clone()),
            cabins: cabins::CabinsService::new(api.clone()),
            bookings: bookings::BookingsService::new(api.clone()),
            media: media::MediaService::new(api),
        }
    }
}
