//! The trait seam between the admin stores and the backend services
//!
//! Each back-office entity exposes the same four operations through
//! [`AdminResource`], so the panel state machine in `store` is written once.

use async_trait::async_trait;

use crate::{
    error::ApiResult,
    models::{
        Booking, BookingDraft, Cabin, CabinDraft, RegisterUser, Room, RoomDraft, UpdateUser, User,
    },
    services::{auth::AuthService, bookings::BookingsService, cabins::CabinsService,
        rooms::RoomsService},
};

/// Anything with a server-assigned numeric id
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Room {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Cabin {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Booking {
    fn id(&self) -> i64 {
        self.id
    }
}

/// CRUD surface of one admin-managed collection
#[async_trait]
pub trait AdminResource: Send + Sync {
    type Entity: Identified + Send + Sync + 'static;
    type Draft: Send + Sync + 'static;

    async fn fetch_all(&self) -> ApiResult<Vec<Self::Entity>>;
    async fn create(&self, draft: &Self::Draft) -> ApiResult<Self::Entity>;
    async fn update(&self, edited: &Self::Entity) -> ApiResult<Self::Entity>;
    async fn remove(&self, id: i64) -> ApiResult<()>;
}

/// User administration over the auth service
pub struct UserAdmin {
    service: AuthService,
}

impl UserAdmin {
    pub fn new(service: AuthService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AdminResource for UserAdmin {
    type Entity = User;
    type Draft = RegisterUser;

    async fn fetch_all(&self) -> ApiResult<Vec<User>> {
        self.service.list_users().await
    }

    async fn create(&self, draft: &RegisterUser) -> ApiResult<User> {
        self.service.register(draft).await
    }

    // The backend takes a partial body; the edited record maps onto a full one
    async fn update(&self, edited: &User) -> ApiResult<User> {
        let update = UpdateUser {
            email: Some(edited.email.clone()),
            first_name: Some(edited.first_name.clone()),
            last_name: Some(edited.last_name.clone()),
            role: Some(edited.role),
            password: None,
        };
        self.service.update_user(edited.id, &update).await
    }

    async fn remove(&self, id: i64) -> ApiResult<()> {
        self.service.delete_user(id).await
    }
}

pub struct RoomAdmin {
    service: RoomsService,
}

impl RoomAdmin {
    pub fn new(service: RoomsService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AdminResource for RoomAdmin {
    type Entity = Room;
    type Draft = RoomDraft;

    async fn fetch_all(&self) -> ApiResult<Vec<Room>> {
        self.service.list().await
    }

    async fn create(&self, draft: &RoomDraft) -> ApiResult<Room> {
        self.service.create(draft).await
    }

    async fn update(&self, edited: &Room) -> ApiResult<Room> {
        self.service.update(edited.id, edited).await
    }

    async fn remove(&self, id: i64) -> ApiResult<()> {
        self.service.delete(id).await
    }
}

pub struct CabinAdmin {
    service: CabinsService,
}

impl CabinAdmin {
    pub fn new(service: CabinsService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AdminResource for CabinAdmin {
    type Entity = Cabin;
    type Draft = CabinDraft;

    async fn fetch_all(&self) -> ApiResult<Vec<Cabin>> {
        self.service.list().await
    }

    async fn create(&self, draft: &CabinDraft) -> ApiResult<Cabin> {
        self.service.create(draft).await
    }

    async fn update(&self, edited: &Cabin) -> ApiResult<Cabin> {
        self.service.update(edited.id, edited).await
    }

    async fn remove(&self, id: i64) -> ApiResult<()> {
        self.service.delete(id).await
    }
}

pub struct BookingAdmin {
    service: BookingsService,
}

impl BookingAdmin {
    pub fn new(service: BookingsService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &BookingsService {
        &self.service
    }
}

#[async_trait]
impl AdminResource for BookingAdmin {
    type Entity = Booking;
    type Draft = BookingDraft;

    async fn fetch_all(&self) -> ApiResult<Vec<Booking>> {
        self.service.list().await
    }

    async fn create(&self, draft: &BookingDraft) -> ApiResult<Booking> {
        self.service.create(draft).await
    }

    // Bookings have no full-record PUT; editing means moving the status
    async fn update(&self, edited: &Booking) -> ApiResult<Booking> {
        self.service.set_status(edited.id, edited.status).await
    }

    async fn remove(&self, id: i64) -> ApiResult<()> {
        self.service.delete(id).await
    }
}
